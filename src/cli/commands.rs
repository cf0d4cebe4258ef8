pub mod authorize_url;
pub mod basic_display;
pub mod graph;
pub mod legacy;
pub mod scopes;

use anyhow::Context;
use insta_api::FieldList;

/// Print a value as pretty json to the stdout.
pub fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Parse a `--fields` option, falling back to a default list.
pub fn fields_or(fields: Option<&str>, default: impl FnOnce() -> FieldList) -> FieldList {
    match fields {
        Some(fields) => FieldList::parse(fields),
        None => default(),
    }
}
