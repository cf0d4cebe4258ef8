/// Options
#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "scopes", description = "list every known oauth scope")]
pub struct Options {}

pub fn exec(_options: Options) -> anyhow::Result<()> {
    let mut scopes: Vec<_> = insta_api::scope::all().collect();
    scopes.sort_by_key(|scope| scope.alias());

    for scope in scopes {
        println!("{:<28} {}", scope.alias(), scope.description());
    }

    Ok(())
}
