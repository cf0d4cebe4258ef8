use crate::config::Config;
use anyhow::Context;
use insta_api::ScopeList;
use std::str::FromStr;

/// Which api to authorize against
#[derive(Debug, Copy, Clone)]
pub enum Api {
    Legacy,
    BasicDisplay,
    Graph,
}

impl FromStr for Api {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(Self::Legacy),
            "basic-display" | "basic_display" => Ok(Self::BasicDisplay),
            "graph" => Ok(Self::Graph),
            _ => Err(format!(
                "unknown api `{s}`, expected `legacy`, `basic-display` or `graph`"
            )),
        }
    }
}

/// Options
#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "authorize-url",
    description = "print the url a user visits to authorize the app"
)]
pub struct Options {
    #[argh(positional, description = "the api: legacy, basic-display or graph")]
    api: Api,

    #[argh(option, description = "the scopes to request, separated by commas")]
    scope: Option<String>,

    #[argh(option, description = "an opaque value echoed back to the redirect uri")]
    state: Option<String>,
}

pub fn exec(config: &Config, options: Options) -> anyhow::Result<()> {
    let scopes = match options.scope.as_deref() {
        Some(scope) => ScopeList::parse(scope)
            .map_err(|alias| anyhow::anyhow!("unknown scope `{alias}`"))?,
        None => ScopeList::new(),
    };
    let state = options.state.as_deref();

    let url = match options.api {
        Api::Legacy => config.legacy()?.client().authorization_url(state, &scopes),
        Api::BasicDisplay => config
            .basic_display()?
            .client()
            .authorization_url(state, &scopes),
        Api::Graph => config.graph()?.client().authorization_url(state, &scopes),
    }
    .context("failed to build authorization url")?;

    println!("{url}");

    Ok(())
}
