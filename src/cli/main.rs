//! # insta-api
//!
//! A small cli over the legacy, basic display and graph clients.

mod commands;
mod config;
mod logger;

use crate::config::{
    Config,
    Severity,
};
use anyhow::{
    ensure,
    Context,
};
use std::path::{
    Path,
    PathBuf,
};
use tokio::runtime::Builder as RuntimeBuilder;

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "query the instagram apis")]
struct Options {
    #[argh(
        option,
        description = "the path to the config",
        default = "PathBuf::from(\"./config.toml\")"
    )]
    config: PathBuf,

    #[argh(subcommand)]
    subcommand: Subcommand,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
enum Subcommand {
    Legacy(commands::legacy::Options),
    BasicDisplay(commands::basic_display::Options),
    Graph(commands::graph::Options),
    AuthorizeUrl(commands::authorize_url::Options),
    Scopes(commands::scopes::Options),
}

/// Load and validate a config.
///
/// This prints to the stderr directly,
/// as it runs before the logger is set up.
/// A missing file is treated as an empty config.
fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        eprintln!("`{}` does not exist, using an empty config", path.display());
        return Ok(Config::default());
    }

    eprintln!("loading `{}`...", path.display());
    let config =
        Config::load_from_path(path).with_context(|| format!("failed to load `{}`", path.display()))?;

    let mut error_count = 0;
    for message in config.validate() {
        match message.severity() {
            Severity::Warn => {
                eprintln!("validation warning: {}", message.error());
            }
            Severity::Error => {
                eprintln!("validation error: {}", message.error());
                error_count += 1;
            }
        }
    }

    ensure!(
        error_count == 0,
        "validation failed with {error_count} errors."
    );

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let options: Options = argh::from_env();

    let config = load_config(&options.config).context("failed to load config")?;
    logger::setup().context("failed to initialize logger")?;

    let tokio_rt = RuntimeBuilder::new_multi_thread()
        .enable_all()
        .thread_name("insta-api-tokio-worker")
        .build()
        .context("failed to start tokio runtime")?;

    tokio_rt.block_on(async_main(options.subcommand, config))
}

async fn async_main(subcommand: Subcommand, config: Config) -> anyhow::Result<()> {
    match subcommand {
        Subcommand::Legacy(options) => commands::legacy::exec(&config, options).await,
        Subcommand::BasicDisplay(options) => commands::basic_display::exec(&config, options).await,
        Subcommand::Graph(options) => commands::graph::exec(&config, options).await,
        Subcommand::AuthorizeUrl(options) => commands::authorize_url::exec(&config, options),
        Subcommand::Scopes(options) => commands::scopes::exec(options),
    }
}
