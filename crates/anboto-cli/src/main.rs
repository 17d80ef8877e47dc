/*
[INPUT]:  CLI arguments, optional configuration file, ANBOTO_* environment
[OUTPUT]: API response printed to stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use anboto_cli::{CliConfig, Command, execute, render};

#[derive(Parser, Debug)]
#[command(name = "anboto-cli", version, about = "Anboto trading API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// Tracing filter; falls back to RUST_LOG, then info
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_level.as_deref())?;

    let config = CliConfig::load(args.config_path.as_deref())?;
    info!(base_url = %config.base_url, "configuration loaded");

    let client = config.build_client()?;
    let response = execute(&client, args.command).await?;
    println!("{}", render(&response)?);

    Ok(())
}

fn init_tracing(log_level: Option<&str>) -> Result<()> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level).context("invalid log level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
