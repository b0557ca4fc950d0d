//! citycast binary entry point

use anyhow::Context;
use clap::Parser;
use infrastructure::{AppConfig, Credentials, init_logging};
use presentation_cli::{Cli, run};
use tracing::warn;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; keys may come from the real environment.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.logging, cli.verbose).context("Failed to initialize logging")?;

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "Ignoring unreadable .env file");
        }
    }

    let credentials = Credentials::from_env()?;

    let summary = run(&config, &credentials).await?;
    if summary.is_empty() {
        warn!("No city produced data");
    }

    Ok(())
}
