use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod cli;
mod command;
mod config;
mod domain;
mod report;
mod service;

use cli::Cli;
use config::RestartConfig;
use report::ConsoleReporter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Validate everything before touching the network
    let config = RestartConfig::from_cli(&cli)?;

    if config.dry_run {
        tracing::info!("Dry run: builds will not actually be restarted");
    }

    let summary = command::run_restart(config, Arc::new(ConsoleReporter)).await?;
    tracing::debug!("Run finished: {:?}", summary);

    Ok(())
}
