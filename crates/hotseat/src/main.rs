//! Hotseat - two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use hotseat::{Cli, HotseatConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = HotseatConfig::load(&cli.config)?.with_overrides(cli.log_file, cli.log_filter);

    initialize_tracing(&config)?;
    info!(config_path = %cli.config.display(), "Configuration ready");

    hotseat::run(&config)
}

/// Sends tracing output to the configured log file so it does not
/// interfere with the TUI.
fn initialize_tracing(config: &HotseatConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
