//! Command-line interface for hotseat.

use clap::Parser;
use std::path::PathBuf;

/// Hotseat - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe with a running scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if missing)
    #[arg(short, long, default_value = "hotseat.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "hotseat_tictactoe=trace"
    #[arg(long)]
    pub log_filter: Option<String>,
}
