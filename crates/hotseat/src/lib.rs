//! Hotseat - terminal tic-tac-toe for two players at one keyboard.
//!
//! # Architecture
//!
//! - **Engine**: [`hotseat_tictactoe::GameEngine`] owns all game state
//! - **App**: maps key presses to engine operations and tracks modals
//! - **UI**: stateless ratatui rendering of an [`App`]
//! - **Config**: optional TOML file plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

pub use cli::Cli;
pub use config::{ConfigError, HotseatConfig};
pub use tui::{App, Control, Overlay, draw, move_cursor, run};
