//! Terminal UI: event loop, key handling and rendering.

mod app;
mod input;
mod terminal;
mod ui;

pub use app::{App, Control, Overlay};
pub use input::move_cursor;
pub use ui::draw;

use crate::config::HotseatConfig;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use hotseat_tictactoe::Player;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use terminal::TerminalGuard;
use tracing::{error, info, instrument};

/// Runs the game until the players quit.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all, fields(confirm_exit = *config.confirm_exit()))]
pub fn run(config: &HotseatConfig) -> Result<()> {
    info!("Starting hotseat TUI");

    let mut guard = TerminalGuard::enter().context("Failed to prepare terminal")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(*config.confirm_exit());
    let res = run_loop(&mut terminal, &mut app);
    let restored = guard.restore().context("Failed to restore terminal");

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        x_wins = app.engine().scoreboard().get(Player::X),
        o_wins = app.engine().scoreboard().get(Player::O),
        "Hotseat TUI stopped"
    );
    res.and(restored)
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}
