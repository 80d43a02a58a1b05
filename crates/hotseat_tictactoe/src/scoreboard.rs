//! Session win tally.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Wins per player across the rounds of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Creates a scoreboard with both counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Adds one win for `player`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    /// Clears both counts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total wins recorded in the session.
    pub fn total(&self) -> u32 {
        self.x + self.o
    }
}
