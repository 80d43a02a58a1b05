//! Round status.

use super::Player;
use super::rules::Line;
use serde::{Deserialize, Serialize};

/// Current status of a round.
///
/// `Won` and `Draw` are terminal until the board is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    #[default]
    InProgress,
    /// Round ended with a completed line.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The line that decided the round.
        line: Line,
    },
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once the round has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
