//! Status consistency invariant: stored status agrees with the rules.

use super::super::rules::{check_winner, is_full};
use super::super::{GameEngine, GameStatus};
use super::Invariant;

/// Invariant: The status is what the rules derive from the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let expected = match check_winner(board) {
            Some((winner, line)) => GameStatus::Won { winner, line },
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
        engine.status() == expected
    }

    fn description() -> &'static str {
        "Status matches the board"
    }
}
