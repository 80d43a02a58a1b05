//! History consistency invariant: the round's moves explain the board.

use super::super::{GameEngine, Square};
use super::Invariant;

/// Invariant: Every recorded move's square holds that player's mark, and
/// no square is occupied without a recorded move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let history = engine.history();

        history
            .iter()
            .all(|m| board.get(m.position) == Square::Occupied(m.player))
            && board.occupied() == history.len()
    }

    fn description() -> &'static str {
        "Board squares match the round's move history"
    }
}
