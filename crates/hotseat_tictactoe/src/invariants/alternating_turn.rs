//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Round history must show X, O, X, O, ... and the player to move must
/// agree with it. After the round ends, the last mover keeps the turn.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let Some(first) = history.first() else {
            return engine.current_player() == Player::X;
        };

        if first.player != Player::X {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected = match (engine.is_over(), history.last()) {
            (true, Some(last)) => last.player,
            _ if history.len() % 2 == 0 => Player::X,
            _ => Player::O,
        };

        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
