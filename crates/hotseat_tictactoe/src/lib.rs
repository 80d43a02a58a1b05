//! Hotseat tic-tac-toe engine.
//!
//! Two players share one board. The [`GameEngine`] validates moves,
//! detects wins and draws, and keeps a running [`Scoreboard`] across
//! rounds until a new game clears it.
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     engine.apply_move(cell).unwrap();
//! }
//! assert_eq!(engine.status().winner(), Some(Player::X));
//! assert_eq!(engine.scoreboard().get(Player::X), 1);
//!
//! engine.continue_game();
//! assert_eq!(engine.status(), GameStatus::InProgress);
//! assert_eq!(engine.scoreboard().get(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod scoreboard;
mod status;
mod types;

pub use action::{Move, MoveOutcome, MoveRejected};
pub use engine::{GameEngine, SnapshotRejected};
pub use position::Position;
pub use rules::{Line, WINNING_LINES};
pub use scoreboard::Scoreboard;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
