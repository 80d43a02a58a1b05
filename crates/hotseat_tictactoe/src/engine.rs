//! Game engine: one round on the board plus the session scoreboard.
//!
//! The engine is a small synchronous state machine. A round starts
//! `InProgress` with X to move and ends `Won` or `Draw`; only a board
//! reset brings it back to `InProgress`. The scoreboard outlives rounds
//! and is cleared only by [`GameEngine::reset_scores`] and the
//! operations built on it.

use super::action::{Move, MoveOutcome, MoveRejected};
use super::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use super::rules::{self, Line};
use super::scoreboard::Scoreboard;
use super::status::GameStatus;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Two-player tic-tac-toe engine.
///
/// Deserializing checks the engine invariants, so a snapshot whose board,
/// history, turn and status disagree is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EngineSnapshot")]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) scoreboard: Scoreboard,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move and zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            scoreboard: Scoreboard::new(),
            history: Vec::new(),
        }
    }

    /// Places the current player's mark at `cell_index` (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected::GameOver`] once the round has ended,
    /// [`MoveRejected::OutOfRange`] for an index past 8 and
    /// [`MoveRejected::CellOccupied`] for a filled square. A rejected
    /// move changes nothing.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, cell_index: usize) -> Result<MoveOutcome, MoveRejected> {
        if self.status.is_over() {
            debug!(cell_index, "Move rejected: round over");
            return Err(MoveRejected::GameOver);
        }
        let pos = Position::from_index(cell_index).ok_or_else(|| {
            debug!(cell_index, "Move rejected: out of range");
            MoveRejected::OutOfRange(cell_index)
        })?;
        self.place(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::apply_move`], minus the range check.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, pos: Position) -> Result<MoveOutcome, MoveRejected> {
        if self.status.is_over() {
            debug!(position = %pos, "Move rejected: round over");
            return Err(MoveRejected::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Move rejected: square occupied");
            return Err(MoveRejected::CellOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        let outcome = self.evaluate_outcome();

        #[cfg(debug_assertions)]
        {
            if let Err(violations) = EngineInvariants::check_all(self) {
                panic!("Engine invariants violated after {}: {:?}", player, violations);
            }
        }

        Ok(outcome)
    }

    /// Updates status after a mark lands; flips the turn only while the
    /// round continues and credits the winner exactly once.
    fn evaluate_outcome(&mut self) -> MoveOutcome {
        if let Some((winner, line)) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won { winner, line };
            self.scoreboard.record_win(winner);
            info!(
                %winner,
                line = ?line.indices(),
                x_wins = self.scoreboard.get(Player::X),
                o_wins = self.scoreboard.get(Player::O),
                "Round won"
            );
            return MoveOutcome::Won { winner, line };
        }

        if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("Round drawn");
            return MoveOutcome::Draw;
        }

        self.current_player = self.current_player.opponent();
        MoveOutcome::Continue {
            next: self.current_player,
        }
    }

    /// Clears the board and gives X the first move. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
        debug!("Board reset");
    }

    /// Zeroes both scores. The board is untouched.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scoreboard.reset();
        debug!("Scores reset");
    }

    /// Starts a fresh session: board reset, then scores reset.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.reset_board();
        self.reset_scores();
        info!("New game started");
    }

    /// Starts the next round, carrying scores forward.
    #[instrument(skip(self))]
    pub fn continue_game(&mut self) {
        self.reset_board();
        info!(
            x_wins = self.scoreboard.get(Player::X),
            o_wins = self.scoreboard.get(Player::O),
            "Next round started"
        );
    }

    /// Confirmation text shown before leaving, with the final scores.
    pub fn exit_prompt(&self) -> String {
        format!(
            "Thanks for playing!\n\nFinal scores:\nPlayer X: {}\nPlayer O: {}\n\nAre you sure you want to exit?",
            self.scoreboard.get(Player::X),
            self.scoreboard.get(Player::O),
        )
    }

    /// Applies an accepted exit: the session resets for the next players.
    #[instrument(skip(self))]
    pub fn confirm_exit(&mut self) {
        info!(
            x_wins = self.scoreboard.get(Player::X),
            o_wins = self.scoreboard.get(Player::O),
            "Exit confirmed"
        );
        self.new_game();
    }

    /// One-line status for display.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
            GameStatus::Won { winner, .. } => format!("Player {} wins!", winner),
            GameStatus::Draw => "Game ended in a draw!".to_string(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move; after the round ends, the player who moved last.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the session scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Moves of the current round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The line to highlight, if the round was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.status.winning_line()
    }

    /// Returns true once the round has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Empty squares while the round is on; nothing once it has ended.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }
}

/// Unchecked engine fields as read from a serialized snapshot.
#[derive(Deserialize)]
struct EngineSnapshot {
    board: Board,
    current_player: Player,
    status: GameStatus,
    scoreboard: Scoreboard,
    history: Vec<Move>,
}

/// A serialized engine that breaks the engine invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Inconsistent engine snapshot: {}", descriptions(violations))]
pub struct SnapshotRejected {
    /// Every invariant the snapshot breaks.
    pub violations: Vec<InvariantViolation>,
}

fn descriptions(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl TryFrom<EngineSnapshot> for GameEngine {
    type Error = SnapshotRejected;

    fn try_from(snapshot: EngineSnapshot) -> Result<Self, Self::Error> {
        let engine = Self {
            board: snapshot.board,
            current_player: snapshot.current_player,
            status: snapshot.status,
            scoreboard: snapshot.scoreboard,
            history: snapshot.history,
        };
        EngineInvariants::check_all(&engine).map_err(|violations| {
            debug!(?violations, "Snapshot rejected");
            SnapshotRejected { violations }
        })?;
        Ok(engine)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
