//! Application state and key handling.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use hotseat_tictactoe::{GameEngine, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// Modal drawn over the board, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// No modal; the board takes input.
    None,
    /// Round ended; offers continue, new game and exit.
    GameOver,
    /// Asks whether to exit, showing the final scores.
    ConfirmExit,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the program.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    overlay: Overlay,
    confirm_exit: bool,
}

impl App {
    /// Creates a new application with a fresh engine.
    pub fn new(confirm_exit: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            overlay: Overlay::None,
            confirm_exit,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the open modal.
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(overlay = ?self.overlay))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if key == KeyCode::Char('q') {
            info!("Quit requested");
            return Control::Quit;
        }

        match self.overlay {
            Overlay::None => self.handle_board_key(key),
            Overlay::GameOver => self.handle_game_over_key(key),
            Overlay::ConfirmExit => self.handle_confirm_key(key),
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            KeyCode::Char('r') => {
                debug!("Reset button");
                self.engine.new_game();
            }
            _ => {}
        }
        Control::Continue
    }

    fn handle_game_over_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') => {
                self.engine.continue_game();
                self.overlay = Overlay::None;
            }
            KeyCode::Char('n') => {
                self.engine.new_game();
                self.overlay = Overlay::None;
            }
            KeyCode::Char('e') if self.confirm_exit => {
                self.overlay = Overlay::ConfirmExit;
            }
            KeyCode::Char('e') => {
                self.engine.confirm_exit();
                self.overlay = Overlay::None;
            }
            _ => {}
        }
        Control::Continue
    }

    fn handle_confirm_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('y') => {
                self.engine.confirm_exit();
                self.overlay = Overlay::None;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.overlay = Overlay::GameOver;
            }
            _ => {}
        }
        Control::Continue
    }

    fn place(&mut self, pos: Position) {
        match self.engine.place(pos) {
            Ok(MoveOutcome::Continue { next }) => {
                debug!(position = %pos, %next, "Mark placed");
            }
            Ok(outcome) => {
                debug!(position = %pos, ?outcome, "Round over");
                self.overlay = Overlay::GameOver;
            }
            Err(rejected) => {
                debug!(position = %pos, %rejected, "Move ignored");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotseat_tictactoe::{GameStatus, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), Control::Continue);
        }
    }

    fn digits(app: &mut App, cells: &str) {
        for c in cells.chars() {
            press(app, &[KeyCode::Char(c)]);
        }
    }

    #[test]
    fn test_digit_keys_place_marks() {
        let mut app = App::new(true);
        digits(&mut app, "15");
        let board = app.engine().board();
        assert_eq!(board.get(Position::TopLeft).mark(), Some(Player::X));
        assert_eq!(board.get(Position::Center).mark(), Some(Player::O));
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_cursor_placement() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(
            app.engine().board().get(Position::TopLeft).mark(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut app = App::new(true);
        digits(&mut app, "55");
        assert_eq!(app.engine().history().len(), 1);
        assert_eq!(app.engine().current_player(), Player::O);
    }

    #[test]
    fn test_win_opens_game_over_modal() {
        let mut app = App::new(true);
        digits(&mut app, "15263");
        assert_eq!(app.overlay(), Overlay::GameOver);
        assert_eq!(app.engine().status_message(), "Player X wins!");

        // Board keys do nothing behind the modal
        digits(&mut app, "9");
        assert_eq!(app.engine().history().len(), 5);
    }

    #[test]
    fn test_continue_keeps_scores() {
        let mut app = App::new(true);
        digits(&mut app, "15263");
        press(&mut app, &[KeyCode::Char('c')]);
        assert_eq!(app.overlay(), Overlay::None);
        assert_eq!(app.engine().status(), GameStatus::InProgress);
        assert_eq!(app.engine().scoreboard().get(Player::X), 1);
    }

    #[test]
    fn test_new_game_clears_scores() {
        let mut app = App::new(true);
        digits(&mut app, "15263");
        press(&mut app, &[KeyCode::Char('n')]);
        assert_eq!(app.overlay(), Overlay::None);
        assert_eq!(app.engine().scoreboard().total(), 0);
    }

    #[test]
    fn test_exit_asks_then_resets() {
        let mut app = App::new(true);
        digits(&mut app, "15263");
        press(&mut app, &[KeyCode::Char('e')]);
        assert_eq!(app.overlay(), Overlay::ConfirmExit);

        press(&mut app, &[KeyCode::Char('n')]);
        assert_eq!(app.overlay(), Overlay::GameOver);
        assert_eq!(app.engine().scoreboard().get(Player::X), 1);

        press(&mut app, &[KeyCode::Char('e'), KeyCode::Char('y')]);
        assert_eq!(app.overlay(), Overlay::None);
        assert_eq!(app.engine(), &GameEngine::new());
    }

    #[test]
    fn test_exit_without_confirmation() {
        let mut app = App::new(false);
        digits(&mut app, "15263");
        press(&mut app, &[KeyCode::Char('e')]);
        assert_eq!(app.overlay(), Overlay::None);
        assert_eq!(app.engine().scoreboard().total(), 0);
    }

    #[test]
    fn test_reset_key_starts_new_game() {
        let mut app = App::new(true);
        digits(&mut app, "15263");
        press(&mut app, &[KeyCode::Char('c')]);
        digits(&mut app, "1");
        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.engine(), &GameEngine::new());
    }

    #[test]
    fn test_draw_opens_modal() {
        let mut app = App::new(true);
        digits(&mut app, "123546879");
        assert_eq!(app.overlay(), Overlay::GameOver);
        assert_eq!(app.engine().status(), GameStatus::Draw);
    }

    #[test]
    fn test_escape_quits_from_game_over() {
        let mut app = App::new(true);
        digits(&mut app, "15263");
        assert_eq!(app.overlay(), Overlay::GameOver);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
    }

    #[test]
    fn test_escape_backs_out_of_exit_prompt() {
        let mut app = App::new(true);
        digits(&mut app, "15263e");
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Continue);
        assert_eq!(app.overlay(), Overlay::GameOver);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(true);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
    }
}
