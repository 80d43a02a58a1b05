//! Rendering tests against ratatui's test backend.

use crossterm::event::KeyCode;
use hotseat::{App, draw};
use ratatui::{Terminal, backend::TestBackend};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_initial_screen() {
    let screen = render(&App::new(true));
    assert!(screen.contains("Hotseat - Tic Tac Toe"));
    assert!(screen.contains("Player X's turn"));
    assert!(screen.contains("Player X: 0"));
    assert!(screen.contains("Player O: 0"));
}

#[test]
fn test_marks_and_turn_render() {
    let mut app = App::new(true);
    press(&mut app, "15");
    let screen = render(&app);
    assert!(screen.contains(" X "));
    assert!(screen.contains(" O "));
    assert!(screen.contains("Player X's turn"));
}

#[test]
fn test_game_over_modal_renders() {
    let mut app = App::new(true);
    press(&mut app, "15263");
    let screen = render(&app);
    assert!(screen.contains("Game Over"));
    assert!(screen.contains("Player X wins!"));
    assert!(screen.contains("[c] Continue"));
    assert!(screen.contains("Player X: 1"));
}

#[test]
fn test_exit_prompt_renders_final_scores() {
    let mut app = App::new(true);
    press(&mut app, "15263e");
    let screen = render(&app);
    assert!(screen.contains("Thanks for playing!"));
    assert!(screen.contains("Final scores:"));
    assert!(screen.contains("Are you sure you want to exit?"));
}
