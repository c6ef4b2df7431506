//! Tests for the terminal app's command handling.

use ratatui::layout::Rect;
use strictly_lines::{Direction, Player, Rules, Tile};
use strictly_lines_tui::{App, Command, board_area};

fn app_with_board() -> App {
    let mut app = App::default();
    app.set_board_area(board_area(Rect::new(0, 0, 35, 15), 5));
    app
}

/// Terminal coordinates of the middle of a tile's cell.
fn click_on(x: u16, y: u16) -> Command {
    Command::Click {
        column: x * 7 + 3,
        row: y * 3 + 1,
    }
}

#[test]
fn test_keyboard_select_flow() {
    let mut app = App::default();
    app.handle(Command::Move(Direction::Down));
    app.handle(Command::Move(Direction::Right));
    app.handle(Command::SelectFocused);

    assert_eq!(app.engine().player_at(1, 0), Some(Player::X));
    assert_eq!(app.view().mark(Tile::new(1, 0)), Some(Player::X));
    assert!(app.view().is_focused(Tile::new(1, 0)));
    assert_eq!(app.status_message(), "Player O's turn");
}

#[test]
fn test_select_without_focus_does_nothing() {
    let mut app = App::default();
    app.handle(Command::SelectFocused);
    assert_eq!(app.engine().board().occupied(), 0);
    assert_eq!(app.status_message(), "Player X's turn");
}

#[test]
fn test_click_marks_tile() {
    let mut app = app_with_board();
    app.handle(click_on(2, 3));
    assert_eq!(app.engine().player_at(2, 3), Some(Player::X));
}

#[test]
fn test_click_on_taken_tile_keeps_turn() {
    let mut app = app_with_board();
    app.handle(click_on(2, 3));
    app.handle(click_on(2, 3));

    assert_eq!(app.engine().player_at(2, 3), Some(Player::X));
    assert_eq!(app.engine().current_player(), Player::O);
}

#[test]
fn test_click_outside_board_ignored() {
    let mut app = app_with_board();
    app.handle(Command::Click { column: 200, row: 200 });
    assert_eq!(app.engine().board().occupied(), 0);
}

#[test]
fn test_win_locks_board_until_reset() {
    let mut app = app_with_board();
    for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0)] {
        app.handle(click_on(x, y));
    }

    assert!(app.view().is_locked());
    assert!(app.view().is_highlighted(Tile::new(3, 0)));
    assert_eq!(
        app.status_message(),
        "Player X wins! Press 'r' to reset or 'q' to quit."
    );

    app.handle(click_on(4, 4));
    app.handle(Command::Move(Direction::Down));
    assert_eq!(app.engine().player_at(4, 4), None);
    assert_eq!(app.engine().cursor(), None);

    app.handle(Command::Reset);
    assert!(!app.view().is_locked());
    assert_eq!(app.engine().board().occupied(), 0);
    assert_eq!(app.status_message(), "Player X's turn");

    app.handle(click_on(4, 4));
    assert_eq!(app.engine().player_at(4, 4), Some(Player::X));
}

#[test]
fn test_draw_status_on_full_board() {
    let mut app = App::new(Rules::new(3, 3).unwrap());
    app.set_board_area(board_area(Rect::new(0, 0, 21, 9), 3));

    // X O X / X O O / O X X
    for (x, y) in [(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2)] {
        app.handle(click_on(x, y));
    }

    assert_eq!(app.engine().board().occupied(), 9);
    assert!(app.engine().winner().is_none());
    assert_eq!(app.status_message(), "Draw! Press 'r' to reset or 'q' to quit.");
}

#[test]
fn test_quit() {
    let mut app = App::default();
    assert!(!app.should_quit());
    app.handle(Command::Quit);
    assert!(app.should_quit());
}
