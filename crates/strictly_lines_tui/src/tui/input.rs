//! Maps terminal events to game commands.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use strictly_lines::Direction;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move keyboard focus one tile.
    Move(Direction),
    /// Mark the focused tile.
    SelectFocused,
    /// Mark whichever tile is under the terminal cell `(column, row)`.
    Click {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Translates a terminal event into a command, if it means anything.
pub fn command_for(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) => command_for_key(key),
        Event::Mouse(mouse) => command_for_mouse(mouse),
        _ => None,
    }
}

fn command_for_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::SelectFocused),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        _ => None,
    }
}

fn command_for_mouse(mouse: &MouseEvent) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Command::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrows_move_focus() {
        assert_eq!(command_for(&press(KeyCode::Up)), Some(Command::Move(Direction::Up)));
        assert_eq!(command_for(&press(KeyCode::Down)), Some(Command::Move(Direction::Down)));
        assert_eq!(command_for(&press(KeyCode::Left)), Some(Command::Move(Direction::Left)));
        assert_eq!(command_for(&press(KeyCode::Right)), Some(Command::Move(Direction::Right)));
    }

    #[test]
    fn test_enter_and_space_select() {
        assert_eq!(command_for(&press(KeyCode::Enter)), Some(Command::SelectFocused));
        assert_eq!(command_for(&press(KeyCode::Char(' '))), Some(Command::SelectFocused));
    }

    #[test]
    fn test_reset_and_quit() {
        assert_eq!(command_for(&press(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(command_for(&press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(&press(KeyCode::Esc)), Some(Command::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(command_for(&ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(command_for(&press(KeyCode::Char('x'))), None);
        assert_eq!(command_for(&press(KeyCode::Tab)), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for(&Event::Key(key)), None);
    }

    #[test]
    fn test_left_click() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(command_for(&click), Some(Command::Click { column: 12, row: 7 }));

        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(command_for(&right), None);
    }
}
