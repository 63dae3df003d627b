//! Key bindings and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use xo_core::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    MoveCursor(Direction),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark on a numbered square.
    Place(Position),
    /// Start the clock.
    Start,
    /// New game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action, if bound.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => Position::from_key(c).map(Action::Place),
        _ => None,
    }
}

/// Moves cursor one square, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match direction {
        Direction::Up => (row.saturating_sub(1), column),
        Direction::Down => ((row + 1).min(2), column),
        Direction::Left => (row, column.saturating_sub(1)),
        Direction::Right => (row, (column + 1).min(2)),
    };
    Position::from_index(row * 3 + column).unwrap_or(cursor)
}
