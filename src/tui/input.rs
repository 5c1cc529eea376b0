//! Keyboard mapping for the TUI.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// What a key press means to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Place a mark under the cursor.
    Select,
    /// Place a mark on a specific cell (digit keys).
    Place(Position),
    /// Start a new game in the same mode.
    Restart,
    /// Go back to the mode chooser.
    Menu,
    /// Toggle the minimax hint overlay.
    ToggleHints,
    /// Leave the application.
    Quit,
}

/// Translates a key into an action, if it means anything.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char(c) if c.is_ascii_digit() => Position::from_digit(c).map(Action::Place),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::Menu),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Action::ToggleHints),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
