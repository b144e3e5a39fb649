//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the numbered cell.
    Play(Position),
    /// Move the keyboard cursor.
    Cursor(CursorMove),
    /// Enter or Space: dismiss the dialog, or play the cursor cell.
    Confirm,
    /// Close the game-over dialog.
    Dismiss,
    /// Start a new game.
    Reset,
    /// Leave the app.
    Quit,
}

/// Arrow-key cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Maps a key event to a command. Key releases map to nothing.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Confirm),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Position::from_number)
            .map(Command::Play),
        KeyCode::Esc => Some(Command::Dismiss),
        KeyCode::Up => Some(Command::Cursor(CursorMove::Up)),
        KeyCode::Down => Some(Command::Cursor(CursorMove::Down)),
        KeyCode::Left => Some(Command::Cursor(CursorMove::Left)),
        KeyCode::Right => Some(Command::Cursor(CursorMove::Right)),
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, step: CursorMove) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match step {
        CursorMove::Up => row.checked_sub(1).map(|r| (r, column)),
        CursorMove::Down => Some((row + 1, column)),
        CursorMove::Left => column.checked_sub(1).map(|c| (row, c)),
        CursorMove::Right => Some((row, column + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_column(r, c))
        .unwrap_or(cursor)
}
