//! Input module - keyboard handling for game controls
//!
//! The original pointer drag-and-drop becomes a board cursor: arrows move
//! it, space grabs the cell under it and drops on the second press.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Coord;

/// Commands the terminal UI can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Grab the cell under the cursor, or drop onto it if already grabbing
    Toggle,
    Restart,
}

/// Map keyboard input to UI commands
pub fn handle_key_event(key: KeyEvent) -> Option<UiCommand> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(UiCommand::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(UiCommand::MoveRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(UiCommand::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(UiCommand::MoveDown),

        // Grab / drop
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiCommand::Toggle),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Board cursor, clamped to the current board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub column: i8,
    pub row: i8,
}

impl Cursor {
    pub fn coord(&self) -> Coord {
        (self.column, self.row)
    }

    /// Move by a delta, staying inside a `columns x rows` board.
    /// On a board with no columns the cursor stays at the origin.
    pub fn shift(&mut self, d_column: i8, d_row: i8, columns: usize, rows: usize) {
        if columns == 0 || rows == 0 {
            self.column = 0;
            self.row = 0;
            return;
        }
        self.column = (self.column + d_column).clamp(0, columns as i8 - 1);
        self.row = (self.row + d_row).clamp(0, rows as i8 - 1);
    }
}
