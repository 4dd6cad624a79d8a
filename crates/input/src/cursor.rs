//! Keyboard-driven cell cursor.
//!
//! The cursor wraps at the grid edges, matching the engine's toroidal
//! topology: stepping left from column 0 lands on the last column.

use tui_life_types::LifeAction;

/// Current cell position for keyboard editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    row: u32,
    col: u32,
    width: u32,
    height: u32,
}

impl Cursor {
    /// Create a cursor at the grid center.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            row: height / 2,
            col: width / 2,
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn pos(&self) -> (u32, u32) {
        (self.row, self.col)
    }

    /// Apply a cursor-movement action; other actions are ignored.
    pub fn apply(&mut self, action: LifeAction) {
        match action {
            LifeAction::CursorUp => self.row = (self.row + self.height - 1) % self.height,
            LifeAction::CursorDown => self.row = (self.row + 1) % self.height,
            LifeAction::CursorLeft => self.col = (self.col + self.width - 1) % self.width,
            LifeAction::CursorRight => self.col = (self.col + 1) % self.width,
            _ => {}
        }
    }
}
