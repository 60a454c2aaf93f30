//! Board-list state for the boards and dashboard views.
//!
//! DESIGN
//! ======
//! Separating list state from the board-detail page keeps navigation
//! inventory independent of in-page edits; edits are folded back in with
//! `upsert` so the list stays current without refetching.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use crate::net::types::Board;

/// Shared board list state backed by `GET /boards`.
#[derive(Clone, Debug, Default)]
pub struct BoardsState {
    pub items: Vec<Board>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

impl BoardsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Board>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Replace the board with the same id, or append a new one.
    pub fn upsert(&mut self, board: Board) {
        match self.items.iter_mut().find(|b| b.id == board.id) {
            Some(existing) => *existing = board,
            None => self.items.push(board),
        }
    }
}
