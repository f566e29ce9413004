//! Command history with Up/Down recall
//!
//! `cursor == len` means "not recalling"; recall never mutates the entries.

use alloc::string::String;
use alloc::vec::Vec;

/// Append-only history of submitted lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Append a line verbatim (duplicates included) and stop recalling
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
    }

    /// Step back one entry
    ///
    /// Returns `None` when already at the oldest entry (or the log is empty);
    /// the caller keeps whatever it is showing.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }

        self.cursor -= 1;
        Some(self.entries[self.cursor].as_str())
    }

    /// Step forward one entry
    ///
    /// Paging past the newest entry returns to a fresh, empty line.
    pub fn recall_next(&mut self) -> &str {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries[self.cursor].as_str()
        } else {
            self.cursor = self.entries.len();
            ""
        }
    }

    /// Leave recall mode without touching the entries
    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }
}
