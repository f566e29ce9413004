//! Line buffer with a clamped cursor
//!
//! The cursor is a character offset in `[0, len]`, never a byte offset.

use alloc::string::String;

/// Single-line text buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a character at the end; the cursor follows it
    pub fn insert_char(&mut self, ch: char) {
        self.text.push(ch);
        self.cursor = self.len();
    }

    /// Insert a character at the cursor and advance past it
    pub fn insert_char_at_cursor(&mut self, ch: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace)
    ///
    /// Returns false at position 0.
    pub fn delete_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let idx = self.byte_index(self.cursor - 1);
        self.text.remove(idx);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor
    ///
    /// Returns false at the end of the line.
    pub fn delete_at(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }

        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
        true
    }

    /// Move the cursor by `delta`, clamping into `[0, len]`
    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor = self.cursor.saturating_add_signed(delta).min(self.len());
    }

    /// Replace the whole text and put the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = self.len();
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the text out, leaving the buffer empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        core::mem::take(&mut self.text)
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
