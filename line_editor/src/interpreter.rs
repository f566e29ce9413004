//! Input interpreter
//!
//! Turns key events into buffer edits, history recall, or the end of a
//! prompt turn. It never renders anything; the outcome tells the host what
//! happened and the host decides what to show.

use alloc::format;
use alloc::string::String;

use input_types::{KeyCode, KeyEvent};
use serde::{Deserialize, Serialize};

use crate::{buffer::LineBuffer, history::HistoryStore, snapshot::LineSnapshot};

/// How printable keys and Delete edit the line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Typed characters always land at the end of the line and Delete only
    /// moves the caret, as the page has always behaved
    #[default]
    AppendOnly,
    /// Typed characters land at the cursor and Delete removes the character
    /// under it
    Positional,
}

/// Outcome from applying a key to the current turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Key was not for us; the event is left unconsumed
    Ignored,
    /// Buffer or cursor changed, turn continues
    Edited,
    /// Enter on a non-blank line; the trimmed command is already in history
    Submitted { raw: String, command: String },
    /// Enter on a blank line; nothing to dispatch
    Blank { raw: String },
    /// Ctrl+C; `echo` is what the aborted prompt line should show
    Interrupted { echo: String },
}

impl TurnOutcome {
    /// Returns true if the prompt turn is over
    pub fn ends_turn(&self) -> bool {
        matches!(
            self,
            Self::Submitted { .. } | Self::Blank { .. } | Self::Interrupted { .. }
        )
    }
}

/// Per-session key interpreter
///
/// Owns the prompt line and the history log.
#[derive(Debug, Clone, Default)]
pub struct InputInterpreter {
    buffer: LineBuffer,
    history: HistoryStore,
    mode: EditMode,
}

impl InputInterpreter {
    pub fn new(mode: EditMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Start with an existing history log
    pub fn with_history(mode: EditMode, mut history: HistoryStore) -> Self {
        history.reset_cursor();
        Self {
            buffer: LineBuffer::new(),
            history,
            mode,
        }
    }

    /// Apply a key event and return the outcome
    ///
    /// The event is marked consumed whenever the interpreter acts on it.
    pub fn apply_key(&mut self, event: &mut KeyEvent) -> TurnOutcome {
        let outcome = if event.is_interrupt() {
            self.interrupt()
        } else {
            self.apply_unmodified(event)
        };

        if outcome != TurnOutcome::Ignored {
            event.consume();
        }
        outcome
    }

    fn apply_unmodified(&mut self, event: &KeyEvent) -> TurnOutcome {
        match event.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Up => {
                if let Some(entry) = self.history.recall_previous() {
                    self.buffer.set_text(entry);
                }
                TurnOutcome::Edited
            }
            KeyCode::Down => {
                let entry = self.history.recall_next();
                self.buffer.set_text(entry);
                TurnOutcome::Edited
            }
            KeyCode::Left => {
                self.buffer.move_cursor(-1);
                TurnOutcome::Edited
            }
            KeyCode::Right => {
                self.buffer.move_cursor(1);
                TurnOutcome::Edited
            }
            KeyCode::Backspace => {
                self.buffer.delete_before();
                TurnOutcome::Edited
            }
            KeyCode::Delete => {
                if self.mode == EditMode::Positional {
                    self.buffer.delete_at();
                }
                TurnOutcome::Edited
            }
            KeyCode::Char(_) if event.modifiers.is_ctrl() || event.modifiers.is_meta() => {
                TurnOutcome::Ignored
            }
            KeyCode::Char(_) => match event.printable() {
                Some(ch) => {
                    match self.mode {
                        EditMode::AppendOnly => self.buffer.insert_char(ch),
                        EditMode::Positional => self.buffer.insert_char_at_cursor(ch),
                    }
                    TurnOutcome::Edited
                }
                None => TurnOutcome::Ignored,
            },
            KeyCode::Tab | KeyCode::Escape | KeyCode::Other => TurnOutcome::Ignored,
        }
    }

    fn submit(&mut self) -> TurnOutcome {
        let raw = self.buffer.take();
        let command = raw.trim();

        if command.is_empty() {
            return TurnOutcome::Blank { raw };
        }

        let command = String::from(command);
        self.history.push(command.clone());
        TurnOutcome::Submitted { raw, command }
    }

    fn interrupt(&mut self) -> TurnOutcome {
        let typed = self.buffer.take();
        self.history.reset_cursor();
        TurnOutcome::Interrupted {
            echo: format!("{}^C", typed.trim()),
        }
    }

    /// Drop the in-progress line without ending the turn
    pub fn clear_line(&mut self) {
        self.buffer.clear();
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Hand the history log to a successor interpreter
    pub fn into_history(self) -> HistoryStore {
        self.history
    }

    /// Get a complete snapshot of line state (for tests)
    pub fn snapshot(&self) -> LineSnapshot {
        LineSnapshot {
            text: self.buffer.text().into(),
            cursor: self.buffer.cursor(),
            history: self.history.entries().to_vec(),
            history_cursor: self.history.cursor(),
        }
    }
}
