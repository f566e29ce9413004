//! # Console Transcript
//!
//! The scrolling transcript the terminal renders into.
//!
//! ## Philosophy
//!
//! This is NOT a terminal emulator. No ANSI escape codes, no cursor
//! addressing. The transcript is an ordered list of finished lines; the live
//! prompt line is drawn by the host from the line editor's state.
//!
//! ## Design
//!
//! - `DisplaySurface`: the four operations the shell core relies on
//! - `Transcript`: in-memory surface with bounded scrollback
//! - `TranscriptSnapshot`: opaque, restorable copy of every line

pub mod line;
pub mod scrollback;

pub use line::{PromptLabel, RenderedLine};
pub use scrollback::{Transcript, DEFAULT_SCROLLBACK};

use serde::{Deserialize, Serialize};

/// Opaque copy of a surface's contents, used by session reset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranscriptSnapshot {
    lines: Vec<RenderedLine>,
}

impl TranscriptSnapshot {
    pub(crate) fn new(lines: Vec<RenderedLine>) -> Self {
        Self { lines }
    }

    pub(crate) fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Where rendered lines go
///
/// The shell core never assumes anything about rendering beyond these
/// operations.
pub trait DisplaySurface {
    /// Append one finished line
    fn append_line(&mut self, line: RenderedLine);

    /// Remove every line
    fn clear(&mut self);

    /// Capture the current contents
    fn snapshot(&self) -> TranscriptSnapshot;

    /// Replace the contents with a previously captured snapshot
    fn restore(&mut self, snapshot: &TranscriptSnapshot);
}
