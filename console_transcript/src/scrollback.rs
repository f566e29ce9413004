//! # Scrollback Transcript
//!
//! In-memory `DisplaySurface` with a bounded number of lines.
//!
//! ## Design
//!
//! - Oldest lines are dropped once the limit is exceeded
//! - Snapshots copy every stored line; restore is byte-for-byte
//! - No viewport: the page scrolls, the transcript only stores

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::{DisplaySurface, RenderedLine, TranscriptSnapshot};

/// Default maximum number of stored lines
pub const DEFAULT_SCROLLBACK: usize = 1000;

/// Scrollback transcript
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Maximum number of lines to store
    max_lines: usize,
    lines: VecDeque<RenderedLine>,
}

impl Transcript {
    /// Create an empty transcript holding at most `max_lines` lines
    pub fn new(max_lines: usize) -> Self {
        Self {
            max_lines: max_lines.max(1),
            lines: VecDeque::new(),
        }
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &RenderedLine> {
        self.lines.iter()
    }

    pub fn last(&self) -> Option<&RenderedLine> {
        self.lines.back()
    }

    /// Plain-text rendering of every line
    pub fn to_text_lines(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.to_string()).collect()
    }

    fn trim_to_limit(&mut self) {
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
            trace!(target: "transcript", "dropped oldest line");
        }
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLLBACK)
    }
}

impl DisplaySurface for Transcript {
    fn append_line(&mut self, line: RenderedLine) {
        self.lines.push_back(line);
        self.trim_to_limit();
    }

    fn clear(&mut self) {
        debug!(target: "transcript", lines = self.lines.len(), "clear");
        self.lines.clear();
    }

    fn snapshot(&self) -> TranscriptSnapshot {
        TranscriptSnapshot::new(self.lines.iter().cloned().collect())
    }

    fn restore(&mut self, snapshot: &TranscriptSnapshot) {
        debug!(target: "transcript", lines = snapshot.len(), "restore");
        self.lines = snapshot.lines().iter().cloned().collect();
        self.trim_to_limit();
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PromptLabel;

    fn label() -> PromptLabel {
        PromptLabel::new("user", "localhost", "/home/user/", "/home/user/")
    }

    #[test]
    fn test_transcript_creation() {
        let transcript = Transcript::new(10);
        assert_eq!(transcript.max_lines(), 10);
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_zero_limit_keeps_one_line() {
        let mut transcript = Transcript::new(0);
        transcript.append_line(RenderedLine::output("a"));
        transcript.append_line(RenderedLine::output("b"));
        assert_eq!(transcript.to_text_lines(), vec!["b"]);
    }

    #[test]
    fn test_append_line() {
        let mut transcript = Transcript::default();
        transcript.append_line(RenderedLine::prompt(label(), "echo hi"));
        transcript.append_line(RenderedLine::output("hi"));
        assert_eq!(transcript.len(), 2);
        assert_eq!(
            transcript.to_text_lines(),
            vec!["user@localhost:~/ $ echo hi", "hi"]
        );
        assert_eq!(transcript.last(), Some(&RenderedLine::output("hi")));
    }

    #[test]
    fn test_max_lines_limit() {
        let mut transcript = Transcript::new(3);
        for i in 0..5 {
            transcript.append_line(RenderedLine::output(format!("Line {}", i)));
        }
        assert_eq!(
            transcript.to_text_lines(),
            vec!["Line 2", "Line 3", "Line 4"]
        );
    }

    #[test]
    fn test_clear() {
        let mut transcript = Transcript::default();
        transcript.append_line(RenderedLine::output("x"));
        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_snapshot_restore_is_exact() {
        let mut transcript = Transcript::default();
        transcript.append_line(RenderedLine::output("Welcome"));
        let snapshot = transcript.snapshot();

        transcript.append_line(RenderedLine::prompt(label(), "ls"));
        transcript.append_line(RenderedLine::output("media scripts"));
        transcript.restore(&snapshot);

        assert_eq!(transcript.snapshot(), snapshot);
        assert_eq!(transcript.to_text_lines(), vec!["Welcome"]);
    }

    #[test]
    fn test_restore_after_clear() {
        let mut transcript = Transcript::default();
        transcript.append_line(RenderedLine::output("a"));
        let snapshot = transcript.snapshot();
        transcript.clear();
        transcript.restore(&snapshot);
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_display_renders_all_lines() {
        let mut transcript = Transcript::default();
        transcript.append_line(RenderedLine::output("one"));
        transcript.append_line(RenderedLine::output("two"));
        assert_eq!(transcript.to_string(), "one\ntwo\n");
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut transcript = Transcript::default();
        transcript.append_line(RenderedLine::prompt(label(), "pwd"));
        let snapshot = transcript.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: TranscriptSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
