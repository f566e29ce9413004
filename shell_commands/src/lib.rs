//! # Shell Commands
//!
//! Command registry, dispatch, and the built-in commands of the portfolio
//! terminal.
//!
//! This is NOT a shell: there is no filesystem, no processes, no pipes.
//! `ls` lists a fixed table and `cd`/`cat` say so.
//!
//! ## Flow
//!
//! A submitted line is split into a name and arguments, the name is looked
//! up in the [`CommandRegistry`], and the handler returns a
//! [`CommandOutput`]: the lines to render plus an optional [`SessionEffect`]
//! the session has to carry out (clear, reset, exit).

pub mod builtins;
pub mod context;
pub mod dispatcher;
pub mod listing;
pub mod registry;

pub use context::{
    Clock, CommandContext, FixedClock, FixedSizes, RandomSizes, SizeSource, SystemClock,
};
pub use dispatcher::{split_command_line, Dispatcher};
pub use listing::{EntryKind, FakeEntry, ListingError, ListingOptions, FAKE_DIRECTORY};
pub use registry::{Builtin, CommandHandler, CommandRegistry, CustomHandler};

/// Something the session must do after a command ran
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionEffect {
    #[default]
    None,
    /// Wipe the transcript and the input line
    ClearScreen,
    /// Restore the session-start state
    Reset,
    /// Leave the terminal for another page
    Exit,
}

/// Result of running one command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    pub effect: SessionEffect,
}

impl CommandOutput {
    /// Output that only renders lines
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            effect: SessionEffect::None,
        }
    }

    /// Output with a single line
    pub fn line(line: impl Into<String>) -> Self {
        Self::lines([line.into()])
    }

    /// Output with no lines, only an effect
    pub fn effect(effect: SessionEffect) -> Self {
        Self {
            lines: Vec::new(),
            effect,
        }
    }
}
