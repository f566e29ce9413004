#![no_std]

//! # Line Editor
//!
//! The prompt-line model behind the web terminal.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same key trace => same line state
//! - **Mechanism over policy**: The core decides what a key means, the host
//!   decides what to render and which command runs
//!
//! ## Design
//!
//! The core provides:
//! - LineBuffer: text plus a clamped cursor
//! - HistoryStore: append-only log of submitted lines with a recall cursor
//! - InputInterpreter: per-turn state machine from key events to outcomes
//! - LineSnapshot: deterministic state for tests

extern crate alloc;

pub mod buffer;
pub mod history;
pub mod interpreter;
pub mod snapshot;

pub use buffer::LineBuffer;
pub use history::HistoryStore;
pub use interpreter::{EditMode, InputInterpreter, TurnOutcome};
pub use snapshot::LineSnapshot;
