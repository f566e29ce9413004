//! # Terminal Host
//!
//! Runs one portfolio-terminal session: key events in, transcript out.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: Commands never print, they return lines
//! - **Input is explicit events**: Not stdin streams
//! - **Deterministic mode is first-class**: Scripts and fixed clocks for tests
//! - **No real shell**: No filesystem, no processes, no pipes
//!
//! ## Responsibilities
//!
//! The host:
//! - Owns the explicit session state (prompt line, history, working
//!   directory, session-start transcript snapshot)
//! - Routes each key to the line editor and each submitted line to the
//!   dispatcher
//! - Carries out clear, reset and exit
//! - Loads configuration and key scripts

pub mod config;
pub mod error;
pub mod input_script;
pub mod session;

pub use config::HostConfig;
pub use error::HostError;
pub use input_script::{InputScript, InputScriptError};
pub use session::{InputSubscription, Session, SessionStatus};
