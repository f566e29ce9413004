//! Host error types

use thiserror::Error;

use crate::input_script::InputScriptError;

/// Failures outside the terminal session itself
///
/// Everything a user types is answered in the transcript; these only cover
/// loading configuration and scripts.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Script error: {0}")]
    Script(#[from] InputScriptError),
}
