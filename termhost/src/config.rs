//! # Host Configuration
//!
//! Every field has a default; a JSON config file only needs the fields it
//! changes.

use std::fs;
use std::path::Path;

use console_transcript::DEFAULT_SCROLLBACK;
use line_editor::EditMode;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::HostError;

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// User name shown in the prompt
    pub user: String,
    /// Host name shown in the prompt
    pub host: String,
    /// Working directory at session start and after `reset`
    pub home_dir: String,
    /// Line printed by `whoami`
    pub identity: String,
    /// Page `exit` navigates to
    pub exit_location: String,
    /// How typed characters and Delete edit the line
    pub edit_mode: EditMode,
    /// Maximum transcript lines kept
    pub scrollback_limit: usize,
    /// Lines shown before the first prompt (part of the reset snapshot)
    pub banner: Vec<String>,
    /// Fixed seed for `ls -l` sizes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_seed: Option<u64>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            host: "localhost".to_string(),
            home_dir: "/home/user/".to_string(),
            identity: "I don't know who you are, but this was made by Jonathan Nielsen"
                .to_string(),
            exit_location: "index.html".to_string(),
            edit_mode: EditMode::AppendOnly,
            scrollback_limit: DEFAULT_SCROLLBACK,
            banner: Vec::new(),
            size_seed: None,
        }
    }
}

impl HostConfig {
    /// Parses a JSON config
    pub fn from_json(text: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HostError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| HostError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        info!(target: "config", path = %path.display(), user = %config.user, "config loaded");
        Ok(config)
    }
}
