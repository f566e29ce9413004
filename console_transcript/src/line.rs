//! Rendered transcript lines

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prompt prefix: `user@host:dir $ `
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptLabel {
    pub user: String,
    pub host: String,
    /// Directory as shown, with the home prefix already abbreviated
    pub dir: String,
}

impl PromptLabel {
    /// Build a label for `cwd`, abbreviating the `home` prefix to `~`
    pub fn new(user: &str, host: &str, home: &str, cwd: &str) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
            dir: abbreviate_home(home, cwd),
        }
    }
}

impl fmt::Display for PromptLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{} $ ", self.user, self.host, self.dir)
    }
}

/// Replace a leading `home` (with or without trailing slash) by `~`
fn abbreviate_home(home: &str, cwd: &str) -> String {
    let home = home.trim_end_matches('/');
    if home.is_empty() {
        return cwd.into();
    }

    match cwd.strip_prefix(home) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("~{}", rest),
        _ => cwd.into(),
    }
}

/// One finished line of the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderedLine {
    /// A completed prompt with whatever was typed on it
    Prompt { label: PromptLabel, input: String },
    /// Command output, already formatted
    Output(String),
}

impl RenderedLine {
    pub fn prompt(label: PromptLabel, input: impl Into<String>) -> Self {
        Self::Prompt {
            label,
            input: input.into(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::Output(text.into())
    }
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prompt { label, input } => write!(f, "{}{}", label, input),
            Self::Output(text) => write!(f, "{}", text),
        }
    }
}
