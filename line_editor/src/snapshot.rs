//! Line snapshot for deterministic tests

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Complete prompt-line state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSnapshot {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_cursor: usize,
}

impl LineSnapshot {
    /// Compute a deterministic hash of the snapshot state
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update(self.text.as_bytes());
        hasher.update(b"\n");
        hasher.update(self.cursor.to_le_bytes());

        for entry in &self.history {
            hasher.update(entry.as_bytes());
            hasher.update(b"\n");
        }
        hasher.update(self.history_cursor.to_le_bytes());

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}
