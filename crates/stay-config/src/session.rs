//! Session store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Override for the session file. Empty means `~/.stay/session.json`.
    #[serde(default)]
    pub path: String,
}

impl SessionConfig {
    /// Explicit session file path, if one is configured.
    pub fn path_override(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
