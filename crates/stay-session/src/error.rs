use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("home directory not found, cannot locate session file")]
    HomeNotFound,

    #[error("session file I/O failed: {0}")]
    Io(String),

    #[error("session payload could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}
