//! Cross-cutting error types for stay.
//!
//! Domain-specific errors (`ApiError`, `SessionError`, `ConfigError`) live in
//! their respective crates. They converge into `anyhow` in `stay-cli`.

use thiserror::Error;

/// Errors that can be raised by any stay crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints, read-only fields).
    #[error("Validation error: {0}")]
    Validation(String),
}
