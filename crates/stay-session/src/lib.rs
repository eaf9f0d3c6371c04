//! # stay-session
//!
//! Storage for the outcome of the most recent successful enquiry.
//!
//! The enquiry workflow receives a [`SessionStore`] instead of reaching into
//! shared global state. Writes overwrite the previous value outright; there
//! is no merging.

mod error;
mod file;
mod memory;

pub use error::SessionError;
pub use file::{FileSessionStore, StoredSession};
pub use memory::MemorySessionStore;

use stay_core::entities::SubmissionResult;

/// Key-value slot holding the latest submission result.
pub trait SessionStore {
    /// Current value, if any.
    fn get(&self) -> Option<SubmissionResult>;

    /// Replace the current value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the value cannot be persisted.
    fn set(&mut self, value: SubmissionResult) -> Result<(), SessionError>;

    /// Remove the current value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if persisted state cannot be removed.
    fn clear(&mut self) -> Result<(), SessionError>;
}
