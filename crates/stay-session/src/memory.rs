use stay_core::entities::SubmissionResult;

use crate::{SessionError, SessionStore};

/// Process-local session store.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    value: Option<SubmissionResult>,
    writes: usize,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing value, e.g. a previous enquiry's result.
    #[must_use]
    pub const fn with_value(value: SubmissionResult) -> Self {
        Self {
            value: Some(value),
            writes: 0,
        }
    }

    /// Number of successful `set` calls.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<SubmissionResult> {
        self.value.clone()
    }

    fn set(&mut self, value: SubmissionResult) -> Result<(), SessionError> {
        self.value = Some(value);
        self.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.value = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn set_overwrites_without_merging() {
        let mut store = MemorySessionStore::with_value(SubmissionResult::new(
            json!({"id": "enq-0", "token": "old"}),
        ));
        store
            .set(SubmissionResult::new(json!({"id": "enq-1"})))
            .unwrap();

        assert_eq!(store.get(), Some(SubmissionResult::new(json!({"id": "enq-1"}))));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn clear_empties_the_slot() {
        let mut store = MemorySessionStore::new();
        store.set(SubmissionResult::new(json!(true))).unwrap();
        store.clear().unwrap();
        assert!(store.get().is_none());
    }
}
