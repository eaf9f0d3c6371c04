use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque payload returned by `POST enquiries/` on success.
///
/// Stored verbatim in the session store and read back by the confirmation
/// view. Nothing in stay interprets its structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionResult(Value);

impl SubmissionResult {
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for SubmissionResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
