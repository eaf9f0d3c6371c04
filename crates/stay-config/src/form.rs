//! Enquiry form configuration.

use serde::{Deserialize, Serialize};
use stay_core::MINIMUM_NAME_CHARACTERS;

use crate::ConfigError;

const fn default_minimum_name_characters() -> usize {
    MINIMUM_NAME_CHARACTERS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormConfig {
    /// Shortest full name the enquiry form accepts, in characters.
    #[serde(default = "default_minimum_name_characters")]
    pub minimum_name_characters: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            minimum_name_characters: default_minimum_name_characters(),
        }
    }
}

impl FormConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the minimum is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_name_characters == 0 {
            return Err(ConfigError::InvalidValue {
                field: "form.minimum_name_characters".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
