//! Client-side validation for the enquiry form.
//!
//! Every field is checked independently and all failures are reported
//! together, one message per field. A field that is missing reports only its
//! "required" message. There are no cross-field rules: check-out is not
//! compared against check-in.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::entities::{EnquiryInput, EnquiryPayload};
use crate::enums::EnquiryField;
use crate::MINIMUM_NAME_CHARACTERS;

/// Address syntax: dot-separated local atoms, then a dotted domain whose
/// last label starts and ends with a letter. `alice@localhost` is rejected.
/// Domain existence is not checked.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Non-ASCII ranges accepted anywhere a letter is.
    const WIDE: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";
    let atom = format!(r"[a-z0-9!#$%&'*+/=?^_`{{|}}~{WIDE}-]+");
    let edge = format!("[a-z0-9{WIDE}]");
    let inner = format!("[a-z0-9._~{WIDE}-]*");
    let alpha = format!("[a-z{WIDE}]");

    Regex::new(&format!(
        r"(?i)^{atom}(?:\.{atom})*@(?:{edge}(?:{inner}{edge})?\.)+{alpha}(?:{inner}{alpha})?$"
    ))
    .expect("email pattern is a valid regex")
});

/// A single failed field with its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: EnquiryField,
    pub message: String,
}

/// All field failures from one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn get(&self, field: EnquiryField) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    #[must_use]
    pub fn contains(&self, field: EnquiryField) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, field: EnquiryField, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validation rules for an enquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnquirySchema {
    minimum_name_characters: usize,
}

impl Default for EnquirySchema {
    fn default() -> Self {
        Self::new(MINIMUM_NAME_CHARACTERS)
    }
}

impl EnquirySchema {
    #[must_use]
    pub const fn new(minimum_name_characters: usize) -> Self {
        Self {
            minimum_name_characters,
        }
    }

    #[must_use]
    pub const fn minimum_name_characters(&self) -> usize {
        self.minimum_name_characters
    }

    /// Validate `input` together with the establishment name that will be
    /// submitted alongside it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every field that failed. Nothing
    /// is produced for partial input.
    pub fn validate(
        &self,
        input: &EnquiryInput,
        establishment_name: &str,
    ) -> Result<EnquiryPayload, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if input.full_name.is_empty() {
            errors.push(EnquiryField::FullName, "Please enter your full name");
        } else if input.full_name.chars().count() < self.minimum_name_characters {
            errors.push(
                EnquiryField::FullName,
                format!(
                    "Your full name must be at least {} characters",
                    self.minimum_name_characters
                ),
            );
        }

        if input.email_address.is_empty() {
            errors.push(EnquiryField::EmailAddress, "Please enter your email address");
        } else if !is_valid_email(&input.email_address) {
            errors.push(
                EnquiryField::EmailAddress,
                "Please enter a valid email address",
            );
        }

        if input.check_in.is_empty() {
            errors.push(EnquiryField::CheckIn, "Please provide a check-in date");
        }

        if input.check_out.is_empty() {
            errors.push(EnquiryField::CheckOut, "Please provide a check-out date");
        }

        if establishment_name.is_empty() {
            errors.push(
                EnquiryField::EstablishmentName,
                "establishment_name is a required field",
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EnquiryPayload {
            full_name: input.full_name.clone(),
            email_address: input.email_address.clone(),
            check_in: input.check_in.clone(),
            check_out: input.check_out.clone(),
            establishment_name: establishment_name.to_string(),
        })
    }
}

/// Syntax-only email check.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
