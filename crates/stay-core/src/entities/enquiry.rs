use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EnquiryField;

/// Field values typed by the guest. Everything starts empty.
///
/// `establishment_name` is deliberately absent: it is read from the fetched
/// establishment when the enquiry is validated, never typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryInput {
    pub full_name: String,
    pub email_address: String,
    pub check_in: String,
    pub check_out: String,
}

impl EnquiryInput {
    /// Value currently held for `field`. `EstablishmentName` has no
    /// user-authored value and always reads as `None`.
    #[must_use]
    pub fn get(&self, field: EnquiryField) -> Option<&str> {
        match field {
            EnquiryField::FullName => Some(&self.full_name),
            EnquiryField::EmailAddress => Some(&self.email_address),
            EnquiryField::CheckIn => Some(&self.check_in),
            EnquiryField::CheckOut => Some(&self.check_out),
            EnquiryField::EstablishmentName => None,
        }
    }

    /// Mutable slot for a user-editable field.
    pub fn slot_mut(&mut self, field: EnquiryField) -> Option<&mut String> {
        match field {
            EnquiryField::FullName => Some(&mut self.full_name),
            EnquiryField::EmailAddress => Some(&mut self.email_address),
            EnquiryField::CheckIn => Some(&mut self.check_in),
            EnquiryField::CheckOut => Some(&mut self.check_out),
            EnquiryField::EstablishmentName => None,
        }
    }
}

/// Body of `POST enquiries/`.
///
/// Only [`crate::validation::EnquirySchema::validate`] builds one, so holding
/// a payload means every field passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EnquiryPayload {
    pub full_name: String,
    pub email_address: String,
    pub check_in: String,
    pub check_out: String,
    pub establishment_name: String,
}
