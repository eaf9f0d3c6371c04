//! Entity structs for the stay domain.
//!
//! Establishments are read-only records fetched from the listings backend.
//! Enquiry input is user-authored and frozen into an [`EnquiryPayload`] by the
//! validation schema. Submission results are opaque backend payloads.

mod enquiry;
mod establishment;
mod submission;

pub use enquiry::{EnquiryInput, EnquiryPayload};
pub use establishment::{Establishment, EstablishmentId};
pub use submission::SubmissionResult;
