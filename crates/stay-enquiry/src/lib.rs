//! # stay-enquiry
//!
//! The stay enquiry workflow.
//!
//! ```text
//! activate ──► fetch establishment ──► loaded | load_failed
//!                 (unordered with typing)
//! submit ──► validate ──✗──► field errors, stays idle
//!                │
//!                ✓
//!                ▼
//!            submitting ──► POST enquiries/ ──► idle
//!                               │ ok
//!                               ▼
//!                   session.set(response) ──► navigate /confirmation
//! ```
//!
//! Collaborators are injected: an [`stay_api::EnquiryApi`] for the backend,
//! a [`stay_session::SessionStore`] for the result, and a [`Navigator`].

pub mod navigation;
pub mod state;
pub mod workflow;

pub use navigation::{Navigator, RecordingNavigator};
pub use state::{
    Applied, EstablishmentState, FetchTicket, SubmitOutcome, SubmitRejected, SubmitTicket,
};
pub use workflow::{
    EnquiryWorkflow, LOAD_FAILED_NOTICE, SESSION_FAILED_NOTICE, SUBMIT_FAILED_NOTICE,
};
