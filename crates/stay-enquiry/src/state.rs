//! Snapshot and ticket types for the enquiry workflow.

use std::fmt;

use stay_core::entities::{EnquiryPayload, Establishment, EstablishmentId};
use stay_core::enums::Route;
use stay_core::validation::ValidationErrors;

/// What is known about the establishment the enquiry is for.
///
/// ```text
/// uninitialized → loading → loaded
///                         → load_failed
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EstablishmentState {
    #[default]
    Uninitialized,
    Loading,
    Loaded(Establishment),
    LoadFailed,
}

impl EstablishmentState {
    /// Name submitted with the enquiry. Empty until the fetch succeeds.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Loaded(establishment) => &establishment.name,
            Self::Uninitialized | Self::Loading | Self::LoadFailed => "",
        }
    }

    #[must_use]
    pub const fn establishment(&self) -> Option<&Establishment> {
        match self {
            Self::Loaded(establishment) => Some(establishment),
            Self::Uninitialized | Self::Loading | Self::LoadFailed => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::LoadFailed => "load_failed",
        }
    }
}

/// Proof that an establishment fetch was started by a specific activation.
#[derive(Debug)]
#[must_use = "pass the ticket back to apply_establishment"]
pub struct FetchTicket {
    pub(crate) generation: u64,
    pub(crate) sequence: u64,
    pub(crate) id: EstablishmentId,
}

impl FetchTicket {
    #[must_use]
    pub const fn id(&self) -> &EstablishmentId {
        &self.id
    }
}

/// Proof that a submission passed validation, carrying the frozen payload.
#[derive(Debug)]
#[must_use = "pass the ticket back to finish_submit"]
pub struct SubmitTicket {
    pub(crate) generation: u64,
    pub(crate) payload: EnquiryPayload,
}

impl SubmitTicket {
    #[must_use]
    pub const fn payload(&self) -> &EnquiryPayload {
        &self.payload
    }
}

/// Whether a settled request was applied to the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    /// The workflow was closed or re-activated while the request was in
    /// flight; the result was dropped.
    Stale,
}

/// Why a submission never reached the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// One or more fields failed validation.
    Invalid(ValidationErrors),
    /// A previous submission has not settled yet.
    InFlight,
    /// The workflow has been closed or has already navigated away.
    Closed,
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "invalid enquiry: {errors}"),
            Self::InFlight => f.write_str("an enquiry is already being submitted"),
            Self::Closed => f.write_str("the enquiry form is closed"),
        }
    }
}

/// Terminal result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The enquiry was created, the session updated, and navigation issued.
    Navigated(Route),
    /// Nothing was sent.
    Rejected(SubmitRejected),
    /// The request or the session write failed. The form is still populated
    /// and can be submitted again.
    Failed { notice: String },
    /// The workflow was closed while the request was in flight.
    Discarded,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_navigated(&self) -> bool {
        matches!(self, Self::Navigated(_))
    }
}
