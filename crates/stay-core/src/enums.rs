//! Status enums, form fields, and navigation routes for stay.
//!
//! Enums serialize as `snake_case`. [`WorkflowStatus`] provides
//! `allowed_next_states()` so the enquiry workflow can enforce its transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::EstablishmentId;

// ---------------------------------------------------------------------------
// WorkflowStatus
// ---------------------------------------------------------------------------

/// State of the enquiry submit control.
///
/// ```text
/// idle → submitting → idle
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    Idle,
    Submitting,
}

impl WorkflowStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Submitting],
            Self::Submitting => &[Self::Idle],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Label shown on the submit control.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Submit",
            Self::Submitting => "Submitting...",
        }
    }

    /// Whether the submit control accepts another submission.
    #[must_use]
    pub const fn accepts_submit(self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EnquiryField
// ---------------------------------------------------------------------------

/// The five fields of the enquiry form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryField {
    FullName,
    EmailAddress,
    CheckIn,
    CheckOut,
    EstablishmentName,
}

impl EnquiryField {
    pub const ALL: [Self; 5] = [
        Self::FullName,
        Self::EmailAddress,
        Self::CheckIn,
        Self::CheckOut,
        Self::EstablishmentName,
    ];

    /// Wire name used in the enquiry payload.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::EmailAddress => "email_address",
            Self::CheckIn => "check_in",
            Self::CheckOut => "check_out",
            Self::EstablishmentName => "establishment_name",
        }
    }

    /// Human label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::EmailAddress => "Email address",
            Self::CheckIn => "Check-in",
            Self::CheckOut => "Check-out",
            Self::EstablishmentName => "Establishment Name",
        }
    }

    /// Whether the guest types this value. The establishment name is filled
    /// from the fetched listing and is read-only.
    #[must_use]
    pub const fn is_user_editable(self) -> bool {
        !matches!(self, Self::EstablishmentName)
    }
}

impl fmt::Display for EnquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// Client-side navigation destinations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Accommodations,
    Accommodation(EstablishmentId),
    Confirmation,
}

impl Route {
    /// Path of the destination, e.g. `/confirmation`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Accommodations => "/accommodations/".to_string(),
            Self::Accommodation(id) => format!("/accommodations/{id}"),
            Self::Confirmation => "/confirmation".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_status_transitions() {
        assert!(WorkflowStatus::Idle.can_transition_to(WorkflowStatus::Submitting));
        assert!(WorkflowStatus::Submitting.can_transition_to(WorkflowStatus::Idle));
        assert!(!WorkflowStatus::Idle.can_transition_to(WorkflowStatus::Idle));
        assert!(!WorkflowStatus::Submitting.can_transition_to(WorkflowStatus::Submitting));
    }

    #[test]
    fn button_label_follows_status() {
        assert_eq!(WorkflowStatus::Idle.button_label(), "Submit");
        assert_eq!(WorkflowStatus::Submitting.button_label(), "Submitting...");
        assert!(!WorkflowStatus::Submitting.accepts_submit());
    }

    #[test]
    fn only_establishment_name_is_read_only() {
        let read_only: Vec<_> = EnquiryField::ALL
            .into_iter()
            .filter(|field| !field.is_user_editable())
            .collect();
        assert_eq!(read_only, vec![EnquiryField::EstablishmentName]);
    }

    #[test]
    fn field_serde_matches_wire_names() {
        for field in EnquiryField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Accommodations.path(), "/accommodations/");
        assert_eq!(
            Route::Accommodation(EstablishmentId::new("42")).path(),
            "/accommodations/42"
        );
        assert_eq!(Route::Confirmation.to_string(), "/confirmation");
    }
}
