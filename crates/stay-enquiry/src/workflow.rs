//! The enquiry workflow.
//!
//! One instance backs one open enquiry form. It fetches the establishment on
//! activation, validates the guest's input on submit, posts the enquiry, and
//! on success publishes the backend response to the session store before
//! navigating to the confirmation route.
//!
//! Both network calls are split into `begin_*` / `apply_*`/`finish_*` halves
//! so the caller can interleave typing with an outstanding fetch. Each half
//! is joined by a ticket; results arriving for a closed or re-activated
//! workflow are dropped without touching the session or the navigator.

use stay_api::{ApiError, EnquiryApi};
use stay_core::entities::{
    EnquiryInput, Establishment, EstablishmentId, SubmissionResult,
};
use stay_core::enums::{EnquiryField, Route, WorkflowStatus};
use stay_core::errors::CoreError;
use stay_core::validation::{EnquirySchema, ValidationErrors};
use stay_session::SessionStore;

use crate::navigation::Navigator;
use crate::state::{
    Applied, EstablishmentState, FetchTicket, SubmitOutcome, SubmitRejected, SubmitTicket,
};

/// Shown when the establishment lookup fails.
pub const LOAD_FAILED_NOTICE: &str =
    "We could not load this accommodation. Please try again later.";
/// Shown when the enquiry request fails.
pub const SUBMIT_FAILED_NOTICE: &str = "Your enquiry could not be sent. Please try again.";
/// Shown when the enquiry was created but its result could not be stored.
pub const SESSION_FAILED_NOTICE: &str =
    "Your enquiry was sent, but the confirmation could not be saved.";

pub struct EnquiryWorkflow<A, S, N> {
    api: A,
    session: S,
    navigator: N,
    schema: EnquirySchema,
    establishment_id: EstablishmentId,
    establishment: EstablishmentState,
    input: EnquiryInput,
    status: WorkflowStatus,
    field_errors: ValidationErrors,
    notice: Option<String>,
    generation: u64,
    fetch_sequence: u64,
    closed: bool,
}

impl<A, S, N> EnquiryWorkflow<A, S, N>
where
    A: EnquiryApi,
    S: SessionStore,
    N: Navigator,
{
    /// A fresh, empty form for `establishment_id`. Nothing is fetched until
    /// [`Self::activate`] or [`Self::begin_activation`] is called.
    pub fn new(
        establishment_id: EstablishmentId,
        schema: EnquirySchema,
        api: A,
        session: S,
        navigator: N,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
            schema,
            establishment_id,
            establishment: EstablishmentState::Uninitialized,
            input: EnquiryInput::default(),
            status: WorkflowStatus::Idle,
            field_errors: ValidationErrors::default(),
            notice: None,
            generation: 0,
            fetch_sequence: 0,
            closed: false,
        }
    }

    // ── Activation ─────────────────────────────────────────────────

    /// Fetch the establishment and apply the result. A closed workflow
    /// fetches nothing and reports [`Applied::Stale`].
    pub async fn activate(&mut self) -> Applied {
        let Some(ticket) = self.begin_activation() else {
            return Applied::Stale;
        };
        let result = self.api.fetch_establishment(ticket.id()).await;
        self.apply_establishment(ticket, result)
    }

    /// Start an establishment fetch. Any earlier fetch still in flight
    /// becomes stale. A previously loaded establishment stays current until
    /// the new response is applied.
    ///
    /// Returns `None` once the workflow is closed.
    pub fn begin_activation(&mut self) -> Option<FetchTicket> {
        if self.closed {
            return None;
        }

        self.fetch_sequence += 1;
        if !matches!(self.establishment, EstablishmentState::Loaded(_)) {
            self.establishment = EstablishmentState::Loading;
        }
        Some(FetchTicket {
            generation: self.generation,
            sequence: self.fetch_sequence,
            id: self.establishment_id.clone(),
        })
    }

    /// Apply a settled establishment fetch.
    ///
    /// A failed fetch is logged and leaves the form editable. It is not
    /// retried. The name stays empty unless an earlier fetch had loaded one.
    pub fn apply_establishment(
        &mut self,
        ticket: FetchTicket,
        result: Result<Establishment, ApiError>,
    ) -> Applied {
        if self.closed
            || ticket.generation != self.generation
            || ticket.sequence != self.fetch_sequence
        {
            tracing::debug!(establishment_id = %ticket.id, "dropping stale establishment fetch");
            return Applied::Stale;
        }

        match result {
            Ok(establishment) => {
                tracing::debug!(
                    establishment_id = %ticket.id,
                    name = %establishment.name,
                    "establishment loaded"
                );
                self.establishment = EstablishmentState::Loaded(establishment);
            }
            Err(error) => {
                tracing::warn!(establishment_id = %ticket.id, %error, "establishment fetch failed");
                if !matches!(self.establishment, EstablishmentState::Loaded(_)) {
                    self.establishment = EstablishmentState::LoadFailed;
                }
                self.notice = Some(LOAD_FAILED_NOTICE.to_string());
            }
        }
        Applied::Current
    }

    // ── Editing ────────────────────────────────────────────────────

    /// Set a user-editable field.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for `establishment_name`, which is
    /// filled from the fetched establishment and cannot be typed.
    pub fn set_field(
        &mut self,
        field: EnquiryField,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        let slot = self.input.slot_mut(field).ok_or_else(|| {
            CoreError::Validation(format!("{field} is read-only"))
        })?;
        *slot = value.into();
        Ok(())
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.input.full_name = value.into();
    }

    pub fn set_email_address(&mut self, value: impl Into<String>) {
        self.input.email_address = value.into();
    }

    pub fn set_check_in(&mut self, value: impl Into<String>) {
        self.input.check_in = value.into();
    }

    pub fn set_check_out(&mut self, value: impl Into<String>) {
        self.input.check_out = value.into();
    }

    /// Re-run validation without submitting, refreshing [`Self::field_errors`].
    pub fn validate(&mut self) -> &ValidationErrors {
        self.field_errors = self
            .schema
            .validate(&self.input, self.establishment.name())
            .err()
            .unwrap_or_default();
        &self.field_errors
    }

    // ── Submission ─────────────────────────────────────────────────

    /// Validate and submit the enquiry, then apply the outcome.
    ///
    /// Never returns an error: network and storage failures are logged and
    /// reported through [`SubmitOutcome::Failed`] and [`Self::notice`].
    pub async fn submit(&mut self) -> SubmitOutcome {
        let ticket = match self.begin_submit() {
            Ok(ticket) => ticket,
            Err(rejected) => return SubmitOutcome::Rejected(rejected),
        };
        let result = self.api.create_enquiry(ticket.payload()).await;
        self.finish_submit(ticket, result)
    }

    /// Validate the current input against the current establishment snapshot
    /// and, if it passes, move to `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected`] when validation fails, a submission is
    /// already in flight, or the workflow is closed. Nothing is sent in any
    /// of those cases and the status is unchanged.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitRejected> {
        if self.closed {
            return Err(SubmitRejected::Closed);
        }
        if !self.status.accepts_submit() {
            return Err(SubmitRejected::InFlight);
        }

        let payload = match self.schema.validate(&self.input, self.establishment.name()) {
            Ok(payload) => payload,
            Err(errors) => {
                tracing::debug!(invalid_fields = errors.len(), "enquiry failed validation");
                self.field_errors = errors.clone();
                return Err(SubmitRejected::Invalid(errors));
            }
        };

        self.field_errors = ValidationErrors::default();
        self.notice = None;
        self.transition(WorkflowStatus::Submitting);
        Ok(SubmitTicket {
            generation: self.generation,
            payload,
        })
    }

    /// Apply a settled enquiry request.
    ///
    /// The status returns to `Idle` whatever the result, including for a
    /// ticket from a closed form. On success the backend response overwrites
    /// the session value and the navigator is sent to [`Route::Confirmation`]
    /// exactly once, closing the workflow.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<SubmissionResult, ApiError>,
    ) -> SubmitOutcome {
        if self.status == WorkflowStatus::Submitting {
            self.transition(WorkflowStatus::Idle);
        }

        if self.closed || ticket.generation != self.generation {
            tracing::debug!("dropping enquiry response for closed form");
            return SubmitOutcome::Discarded;
        }

        let response = match result {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(
                    establishment_id = %self.establishment_id,
                    status = ?error.status(),
                    %error,
                    "enquiry submission failed"
                );
                return self.fail(SUBMIT_FAILED_NOTICE);
            }
        };

        if let Err(error) = self.session.set(response) {
            tracing::error!(%error, "enquiry created but session could not be updated");
            return self.fail(SESSION_FAILED_NOTICE);
        }

        tracing::info!(establishment_id = %self.establishment_id, "enquiry submitted");
        self.closed = true;
        self.navigator.navigate(Route::Confirmation);
        SubmitOutcome::Navigated(Route::Confirmation)
    }

    // ── Teardown ───────────────────────────────────────────────────

    /// Dismiss the form. Requests still in flight are not aborted, but their
    /// results will be dropped.
    pub fn close(&mut self) {
        self.generation += 1;
        self.closed = true;
    }

    // ── Accessors ──────────────────────────────────────────────────

    pub const fn establishment_id(&self) -> &EstablishmentId {
        &self.establishment_id
    }

    pub const fn establishment(&self) -> &EstablishmentState {
        &self.establishment
    }

    pub const fn input(&self) -> &EnquiryInput {
        &self.input
    }

    pub const fn status(&self) -> WorkflowStatus {
        self.status
    }

    pub const fn field_errors(&self) -> &ValidationErrors {
        &self.field_errors
    }

    /// User-visible message about the last network failure, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    pub const fn schema(&self) -> &EnquirySchema {
        &self.schema
    }

    pub const fn session(&self) -> &S {
        &self.session
    }

    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Hand back the injected collaborators.
    pub fn into_parts(self) -> (A, S, N) {
        (self.api, self.session, self.navigator)
    }

    // ── Internals ──────────────────────────────────────────────────

    fn fail(&mut self, notice: &str) -> SubmitOutcome {
        self.notice = Some(notice.to_string());
        SubmitOutcome::Failed {
            notice: notice.to_string(),
        }
    }

    fn transition(&mut self, next: WorkflowStatus) {
        if self.status.can_transition_to(next) {
            self.status = next;
        } else {
            tracing::error!(from = %self.status, to = %next, "ignored invalid status transition");
        }
    }
}
