//! The registration submission workflow.
//!
//! A submit validates the form, then hands a snapshot of it to a
//! [`RegistrationService`]. While that call is in flight the workflow is busy:
//! further submits, field edits and clear requests are refused. When the call
//! resolves, a success records the submission, appends a user row and resets
//! the form; a failure leaves everything as it was so the user can retry.
//!
//! The TUI runs the remote call on a background task, so the operation is
//! split into [`SubmissionWorkflow::begin_submit`] and
//! [`SubmissionWorkflow::finish_submit`]. [`SubmissionWorkflow::submit`]
//! chains both for callers that can await inline.

use crate::notification::Notification;
use crate::registration::form::{FormData, FormErrors, FormField};
use crate::registration::history::{Submission, SubmissionHistory};
use crate::registration::remote::{RegistrationReceipt, RegistrationService, RemoteError};
use crate::registration::validator::{validate, FormStatus};
use crate::table::{TableController, UserRow};
use crate::utils::datetime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// Result of starting a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation failed; the errors are also stored on the workflow
    Invalid(FormErrors),
    /// A submission is already in flight
    Busy,
    /// The form was valid; this snapshot must be sent to the service
    Accepted(FormData),
}

/// Final result of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(FormErrors),
    Busy,
    Succeeded {
        submission: Submission,
        notification: Notification,
    },
    Failed {
        error: RemoteError,
        notification: Notification,
    },
}

#[derive(Debug, Clone)]
pub struct SubmissionWorkflow {
    form: FormData,
    errors: FormErrors,
    history: SubmissionHistory,
    state: WorkflowState,
    pending: Option<FormData>,
    timestamp_format: String,
}

impl Default for SubmissionWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionWorkflow {
    pub fn new() -> Self {
        Self::with_timestamp_format(datetime::DEFAULT_TIMESTAMP_FORMAT)
    }

    pub fn with_timestamp_format(format: impl Into<String>) -> Self {
        Self {
            form: FormData::new(),
            errors: FormErrors::new(),
            history: SubmissionHistory::new(),
            state: WorkflowState::Idle,
            pending: None,
            timestamp_format: format.into(),
        }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn history(&self) -> &SubmissionHistory {
        &self.history
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == WorkflowState::Submitting
    }

    /// Live validity, recomputed from the current form
    pub fn status(&self) -> FormStatus {
        FormStatus::of(&self.form)
    }

    /// Update a text field and drop its stale error. Ignored while busy.
    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.is_busy() || !self.form.set_text(field, value) {
            return false;
        }
        self.errors.remove(field);
        true
    }

    /// Update a checkbox and drop its stale error. Ignored while busy.
    pub fn set_flag(&mut self, field: FormField, value: bool) -> bool {
        if self.is_busy() || !self.form.set_flag(field, value) {
            return false;
        }
        self.errors.remove(field);
        true
    }

    /// Reset the form and its errors. Ignored while busy.
    pub fn clear_form(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.form.reset();
        self.errors.clear();
        true
    }

    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.is_busy() {
            log::warn!("Submit ignored: a registration is already in flight");
            return SubmitStart::Busy;
        }

        self.state = WorkflowState::Validating;
        let errors = validate(&self.form);
        if !errors.is_empty() {
            log::info!("Submit rejected: {} invalid field(s)", errors.len());
            self.errors = errors.clone();
            self.state = WorkflowState::Idle;
            return SubmitStart::Invalid(errors);
        }

        self.errors.clear();
        self.state = WorkflowState::Submitting;
        self.pending = Some(self.form.clone());
        log::info!("Submitting registration for '{}'", self.form.name);
        SubmitStart::Accepted(self.form.clone())
    }

    /// Apply the service's answer. Returns `None` when nothing was in flight.
    pub fn finish_submit(
        &mut self,
        result: Result<RegistrationReceipt, RemoteError>,
        table: &mut TableController,
    ) -> Option<SubmitOutcome> {
        if self.state != WorkflowState::Submitting {
            log::warn!("Registration result arrived with no submission in flight");
            return None;
        }
        let submitted = self.pending.take().unwrap_or_else(|| self.form.clone());
        self.state = WorkflowState::Idle;

        match result {
            Ok(receipt) => {
                let submitted_at = datetime::format_now(&self.timestamp_format);
                let submission = Submission::new(&submitted, receipt.id, submitted_at);
                self.history.record(submission.clone());
                table.append(UserRow::registered(receipt.id, &submitted.name, &submitted.email));

                let notification = Notification::registration_succeeded(&submitted.name, submitted.newsletter);
                self.form.reset();
                self.errors.clear();
                log::info!("Registration {} succeeded for '{}'", receipt.id, submitted.name);
                Some(SubmitOutcome::Succeeded {
                    submission,
                    notification,
                })
            }
            Err(error) => {
                log::warn!("Registration failed: {}", error);
                Some(SubmitOutcome::Failed {
                    error,
                    notification: Notification::registration_failed(),
                })
            }
        }
    }

    /// Validate, call the service and apply its answer in one go.
    pub async fn submit(&mut self, service: &dyn RegistrationService, table: &mut TableController) -> SubmitOutcome {
        let snapshot = match self.begin_submit() {
            SubmitStart::Accepted(snapshot) => snapshot,
            SubmitStart::Invalid(errors) => return SubmitOutcome::Invalid(errors),
            SubmitStart::Busy => return SubmitOutcome::Busy,
        };
        let result = service.register(&snapshot).await;
        self.finish_submit(result, table).unwrap_or(SubmitOutcome::Busy)
    }
}
