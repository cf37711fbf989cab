//! Referral widget state machine
//!
//! Owns the form, the validation errors, the status banner and the modal
//! visibility. All mutation happens on the event-loop thread; asynchronous
//! work (the HTTP call, the auto-close timer) is described by tickets that
//! carry a generation so late results can be recognised and dropped.

use tracing::{debug, error, info, warn};

use crate::error::{AppError, AppResult};

use super::{
    form::{Course, Field, FormData},
    status::SubmitStatus,
    validation::{validate, FormErrors},
};

/// Modal visibility; no intermediate opening/closing states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

/// Whether a request is currently in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting { generation: u64 },
}

/// Coarse view of where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetStage {
    Idle,
    Editing,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Keyboard focus inside the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(Field),
    SubmitButton,
}

impl FocusTarget {
    const ORDER: [FocusTarget; 6] = [
        FocusTarget::Field(Field::ReferrerName),
        FocusTarget::Field(Field::ReferrerEmail),
        FocusTarget::Field(Field::RefereeName),
        FocusTarget::Field(Field::RefereeEmail),
        FocusTarget::Field(Field::Course),
        FocusTarget::SubmitButton,
    ];

    fn position(&self) -> usize {
        match self {
            FocusTarget::Field(field) => field.index(),
            FocusTarget::SubmitButton => Self::ORDER.len() - 1,
        }
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

impl Default for FocusTarget {
    fn default() -> Self {
        FocusTarget::Field(Field::ReferrerName)
    }
}

/// A validated payload ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub generation: u64,
    pub payload: FormData,
}

/// Permission to close the modal once the success delay has elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoCloseTicket {
    pub token: u64,
}

/// What a submit action resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Validation failed; errors are published, nothing is sent
    Invalid { invalid_fields: usize },
    /// The caller must send the payload and report back
    Dispatch(SubmissionTicket),
    /// A request is already in flight
    AlreadySubmitting,
    /// The modal is closed or the widget was disposed
    Inactive,
}

/// The referral widget
#[derive(Debug, Default)]
pub struct ReferralWidget {
    form: FormData,
    errors: FormErrors,
    status: SubmitStatus,
    visibility: ModalVisibility,
    phase: SubmissionPhase,
    focus: FocusTarget,
    submission_seq: u64,
    close_token: u64,
    disposed: bool,
}

impl ReferralWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == ModalVisibility::Open
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting { .. })
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn stage(&self) -> WidgetStage {
        if self.is_submitting() {
            return WidgetStage::Submitting;
        }
        match self.status {
            SubmitStatus::Success(_) => WidgetStage::Succeeded,
            SubmitStatus::Error(_) => WidgetStage::Failed,
            SubmitStatus::None if !self.errors.is_empty() => WidgetStage::Invalid,
            SubmitStatus::None if self.form.is_empty() => WidgetStage::Idle,
            SubmitStatus::None => WidgetStage::Editing,
        }
    }

    /// Open the modal from the call-to-action.
    ///
    /// Stale banners and inline errors are cleared; typed values are kept.
    /// Any pending auto-close from an earlier success is invalidated.
    pub fn open(&mut self) {
        if self.disposed {
            warn!("Ignoring open on a disposed referral widget");
            return;
        }
        self.visibility = ModalVisibility::Open;
        self.status = SubmitStatus::None;
        self.errors.clear();
        self.focus = FocusTarget::default();
        self.close_token += 1;
        debug!("Referral modal opened");
    }

    /// Close the modal from the dismiss control
    pub fn close(&mut self) {
        if self.visibility == ModalVisibility::Closed {
            return;
        }
        self.visibility = ModalVisibility::Closed;
        self.close_token += 1;
        debug!("Referral modal closed");
    }

    /// Tear the widget down; late results are dropped afterwards
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.phase = SubmissionPhase::Idle;
        self.visibility = ModalVisibility::Closed;
        self.close_token += 1;
        debug!("Referral widget disposed");
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn set_focus(&mut self, focus: FocusTarget) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused text field.
    ///
    /// On the course selector a space steps to the next option.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            FocusTarget::Field(Field::Course) => {
                if c == ' ' {
                    self.cycle_course(true);
                }
            }
            FocusTarget::Field(field) => self.form.get_mut(field).push(c),
            FocusTarget::SubmitButton => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FocusTarget::Field(Field::Course) => self.form.course.clear(),
            FocusTarget::Field(field) => {
                self.form.get_mut(field).pop();
            }
            FocusTarget::SubmitButton => {}
        }
    }

    /// Clear the focused field
    pub fn clear_focused(&mut self) {
        if let FocusTarget::Field(field) = self.focus {
            self.form.get_mut(field).clear();
        }
    }

    /// Step the course selector through its options
    pub fn cycle_course(&mut self, forward: bool) {
        let next = Course::cycle(self.form.selected_course(), forward);
        self.form.course = next.map(|course| course.id().to_string()).unwrap_or_default();
    }

    /// Validate and, when clean, hand out a ticket for one request.
    ///
    /// The payload is a snapshot of the form at the moment of the call.
    pub fn begin_submit(&mut self) -> SubmitAction {
        if self.disposed || !self.is_open() {
            return SubmitAction::Inactive;
        }
        if self.is_submitting() {
            debug!("Submit ignored: a referral is already in flight");
            return SubmitAction::AlreadySubmitting;
        }

        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            self.status = SubmitStatus::None;
            let invalid_fields = self.errors.len();
            debug!("Referral form has {} invalid field(s)", invalid_fields);
            return SubmitAction::Invalid { invalid_fields };
        }

        self.submission_seq += 1;
        let generation = self.submission_seq;
        self.phase = SubmissionPhase::Submitting { generation };
        info!("Submitting referral (generation {})", generation);

        SubmitAction::Dispatch(SubmissionTicket {
            generation,
            payload: self.form.clone(),
        })
    }

    /// Apply the result of the request issued for `generation`.
    ///
    /// Returns an auto-close ticket when the modal should close after the
    /// success delay.
    pub fn complete_submit(
        &mut self,
        generation: u64,
        result: AppResult<()>,
    ) -> Option<AutoCloseTicket> {
        if self.disposed || self.phase != (SubmissionPhase::Submitting { generation }) {
            debug!("Dropping stale submission result (generation {})", generation);
            return None;
        }
        self.phase = SubmissionPhase::Idle;

        match result {
            Ok(()) => {
                info!("Referral submitted (generation {})", generation);
                self.status = SubmitStatus::success();
                self.form.clear();
                self.errors.clear();
                self.is_open().then_some(AutoCloseTicket {
                    token: self.close_token,
                })
            }
            Err(e) => {
                log_submission_failure(generation, &e);
                self.status = SubmitStatus::failure();
                None
            }
        }
    }

    /// Close the modal if `ticket` still refers to the current open session.
    pub fn auto_close(&mut self, ticket: AutoCloseTicket) -> bool {
        if self.disposed || !self.is_open() || ticket.token != self.close_token {
            debug!("Auto-close ticket {} no longer applies", ticket.token);
            return false;
        }
        self.close();
        true
    }
}

fn log_submission_failure(generation: u64, e: &AppError) {
    match e {
        AppError::SubmissionRejected { status } => {
            error!(
                "Submission error (generation {}): endpoint returned status {}",
                generation, status
            );
        }
        other => {
            error!(
                "Submission error (generation {}) [{}]: {}",
                generation,
                other.severity().as_str(),
                other
            );
        }
    }
}
