//! Certificate form controller.
//!
//! Owns the form state and its validation errors. Every mutation notifies the
//! subscribed [`FormObserver`]s before returning, so a preview attached as an
//! observer is always current when the next input event is handled.

use serde::{Deserialize, Serialize};

use super::preview::Preview;
use super::traits::{DocumentSink, FormObserver, Generator, Validator};
use super::validation::{validate_issue_date, validate_participant_name, Field, ValidationErrors};
use super::{GeneratorError, PdfRenderEngine, SavedDocument};

/// The two user-editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(default)]
    pub participant_name: String,
    /// ISO calendar date, `YYYY-MM-DD`, or empty when unset
    #[serde(default)]
    pub issue_date: String,
}

impl Validator for FormState {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_participant_name(&self.participant_name, &mut errors);
        validate_issue_date(&self.issue_date, &mut errors);
        errors.into_result()
    }
}

/// Read-only view of the form handed to observers.
#[derive(Debug, Clone, Copy)]
pub struct FormSnapshot<'a> {
    pub state: &'a FormState,
    pub errors: &'a ValidationErrors,
}

impl FormSnapshot<'_> {
    pub fn preview(&self) -> Preview {
        Preview::from_state(self.state)
    }
}

/// Outcome of activating the download action.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Validation failed; errors are on the form, nothing was produced.
    Rejected,
    Saved(SavedDocument),
}

/// The certificate form: state, per-field errors and subscribed observers.
pub struct CertificateForm {
    state: FormState,
    errors: ValidationErrors,
    engine: PdfRenderEngine,
    observers: Vec<Box<dyn FormObserver>>,
}

impl Default for CertificateForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateForm {
    pub fn new() -> Self {
        Self {
            state: FormState::default(),
            errors: ValidationErrors::new(),
            engine: PdfRenderEngine::new(),
            observers: Vec::new(),
        }
    }

    /// Register an observer. It is called once immediately with the current
    /// state, then after every mutation.
    pub fn subscribe(&mut self, mut observer: Box<dyn FormObserver>) {
        observer.on_change(&self.snapshot());
        self.observers.push(observer);
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn snapshot(&self) -> FormSnapshot<'_> {
        FormSnapshot {
            state: &self.state,
            errors: &self.errors,
        }
    }

    pub fn preview(&self) -> Preview {
        Preview::from_state(&self.state)
    }

    /// Store the name verbatim and drop any name error without re-validating.
    pub fn set_participant_name(&mut self, value: impl Into<String>) {
        self.state.participant_name = value.into();
        if self.errors.clear(Field::ParticipantName) {
            log::debug!("Cleared participant name error on edit");
        }
        self.notify();
    }

    /// Store the date and drop any date error without re-validating.
    pub fn set_issue_date(&mut self, value: impl Into<String>) {
        self.state.issue_date = value.into();
        if self.errors.clear(Field::IssueDate) {
            log::debug!("Cleared issue date error on edit");
        }
        self.notify();
    }

    /// Recompute all errors from scratch. Returns true when the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = match Validator::validate(&self.state) {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        self.notify();
        self.errors.is_empty()
    }

    /// Validate, then render the certificate and hand it to `sink`.
    ///
    /// Returns [`Submission::Rejected`] without touching the sink when
    /// validation fails.
    pub fn generate_document(
        &mut self,
        sink: &mut dyn DocumentSink,
    ) -> Result<Submission, GeneratorError> {
        if !self.validate() {
            log::warn!(
                "Certificate not generated, {} field(s) invalid",
                self.errors.len()
            );
            return Ok(Submission::Rejected);
        }

        let generated = self.engine.generate(&self.state)?;
        let saved = sink.save(&generated.filename, &generated.pdf)?;
        log::info!("Saved certificate {} ({} bytes)", saved.filename, saved.size);
        Ok(Submission::Saved(saved))
    }

    fn notify(&mut self) {
        let snapshot = FormSnapshot {
            state: &self.state,
            errors: &self.errors,
        };
        for observer in self.observers.iter_mut() {
            observer.on_change(&snapshot);
        }
    }
}
