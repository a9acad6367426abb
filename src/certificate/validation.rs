//! Input validation for the certificate form.
//!
//! Errors are keyed by [`Field`], so a field can only ever carry one message
//! and the set of keys is closed.

use std::collections::BTreeMap;
use std::fmt;

/// The two user-editable fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ParticipantName,
    IssueDate,
}

impl Field {
    /// Stable key, matches the serialized field name of `FormState`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ParticipantName => "participant_name",
            Self::IssueDate => "issue_date",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ParticipantName => "Participant Name",
            Self::IssueDate => "Issue Date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub const MISSING_NAME_MESSAGE: &str = "please enter a name.";
pub const MISSING_DATE_MESSAGE: &str = "please select an issue date.";

/// One invalid field and the message shown inline next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Participant name left empty or whitespace-only.
    pub fn missing_name() -> Self {
        Self::new(Field::ParticipantName, MISSING_NAME_MESSAGE)
    }

    /// No issue date selected.
    pub fn missing_date() -> Self {
        Self::new(Field::IssueDate, MISSING_DATE_MESSAGE)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} *: {}", self.field.label(), self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Per-field validation errors. At most one entry per [`Field`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Record an error, replacing any earlier one for the same field.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.insert(error.field, error);
    }

    /// Drop the error for `field`. Returns whether one was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    /// Inline message for `field`, if it is currently invalid.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The form's inline errors as plain lines, in field order, for output
    /// where the inputs themselves are not on screen.
    pub fn to_report(&self) -> String {
        self.errors
            .values()
            .map(ValidationError::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Ok if no errors, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_report())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// Validation functions
// ============================================================================

/// Name must be non-empty after trimming surrounding whitespace.
pub fn validate_participant_name(value: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::missing_name());
    }
}

/// Date must be set. Only presence is checked; the date input control is
/// responsible for producing a well-formed value.
pub fn validate_issue_date(value: &str, errors: &mut ValidationErrors) {
    if value.is_empty() {
        errors.add(ValidationError::missing_date());
    }
}
