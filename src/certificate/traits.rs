//! Traits at the seams of the certificate form.

use super::form::FormSnapshot;
use super::validation::ValidationErrors;
use super::{GeneratedDocument, GeneratorError, SavedDocument};

/// Trait for validating request objects.
pub trait Validator {
    /// Validate the state of the object.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Trait for document generators.
pub trait Generator<Req> {
    /// Generate a document from the request.
    fn generate(&self, request: Req) -> Result<GeneratedDocument, GeneratorError>;
}

/// Receives the form after every mutation of its state or errors.
pub trait FormObserver {
    fn on_change(&mut self, snapshot: &FormSnapshot<'_>);
}

/// Save target for a rendered document (the "download").
pub trait DocumentSink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<SavedDocument, GeneratorError>;
}
