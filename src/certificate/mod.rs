//! Certificate module - form state, validation, layout and PDF output.
//!
//! - `form` - the form controller (state, errors, observers)
//! - `layout` - page composition into drawing primitives
//! - `engine` - PDF rendering of those primitives via `lopdf`
//! - `sink` - save targets for the rendered bytes

pub mod common;
pub mod engine;
pub mod form;
pub mod layout;
pub mod metrics;
pub mod preview;
pub mod sink;
pub mod traits;
pub mod validation;

pub use engine::PdfRenderEngine;
pub use form::{CertificateForm, FormSnapshot, FormState, Submission};
pub use layout::CertificateDocument;
pub use preview::Preview;
pub use sink::{FileSink, MemorySink};
pub use traits::{DocumentSink, FormObserver, Generator, Validator};
pub use validation::{Field, ValidationError, ValidationErrors};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing or saving a certificate.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to encode page content: {0}")]
    EncodeContent(String),
    #[error("failed to serialize PDF: {0}")]
    WritePdf(String),
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("refusing to overwrite existing file {0}")]
    AlreadyExists(PathBuf),
    #[error("filename {0:?} has nothing left after sanitizing")]
    EmptyFilename(String),
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
}

/// Where a generated document ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedDocument {
    /// Logical filename, `Certificate_<name>_<date>.pdf`
    pub filename: String,
    /// On-disk location, if the sink writes to disk
    pub path: Option<PathBuf>,
    pub size: usize,
}
