//! Save targets for rendered certificates.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::common::disk_filename;
use super::traits::DocumentSink;
use super::{GeneratorError, SavedDocument};

/// Writes certificates into a directory.
///
/// The logical filename is interpolated from user input, so it is passed
/// through [`disk_filename`] before touching the filesystem. Names that need
/// no change are written as-is.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    overwrite: bool,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overwrite: true,
        }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), GeneratorError> {
        let mut options = OpenOptions::new();
        options.write(true);
        if self.overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = options.open(path).map_err(|source| {
            if source.kind() == ErrorKind::AlreadyExists {
                GeneratorError::AlreadyExists(path.to_path_buf())
            } else {
                GeneratorError::WriteFile {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        file.write_all(bytes)
            .map_err(|source| GeneratorError::WriteFile {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl DocumentSink for FileSink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<SavedDocument, GeneratorError> {
        let on_disk = disk_filename(filename)
            .ok_or_else(|| GeneratorError::EmptyFilename(filename.to_string()))?;
        if on_disk != filename {
            log::warn!("Filename {:?} rewritten to {:?} for saving", filename, on_disk);
        }

        fs::create_dir_all(&self.dir).map_err(|source| GeneratorError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(&on_disk);
        if let Err(e) = self.write(&path, bytes) {
            log::error!("Failed to save certificate: {}", e);
            return Err(e);
        }

        Ok(SavedDocument {
            filename: filename.to_string(),
            path: Some(path),
            size: bytes.len(),
        })
    }
}

/// Keeps certificates in memory, in save order.
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[(String, Vec<u8>)] {
        &self.documents
    }

    pub fn last(&self) -> Option<&(String, Vec<u8>)> {
        self.documents.last()
    }
}

impl DocumentSink for MemorySink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<SavedDocument, GeneratorError> {
        self.documents.push((filename.to_string(), bytes.to_vec()));
        Ok(SavedDocument {
            filename: filename.to_string(),
            path: None,
            size: bytes.len(),
        })
    }
}
