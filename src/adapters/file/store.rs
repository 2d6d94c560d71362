//! Whole-file document storage

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::Document;
use crate::core::ports::{DocumentStore, StoreError};

/// Reads and writes a document as one UTF-8 file
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    path: PathBuf,
}

impl FileDocumentStore {
    /// Store backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentStore for FileDocumentStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Document, StoreError> {
        let text = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(Document::parse(&text))
    }

    fn write(&self, document: &Document) -> Result<(), StoreError> {
        fs::write(&self.path, document.render()).map_err(|source| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}
