//! Document store port
//!
//! Defines the interface for loading and saving the README being updated.

use std::path::Path;

use thiserror::Error;

use crate::core::models::Document;

/// Errors raised while reading or writing the document
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        /// Document path
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// The document could not be written
    #[error("cannot write {path}: {source}")]
    Write {
        /// Document path
        path: String,
        /// Underlying error
        source: std::io::Error,
    },
}

/// Whole-document read/write access
pub trait DocumentStore {
    /// Location of the document, handed to the publisher
    fn path(&self) -> &Path;

    /// Read the full document
    fn read(&self) -> Result<Document, StoreError>;

    /// Replace the full document
    fn write(&self, document: &Document) -> Result<(), StoreError>;
}
