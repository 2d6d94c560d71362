//! Publisher port
//!
//! Defines the interface for persisting the updated document to version control.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// How a successful publish ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishOutcome {
    /// A new commit was created and pushed
    Committed,
    /// The document was unchanged, nothing new was committed
    NothingToCommit,
}

/// Errors raised while publishing
#[derive(Debug, Error)]
pub enum PublishError {
    /// A step exited with a non-zero status
    #[error("`{step}` failed: invalid status code: {code}")]
    ExitFailure {
        /// The command that failed
        step: String,
        /// Its exit code (-1 when killed by a signal)
        code: i32,
    },

    /// A step could not be started at all
    #[error("cannot run `{step}`: {source}")]
    Spawn {
        /// The command that could not be started
        step: String,
        /// Underlying error
        source: std::io::Error,
    },
}

impl PublishError {
    /// Exit code attached to the failure, if the step ran
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ExitFailure { code, .. } => Some(*code),
            Self::Spawn { .. } => None,
        }
    }
}

/// Persists a written document (stage, commit, push)
pub trait Publisher {
    /// Publish the document at `path`
    fn publish(&self, path: &Path) -> Result<PublishOutcome, PublishError>;
}
