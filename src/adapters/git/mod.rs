//! Git integration adapter
//!
//! Implements `Publisher` by shelling out to the `git` command line:
//! set the committer identity, stage the document, commit, push. Steps run
//! strictly in order and the first failure aborts the rest.

use std::path::Path;
use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::core::ports::{PublishError, PublishOutcome, Publisher};

/// Commit message used for every update
pub const DEFAULT_COMMIT_MESSAGE: &str = "[Bot] Update README with the recent activity";

/// Default committer email
pub const DEFAULT_EMAIL: &str = "41898282+github-actions[bot]@users.noreply.github.com";

/// Default committer name
pub const DEFAULT_NAME: &str = "github-actions[bot]";

const NOTHING_TO_COMMIT: &str = "nothing to commit";

/// Committer identity written to git config before committing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// `user.email`
    pub email: String,
    /// `user.name`
    pub name: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            name: DEFAULT_NAME.to_string(),
        }
    }
}

/// Git-based publisher
#[derive(Debug, Clone)]
pub struct GitPublisher {
    identity: Identity,
    message: String,
    global_identity: bool,
}

impl Default for GitPublisher {
    fn default() -> Self {
        Self::new(Identity::default())
    }
}

impl GitPublisher {
    /// Publisher committing as `identity`, writing it to the global git config
    #[must_use]
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            message: DEFAULT_COMMIT_MESSAGE.to_string(),
            global_identity: true,
        }
    }

    /// Use a different commit message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Write the identity to the repository's own config instead of `--global`
    #[must_use]
    pub const fn with_global_identity(mut self, global: bool) -> Self {
        self.global_identity = global;
        self
    }

    /// The git invocations (without the leading `git`) for publishing `file`
    #[must_use]
    pub fn steps(&self, file: &str) -> Vec<Vec<String>> {
        let config = |key: &str, value: &str| {
            let mut args = vec!["config".to_string()];
            if self.global_identity {
                args.push("--global".to_string());
            }
            args.push(key.to_string());
            args.push(value.to_string());
            args
        };

        vec![
            config("user.email", &self.identity.email),
            config("user.name", &self.identity.name),
            vec!["add".to_string(), file.to_string()],
            vec!["commit".to_string(), "-m".to_string(), self.message.clone()],
            vec!["push".to_string()],
        ]
    }
}

/// Run one git step in `workdir`
///
/// Returns whether git reported "nothing to commit". A non-zero exit is only
/// tolerated when stdout says so.
fn run_step(workdir: &Path, args: &[String]) -> Result<bool, PublishError> {
    let step = format!("git {}", args.join(" "));
    log::debug!("Running {step}");

    let output = Command::new("git")
        .current_dir(workdir)
        .args(args)
        .output()
        .map_err(|source| PublishError::Spawn {
            step: step.clone(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let nothing_to_commit = stdout.contains(NOTHING_TO_COMMIT);

    if !output.status.success() && !nothing_to_commit {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::debug!("{step} stderr: {}", stderr.trim());
        return Err(PublishError::ExitFailure {
            step,
            code: output.status.code().unwrap_or(-1),
        });
    }

    Ok(nothing_to_commit)
}

impl Publisher for GitPublisher {
    fn publish(&self, path: &Path) -> Result<PublishOutcome, PublishError> {
        let workdir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let file = path.file_name().map_or_else(
            || path.to_string_lossy().to_string(),
            |n| n.to_string_lossy().to_string(),
        );

        let mut outcome = PublishOutcome::Committed;
        for args in self.steps(&file) {
            if run_step(workdir, &args)? {
                outcome = PublishOutcome::NothingToCommit;
            }
        }

        match outcome {
            PublishOutcome::Committed => log::info!("Committed and pushed {file}"),
            PublishOutcome::NothingToCommit => log::info!("{file} unchanged, nothing to commit"),
        }
        Ok(outcome)
    }
}
