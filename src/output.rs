//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::ports::PublishOutcome;
use crate::core::services::{Mode, RunReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a pipeline run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Account whose activity was rendered
    pub username: String,
    /// How far the run went
    pub mode: Mode,
    /// README path
    pub readme: String,
    /// What the pipeline did
    #[serde(flatten)]
    pub report: RunReport,
}

/// Generic operation result for simple commands and failures
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl RunSummary {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let report = &self.report;
        println!(
            "Activity for {}: {} events fetched, {} after merging pushes, {} lines\n",
            self.username.bold(),
            report.fetched,
            report.coalesced,
            report.lines.len()
        );

        if self.mode == Mode::Preview {
            for line in &report.lines {
                println!("{line}");
            }
            println!();
        }

        if report.low_activity {
            println!("{} found less than 5 activities", "note:".yellow());
        }

        if report.document_written {
            println!("{} {}", "Wrote".green(), self.readme);
        }

        match report.published {
            Some(PublishOutcome::Committed) => println!("{}", "Committed and pushed".green()),
            Some(PublishOutcome::NothingToCommit) => println!("Nothing to commit"),
            None => {},
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// A successful operation
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed operation
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.success {
                    println!("{}", self.message);
                } else {
                    eprintln!("{} {}", "error:".red().bold(), self.message);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
