//! README document and its managed region markers

use serde::{Deserialize, Serialize};

/// Default marker opening the managed region
pub const DEFAULT_START_MARKER: &str = "<!--START_SECTION:activity-->";

/// Default marker closing the managed region
pub const DEFAULT_END_MARKER: &str = "<!--END_SECTION:activity-->";

/// A text document modeled as its `\n`-separated lines
///
/// Parsing and rendering round-trip byte for byte, including a trailing
/// newline (which shows up as a final empty line).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split text into lines on `\n`
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(String::from).collect(),
        }
    }

    /// Build a document from owned lines
    #[must_use]
    pub const fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// The document's lines
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join lines back into text
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Index of the first line equal to `marker` once both are trimmed, at or after `from`
    ///
    /// A blank marker never matches.
    #[must_use]
    pub fn find_marker(&self, marker: &str, from: usize) -> Option<usize> {
        let marker = marker.trim();
        if marker.is_empty() {
            return None;
        }
        self.lines
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, line)| line.trim() == marker)
            .map(|(idx, _)| idx)
    }
}

/// The pair of sentinel lines delimiting the managed region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Line opening the region
    pub start: String,
    /// Line closing the region
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}
