//! Managed region splicing
//!
//! Replaces everything between the start and end markers of a [`Document`]
//! with freshly formatted lines. Lines past [`COLLAPSE_AFTER`] are tucked into
//! a `<details>` block so the README stays short.

use thiserror::Error;

use crate::core::models::{Document, Markers};

/// Number of lines shown before the rest is collapsed
pub const COLLAPSE_AFTER: usize = 10;

/// Summary of the collapsible block
pub const SHOW_MORE_SUMMARY: &str = "<details><summary>⚡ Show more activity</summary>";

/// Errors that can occur when splicing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    /// No line matches the start marker
    #[error("Couldn't find the {0} comment")]
    StartMarkerNotFound(String),

    /// No line after the start marker matches the end marker
    #[error("Couldn't find the {0} comment after the start marker")]
    EndMarkerNotFound(String),
}

/// Replace the managed region of `document` with `lines`
///
/// Every inserted line gets two trailing spaces (a markdown hard break). The
/// end marker is always re-emitted after the last line; the `<details>` block
/// is opened before line 11 and closed only when it was opened. Lines outside
/// the markers are left exactly as they were.
pub fn splice(document: &Document, markers: &Markers, lines: &[String]) -> Result<Document, SpliceError> {
    let start = document
        .find_marker(&markers.start, 0)
        .ok_or_else(|| SpliceError::StartMarkerNotFound(markers.start.clone()))?;
    let end = document
        .find_marker(&markers.end, start + 1)
        .ok_or_else(|| SpliceError::EndMarkerNotFound(markers.end.clone()))?;

    let existing = document.lines();
    let mut out = Vec::with_capacity(existing.len() + lines.len() + 5);
    out.extend_from_slice(&existing[..=start]);
    out.extend(region(lines));
    out.push(markers.end.trim().to_string());
    out.extend_from_slice(&existing[end + 1..]);

    Ok(Document::from_lines(out))
}

/// Lines making up the inside of the managed region
fn region(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + 5);
    for (idx, line) in lines.iter().enumerate() {
        if idx == COLLAPSE_AFTER {
            out.push(String::new());
            out.push(SHOW_MORE_SUMMARY.to_string());
            out.push(String::new());
        }
        out.push(format!("{line}  "));
    }
    if lines.len() > COLLAPSE_AFTER {
        out.push(String::new());
        out.push("</details>".to_string());
    }
    out
}
