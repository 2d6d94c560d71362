//! Domain models for activity-readme
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Event`] - One decoded entry of the activity feed
//! - [`EventKind`] - The closed set of event kinds and their payloads
//! - [`Document`] - A README split into lines
//! - [`Markers`] - The sentinel lines delimiting the managed region

mod document;
mod event;

pub use document::{DEFAULT_END_MARKER, DEFAULT_START_MARKER, Document, Markers};
pub use event::{Event, EventKind, IssueRef, PullRequestRef, RawEvent, RawRepo, RefType};
