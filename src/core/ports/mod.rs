//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the activity pipeline
//! and external systems (the event feed, the filesystem, git).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The pipeline depends only on these traits, never on concrete
//! implementations, so it can be exercised end to end with in-memory
//! feeds, stores and publishers.

mod document_store;
mod event_feed;
mod publisher;

pub use document_store::{DocumentStore, StoreError};
pub use event_feed::{EventFeed, FeedError};
pub use publisher::{PublishError, PublishOutcome, Publisher};
