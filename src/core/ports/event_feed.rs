//! Event feed port
//!
//! Defines the interface for reading a user's paged activity feed.

use thiserror::Error;

use crate::core::models::Event;

/// Errors raised while fetching a page of events
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport-level failure (DNS, TLS, connection reset...)
    #[error("request failed: {0}")]
    Transport(String),

    /// The feed answered with a non-success status
    #[error("feed returned HTTP {status} for page {page}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested page
        page: u32,
    },

    /// The response body was not a list of events
    #[error("invalid feed response: {0}")]
    Decode(String),

    /// Local feed file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Paged source of activity events
///
/// Pages are 1-based and returned newest first; a page past the end of the
/// feed is simply empty.
pub trait EventFeed {
    /// Fetch one page of events for `username`
    fn fetch_page(&self, username: &str, page: u32, per_page: u32) -> Result<Vec<Event>, FeedError>;
}
