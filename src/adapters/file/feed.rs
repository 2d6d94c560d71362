//! Saved feed replay
//!
//! Reads a JSON array of raw events (as returned by the events API) and serves
//! it back in pages, so runs can be reproduced offline.

use std::fs;
use std::path::PathBuf;

use crate::core::models::{Event, RawEvent};
use crate::core::ports::{EventFeed, FeedError};

/// Event feed backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileEventFeed {
    path: PathBuf,
}

impl FileEventFeed {
    /// Feed replaying the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<RawEvent>, FeedError> {
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| FeedError::Decode(e.to_string()))
    }
}

impl EventFeed for FileEventFeed {
    fn fetch_page(&self, username: &str, page: u32, per_page: u32) -> Result<Vec<Event>, FeedError> {
        log::debug!("Replaying page {page} of {username}'s activity from {}", self.path.display());

        let per_page = per_page.max(1) as usize;
        let skip = (page.max(1) as usize - 1) * per_page;

        Ok(self.load()?.into_iter().skip(skip).take(per_page).map(Event::from_raw).collect())
    }
}
