//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use activity_readme::core::models::{Document, Event};
use activity_readme::core::ports::{
    DocumentStore, EventFeed, FeedError, PublishError, PublishOutcome, Publisher, StoreError,
};

/// Event feed serving fixed pages and recording what was requested
pub struct MockEventFeed {
    pages: Vec<Vec<Event>>,
    requests: RefCell<Vec<(String, u32, u32)>>,
    fail_on_page: Option<u32>,
}

impl MockEventFeed {
    pub fn new(pages: Vec<Vec<Event>>) -> Self {
        Self {
            pages,
            requests: RefCell::new(Vec::new()),
            fail_on_page: None,
        }
    }

    /// Single page feed
    pub fn with_events(events: Vec<Event>) -> Self {
        Self::new(vec![events])
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    pub fn requests(&self) -> Vec<(String, u32, u32)> {
        self.requests.borrow().clone()
    }
}

impl EventFeed for MockEventFeed {
    fn fetch_page(&self, username: &str, page: u32, per_page: u32) -> Result<Vec<Event>, FeedError> {
        self.requests.borrow_mut().push((username.to_string(), page, per_page));
        if self.fail_on_page == Some(page) {
            return Err(FeedError::Status { status: 502, page });
        }
        Ok(self.pages.get(page as usize - 1).cloned().unwrap_or_default())
    }
}

/// Document store keeping the document in memory
pub struct MemoryDocumentStore {
    path: PathBuf,
    content: RefCell<String>,
    writes: Cell<usize>,
}

impl MemoryDocumentStore {
    pub fn new(content: &str) -> Self {
        Self {
            path: PathBuf::from("README.md"),
            content: RefCell::new(content.to_string()),
            writes: Cell::new(0),
        }
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Document, StoreError> {
        Ok(Document::parse(&self.content.borrow()))
    }

    fn write(&self, document: &Document) -> Result<(), StoreError> {
        *self.content.borrow_mut() = document.render();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Publisher recording calls and returning a canned result
pub struct RecordingPublisher {
    calls: RefCell<Vec<PathBuf>>,
    fail_with: Option<i32>,
    outcome: PublishOutcome,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_with: None,
            outcome: PublishOutcome::Committed,
        }
    }

    pub fn failing(code: i32) -> Self {
        Self {
            fail_with: Some(code),
            ..Self::new()
        }
    }

    pub fn unchanged() -> Self {
        Self {
            outcome: PublishOutcome::NothingToCommit,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl Publisher for RecordingPublisher {
    fn publish(&self, path: &Path) -> Result<PublishOutcome, PublishError> {
        self.calls.borrow_mut().push(path.to_path_buf());
        match self.fail_with {
            Some(code) => Err(PublishError::ExitFailure {
                step: "git push".to_string(),
                code,
            }),
            None => Ok(self.outcome),
        }
    }
}
