//! File-based adapters
//!
//! - [`FileDocumentStore`] - README read and written as a whole UTF-8 file
//! - [`FileEventFeed`] - Replays a saved JSON feed from disk

mod feed;
mod store;

pub use feed::FileEventFeed;
pub use store::FileDocumentStore;
