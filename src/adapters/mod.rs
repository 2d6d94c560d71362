//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github/` - Events API feed over HTTPS
//! - `file/` - README storage and saved-feed replay
//! - `git/` - Commit and push through the `git` command line

pub mod file;
pub mod git;
pub mod github;
