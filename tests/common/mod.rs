//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Event builders and sample documents
//! - `mocks.rs` - In-memory implementations of the port traits

pub mod mocks;
