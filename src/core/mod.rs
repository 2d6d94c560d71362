//! Core domain logic for activity-readme
//!
//! This module contains the activity pipeline with no direct I/O.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Event, EventKind, Document, Markers)
//! - `services/` - Coalescing, formatting, splicing and the run pipeline
//! - `ports/` - Trait definitions for the feed, the document store and git

pub mod models;
pub mod ports;
pub mod services;
