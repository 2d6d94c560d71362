//! Command implementations

mod run;

pub use run::{RunOptions, run};
