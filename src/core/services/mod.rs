//! Business logic services
//!
//! Pure logic over domain models, plus the run pipeline that drives it
//! through the port traits.
//!
//! - [`normalizer`] - Coalesce adjacent pushes to the same repository
//! - [`formatter`] - Render events as activity lines
//! - [`splicer`] - Replace the README's managed region
//! - [`pipeline`] - Fetch, format, splice and publish in one run

pub mod formatter;
pub mod normalizer;
pub mod pipeline;
pub mod splicer;

pub use formatter::{Formatter, RefLink, housekeeping_repo};
pub use normalizer::coalesce;
pub use pipeline::{Mode, PipelineError, RunContext, RunReport, Settings, run};
pub use splicer::{SpliceError, splice};
