//! Run pipeline - fetch, coalesce, format, splice, publish
//!
//! This is the only place where a fatal condition becomes a failed run. Every
//! collaborator is reached through a port, so the whole run can be driven with
//! in-memory fakes.

use serde::Serialize;
use thiserror::Error;

use super::formatter::Formatter;
use super::normalizer::coalesce;
use super::splicer::{SpliceError, splice};
use crate::core::models::{Event, Markers};
use crate::core::ports::{
    DocumentStore, EventFeed, FeedError, PublishError, PublishOutcome, Publisher, StoreError,
};

/// Number of feed pages requested on every run
pub const PAGES: u32 = 3;

/// Events requested per page
pub const PER_PAGE: u32 = 100;

/// Below this many lines the run is flagged as low activity
pub const LOW_ACTIVITY_THRESHOLD: usize = 5;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A feed page could not be fetched
    #[error("failed to fetch page {page} of {username}'s activity: {source}")]
    Feed {
        /// Account whose feed was read
        username: String,
        /// Page that failed
        page: u32,
        /// Underlying error
        #[source]
        source: FeedError,
    },

    /// The document could not be read or written
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The managed region could not be located
    #[error("{0}. Exiting!")]
    Splice(#[from] SpliceError),

    /// Nothing survived filtering
    #[error("No events found")]
    NoEvents,

    /// Commit or push failed
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// How far a run goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Write the document, commit and push
    #[default]
    Publish,
    /// Write the document only
    WriteOnly,
    /// Only compute the lines
    Preview,
}

/// Per-run settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Account whose activity is reported
    pub username: String,
    /// Region markers in the document
    pub markers: Markers,
    /// How far the run goes
    pub mode: Mode,
    /// Line renderer
    pub formatter: Formatter,
}

impl Settings {
    /// Default settings for `username`
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            formatter: Formatter::new(&username),
            username,
            markers: Markers::default(),
            mode: Mode::default(),
        }
    }
}

/// Collaborators used by a run
#[derive(Clone, Copy)]
pub struct RunContext<'a> {
    /// Activity source
    pub feed: &'a dyn EventFeed,
    /// README access
    pub store: &'a dyn DocumentStore,
    /// Version control
    pub publisher: &'a dyn Publisher,
}

impl std::fmt::Debug for RunContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunContext")
            .field("document", &self.store.path())
            .finish_non_exhaustive()
    }
}

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Raw events received across all pages
    pub fetched: usize,
    /// Events left after coalescing pushes
    pub coalesced: usize,
    /// Rendered lines, newest first
    pub lines: Vec<String>,
    /// Fewer than [`LOW_ACTIVITY_THRESHOLD`] lines were rendered
    pub low_activity: bool,
    /// Whether the document was rewritten
    pub document_written: bool,
    /// Publish result, when publishing was requested
    pub published: Option<PublishOutcome>,
}

/// Fetch pages `1..=PAGES` in order and concatenate them
///
/// Every page is requested even when an earlier one came back short.
pub fn fetch_all(feed: &dyn EventFeed, username: &str) -> Result<Vec<Event>, PipelineError> {
    log::debug!("Getting activity for {username}");

    let mut events = Vec::new();
    for page in 1..=PAGES {
        let batch = feed
            .fetch_page(username, page, PER_PAGE)
            .map_err(|source| PipelineError::Feed {
                username: username.to_string(),
                page,
                source,
            })?;
        events.extend(batch);
    }

    log::debug!("Activity for {username}, {} events found.", events.len());
    Ok(events)
}

/// Format events, dropping the ones that produce no output
#[must_use]
pub fn render_lines(events: &[Event], formatter: &Formatter) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| {
            let line = formatter.format(event);
            if line.is_none() {
                log::debug!("Skipping {} in {}", event.kind.name(), event.repo);
            }
            line
        })
        .collect()
}

/// Run the whole pipeline once
pub fn run(ctx: &RunContext<'_>, settings: &Settings) -> Result<RunReport, PipelineError> {
    let events = fetch_all(ctx.feed, &settings.username)?;
    let fetched = events.len();
    let events = coalesce(events);
    let coalesced = events.len();
    let lines = render_lines(&events, &settings.formatter);

    let mut report = RunReport {
        fetched,
        coalesced,
        low_activity: lines.len() < LOW_ACTIVITY_THRESHOLD,
        lines,
        document_written: false,
        published: None,
    };

    if settings.mode == Mode::Preview {
        check_activity(&report)?;
        return Ok(report);
    }

    let document = ctx.store.read()?;
    let updated = splice(&document, &settings.markers, &report.lines)?;
    check_activity(&report)?;

    ctx.store.write(&updated)?;
    report.document_written = true;
    log::info!("Wrote {} activity lines to {}", report.lines.len(), ctx.store.path().display());

    if settings.mode == Mode::Publish {
        let outcome = ctx.publisher.publish(ctx.store.path()).inspect_err(|e| {
            log::debug!("Something went wrong while publishing: {e}");
        })?;
        report.published = Some(outcome);
    }

    Ok(report)
}

fn check_activity(report: &RunReport) -> Result<(), PipelineError> {
    if report.lines.is_empty() {
        return Err(PipelineError::NoEvents);
    }
    if report.low_activity {
        log::info!("Found less than {LOW_ACTIVITY_THRESHOLD} activities");
    }
    Ok(())
}
