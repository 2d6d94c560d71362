//! Run the activity pipeline (full run, write-only or preview)

use std::path::PathBuf;

use anyhow::Context;

use activity_readme::adapters::file::{FileDocumentStore, FileEventFeed};
use activity_readme::adapters::github::GitHubFeed;
use activity_readme::config::Config;
use activity_readme::core::ports::EventFeed;
use activity_readme::core::services::{Mode, RunContext, Settings, pipeline};
use activity_readme::output::{OutputMode, RunSummary};

/// Options shared by every pipeline command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Username override
    pub username: Option<String>,
    /// Feed token
    pub token: Option<String>,
    /// README override
    pub readme: Option<PathBuf>,
    /// Saved feed to replay
    pub events_file: Option<PathBuf>,
}

/// Run the pipeline in `mode` and report the outcome
pub fn run(options: &RunOptions, mode: Mode, output_mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load(options.config.as_deref())?;
    let username = config.resolve_username(options.username.as_deref())?;
    let readme = options.readme.clone().unwrap_or_else(|| config.readme.clone());

    let feed: Box<dyn EventFeed> = match &options.events_file {
        Some(path) => Box::new(FileEventFeed::new(path)),
        None => Box::new(
            GitHubFeed::new(config.api_url.clone(), options.token.clone())
                .context("cannot create GitHub client")?,
        ),
    };
    let store = FileDocumentStore::new(&readme);
    let publisher = config.publisher();

    let settings = Settings {
        formatter: config.formatter(&username),
        username: username.clone(),
        markers: config.markers.clone(),
        mode,
    };
    let ctx = RunContext {
        feed: feed.as_ref(),
        store: &store,
        publisher: &publisher,
    };

    let report = pipeline::run(&ctx, &settings)?;

    RunSummary {
        username,
        mode,
        readme: readme.display().to_string(),
        report,
    }
    .render(output_mode);

    Ok(())
}
