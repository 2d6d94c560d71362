//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, RunOptions};
use activity_readme::core::services::Mode;
use activity_readme::output::{OperationResult, OutputMode};

/// activity-readme - Show your recent GitHub activity in your README
#[derive(Parser, Debug)]
#[command(
    name = "activity-readme",
    version,
    about = "Show your recent GitHub activity in your README",
    long_about = "Fetch a user's recent public events and rewrite the README section between\n\
                  <!--START_SECTION:activity--> and <!--END_SECTION:activity-->.\n\n\
                  Without a subcommand this performs a full run: write, commit and push."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./activity-readme.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Account whose activity is shown
    #[arg(short, long, global = true, env = "INPUT_USERNAME")]
    pub username: Option<String>,

    /// API token used to read the event feed
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// README to update (overrides the config file)
    #[arg(short, long, global = true)]
    pub readme: Option<PathBuf>,

    /// Replay events from a saved JSON feed instead of calling the API
    #[arg(long, global = true)]
    pub events_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Update the README, then commit and push it
    Run {
        /// Write the README but do not commit or push
        #[arg(long)]
        no_publish: bool,
    },

    /// Print the activity lines without touching the README
    Preview,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let options = RunOptions {
        config: cli.config,
        username: cli.username,
        token: cli.token,
        readme: cli.readme,
        events_file: cli.events_file,
    };

    let result = match cli.command {
        Some(Command::Run { no_publish: true }) => {
            commands::run(&options, Mode::WriteOnly, output_mode)
        },
        Some(Command::Run { no_publish: false }) | None => {
            commands::run(&options, Mode::Publish, output_mode)
        },
        Some(Command::Preview) => commands::run(&options, Mode::Preview, output_mode),
        Some(Command::Version) => {
            OperationResult::success(format!("activity-readme v{}", activity_readme::VERSION))
                .render(output_mode);
            Ok(())
        },
    };

    if let Err(e) = &result {
        log::debug!("Run failed: {e:?}");
        OperationResult::failure(format!("{e:#}")).render(output_mode);
    }
    result
}
