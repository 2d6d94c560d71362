//! Configuration management
//!
//! Settings live in an optional `activity-readme.toml` next to the README
//! (or wherever `--config` points). Every field has a default, so a run
//! only strictly needs a username, which usually comes from the CLI or the
//! environment.
//!
//! ```toml
//! username = "octocat"
//! readme = "README.md"
//! icon_base_url = "https://example.com/icons"
//!
//! [markers]
//! start = "<!--START_SECTION:activity-->"
//! end = "<!--END_SECTION:activity-->"
//!
//! [commit]
//! email = "bot@example.com"
//! name = "Activity Bot"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::git::{DEFAULT_COMMIT_MESSAGE, GitPublisher, Identity};
use crate::adapters::github::DEFAULT_API_URL;
use crate::core::models::Markers;
use crate::core::services::Formatter;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "activity-readme.toml";

/// Letters, digits and single inner hyphens, at most 39 characters
static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:-?[A-Za-z0-9])*$").expect("valid username regex"));

const MAX_USERNAME_LEN: usize = 39;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Config path
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config path
        path: String,
        /// Underlying error
        source: toml::de::Error,
    },

    /// No username given anywhere
    #[error("no username given (use --username, INPUT_USERNAME or `username` in {CONFIG_FILE})")]
    MissingUsername,

    /// Username does not look like an account name
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    /// Markers are blank or identical
    #[error("invalid markers: {0}")]
    InvalidMarkers(&'static str),
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Account whose activity is reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// README to update
    #[serde(default = "default_readme")]
    pub readme: PathBuf,
    /// REST API root
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Render icons as image badges from this base URL instead of emoji
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_base_url: Option<String>,
    /// Managed region markers
    #[serde(default)]
    pub markers: Markers,
    /// Commit settings
    #[serde(default)]
    pub commit: CommitConfig,
}

/// How updates are committed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitConfig {
    /// Committer email
    #[serde(default = "default_email")]
    pub email: String,
    /// Committer name
    #[serde(default = "default_name")]
    pub name: String,
    /// Commit message
    #[serde(default = "default_message")]
    pub message: String,
    /// Write the identity with `git config --global`
    #[serde(default = "default_global_identity")]
    pub global_identity: bool,
}

fn default_readme() -> PathBuf {
    PathBuf::from("README.md")
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_email() -> String {
    Identity::default().email
}

fn default_name() -> String {
    Identity::default().name
}

fn default_message() -> String {
    DEFAULT_COMMIT_MESSAGE.to_string()
}

const fn default_global_identity() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: None,
            readme: default_readme(),
            api_url: default_api_url(),
            icon_base_url: None,
            markers: Markers::default(),
            commit: CommitConfig::default(),
        }
    }
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            name: default_name(),
            message: default_message(),
            global_identity: default_global_identity(),
        }
    }
}

impl Config {
    /// Load config from `path`, or from [`CONFIG_FILE`] when it exists
    ///
    /// An explicit path must exist; the implicit file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.exists() {
                    Self::load_file(default)
                } else {
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a config file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Self::parse_from(&content, &path.display().to_string())
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::parse_from(content, "<inline>")
    }

    fn parse_from(content: &str, path: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        config.markers = validate_markers(&config.markers)?;
        Ok(config)
    }

    /// Pick the username: `explicit` wins over the config file, then validate it
    pub fn resolve_username(&self, explicit: Option<&str>) -> Result<String, ConfigError> {
        let username = explicit
            .or(self.username.as_deref())
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingUsername)?;
        validate_username(username)?;
        Ok(username.to_string())
    }

    /// Formatter for `username` honoring the icon settings
    #[must_use]
    pub fn formatter(&self, username: &str) -> Formatter {
        let formatter = Formatter::new(username);
        match &self.icon_base_url {
            Some(url) => formatter.with_icon_base_url(url.clone()),
            None => formatter,
        }
    }

    /// Git publisher built from the commit settings
    #[must_use]
    pub fn publisher(&self) -> GitPublisher {
        GitPublisher::new(Identity {
            email: self.commit.email.clone(),
            name: self.commit.name.clone(),
        })
        .with_message(self.commit.message.clone())
        .with_global_identity(self.commit.global_identity)
    }
}

/// Trim both markers and reject blank or identical ones
///
/// A blank marker would match any blank line of the README.
pub fn validate_markers(markers: &Markers) -> Result<Markers, ConfigError> {
    let start = markers.start.trim();
    let end = markers.end.trim();
    if start.is_empty() {
        return Err(ConfigError::InvalidMarkers("start marker is empty"));
    }
    if end.is_empty() {
        return Err(ConfigError::InvalidMarkers("end marker is empty"));
    }
    if start == end {
        return Err(ConfigError::InvalidMarkers("start and end markers are identical"));
    }
    Ok(Markers {
        start: start.to_string(),
        end: end.to_string(),
    })
}

/// Check that `username` is a plausible account name
pub fn validate_username(username: &str) -> Result<(), ConfigError> {
    if username.len() <= MAX_USERNAME_LEN && USERNAME.is_match(username) {
        Ok(())
    } else {
        Err(ConfigError::InvalidUsername(username.to_string()))
    }
}
