//! GitHub events API adapter
//!
//! Implements `EventFeed` on top of `GET /users/{username}/events`.
//! Requests are blocking and never retried: a failed page fails the run.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::core::models::{Event, RawEvent};
use crate::core::ports::{EventFeed, FeedError};

/// Default REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Event feed reading the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubFeed {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubFeed {
    /// Create a feed against `api_url`, authenticating with `token` when given
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. TLS backend failure).
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// URL of one page of a user's events
    #[must_use]
    pub fn page_url(&self, username: &str, page: u32, per_page: u32) -> String {
        format!("{}/users/{username}/events?per_page={per_page}&page={page}", self.api_url)
    }
}

impl EventFeed for GitHubFeed {
    fn fetch_page(&self, username: &str, page: u32, per_page: u32) -> Result<Vec<Event>, FeedError> {
        let url = self.page_url(username, page, per_page);
        log::debug!("GET {url}");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| FeedError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                page,
            });
        }

        let raw: Vec<RawEvent> = response.json().map_err(|e| FeedError::Decode(e.to_string()))?;
        log::debug!("Page {page}: {} events", raw.len());
        Ok(raw.into_iter().map(Event::from_raw).collect())
    }
}
