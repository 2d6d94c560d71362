//! Activity events
//!
//! An [`Event`] is one entry of a user's public activity feed, decoded from the
//! hosting platform's JSON into a closed [`EventKind`] so that every supported
//! kind is handled exhaustively downstream.
//!
//! # Examples
//!
//! ```
//! use activity_readme::core::models::{Event, EventKind, RawEvent};
//!
//! let raw: RawEvent = serde_json::from_str(r#"{
//!     "type": "PushEvent",
//!     "repo": { "name": "octo/hello" },
//!     "public": true,
//!     "created_at": "2024-03-05T14:07:33Z",
//!     "payload": { "size": 2 }
//! }"#).unwrap();
//!
//! let event = Event::from_raw(raw);
//! assert_eq!(event.repo, "octo/hello");
//! assert_eq!(event.kind, EventKind::Push { size: 2 });
//! ```

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const fn default_public() -> bool {
    true
}

/// Event as delivered by the feed, before its payload is decoded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    /// Event type name (e.g. `PushEvent`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Repository the event happened in
    pub repo: RawRepo,
    /// Whether the event is publicly visible
    #[serde(default = "default_public")]
    pub public: bool,
    /// When the event happened, in the feed's own offset
    pub created_at: DateTime<FixedOffset>,
    /// Kind-specific data
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Repository reference inside a raw event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRepo {
    /// Fully qualified `owner/name`
    pub name: String,
}

/// Kind of git ref a create/delete event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefType {
    /// The repository itself
    Repository,
    /// A branch
    Branch,
    /// A tag
    Tag,
    /// Anything the platform adds later
    #[serde(other)]
    Other,
}

/// Issue reference carried by issue events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    /// Issue number
    pub number: u64,
    /// Issue title
    pub title: String,
}

/// Pull request reference carried by pull request events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// Pull request number
    pub number: u64,
    /// Pull request title
    pub title: String,
    /// Whether the pull request was merged
    #[serde(default)]
    pub merged: bool,
}

/// Decoded event kind with its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Comment on a commit
    CommitComment {
        /// Full commit SHA
        commit_id: String,
        /// Link to the comment
        html_url: String,
    },
    /// Repository, branch or tag created
    Create {
        /// What was created
        ref_type: RefType,
        /// Ref name (absent for repositories)
        ref_name: Option<String>,
    },
    /// Branch or tag deleted
    Delete {
        /// Ref name
        ref_name: String,
    },
    /// Repository forked
    Fork {
        /// Full name of the new fork
        full_name: String,
        /// Visibility of the fork itself
        is_public: bool,
    },
    /// Comment on an issue or pull request
    IssueComment {
        /// The commented issue
        issue: IssueRef,
    },
    /// Issue opened, closed, reopened...
    Issues {
        /// Action verb as sent by the platform
        action: String,
        /// The issue
        issue: IssueRef,
    },
    /// Pull request opened, closed, merged...
    PullRequest {
        /// Action verb as sent by the platform
        action: String,
        /// The pull request
        pull_request: PullRequestRef,
    },
    /// Pull request review submitted
    PullRequestReview {
        /// The reviewed pull request
        pull_request: PullRequestRef,
    },
    /// Commits pushed
    Push {
        /// Number of commits (summed when coalesced)
        size: u64,
    },
    /// Release published
    Release {
        /// Release tag
        tag_name: String,
        /// Link to the release page
        html_url: String,
    },
    /// Repository starred
    Watch,
    /// Any kind this crate does not render
    Unsupported {
        /// Event type name as received
        name: String,
    },
}

/// A decoded activity event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// When the event happened
    pub created_at: DateTime<FixedOffset>,
    /// Fully qualified repository name
    pub repo: String,
    /// Whether the event is publicly visible
    pub is_public: bool,
    /// Kind and payload
    pub kind: EventKind,
}

#[derive(Deserialize)]
struct CommitCommentPayload {
    comment: CommentBody,
}

#[derive(Deserialize)]
struct CommentBody {
    commit_id: String,
    html_url: String,
}

#[derive(Deserialize)]
struct RefPayload {
    ref_type: RefType,
    #[serde(rename = "ref")]
    ref_name: Option<String>,
}

#[derive(Deserialize)]
struct ForkPayload {
    forkee: Forkee,
}

#[derive(Deserialize)]
struct Forkee {
    full_name: String,
    #[serde(default = "default_public")]
    public: bool,
}

#[derive(Deserialize)]
struct IssuePayload {
    #[serde(default)]
    action: String,
    issue: IssueRef,
}

#[derive(Deserialize)]
struct PullRequestPayload {
    #[serde(default)]
    action: String,
    pull_request: PullRequestRef,
}

#[derive(Deserialize)]
struct PushPayload {
    #[serde(default)]
    size: u64,
}

#[derive(Deserialize)]
struct ReleasePayload {
    release: ReleaseBody,
}

#[derive(Deserialize)]
struct ReleaseBody {
    tag_name: String,
    html_url: String,
}

fn decode<T: DeserializeOwned>(payload: serde_json::Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(payload)
}

impl EventKind {
    /// Decode a payload for the given event type name
    ///
    /// Unknown type names yield [`EventKind::Unsupported`]; a known name with a
    /// payload of the wrong shape is an error.
    pub fn decode(name: &str, payload: serde_json::Value) -> Result<Self, serde_json::Error> {
        let kind = match name {
            "CommitCommentEvent" => {
                let p: CommitCommentPayload = decode(payload)?;
                Self::CommitComment {
                    commit_id: p.comment.commit_id,
                    html_url: p.comment.html_url,
                }
            },
            "CreateEvent" => {
                let p: RefPayload = decode(payload)?;
                Self::Create {
                    ref_type: p.ref_type,
                    ref_name: p.ref_name,
                }
            },
            "DeleteEvent" => {
                let p: RefPayload = decode(payload)?;
                Self::Delete {
                    ref_name: p.ref_name.unwrap_or_default(),
                }
            },
            "ForkEvent" => {
                let p: ForkPayload = decode(payload)?;
                Self::Fork {
                    full_name: p.forkee.full_name,
                    is_public: p.forkee.public,
                }
            },
            "IssueCommentEvent" => {
                let p: IssuePayload = decode(payload)?;
                Self::IssueComment { issue: p.issue }
            },
            "IssuesEvent" => {
                let p: IssuePayload = decode(payload)?;
                Self::Issues {
                    action: p.action,
                    issue: p.issue,
                }
            },
            "PullRequestEvent" => {
                let p: PullRequestPayload = decode(payload)?;
                Self::PullRequest {
                    action: p.action,
                    pull_request: p.pull_request,
                }
            },
            "PullRequestReviewEvent" => {
                let p: PullRequestPayload = decode(payload)?;
                Self::PullRequestReview {
                    pull_request: p.pull_request,
                }
            },
            "PushEvent" => {
                let p: PushPayload = decode(payload)?;
                Self::Push { size: p.size }
            },
            "ReleaseEvent" => {
                let p: ReleasePayload = decode(payload)?;
                Self::Release {
                    tag_name: p.release.tag_name,
                    html_url: p.release.html_url,
                }
            },
            "WatchEvent" => Self::Watch,
            other => Self::Unsupported {
                name: other.to_string(),
            },
        };
        Ok(kind)
    }

    /// Event type name as used by the feed
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::CommitComment { .. } => "CommitCommentEvent",
            Self::Create { .. } => "CreateEvent",
            Self::Delete { .. } => "DeleteEvent",
            Self::Fork { .. } => "ForkEvent",
            Self::IssueComment { .. } => "IssueCommentEvent",
            Self::Issues { .. } => "IssuesEvent",
            Self::PullRequest { .. } => "PullRequestEvent",
            Self::PullRequestReview { .. } => "PullRequestReviewEvent",
            Self::Push { .. } => "PushEvent",
            Self::Release { .. } => "ReleaseEvent",
            Self::Watch => "WatchEvent",
            Self::Unsupported { name } => name,
        }
    }
}

impl Event {
    /// Decode a raw feed entry
    ///
    /// A supported kind whose payload cannot be decoded is logged and kept as
    /// [`EventKind::Unsupported`], so one odd entry never sinks a whole run.
    #[must_use]
    pub fn from_raw(raw: RawEvent) -> Self {
        let kind = match EventKind::decode(&raw.kind, raw.payload) {
            Ok(kind) => kind,
            Err(e) => {
                log::warn!("Ignoring malformed {} in {}: {e}", raw.kind, raw.repo.name);
                EventKind::Unsupported { name: raw.kind }
            },
        };

        Self {
            created_at: raw.created_at,
            repo: raw.repo.name,
            is_public: raw.public,
            kind,
        }
    }

    /// Whether this is a push event
    #[must_use]
    pub const fn is_push(&self) -> bool {
        matches!(self.kind, EventKind::Push { .. })
    }
}
