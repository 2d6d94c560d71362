//! Event formatting
//!
//! Turns one (coalesced) [`Event`] into a markdown line such as
//!
//! ```text
//! `[03/05 14:07]` 📝 Made `5` commits in [octo/hello](https://github.com/octo/hello)
//! ```
//!
//! or into nothing for kinds that are not rendered. Private targets are never
//! rendered as clickable links.

use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::core::models::{Event, EventKind, IssueRef, PullRequestRef, RefType};

/// Base URL of the hosting platform's web UI
pub const WEB_URL: &str = "https://github.com/";

/// Action icons, rendered as emoji or as image badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Commit or issue comment
    Comment,
    /// New repository
    CreateRepo,
    /// New branch
    CreateBranch,
    /// Deleted ref
    Delete,
    /// Fork
    Fork,
    /// Issue activity
    Issue,
    /// Pull request opened
    PrOpen,
    /// Pull request closed
    PrClose,
    /// Pull request merged
    Merge,
    /// Pull request review
    Review,
    /// Commits pushed
    Commit,
    /// Release published
    Release,
    /// Repository starred
    Star,
}

impl Icon {
    /// Emoji used as the icon itself or as the badge's alt text
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Comment => "🗣",
            Self::CreateRepo => "➕",
            Self::CreateBranch => "📂",
            Self::Delete | Self::PrClose => "❌",
            Self::Fork => "🍴",
            Self::Issue => "❗️",
            Self::PrOpen => "✅",
            Self::Merge => "🎉",
            Self::Review => "🔍",
            Self::Commit => "📝",
            Self::Release => "🏷",
            Self::Star => "⭐",
        }
    }

    /// Badge image name (without extension)
    #[must_use]
    pub const fn image_name(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::CreateRepo => "create-repo",
            Self::CreateBranch => "create-branch",
            Self::Delete => "delete",
            Self::Fork => "fork",
            Self::Issue => "issue",
            Self::PrOpen => "pr-open",
            Self::PrClose => "pr-close",
            Self::Merge => "merge",
            Self::Review => "review",
            Self::Commit => "commit",
            Self::Release => "release",
            Self::Star => "star",
        }
    }
}

/// Link to a repository, or to a branch inside it
///
/// Public targets render as markdown links; private ones as code spans, with a
/// lock and tooltip when pointing at a repository root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefLink<'a> {
    /// Fully qualified repository name
    pub target: &'a str,
    /// Branch inside the repository
    pub branch: Option<&'a str>,
    /// Whether the target may be linked
    pub is_public: bool,
}

impl<'a> RefLink<'a> {
    /// Link to a repository root
    #[must_use]
    pub const fn repo(target: &'a str, is_public: bool) -> Self {
        Self {
            target,
            branch: None,
            is_public,
        }
    }

    /// Link to a branch of a repository
    #[must_use]
    pub const fn branch(target: &'a str, branch: &'a str, is_public: bool) -> Self {
        Self {
            target,
            branch: Some(branch),
            is_public,
        }
    }
}

impl fmt::Display for RefLink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_public, self.branch) {
            (true, Some(branch)) => write!(f, "[`{branch}`]({WEB_URL}{}/tree/{branch})", self.target),
            (true, None) => write!(f, "[{0}]({WEB_URL}{0})", self.target),
            (false, Some(branch)) => write!(f, "`{branch}`"),
            (false, None) => write!(f, "<span title=\"Private Repo\">`🔒{}`</span>", self.target),
        }
    }
}

/// Which numbered thread an [`issue_link`] points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thread {
    /// An issue
    Issue,
    /// A pull request
    PullRequest,
}

/// Link to an issue or pull request, titled with its title
///
/// Single quotes in the title are escaped so the markdown title attribute
/// stays intact. Private threads render as a bare `#number` code span.
#[must_use]
pub fn issue_link(repo: &str, thread: Thread, number: u64, title: &str, is_public: bool) -> String {
    if !is_public {
        return format!("`#{number}`");
    }
    let path = match thread {
        Thread::Issue => "issues",
        Thread::PullRequest => "pull",
    };
    let title = title.replace('\'', "\\'");
    format!("[`#{number}`]({WEB_URL}{repo}/{path}/{number} '{title}')")
}

/// `[MM/DD HH:MM]` code span in the event's own offset
#[must_use]
pub fn timestamp(created_at: &DateTime<FixedOffset>) -> String {
    format!("`[{}]`", created_at.format("%m/%d %H:%M"))
}

/// Uppercase the first character, leave the rest untouched
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// Profile repository of an account (`user/user`), whose pushes are not reported
#[must_use]
pub fn housekeeping_repo(username: &str) -> String {
    format!("{username}/{username}")
}

/// Renders events as activity lines for one account
#[derive(Debug, Clone)]
pub struct Formatter {
    housekeeping_repo: String,
    profile_url: String,
    icon_base_url: Option<String>,
}

impl Formatter {
    /// Formatter for `username`'s activity with emoji icons
    #[must_use]
    pub fn new(username: &str) -> Self {
        Self {
            housekeeping_repo: housekeeping_repo(username),
            profile_url: format!("{WEB_URL}{username}"),
            icon_base_url: None,
        }
    }

    /// Render icons as `<img>` badges loaded from `base_url/<name>.png`
    #[must_use]
    pub fn with_icon_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.icon_base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// The repository whose pushes are suppressed
    #[must_use]
    pub fn housekeeping_repo(&self) -> &str {
        &self.housekeeping_repo
    }

    /// Render `event` as a line, or `None` when it is not reported
    #[must_use]
    pub fn format(&self, event: &Event) -> Option<String> {
        let body = self.body(event)?;
        Some(format!("{} {body}", timestamp(&event.created_at)))
    }

    fn icon(&self, icon: Icon) -> String {
        let alt = icon.emoji();
        match &self.icon_base_url {
            None => alt.to_string(),
            Some(base) => format!(
                "<a href=\"{}\" title=\"{alt}\"><img alt=\"{alt}\" src=\"{base}/{}.png\" align=\"top\" height=\"18\"></a>",
                self.profile_url,
                icon.image_name()
            ),
        }
    }

    fn body(&self, event: &Event) -> Option<String> {
        let public = event.is_public;
        let repo = RefLink::repo(&event.repo, public);

        let line = match &event.kind {
            EventKind::CommitComment { commit_id, html_url } => {
                let hash: String = commit_id.chars().take(7).collect();
                let hash = if public {
                    format!("[`{hash}`]({html_url})")
                } else {
                    format!("`{hash}`")
                };
                format!("{} Commented on {hash} in {repo}", self.icon(Icon::Comment))
            },
            EventKind::Create { ref_type, ref_name } => match (ref_type, ref_name) {
                (RefType::Repository, _) => {
                    format!("{} Created repository {repo}", self.icon(Icon::CreateRepo))
                },
                (RefType::Branch, Some(branch)) => format!(
                    "{} Created branch {} in {repo}",
                    self.icon(Icon::CreateBranch),
                    RefLink::branch(&event.repo, branch, public)
                ),
                _ => return None,
            },
            EventKind::Delete { ref_name } => {
                format!("{} Deleted `{ref_name}` from {repo}", self.icon(Icon::Delete))
            },
            EventKind::Fork {
                full_name,
                is_public,
            } => format!(
                "{} Forked {repo} to {}",
                self.icon(Icon::Fork),
                RefLink::repo(full_name, *is_public)
            ),
            EventKind::IssueComment { issue } => format!(
                "{} Commented on {} in {repo}",
                self.icon(Icon::Comment),
                issue_ref(&event.repo, issue, public)
            ),
            EventKind::Issues { action, issue } => format!(
                "{} {} issue {} in {repo}",
                self.icon(Icon::Issue),
                capitalize(action),
                issue_ref(&event.repo, issue, public)
            ),
            EventKind::PullRequest {
                action,
                pull_request,
            } => {
                let verb = if pull_request.merged {
                    format!("{} Merged", self.icon(Icon::Merge))
                } else {
                    let icon = if action == "opened" {
                        Icon::PrOpen
                    } else {
                        Icon::PrClose
                    };
                    format!("{} {}", self.icon(icon), capitalize(action))
                };
                format!("{verb} PR {} in {repo}", pr_ref(&event.repo, pull_request, public))
            },
            EventKind::PullRequestReview { pull_request } => format!(
                "{} Reviewed {} in {repo}",
                self.icon(Icon::Review),
                pr_ref(&event.repo, pull_request, public)
            ),
            EventKind::Push { size } => {
                if event.repo.eq_ignore_ascii_case(&self.housekeeping_repo) {
                    return None;
                }
                let noun = if *size == 1 { "commit" } else { "commits" };
                format!("{} Made `{size}` {noun} in {repo}", self.icon(Icon::Commit))
            },
            EventKind::Release { tag_name, html_url } => {
                let tag = if public {
                    format!("[`{tag_name}`]({html_url})")
                } else {
                    format!("`{tag_name}`")
                };
                format!("{} Released {tag} in {repo}", self.icon(Icon::Release))
            },
            EventKind::Watch => format!("{} Starred {repo}", self.icon(Icon::Star)),
            EventKind::Unsupported { .. } => return None,
        };

        Some(line)
    }
}

fn issue_ref(repo: &str, issue: &IssueRef, public: bool) -> String {
    issue_link(repo, Thread::Issue, issue.number, &issue.title, public)
}

fn pr_ref(repo: &str, pr: &PullRequestRef, public: bool) -> String {
    issue_link(repo, Thread::PullRequest, pr.number, &pr.title, public)
}
