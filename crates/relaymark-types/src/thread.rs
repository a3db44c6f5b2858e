//! Canonical thread URLs and short references resolved against them.
//!
//! A thread is the pull request, merge request or issue being mirrored.
//! Its URL anchors every relative reference (`#12`, `repo#12`,
//! `owner/repo!12`) found in text and titles.

use std::fmt;

use url::Url;

use crate::dialect::SourceHost;

/// What kind of conversation a thread URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreadKind {
    /// A GitHub pull request (`/pull/<n>`).
    PullRequest,
    /// An issue on either host (`/issues/<n>`).
    Issue,
    /// A GitLab merge request (`/-/merge_requests/<n>`).
    MergeRequest,
}

impl ThreadKind {
    /// The path segment naming this kind.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::PullRequest => "pull",
            Self::Issue => "issues",
            Self::MergeRequest => "merge_requests",
        }
    }
}

/// A parsed canonical thread URL.
///
/// GitHub threads look like `<origin>/<owner>/<repo>/(pull|issues)/<n>`;
/// GitLab threads look like
/// `<origin>/<group>[/<subgroup>...]/<project>/-/(merge_requests|issues)/<n>`.
/// For GitLab the whole group path is the `owner`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadUrl {
    pub host: SourceHost,
    /// Scheme, host and port, without a trailing slash.
    pub origin: String,
    pub owner: String,
    pub repo: String,
    pub kind: ThreadKind,
    pub number: u64,
}

impl ThreadUrl {
    /// Parse `raw` as a thread URL.
    ///
    /// Returns `None` for anything that does not have the expected shape;
    /// callers treat that as "no thread context" rather than an error.
    pub fn parse(raw: &str) -> Option<Self> {
        let url = Url::parse(raw.trim()).ok()?;
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }
        let origin = url.origin().ascii_serialization();
        let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();

        if let Some(dash) = segments.iter().position(|s| *s == "-") {
            if dash < 2 || segments.len() < dash + 3 {
                return None;
            }
            let kind = match segments[dash + 1] {
                "merge_requests" => ThreadKind::MergeRequest,
                "issues" => ThreadKind::Issue,
                _ => return None,
            };
            return Some(Self {
                host: SourceHost::GitLab,
                origin,
                owner: segments[..dash - 1].join("/"),
                repo: segments[dash - 1].to_owned(),
                kind,
                number: segments[dash + 2].parse().ok()?,
            });
        }

        if segments.len() < 4 {
            return None;
        }
        let kind = match segments[2] {
            "pull" => ThreadKind::PullRequest,
            "issues" => ThreadKind::Issue,
            _ => return None,
        };
        Some(Self {
            host: SourceHost::GitHub,
            origin,
            owner: segments[0].to_owned(),
            repo: segments[1].to_owned(),
            kind,
            number: segments[3].parse().ok()?,
        })
    }

    /// `<origin>/<owner>/<repo>`.
    pub fn repo_url(&self) -> String {
        format!("{}/{}/{}", self.origin, self.owner, self.repo)
    }

    /// URL of a thread of `kind` numbered `number` in `owner/repo` on the
    /// same host.
    pub fn url_for(&self, owner: &str, repo: &str, kind: ThreadKind, number: u64) -> String {
        match self.host {
            SourceHost::GitHub => format!(
                "{}/{owner}/{repo}/{}/{number}",
                self.origin,
                kind.path_segment()
            ),
            SourceHost::GitLab => format!(
                "{}/{owner}/{repo}/-/{}/{number}",
                self.origin,
                kind.path_segment()
            ),
        }
    }

    /// This thread's URL with its number replaced by `number`.
    pub fn with_number(&self, number: u64) -> String {
        self.url_for(&self.owner, &self.repo, self.kind, number)
    }

    /// Which thread kind a reference sigil denotes on this host.
    ///
    /// On GitHub `#` inherits the thread's own kind (issues and pull
    /// requests share a number space). On GitLab `#` is an issue and `!`
    /// a merge request. Anything else is not a reference.
    pub fn kind_for_sigil(&self, sigil: char) -> Option<ThreadKind> {
        match (self.host, sigil) {
            (SourceHost::GitHub, '#') => Some(self.kind),
            (SourceHost::GitLab, '#') => Some(ThreadKind::Issue),
            (SourceHost::GitLab, '!') => Some(ThreadKind::MergeRequest),
            _ => None,
        }
    }
}

impl fmt::Display for ThreadUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.with_number(self.number))
    }
}

/// A short pointer to another thread: `#12`, `repo#12`, `owner/repo#12`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub owner: Option<String>,
    pub repo: Option<String>,
    /// `#` or `!`.
    pub sigil: char,
    pub number: u64,
}

impl Reference {
    /// Resolve against `thread`, filling in the omitted owner and repo.
    ///
    /// `repo#n` keeps the thread's owner; `owner/repo#n` is used as given.
    pub fn resolve(&self, thread: &ThreadUrl) -> Option<String> {
        let kind = thread.kind_for_sigil(self.sigil)?;
        let owner = self.owner.as_deref().unwrap_or(&thread.owner);
        let repo = self.repo.as_deref().unwrap_or(&thread.repo);
        Some(thread.url_for(owner, repo, kind, self.number))
    }
}
