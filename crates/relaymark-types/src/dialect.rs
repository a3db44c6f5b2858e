//! Markup dialects and the directions relaymark translates between.
//!
//! Three dialects are supported: GitHub- and GitLab-flavoured Markdown on
//! the source-hosting side and Slack `mrkdwn` on the chat side. Only
//! host <-> chat directions exist; [`DialectPair`] is the closed set of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RelaymarkError;

/// A lightweight text-formatting convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// GitHub-flavoured Markdown.
    GitHub,
    /// GitLab-flavoured Markdown.
    GitLab,
    /// Slack `mrkdwn`.
    Slack,
}

impl Dialect {
    /// Whether this is the chat-side dialect.
    pub fn is_chat(self) -> bool {
        matches!(self, Self::Slack)
    }

    /// The source host this dialect belongs to, if any.
    pub fn host(self) -> Option<SourceHost> {
        match self {
            Self::GitHub => Some(SourceHost::GitHub),
            Self::GitLab => Some(SourceHost::GitLab),
            Self::Slack => None,
        }
    }

    /// Base URL used to build profile links when no thread URL is known.
    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::GitHub => "https://github.com",
            Self::GitLab => "https://gitlab.com",
            Self::Slack => "https://app.slack.com",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GitHub => write!(f, "github"),
            Self::GitLab => write!(f, "gitlab"),
            Self::Slack => write!(f, "slack"),
        }
    }
}

impl FromStr for Dialect {
    type Err = RelaymarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "github" | "gh" => Ok(Self::GitHub),
            "gitlab" | "gl" => Ok(Self::GitLab),
            "slack" | "mrkdwn" => Ok(Self::Slack),
            other => Err(RelaymarkError::UnknownDialect(other.to_owned())),
        }
    }
}

/// A source-hosting platform (the non-chat dialects).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceHost {
    GitHub,
    GitLab,
}

impl SourceHost {
    /// The Markdown dialect spoken by this host.
    pub fn dialect(self) -> Dialect {
        match self {
            Self::GitHub => Dialect::GitHub,
            Self::GitLab => Dialect::GitLab,
        }
    }
}

impl fmt::Display for SourceHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dialect().fmt(f)
    }
}

/// A supported translation direction.
///
/// Selection of the conversion pipeline always matches on this enum; there
/// is no string-keyed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialectPair {
    GitHubToSlack,
    GitLabToSlack,
    SlackToGitHub,
    SlackToGitLab,
}

impl DialectPair {
    /// All four directions, in a stable order.
    pub const ALL: [DialectPair; 4] = [
        Self::GitHubToSlack,
        Self::GitLabToSlack,
        Self::SlackToGitHub,
        Self::SlackToGitLab,
    ];

    /// Build the pair for `from -> to`, or `None` if unsupported.
    pub fn new(from: Dialect, to: Dialect) -> Option<Self> {
        match (from, to) {
            (Dialect::GitHub, Dialect::Slack) => Some(Self::GitHubToSlack),
            (Dialect::GitLab, Dialect::Slack) => Some(Self::GitLabToSlack),
            (Dialect::Slack, Dialect::GitHub) => Some(Self::SlackToGitHub),
            (Dialect::Slack, Dialect::GitLab) => Some(Self::SlackToGitLab),
            _ => None,
        }
    }

    /// Like [`new`](Self::new) but reports the unsupported pair as an error.
    pub fn try_new(from: Dialect, to: Dialect) -> Result<Self, RelaymarkError> {
        Self::new(from, to).ok_or(RelaymarkError::UnsupportedPair { from, to })
    }

    /// Dialect the text is written in.
    pub fn source(self) -> Dialect {
        match self {
            Self::GitHubToSlack => Dialect::GitHub,
            Self::GitLabToSlack => Dialect::GitLab,
            Self::SlackToGitHub | Self::SlackToGitLab => Dialect::Slack,
        }
    }

    /// Dialect the text is translated into.
    pub fn target(self) -> Dialect {
        match self {
            Self::GitHubToSlack | Self::GitLabToSlack => Dialect::Slack,
            Self::SlackToGitHub => Dialect::GitHub,
            Self::SlackToGitLab => Dialect::GitLab,
        }
    }

    /// The source host on the non-chat end of the pair.
    pub fn host(self) -> SourceHost {
        match self {
            Self::GitHubToSlack | Self::SlackToGitHub => SourceHost::GitHub,
            Self::GitLabToSlack | Self::SlackToGitLab => SourceHost::GitLab,
        }
    }

    /// Whether text flows from a source host into chat.
    pub fn is_to_chat(self) -> bool {
        self.target().is_chat()
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Self::GitHubToSlack => Self::SlackToGitHub,
            Self::GitLabToSlack => Self::SlackToGitLab,
            Self::SlackToGitHub => Self::GitHubToSlack,
            Self::SlackToGitLab => Self::GitLabToSlack,
        }
    }
}

impl fmt::Display for DialectPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}

/// An immutable piece of text tagged with the dialect it is written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkupText {
    dialect: Dialect,
    text: String,
}

impl MarkupText {
    /// Tag `text` as written in `dialect`.
    pub fn new(dialect: Dialect, text: impl Into<String>) -> Self {
        Self {
            dialect,
            text: text.into(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the value, returning the raw text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for MarkupText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
