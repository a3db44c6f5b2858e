//! The identity-resolution collaborator.
//!
//! Mention rewriting needs to know which chat account corresponds to a
//! source-host login (and vice versa). That knowledge lives outside the
//! engine, behind [`IdentityResolver`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::ResolveError;

/// A resolved account on some platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Native mention token, e.g. `<@U024BE7LH>` on Slack or `@octocat`
    /// on GitHub.
    #[serde(alias = "mentionToken")]
    pub mention_token: String,

    /// Profile page of the account.
    #[serde(default, alias = "profileUrl")]
    pub profile_url: String,

    /// Human-readable name, if known.
    #[serde(default, alias = "displayName")]
    pub display_name: Option<String>,
}

/// Looks up the account on `platform` that corresponds to `identifier`.
///
/// `identifier` is an account name from the other side of the bridge: a
/// GitHub or GitLab login when `platform` is Slack, a Slack user ID when
/// `platform` is a source host.
///
/// Implementations may be slow or fail. `Ok(None)` means "no such
/// account" and is the normal negative answer; `Err` is reserved for the
/// lookup itself going wrong. The engine treats both the same way and
/// never retries.
pub trait IdentityResolver: Send + Sync {
    fn resolve(
        &self,
        platform: Dialect,
        identifier: &str,
    ) -> Result<Option<Identity>, ResolveError>;
}

/// A resolver that knows nobody.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

impl IdentityResolver for NoopResolver {
    fn resolve(
        &self,
        _platform: Dialect,
        _identifier: &str,
    ) -> Result<Option<Identity>, ResolveError> {
        Ok(None)
    }
}

/// A resolver backed by an in-memory table, typically loaded from config.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<Dialect, HashMap<String, Identity>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `identity` as the `platform` account for `identifier`.
    pub fn insert(&mut self, platform: Dialect, identifier: impl Into<String>, identity: Identity) {
        self.entries
            .entry(platform)
            .or_default()
            .insert(identifier.into(), identity);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(
        mut self,
        platform: Dialect,
        identifier: impl Into<String>,
        identity: Identity,
    ) -> Self {
        self.insert(platform, identifier, identity);
        self
    }

    /// Number of registered identities across all platforms.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IdentityResolver for StaticResolver {
    fn resolve(
        &self,
        platform: Dialect,
        identifier: &str,
    ) -> Result<Option<Identity>, ResolveError> {
        Ok(self
            .entries
            .get(&platform)
            .and_then(|table| table.get(identifier))
            .cloned())
    }
}
