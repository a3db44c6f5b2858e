//! Configuration schema and loading.
//!
//! The config file is optional. Lookup order:
//!
//! 1. An explicit path (the CLI's `--config`).
//! 2. The `RELAYMARK_CONFIG` environment variable.
//! 3. `<config_dir>/relaymark/config.json`.
//!
//! Files ending in `.toml` are parsed as TOML, everything else as JSON.
//! Keys may be written in `snake_case` or `camelCase`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{RelaymarkError, Result};
use crate::identity::{Identity, StaticResolver};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "RELAYMARK_CONFIG";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelaymarkConfig {
    /// Tracker project prefix -> base URL (e.g. `"PROJ"` ->
    /// `"https://jira.example/browse/"`). A `"default"` entry applies to
    /// prefixes without their own.
    #[serde(default, alias = "trackerUrls")]
    pub tracker_urls: HashMap<String, String>,

    /// Maximum chat message length in characters.
    #[serde(default, alias = "maxMessageLength")]
    pub max_message_length: Option<usize>,

    /// Chat workspace URL used for fallback profile links.
    #[serde(default, alias = "chatBaseUrl")]
    pub chat_base_url: Option<String>,

    /// Known accounts per platform: `identities.slack.octocat` is the
    /// Slack account of the source-host login `octocat`.
    #[serde(default)]
    pub identities: HashMap<String, HashMap<String, Identity>>,
}

impl RelaymarkConfig {
    /// Parse configuration from `contents`, choosing the format from `path`.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(contents)?,
            _ => serde_json::from_str(contents)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path)?;
        Self::parse(path, &contents)
    }

    /// Load from an explicit path, else the discovered path, else defaults.
    ///
    /// An explicit path that does not exist is an error; a discovered one
    /// that does not exist silently yields the defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match discover_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reject values that cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.max_message_length == Some(0) {
            return Err(RelaymarkError::ConfigInvalid {
                reason: "maxMessageLength must be greater than zero".into(),
            });
        }
        for platform in self.identities.keys() {
            platform.parse::<Dialect>()?;
        }
        for (prefix, base) in &self.tracker_urls {
            if url::Url::parse(base).is_err() {
                return Err(RelaymarkError::ConfigInvalid {
                    reason: format!("tracker URL for {prefix} is not a URL: {base}"),
                });
            }
        }
        Ok(())
    }

    /// Build a [`StaticResolver`] from the `identities` table.
    pub fn resolver(&self) -> StaticResolver {
        let mut resolver = StaticResolver::new();
        for (platform, table) in &self.identities {
            let Ok(platform) = platform.parse::<Dialect>() else {
                continue;
            };
            for (identifier, identity) in table {
                resolver.insert(platform, identifier.clone(), identity.clone());
            }
        }
        resolver
    }
}

/// Where the config file is expected when no explicit path is given.
pub fn discover_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("relaymark").join("config.json"))
}
