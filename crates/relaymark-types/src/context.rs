//! Per-call conversion context.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::config::RelaymarkConfig;
use crate::dialect::{Dialect, DialectPair};
use crate::thread::ThreadUrl;

/// Key consulted in the tracker table when a prefix has no entry of its own.
pub const DEFAULT_TRACKER_KEY: &str = "default";

/// Everything a translation needs besides the text itself.
///
/// The canonical thread URL is parsed lazily, at most once, the first
/// time a component asks for it.
#[derive(Debug, Clone)]
pub struct ConversionContext {
    pair: DialectPair,
    thread_url: Option<String>,
    thread: OnceLock<Option<ThreadUrl>>,
    tracker_urls: HashMap<String, String>,
    max_length: Option<usize>,
    chat_base_url: String,
}

impl ConversionContext {
    pub fn new(pair: DialectPair) -> Self {
        Self {
            pair,
            thread_url: None,
            thread: OnceLock::new(),
            tracker_urls: HashMap::new(),
            max_length: None,
            chat_base_url: Dialect::Slack.default_base_url().to_owned(),
        }
    }

    /// Build a context for `pair` seeded from the loaded configuration.
    pub fn from_config(pair: DialectPair, config: &RelaymarkConfig) -> Self {
        let mut ctx = Self::new(pair).with_tracker_urls(config.tracker_urls.clone());
        ctx.max_length = config.max_message_length;
        if let Some(base) = &config.chat_base_url {
            ctx = ctx.with_chat_base_url(base.clone());
        }
        ctx
    }

    pub fn with_thread_url(mut self, url: impl Into<String>) -> Self {
        self.thread_url = Some(url.into());
        self.thread = OnceLock::new();
        self
    }

    pub fn with_tracker_urls(mut self, table: HashMap<String, String>) -> Self {
        self.tracker_urls = table;
        self
    }

    pub fn with_tracker_url(mut self, prefix: impl Into<String>, base: impl Into<String>) -> Self {
        self.tracker_urls.insert(prefix.into(), base.into());
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_chat_base_url(mut self, base: impl Into<String>) -> Self {
        self.chat_base_url = base.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn pair(&self) -> DialectPair {
        self.pair
    }

    /// The canonical thread URL exactly as supplied.
    pub fn thread_url(&self) -> Option<&str> {
        self.thread_url.as_deref()
    }

    /// The parsed thread URL, if one was supplied and has a thread shape.
    pub fn thread(&self) -> Option<&ThreadUrl> {
        self.thread
            .get_or_init(|| self.thread_url.as_deref().and_then(ThreadUrl::parse))
            .as_ref()
    }

    /// Base URL for tracker IDs with `prefix`, falling back to the
    /// `"default"` entry.
    pub fn tracker_base(&self, prefix: &str) -> Option<&str> {
        self.tracker_urls
            .get(prefix)
            .or_else(|| self.tracker_urls.get(DEFAULT_TRACKER_KEY))
            .map(String::as_str)
    }

    /// Message-length budget in characters, if any.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Base URL for chat profile links, without a trailing slash.
    pub fn chat_base_url(&self) -> &str {
        &self.chat_base_url
    }

    /// Origin of the source host: the thread's origin when known, else the
    /// host's public default.
    pub fn host_base_url(&self) -> String {
        match self.thread() {
            Some(thread) => thread.origin.clone(),
            None => self.pair.host().dialect().default_base_url().to_owned(),
        }
    }
}
