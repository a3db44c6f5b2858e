//! The translation facade.

use std::sync::Arc;

use tracing::{debug, debug_span};

use relaymark_types::{
    ConversionContext, Dialect, DialectPair, IdentityResolver, MarkupText, NoopResolver,
    SourceHost,
};

use crate::protect::{stash_code, stash_urls};
use crate::{emoji, link, list, mention, shorten, style, title};

/// Converts text between the supported dialects.
///
/// Every entry point is total: unmatched syntax passes through and
/// identity lookup failures degrade to links. A `Translator` holds no
/// per-call state and can be shared freely between threads.
#[derive(Clone)]
pub struct Translator {
    resolver: Arc<dyn IdentityResolver>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Arc::new(NoopResolver))
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator").finish_non_exhaustive()
    }
}

impl Translator {
    pub fn new(resolver: Arc<dyn IdentityResolver>) -> Self {
        Self { resolver }
    }

    pub fn with_resolver(resolver: impl IdentityResolver + 'static) -> Self {
        Self::new(Arc::new(resolver))
    }

    pub fn resolver(&self) -> &dyn IdentityResolver {
        self.resolver.as_ref()
    }

    pub fn github_to_slack(&self, text: &str, ctx: &ConversionContext) -> String {
        self.to_chat(SourceHost::GitHub, text, ctx)
    }

    pub fn gitlab_to_slack(&self, text: &str, ctx: &ConversionContext) -> String {
        self.to_chat(SourceHost::GitLab, text, ctx)
    }

    pub fn slack_to_github(&self, text: &str, ctx: &ConversionContext) -> String {
        self.from_chat(SourceHost::GitHub, text, ctx)
    }

    pub fn slack_to_gitlab(&self, text: &str, ctx: &ConversionContext) -> String {
        self.from_chat(SourceHost::GitLab, text, ctx)
    }

    /// Run the pipeline for `pair`.
    pub fn translate_pair(&self, pair: DialectPair, text: &str, ctx: &ConversionContext) -> String {
        match pair {
            DialectPair::GitHubToSlack => self.github_to_slack(text, ctx),
            DialectPair::GitLabToSlack => self.gitlab_to_slack(text, ctx),
            DialectPair::SlackToGitHub => self.slack_to_github(text, ctx),
            DialectPair::SlackToGitLab => self.slack_to_gitlab(text, ctx),
        }
    }

    /// Translate `text` into `target`.
    ///
    /// Pairs without a pipeline (same dialect, or host to host) come back
    /// unchanged.
    pub fn translate(
        &self,
        text: &MarkupText,
        target: Dialect,
        ctx: &ConversionContext,
    ) -> MarkupText {
        match DialectPair::new(text.dialect(), target) {
            Some(pair) => MarkupText::new(target, self.translate_pair(pair, text.as_str(), ctx)),
            None => {
                debug!(from = %text.dialect(), to = %target, "no pipeline for pair; text unchanged");
                text.clone()
            }
        }
    }

    /// Linkify tracker IDs and references in a single-line title.
    pub fn linkify_title(&self, title: &str, ctx: &ConversionContext) -> String {
        title::linkify_title(title, ctx)
    }

    fn to_chat(&self, host: SourceHost, text: &str, ctx: &ConversionContext) -> String {
        let _span = debug_span!("to_chat", %host).entered();

        let (text, code) = stash_code(text);
        let text = list::normalize_whitespace(&text);
        let text = list::to_chat(&text, host);

        let (text, urls) = stash_urls(&text);
        let text = style::to_chat(&text, host);
        let text = urls.restore(&text);

        let text = link::to_chat(&text, host, ctx);
        let text = mention::to_chat(&text, host, ctx, self.resolver());
        let text = emoji::narrow(host, &text);

        // Measure the message as sent, but only collapse links outside code.
        match (ctx.max_length(), ctx.thread_url()) {
            (Some(budget), Some(short_url)) => {
                let length = code.restore(&text).chars().count();
                code.restore(&shorten::shorten_measured(&text, length, budget, short_url))
            }
            (Some(_), None) => {
                debug!("length budget set without a thread URL; links left as they are");
                code.restore(&text)
            }
            (None, _) => code.restore(&text),
        }
    }

    fn from_chat(&self, host: SourceHost, text: &str, ctx: &ConversionContext) -> String {
        let _span = debug_span!("from_chat", %host).entered();

        let (text, code) = stash_code(text);
        let text = list::normalize_whitespace(&text);
        let text = list::from_chat(&text);

        let (text, urls) = stash_urls(&text);
        let text = style::from_chat(&text);
        let text = urls.restore(&text);

        let text = link::from_chat(&text);
        let text = mention::from_chat(&text, host, ctx, self.resolver());
        let text = emoji::widen(host, &text);
        code.restore(&text)
    }
}
