//! Title linkification.
//!
//! Titles are short single lines, so they get their own entry point
//! instead of the full body pipeline. Two token families are recognized
//! in one left-to-right scan:
//!
//! - issue-tracker IDs (`PROJ-12`), linked through the context's tracker
//!   table;
//! - short references (`#12`, `repo#12`, `owner/repo#12`, and `!12` on
//!   GitLab), linked relative to the thread URL.
//!
//! Links already present in the title are copied through untouched.

use std::collections::HashMap;

use regex::Captures;
use tracing::debug;
use url::Url;

use relaymark_types::{ConversionContext, Reference};

use crate::grammar::SHARED;

/// Linkifies titles against one context, remembering every token it has
/// resolved.
#[derive(Debug)]
pub struct TitleLinkifier<'a> {
    ctx: &'a ConversionContext,
    resolved: HashMap<String, Option<String>>,
}

impl<'a> TitleLinkifier<'a> {
    pub fn new(ctx: &'a ConversionContext) -> Self {
        Self {
            ctx,
            resolved: HashMap::new(),
        }
    }

    /// Number of distinct tokens resolved so far.
    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    /// Wrap every tracker ID and reference in `title` in a chat link.
    pub fn linkify(&mut self, title: &str) -> String {
        let ctx = self.ctx;
        let resolved = &mut self.resolved;
        let out = SHARED.title_token.replace_all(title, |caps: &Captures| {
            let literal = &caps[0];
            if caps.name("link").is_some() {
                return literal.to_owned();
            }
            let url = resolved
                .entry(literal.to_owned())
                .or_insert_with(|| resolve_token(caps, ctx));
            match url {
                Some(url) => format!("<{url}|{literal}>"),
                None => literal.to_owned(),
            }
        });
        debug!(resolved = self.resolved.len(), "title pass");
        out.into_owned()
    }
}

fn resolve_token(caps: &Captures, ctx: &ConversionContext) -> Option<String> {
    if let Some(id) = caps.name("tracker") {
        return tracker_url(id.as_str(), ctx);
    }
    let thread = ctx.thread()?;
    let reference = Reference {
        owner: caps.name("owner").map(|m| m.as_str().to_owned()),
        repo: caps.name("repo").map(|m| m.as_str().to_owned()),
        sigil: caps["sigil"].chars().next()?,
        number: caps["number"].parse().ok()?,
    };
    reference.resolve(thread)
}

/// `<base><ID>` for a tracker ID, if the table has a base for its prefix
/// and the result is a valid URL.
fn tracker_url(id: &str, ctx: &ConversionContext) -> Option<String> {
    let (prefix, _) = id.split_once('-')?;
    let base = ctx.tracker_base(prefix)?;
    let candidate = format!("{base}{id}");
    match Url::parse(&candidate) {
        Ok(_) => Some(candidate),
        Err(e) => {
            debug!(%candidate, error = %e, "tracker URL does not parse; leaving ID unlinked");
            None
        }
    }
}

/// Linkify a single title. See [`TitleLinkifier`].
pub fn linkify_title(title: &str, ctx: &ConversionContext) -> String {
    TitleLinkifier::new(ctx).linkify(title)
}
