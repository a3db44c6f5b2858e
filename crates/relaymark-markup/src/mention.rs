//! User and group mention rewriting.
//!
//! Individual users are looked up through the [`IdentityResolver`] once
//! per distinct identifier; every occurrence of that identifier gets the
//! same replacement. Groups are never resolved: no native group mention
//! is assumed to exist on the other side, so they always become a plain
//! hyperlink to the group's page.

use std::collections::HashMap;

use regex::Captures;
use tracing::{debug, warn};

use relaymark_types::{ConversionContext, Dialect, Identity, IdentityResolver, SourceHost};

use crate::grammar::{self, CHAT};
use crate::protect::stash_links;

/// A mention found in text, with everything needed for the fallback link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// Login, group path or chat user ID.
    pub identifier: String,
    pub profile_url: String,
    /// Text shown for the mention, including the leading `@`.
    pub display: String,
    pub is_group: bool,
}

impl Mention {
    /// `<profile|@display>`.
    pub fn chat_fallback(&self) -> String {
        format!("<{}|{}>", self.profile_url, self.display)
    }

    /// `[@display](profile)`.
    pub fn markdown_fallback(&self) -> String {
        format!("[{}]({})", self.display, self.profile_url)
    }
}

/// Ask `resolver` for `identifier`, folding failures into "not found".
pub(crate) fn lookup(
    resolver: &dyn IdentityResolver,
    platform: Dialect,
    identifier: &str,
) -> Option<Identity> {
    match resolver.resolve(platform, identifier) {
        Ok(Some(identity)) if !identity.mention_token.is_empty() => Some(identity),
        Ok(_) => None,
        Err(e) => {
            warn!(%platform, identifier, error = %e, "identity lookup failed; using fallback link");
            None
        }
    }
}

fn host_mention(host: SourceHost, base: &str, head: &str, tail: Option<&str>) -> Mention {
    match tail {
        None => Mention {
            identifier: head.to_owned(),
            profile_url: format!("{base}/{head}"),
            display: format!("@{head}"),
            is_group: false,
        },
        Some(tail) => {
            let profile_url = match host {
                SourceHost::GitHub => format!("{base}/orgs/{head}/teams/{tail}"),
                SourceHost::GitLab => format!("{base}/{head}/{tail}"),
            };
            Mention {
                identifier: format!("{head}/{tail}"),
                profile_url,
                display: format!("@{head}/{tail}"),
                is_group: true,
            }
        }
    }
}

/// Rewrite `@login` and `@org/team` mentions as chat mentions.
///
/// Mentions inside existing `<...>` links and bare URLs are left alone.
pub fn to_chat(
    text: &str,
    host: SourceHost,
    ctx: &ConversionContext,
    resolver: &dyn IdentityResolver,
) -> String {
    let g = grammar::markdown(host);
    let base = ctx.host_base_url();
    let (text, links) = stash_links(text);

    let mut resolved: HashMap<String, Option<Identity>> = HashMap::new();
    for caps in g.mention.captures_iter(&text) {
        if caps.get(3).is_some() {
            continue;
        }
        let login = &caps[2];
        if !resolved.contains_key(login) {
            let identity = lookup(resolver, Dialect::Slack, login);
            resolved.insert(login.to_owned(), identity);
        }
    }
    debug!(lookups = resolved.len(), "mention pass to chat");

    let out = g.mention.replace_all(&text, |caps: &Captures| {
        let mention = host_mention(host, &base, &caps[2], caps.get(3).map(|m| m.as_str()));
        let rendered = match resolved.get(&mention.identifier) {
            Some(Some(identity)) if !mention.is_group => identity.mention_token.clone(),
            _ => mention.chat_fallback(),
        };
        format!("{}{rendered}", &caps[1])
    });
    links.restore(&out)
}

/// Rewrite chat mentions as source-host mentions.
///
/// `<@U123>` resolves to the host account's mention token; user groups
/// and unresolved users become links into the chat workspace; `<!here>`
/// style broadcasts become plain `@here` text.
pub fn from_chat(
    text: &str,
    host: SourceHost,
    ctx: &ConversionContext,
    resolver: &dyn IdentityResolver,
) -> String {
    let base = ctx.chat_base_url();
    let platform = host.dialect();

    let text = CHAT.special_mention.replace_all(text, "@${1}");
    let text = CHAT.group_mention.replace_all(&text, |caps: &Captures| {
        let id = &caps[1];
        let display = caps
            .get(2)
            .map_or_else(|| format!("@{id}"), |m| at_prefixed(m.as_str()));
        Mention {
            identifier: id.to_owned(),
            profile_url: format!("{base}/usergroups/{id}"),
            display,
            is_group: true,
        }
        .markdown_fallback()
    });

    let mut resolved: HashMap<String, Option<Identity>> = HashMap::new();
    for caps in CHAT.user_mention.captures_iter(&text) {
        let id = &caps[1];
        if !resolved.contains_key(id) {
            resolved.insert(id.to_owned(), lookup(resolver, platform, id));
        }
    }
    debug!(lookups = resolved.len(), "mention pass from chat");

    CHAT.user_mention
        .replace_all(&text, |caps: &Captures| {
            let id = &caps[1];
            if let Some(Some(identity)) = resolved.get(id) {
                return identity.mention_token.clone();
            }
            let display = caps
                .get(2)
                .map_or_else(|| format!("@{id}"), |m| at_prefixed(m.as_str()));
            Mention {
                identifier: id.to_owned(),
                profile_url: format!("{base}/team/{id}"),
                display,
                is_group: false,
            }
            .markdown_fallback()
        })
        .into_owned()
}

fn at_prefixed(label: &str) -> String {
    if label.starts_with('@') {
        label.to_owned()
    } else {
        format!("@{label}")
    }
}
