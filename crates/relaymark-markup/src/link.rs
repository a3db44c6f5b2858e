//! Link, image and short-reference rewriting.

use regex::Captures;
use tracing::debug;

use relaymark_types::{ConversionContext, Reference, SourceHost};

use crate::grammar::{self, CHAT};
use crate::protect::stash_links;

/// Label prefix marking an image, which chat has no construct for.
pub const IMAGE_PREFIX: &str = "Image: ";

/// Rewrite Markdown links and images as chat hyperlinks and expand short
/// references against the thread URL.
pub fn to_chat(text: &str, host: SourceHost, ctx: &ConversionContext) -> String {
    let g = grammar::markdown(host);

    let text = g.image.replace_all(text, |caps: &Captures| {
        if caps[1].is_empty() {
            format!("{IMAGE_PREFIX}<{}>", &caps[2])
        } else {
            format!("{IMAGE_PREFIX}<{}|{}>", &caps[2], &caps[1])
        }
    });
    let text = g
        .link
        .replace_all(&text, |caps: &Captures| format!("<{}|{}>", &caps[2], &caps[1]));

    expand_references(&text, host, ctx)
}

/// Expand `#12` (and `!12` on GitLab) into links to sibling threads.
///
/// Left untouched when the context has no usable thread URL. Text inside
/// existing `<...>` links and bare URLs is never expanded.
pub fn expand_references(text: &str, host: SourceHost, ctx: &ConversionContext) -> String {
    let Some(thread) = ctx.thread() else {
        return text.to_owned();
    };
    let g = grammar::markdown(host);
    let (text, links) = stash_links(text);
    let mut expanded = 0usize;
    let out = g.reference.replace_all(&text, |caps: &Captures| {
        let literal = &caps[0];
        let Ok(number) = caps[3].parse::<u64>() else {
            return literal.to_owned();
        };
        let sigil = caps[2].chars().next().unwrap_or('#');
        let reference = Reference {
            owner: None,
            repo: None,
            sigil,
            number,
        };
        match reference.resolve(thread) {
            Some(url) => {
                expanded += 1;
                format!("{}<{url}|{sigil}{number}>", &caps[1])
            }
            None => literal.to_owned(),
        }
    });
    debug!(expanded, "reference pass");
    links.restore(&out)
}

/// Rewrite chat hyperlinks as Markdown links and images.
///
/// Bare `<url>` autolinks are valid Markdown and stay as they are.
pub fn from_chat(text: &str) -> String {
    let text = CHAT.image.replace_all(text, |caps: &Captures| {
        let alt = caps.get(2).map_or("", |m| m.as_str());
        format!("![{alt}]({})", &caps[1])
    });
    CHAT.link
        .replace_all(&text, |caps: &Captures| format!("[{}]({})", &caps[2], &caps[1]))
        .into_owned()
}
