//! Message-length enforcement by link collapsing.

use regex::Captures;
use tracing::debug;

use crate::grammar::SHARED;

/// Collapse every `<url|label>` link to `<short_url|label>` when `text` is
/// longer than `budget` characters.
///
/// All or nothing: a message within budget is returned as is, long links
/// included. Over budget, every link is rewritten whatever its length.
/// The result is not truncated and may still exceed the budget.
pub fn shorten_links(text: &str, budget: usize, short_url: &str) -> String {
    shorten_measured(text, text.chars().count(), budget, short_url)
}

/// Like [`shorten_links`], with the message length measured by the caller.
///
/// Used when `text` still holds placeholders whose final length differs
/// from what the reader will see.
pub fn shorten_measured(text: &str, length: usize, budget: usize, short_url: &str) -> String {
    if length <= budget {
        return text.to_owned();
    }
    let mut collapsed = 0usize;
    let out = SHARED.hyperlink.replace_all(text, |caps: &Captures| {
        collapsed += 1;
        format!("<{short_url}|{}>", &caps[2])
    });
    debug!(length, budget, collapsed, "message over budget; links collapsed");
    out.into_owned()
}
