//! Bold, italic, strikethrough and header rewriting.
//!
//! Markdown and chat disagree on what a single `*` means (italic vs bold),
//! so bold and italic are rewritten in three passes:
//!
//! 1. Every bold span (including bold+italic and headers) is wrapped in
//!    [`BOLD_SENTINEL`] and re-nested so bold is always outermost.
//! 2. The remaining italic markers are rewritten.
//! 3. The sentinel becomes the target bold marker.
//!
//! Strikethrough markers are disjoint from the rest and handled on their
//! own. Unmatched markers stay literal.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use relaymark_types::SourceHost;

use crate::grammar::{self, BOLD_SENTINEL, CHAT};
use crate::protect::stash_sentinels;

/// `*<S>x<S>*` and `_<S>x<S>_`: italic wrapped around an extracted bold span.
static ITALIC_AROUND_BOLD: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new("\\*\u{E000}([^\u{E000}\n]+)\u{E000}\\*").unwrap(),
        Regex::new("_\u{E000}([^\u{E000}\n]+)\u{E000}_").unwrap(),
    ]
});

/// Bold markers left inside a header line.
static HEADER_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*|__").unwrap());

fn sentinel_wrap(inner: &str) -> String {
    format!("{BOLD_SENTINEL}{inner}{BOLD_SENTINEL}")
}

/// Put bold outside italic for spans that nest the other way round.
fn renest(text: &str) -> String {
    let mut text = text.to_owned();
    for pattern in ITALIC_AROUND_BOLD.iter() {
        text = pattern
            .replace_all(&text, |caps: &Captures| sentinel_wrap(&format!("_{}_", &caps[1])))
            .into_owned();
    }
    text
}

/// Rewrite Markdown emphasis as chat emphasis.
pub fn to_chat(text: &str, host: SourceHost) -> String {
    let (text, shelf) = stash_sentinels(text);
    shelf.restore(&markdown_to_chat(&text, host))
}

/// Rewrite chat emphasis as Markdown emphasis.
pub fn from_chat(text: &str) -> String {
    let (text, shelf) = stash_sentinels(text);
    shelf.restore(&chat_to_markdown(&text))
}

fn markdown_to_chat(text: &str, host: SourceHost) -> String {
    let g = grammar::markdown(host);

    let text = g.strikethrough.replace_all(text, "~${1}~");

    // Pass 1: extract bold.
    let text = g.header.replace_all(&text, |caps: &Captures| {
        let title = HEADER_BOLD.replace_all(&caps[2], "");
        sentinel_wrap(&format!("{} {title}", &caps[1]))
    });
    let text = g.bold_italic_star.replace_all(&text, |caps: &Captures| {
        sentinel_wrap(&format!("_{}_", &caps[1]))
    });
    let text = g.bold_italic_underscore.replace_all(&text, |caps: &Captures| {
        sentinel_wrap(&format!("_{}_", &caps[1]))
    });
    let text = g
        .bold_star
        .replace_all(&text, |caps: &Captures| sentinel_wrap(&caps[1]));
    let text = g
        .bold_underscore
        .replace_all(&text, |caps: &Captures| sentinel_wrap(&caps[1]));
    let text = renest(&text);

    // Pass 2: italic. `_x_` is already the chat form.
    let text = g.italic_star.replace_all(&text, "_${1}_");

    // Pass 3: restore bold.
    let out = text.replace(BOLD_SENTINEL, "*");
    debug!(changed = out != text, "style pass to chat");
    out
}

fn chat_to_markdown(text: &str) -> String {
    let text = CHAT.strikethrough.replace_all(text, "~~${1}~~");

    // Pass 1: extract bold.
    let text = CHAT
        .bold
        .replace_all(&text, |caps: &Captures| sentinel_wrap(&caps[1]));
    let text = renest(&text);

    // Pass 2: italic markers coincide (`_x_`), nothing to rewrite.

    // Pass 3: restore bold.
    let out = text.replace(BOLD_SENTINEL, "**");
    debug!(changed = out != text, "style pass from chat");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gh(text: &str) -> String {
        to_chat(text, SourceHost::GitHub)
    }

    #[test]
    fn bold() {
        assert_eq!(gh("**bold**"), "*bold*");
        assert_eq!(gh("__bold__"), "*bold*");
        assert_eq!(from_chat("*bold*"), "**bold**");
    }

    #[test]
    fn italic() {
        assert_eq!(gh("*italic*"), "_italic_");
        assert_eq!(gh("_italic_"), "_italic_");
        assert_eq!(from_chat("_italic_"), "_italic_");
    }

    #[test]
    fn strikethrough() {
        assert_eq!(gh("~~gone~~"), "~gone~");
        assert_eq!(from_chat("~gone~"), "~~gone~~");
    }

    #[test]
    fn bold_and_italic_in_one_line() {
        assert_eq!(
            gh("**bold** and *italic* and ~~struck~~"),
            "*bold* and _italic_ and ~struck~"
        );
    }

    #[test]
    fn nesting_normalizes_to_bold_outside() {
        assert_eq!(gh("***both***"), "*_both_*");
        assert_eq!(gh("___both___"), "*_both_*");
        assert_eq!(gh("**_both_**"), "*_both_*");
        assert_eq!(gh("_**both**_"), "*_both_*");
        assert_eq!(gh("***both***"), gh("*__both__*"));
        assert_eq!(from_chat("*_both_*"), "**_both_**");
        assert_eq!(from_chat("_*both*_"), "**_both_**");
    }

    #[test]
    fn several_short_spans_on_one_line() {
        assert_eq!(gh("**a** and **b**"), "*a* and *b*");
        assert_eq!(gh("step **1** of **2**"), "step *1* of *2*");
        assert_eq!(gh("__a__ and __b__"), "*a* and *b*");
        assert_eq!(gh("~~a~~ and ~~b~~"), "~a~ and ~b~");
        assert_eq!(gh("***a*** x ***b***"), "*_a_* x *_b_*");
        assert_eq!(gh("**ab** and **cd**"), "*ab* and *cd*");
        assert_eq!(from_chat("*a* and *b* ~c~ ~d~"), "**a** and **b** ~~c~~ ~~d~~");
    }

    #[test]
    fn round_trip_with_short_spans() {
        let markdown = "**a** _b_ ~~c~~ **d**";
        assert_eq!(from_chat(&gh(markdown)), markdown);
    }

    #[test]
    fn private_use_characters_pass_through() {
        assert_eq!(gh("a \u{E000} b"), "a \u{E000} b");
        assert_eq!(gh("**x** \u{E000}"), "*x* \u{E000}");
        assert_eq!(from_chat("\u{E000}*y*\u{E000}"), "\u{E000}**y**\u{E000}");
    }

    #[test]
    fn italic_inside_bold_text() {
        assert_eq!(gh("**bold with *italic* inside**"), "*bold with _italic_ inside*");
    }

    #[test]
    fn headers_keep_hash_run() {
        assert_eq!(gh("# Title"), "*# Title*");
        assert_eq!(gh("### Deep **title**"), "*### Deep title*");
        assert_eq!(gh("intro\n## Section\nbody"), "intro\n*## Section*\nbody");
        assert_eq!(gh("#hashtag"), "#hashtag");
    }

    #[test]
    fn unmatched_markers_are_literal() {
        assert_eq!(gh("2 * 3 * 4"), "2 * 3 * 4");
        assert_eq!(gh("**unclosed"), "**unclosed");
        assert_eq!(gh("a ~~ b"), "a ~~ b");
        assert_eq!(from_chat("*unclosed"), "*unclosed");
        assert_eq!(from_chat("5 * 6"), "5 * 6");
    }

    #[test]
    fn chat_bullets_are_not_touched() {
        assert_eq!(gh("• item\n    ◦ *sub*"), "• item\n    ◦ _sub_");
    }

    #[test]
    fn round_trip_without_conflicts() {
        let markdown = "**b** _i_ ~~s~~";
        assert_eq!(from_chat(&gh(markdown)), markdown);
        let chat = "*b* _i_ ~s~";
        assert_eq!(gh(&from_chat(chat)), chat);
    }

    #[test]
    fn plain_text_is_unchanged() {
        let input = "nothing to see here";
        assert_eq!(gh(input), input);
        assert_eq!(from_chat(input), input);
    }
}
