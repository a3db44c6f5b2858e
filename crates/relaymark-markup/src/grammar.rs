//! Per-dialect token patterns.
//!
//! Everything here is data: compiled regexes and the fixed marker strings
//! the transforms emit. Patterns are compiled once on first use.

use std::sync::LazyLock;

use regex::Regex;

use relaymark_types::SourceHost;

/// Stands in for a target bold marker while the italic pass runs.
///
/// A private-use code point, so it can never collide with a live marker.
pub const BOLD_SENTINEL: char = '\u{E000}';

/// Brackets the index of a protected code span.
pub const CODE_SENTINEL: char = '\u{E001}';

/// Brackets the index of a URL shielded from the style pass.
pub const URL_SENTINEL: char = '\u{E002}';

/// Chat bullet for top-level list items.
pub const CHAT_BULLET: &str = "• ";

/// Chat bullet for nested list items, including its padding.
pub const CHAT_NESTED_BULLET: &str = "    ◦ ";

/// Markdown bullet emitted when translating chat lists back.
pub const MARKDOWN_BULLET: &str = "- ";

/// Markdown nested bullet emitted when translating chat lists back.
pub const MARKDOWN_NESTED_BULLET: &str = "  - ";

/// Patterns for a source host's Markdown dialect.
pub struct MarkdownGrammar {
    pub host: SourceHost,
    /// `# Title` at line start.
    pub header: Regex,
    /// `***x***`.
    pub bold_italic_star: Regex,
    /// `___x___`.
    pub bold_italic_underscore: Regex,
    /// `**x**`.
    pub bold_star: Regex,
    /// `__x__`.
    pub bold_underscore: Regex,
    /// `*x*`.
    pub italic_star: Regex,
    /// `~~x~~`.
    pub strikethrough: Regex,
    /// A bullet line: indent, marker, text.
    pub list_item: Regex,
    /// `![alt](url)` with optional title and attribute block.
    pub image: Regex,
    /// `[text](url)` with optional title and attribute block.
    pub link: Regex,
    /// `#12` (and `!12` on GitLab) not glued to a word.
    pub reference: Regex,
    /// `@login` or `@org/team`.
    pub mention: Regex,
}

/// Patterns for Slack `mrkdwn`.
pub struct ChatGrammar {
    /// `*x*`.
    pub bold: Regex,
    /// `~x~`.
    pub strikethrough: Regex,
    /// `• item`.
    pub list_item: Regex,
    /// `    ◦ item`.
    pub nested_list_item: Regex,
    /// `Image: <url|alt>` or `Image: <url>`.
    pub image: Regex,
    /// `<url|text>`.
    pub link: Regex,
    /// `<@U123>` or `<@U123|name>`.
    pub user_mention: Regex,
    /// `<!subteam^S123|@team>`.
    pub group_mention: Regex,
    /// `<!here>`, `<!channel>`, `<!everyone>`.
    pub special_mention: Regex,
}

/// Patterns that mean the same thing in every dialect.
pub struct SharedGrammar {
    /// Fenced code block.
    pub code_fence: Regex,
    /// Inline code span.
    pub code_inline: Regex,
    /// `:alias:`.
    pub emoji: Regex,
    /// `skin-tone-<digit>` (alias body only).
    pub skin_tone: Regex,
    /// Tracker IDs and short references in titles. Existing `<...>` links
    /// match as a whole so they are skipped.
    pub title_token: Regex,
    /// `<url|label>`, the form the shortener rewrites.
    pub hyperlink: Regex,
    /// Bare URL. Never ends in emphasis markers or sentence punctuation.
    pub url: Regex,
    /// Any angle-bracketed chat token: `<url|label>`, `<url>`, `<@U1>`.
    pub chat_token: Regex,
    /// Any of the private-use sentinels.
    pub sentinel: Regex,
    /// Protected code span placeholder.
    pub code_placeholder: Regex,
    /// Shielded URL placeholder.
    pub url_placeholder: Regex,
}

fn markdown_grammar(host: SourceHost) -> MarkdownGrammar {
    let (reference, mention) = match host {
        SourceHost::GitHub => (
            r"(^|[^\w&/#!|\]])(#)(\d+)\b",
            r"(^|[^\w/.@|<])@([A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)(?:/([A-Za-z0-9](?:[A-Za-z0-9_.-]*[A-Za-z0-9_])?))?",
        ),
        SourceHost::GitLab => (
            r"(^|[^\w&/#!|\]])([#!])(\d+)\b",
            r"(^|[^\w/.@|<])@([A-Za-z0-9_](?:[A-Za-z0-9_.-]*[A-Za-z0-9_])?)(?:/([A-Za-z0-9_](?:[A-Za-z0-9_./-]*[A-Za-z0-9_])?))?",
        ),
    };
    MarkdownGrammar {
        host,
        header: Regex::new(r"(?m)^(#{1,6})[ \t]+([^\n]*?)[ \t]*$").unwrap(),
        bold_italic_star: Regex::new(r"\*\*\*([^\s*]|[^\s*][^\n]*?[^\s*])\*\*\*").unwrap(),
        bold_italic_underscore: Regex::new(r"___([^\s_]|[^\s_][^\n]*?[^\s_])___").unwrap(),
        bold_star: Regex::new(r"\*\*([^\s*]|[^\s*][^\n]*?[^\s*])\*\*").unwrap(),
        bold_underscore: Regex::new(r"__([^\s_]|[^\s_][^\n]*?[^\s_])__").unwrap(),
        italic_star: Regex::new(r"\*([^\s*](?:[^*\n]*?[^\s*])?)\*").unwrap(),
        strikethrough: Regex::new(r"~~([^\s~]|[^\s~][^\n]*?[^\s~])~~").unwrap(),
        list_item: Regex::new(r"^( *)([-*+])[ \t]+(.*)$").unwrap(),
        image: Regex::new(
            r#"!\[([^\]\n]*)\]\(\s*([^)\s]+)(?:\s+"[^"\n]*")?\s*\)(?:\{[^}\n]*\})?"#,
        )
        .unwrap(),
        link: Regex::new(
            r#"\[([^\]\n]+)\]\(\s*([^)\s]+)(?:\s+"[^"\n]*")?\s*\)(?:\{[^}\n]*\})?"#,
        )
        .unwrap(),
        reference: Regex::new(reference).unwrap(),
        mention: Regex::new(mention).unwrap(),
    }
}

pub static GITHUB: LazyLock<MarkdownGrammar> =
    LazyLock::new(|| markdown_grammar(SourceHost::GitHub));

pub static GITLAB: LazyLock<MarkdownGrammar> =
    LazyLock::new(|| markdown_grammar(SourceHost::GitLab));

pub static CHAT: LazyLock<ChatGrammar> = LazyLock::new(|| ChatGrammar {
    bold: Regex::new(r"\*([^\s*](?:[^*\n]*?[^\s*])?)\*").unwrap(),
    strikethrough: Regex::new(r"~([^\s~](?:[^~\n]*?[^\s~])?)~").unwrap(),
    list_item: Regex::new(r"^• ?(.*)$").unwrap(),
    nested_list_item: Regex::new(r"^ +◦ ?(.*)$").unwrap(),
    image: Regex::new(r"Image: <((?:https?|mailto):[^|>\s]+)(?:\|([^>\n]*))?>").unwrap(),
    link: Regex::new(r"<((?:https?|mailto):[^|>\s]+)\|([^>\n]+)>").unwrap(),
    user_mention: Regex::new(r"<@([UW][A-Z0-9]+)(?:\|([^>\n]+))?>").unwrap(),
    group_mention: Regex::new(r"<!subteam\^([A-Z0-9]+)(?:\|([^>\n]+))?>").unwrap(),
    special_mention: Regex::new(r"<!(here|channel|everyone)(?:\|[^>\n]*)?>").unwrap(),
});

pub static SHARED: LazyLock<SharedGrammar> = LazyLock::new(|| SharedGrammar {
    code_fence: Regex::new(r"(?s)```.*?```").unwrap(),
    code_inline: Regex::new(r"`[^`\n]+`").unwrap(),
    emoji: Regex::new(r":([A-Za-z0-9_+\-]+):").unwrap(),
    skin_tone: Regex::new(r"^skin-tone-[0-9]$").unwrap(),
    title_token: Regex::new(
        r"(?P<link><[^<>\n]*>)|(?P<tracker>\b[A-Z][A-Z0-9]+-\d+\b)|(?:(?:(?P<owner>[A-Za-z0-9_.-]+(?:/[A-Za-z0-9_.-]+)*)/)?(?P<repo>[A-Za-z0-9_.-]+))?(?P<sigil>[#!])(?P<number>\d+)\b",
    )
    .unwrap(),
    hyperlink: Regex::new(r"<((?:https?|mailto):[^|>\s]+)\|([^>]*)>").unwrap(),
    url: Regex::new(r"(?:https?|mailto):[^\s<>|()\[\]*]*[^\s<>|()\[\]*~_.,;:!?]").unwrap(),
    chat_token: Regex::new(r"<[^<>\s][^<>\n]*>").unwrap(),
    sentinel: Regex::new("[\u{E000}-\u{E002}]").unwrap(),
    code_placeholder: Regex::new("\u{E001}(\\d+)\u{E001}").unwrap(),
    url_placeholder: Regex::new("\u{E002}(\\d+)\u{E002}").unwrap(),
});

/// The Markdown grammar for `host`.
pub fn markdown(host: SourceHost) -> &'static MarkdownGrammar {
    match host {
        SourceHost::GitHub => &GITHUB,
        SourceHost::GitLab => &GITLAB,
    }
}
