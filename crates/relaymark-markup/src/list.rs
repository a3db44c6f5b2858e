//! Bullet list normalization.
//!
//! Markdown bullets (`-`, `*`, `+`) become chat bullets (`•` for the top
//! level, `◦` for one level of nesting). Nesting is read from the indent
//! width: 0 is the top level, 2 to 4 spaces under a top-level item is
//! nested. Deeper lists are left alone.
//!
//! This must run before style rewriting: a line-leading `* ` is a bullet
//! here, and the italic pass would otherwise see it as an opening marker.

use tracing::debug;

use relaymark_types::SourceHost;

use crate::grammar::{
    self, CHAT, CHAT_BULLET, CHAT_NESTED_BULLET, GITHUB, MARKDOWN_BULLET, MARKDOWN_NESTED_BULLET,
    MarkdownGrammar,
};

/// Width a leading tab expands to.
const TAB_WIDTH: usize = 4;

/// Clean up editor artifacts so indentation can be measured.
///
/// - CRLF and lone CR become LF.
/// - Trailing whitespace is stripped from every line.
/// - Leading tabs expand to four spaces.
/// - Blank lines between a list item and the following item or indented
///   continuation line are dropped.
pub fn normalize_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<String> = text.split('\n').map(expand_line).collect();

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    let mut in_list = false;
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            if in_list {
                let next = lines[i..].iter().find(|l| !l.is_empty());
                if next.is_some_and(|n| is_any_item(n) || n.starts_with(' ')) {
                    continue;
                }
            }
            in_list = false;
        } else if is_any_item(line) {
            in_list = true;
        } else if !line.starts_with(' ') {
            in_list = false;
        }
        out.push(line.as_str());
    }
    out.join("\n")
}

fn expand_line(line: &str) -> String {
    let line = line.trim_end();
    let body = line.trim_start_matches([' ', '\t']);
    let indent = &line[..line.len() - body.len()];
    if !indent.contains('\t') {
        return line.to_owned();
    }
    let mut expanded = String::with_capacity(indent.len() * TAB_WIDTH + body.len());
    for c in indent.chars() {
        if c == '\t' {
            expanded.push_str(&" ".repeat(TAB_WIDTH));
        } else {
            expanded.push(c);
        }
    }
    expanded.push_str(body);
    expanded
}

fn is_any_item(line: &str) -> bool {
    GITHUB.list_item.is_match(line)
        || CHAT.list_item.is_match(line)
        || CHAT.nested_list_item.is_match(line)
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Rewrite Markdown bullet lists as chat bullet lists.
///
/// Expects [`normalize_whitespace`] to have run first.
pub fn to_chat(text: &str, host: SourceHost) -> String {
    let grammar = grammar::markdown(host);
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut blocks = 0usize;

    let mut i = 0;
    while i < lines.len() {
        if !grammar.list_item.is_match(lines[i]) {
            out.push(lines[i].to_owned());
            i += 1;
            continue;
        }
        let start = i;
        i += 1;
        while i < lines.len()
            && (grammar.list_item.is_match(lines[i])
                || (lines[i].starts_with(' ') && !lines[i].trim().is_empty()))
        {
            i += 1;
        }
        blocks += 1;
        render_block(&lines[start..i], grammar, &mut out);
    }

    debug!(blocks, "list pass");
    out.join("\n")
}

/// Whether every item in `block` sits at the top level or one level below.
///
/// Nesting is judged per parent: the nested items under one top-level item
/// must share a single 2 to 4 space indent, but siblings under different
/// parents may use different ones.
fn fits_two_levels(block: &[&str], grammar: &MarkdownGrammar) -> bool {
    let mut nested_width = None;
    for line in block.iter().filter(|line| grammar.list_item.is_match(line)) {
        let width = indent_width(line);
        if width == 0 {
            nested_width = None;
            continue;
        }
        if !(2..=4).contains(&width) || nested_width.is_some_and(|w| w != width) {
            return false;
        }
        nested_width = Some(width);
    }
    true
}

/// Render one list block, or copy it verbatim if it nests too deeply.
fn render_block(block: &[&str], grammar: &MarkdownGrammar, out: &mut Vec<String>) {
    if !fits_two_levels(block, grammar) {
        out.extend(block.iter().map(|line| (*line).to_owned()));
        return;
    }

    let mut pad = " ".repeat(CHAT_BULLET.chars().count());
    for line in block {
        match grammar.list_item.captures(line) {
            Some(caps) => {
                let (bullet, width) = if caps[1].is_empty() {
                    (CHAT_BULLET, CHAT_BULLET.chars().count())
                } else {
                    (CHAT_NESTED_BULLET, CHAT_NESTED_BULLET.chars().count())
                };
                pad = " ".repeat(width);
                out.push(format!("{bullet}{}", &caps[3]));
            }
            None => out.push(format!("{pad}{}", line.trim_start())),
        }
    }
}

/// Rewrite chat bullet lists as Markdown bullet lists.
pub fn from_chat(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if let Some(caps) = CHAT.nested_list_item.captures(line) {
                format!("{MARKDOWN_NESTED_BULLET}{}", &caps[1])
            } else if let Some(caps) = CHAT.list_item.captures(line) {
                format!("{MARKDOWN_BULLET}{}", &caps[1])
            } else {
                line.to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gh(text: &str) -> String {
        to_chat(&normalize_whitespace(text), SourceHost::GitHub)
    }

    #[test]
    fn two_levels_use_fixed_markers() {
        assert_eq!(gh("- 1\n  - 2\n- 3"), "• 1\n    ◦ 2\n• 3");
    }

    #[test]
    fn all_bullet_characters_are_recognized() {
        assert_eq!(gh("* a\n+ b\n- c"), "• a\n• b\n• c");
        assert_eq!(gh("- a\n    * b"), "• a\n    ◦ b");
    }

    #[test]
    fn three_levels_pass_through() {
        let input = "- a\n  - b\n    - c";
        assert_eq!(gh(input), input);
    }

    #[test]
    fn siblings_may_use_different_indents() {
        assert_eq!(
            gh("- a\n  - b\n- c\n    - d"),
            "• a\n    ◦ b\n• c\n    ◦ d"
        );
    }

    #[test]
    fn mixed_indents_under_one_parent_pass_through() {
        let input = "- a\n  - b\n   - c";
        assert_eq!(gh(input), input);
    }

    #[test]
    fn odd_indent_passes_through() {
        let input = "- a\n       - b";
        assert_eq!(gh(input), input);
    }

    #[test]
    fn blank_lines_between_items_collapse() {
        assert_eq!(gh("- a\n\n- b\n\n\n  - c"), "• a\n• b\n    ◦ c");
    }

    #[test]
    fn blank_line_after_list_is_kept() {
        assert_eq!(gh("- a\n\nafter"), "• a\n\nafter");
    }

    #[test]
    fn continuation_lines_align_under_text() {
        assert_eq!(gh("- first\n\n   wrapped"), "• first\n  wrapped");
        assert_eq!(gh("- a\n  - b\n      more"), "• a\n    ◦ b\n      more");
    }

    #[test]
    fn tabs_and_crlf_are_normalized() {
        assert_eq!(gh("- a\r\n\t- b  \r\n"), "• a\n    ◦ b\n");
    }

    #[test]
    fn emphasis_at_line_start_is_not_a_bullet() {
        assert_eq!(gh("**bold** start"), "**bold** start");
        assert_eq!(gh("* *italic* item"), "• *italic* item");
    }

    #[test]
    fn text_without_lists_is_unchanged() {
        let input = "plain\n\nparagraphs  here";
        assert_eq!(to_chat(input, SourceHost::GitLab), input);
        assert_eq!(from_chat(input), input);
    }

    #[test]
    fn chat_lists_back_to_markdown() {
        assert_eq!(from_chat("• 1\n    ◦ 2\n• 3"), "- 1\n  - 2\n- 3");
    }

    #[test]
    fn round_trip_through_chat() {
        let input = "- 1\n  - 2\n- 3";
        assert_eq!(from_chat(&gh(input)), input);
    }
}
