//! Emoji alias normalization.
//!
//! Aliases are rewritten token by token (`:alias:`), independently of
//! every other transform. Toward chat, the two-way table is applied
//! forward and host-only variants are narrowed. Toward a host, the
//! two-way table is applied in reverse, explicit overrides pick the host
//! alias for collapsed chat aliases, and `:skin-tone-N:` modifiers are
//! dropped since neither host renders them.
//!
//! Narrowing is lossy: `:man_facepalming:` and `:woman_facepalming:` both
//! become `:face_palm:`, which widens back to `:facepalm:` on GitHub.

mod tables;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Captures;
use tracing::debug;

use relaymark_types::{DialectPair, SourceHost};

use crate::grammar::SHARED;

/// Alias tables for one source host.
#[derive(Debug, Clone, Copy)]
pub struct EmojiAliasTable {
    /// `(host, chat)` pairs that convert exactly both ways.
    pub two_way: &'static [(&'static str, &'static str)],
    /// `(host, chat)` pairs that only convert toward chat.
    pub narrowing: &'static [(&'static str, &'static str)],
    /// `(chat, host)` choices for chat aliases reached by several host
    /// aliases.
    pub overrides: &'static [(&'static str, &'static str)],
}

static GITHUB_TABLE: EmojiAliasTable = EmojiAliasTable {
    two_way: tables::GITHUB_TWO_WAY,
    narrowing: tables::GITHUB_NARROWING,
    overrides: tables::GITHUB_OVERRIDES,
};

static GITLAB_TABLE: EmojiAliasTable = EmojiAliasTable {
    two_way: tables::GITLAB_TWO_WAY,
    narrowing: tables::GITLAB_NARROWING,
    overrides: tables::GITLAB_OVERRIDES,
};

impl EmojiAliasTable {
    pub fn for_host(host: SourceHost) -> &'static Self {
        match host {
            SourceHost::GitHub => &GITHUB_TABLE,
            SourceHost::GitLab => &GITLAB_TABLE,
        }
    }

    /// Host alias -> chat alias.
    fn narrowing_map(&self) -> HashMap<&'static str, &'static str> {
        self.narrowing
            .iter()
            .chain(self.two_way)
            .copied()
            .collect()
    }

    /// Chat alias -> host alias.
    fn widening_map(&self) -> HashMap<&'static str, &'static str> {
        self.overrides
            .iter()
            .copied()
            .chain(self.two_way.iter().map(|&(host, chat)| (chat, host)))
            .collect()
    }
}

/// Compiled lookup maps for one host, both directions.
struct AliasMaps {
    narrow: HashMap<&'static str, &'static str>,
    widen: HashMap<&'static str, &'static str>,
}

impl AliasMaps {
    fn build(host: SourceHost) -> Self {
        let table = EmojiAliasTable::for_host(host);
        Self {
            narrow: table.narrowing_map(),
            widen: table.widening_map(),
        }
    }
}

static GITHUB_MAPS: LazyLock<AliasMaps> = LazyLock::new(|| AliasMaps::build(SourceHost::GitHub));
static GITLAB_MAPS: LazyLock<AliasMaps> = LazyLock::new(|| AliasMaps::build(SourceHost::GitLab));

fn maps(host: SourceHost) -> &'static AliasMaps {
    match host {
        SourceHost::GitHub => &GITHUB_MAPS,
        SourceHost::GitLab => &GITLAB_MAPS,
    }
}

fn rewrite(text: &str, map: &HashMap<&'static str, &'static str>) -> String {
    let mut rewritten = 0usize;
    let out = SHARED.emoji.replace_all(text, |caps: &Captures| match map.get(&caps[1]) {
        Some(alias) => {
            rewritten += 1;
            format!(":{alias}:")
        }
        None => caps[0].to_owned(),
    });
    debug!(rewritten, "emoji pass");
    out.into_owned()
}

/// Remove `:skin-tone-N:` tokens.
///
/// Repeated until nothing changes: removing a token can expose a colon
/// that starts a new one.
fn strip_skin_tones(text: &str) -> String {
    let mut text = text.to_owned();
    loop {
        let next = SHARED
            .emoji
            .replace_all(&text, |caps: &Captures| {
                if SHARED.skin_tone.is_match(&caps[1]) {
                    String::new()
                } else {
                    caps[0].to_owned()
                }
            })
            .into_owned();
        if next == text {
            return text;
        }
        text = next;
    }
}

/// Rewrite `host` aliases as chat aliases.
pub fn narrow(host: SourceHost, text: &str) -> String {
    rewrite(text, &maps(host).narrow)
}

/// Rewrite chat aliases as `host` aliases, dropping skin-tone modifiers.
pub fn widen(host: SourceHost, text: &str) -> String {
    rewrite(&strip_skin_tones(text), &maps(host).widen)
}

/// Normalize emoji aliases for `pair`.
pub fn convert(pair: DialectPair, text: &str) -> String {
    if pair.is_to_chat() {
        narrow(pair.host(), text)
    } else {
        widen(pair.host(), text)
    }
}
