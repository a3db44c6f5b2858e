//! Spans lifted out of the text while rewriting passes run.
//!
//! Code must come out of a translation exactly as it went in, and URLs
//! must not be read as emphasis (`~user`, `a_b_c`). Both are swapped for
//! numbered placeholders bracketed by a private-use sentinel and put back
//! afterwards.
//!
//! Sentinel characters already present in the input are shelved as code
//! first, so every sentinel the passes see is one of ours.

use regex::{Captures, Regex};

use crate::grammar::{CODE_SENTINEL, SHARED, URL_SENTINEL};

#[derive(Debug)]
pub(crate) struct Shelf {
    sentinel: char,
    placeholder: &'static Regex,
    spans: Vec<String>,
}

impl Shelf {
    pub(crate) fn code() -> Self {
        Self {
            sentinel: CODE_SENTINEL,
            placeholder: &SHARED.code_placeholder,
            spans: Vec::new(),
        }
    }

    pub(crate) fn urls() -> Self {
        Self {
            sentinel: URL_SENTINEL,
            placeholder: &SHARED.url_placeholder,
            spans: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.spans.len()
    }

    /// Replace every match of `pattern` with a placeholder.
    ///
    /// Placeholders from earlier stashes inside a match are resolved
    /// before the span is stored, so [`Shelf::restore`] needs one pass.
    pub(crate) fn stash(&mut self, text: &str, pattern: &Regex) -> String {
        let sentinel = self.sentinel;
        let placeholder = self.placeholder;
        let spans = &mut self.spans;
        pattern
            .replace_all(text, |caps: &Captures| {
                let span = resolve(placeholder, spans, &caps[0]);
                spans.push(span);
                format!("{sentinel}{}{sentinel}", spans.len() - 1)
            })
            .into_owned()
    }

    /// Put every stashed span back.
    ///
    /// Placeholders that do not name a stashed span are left as they are.
    pub(crate) fn restore(&self, text: &str) -> String {
        resolve(self.placeholder, &self.spans, text)
    }
}

fn resolve(placeholder: &Regex, spans: &[String], text: &str) -> String {
    if spans.is_empty() {
        return text.to_owned();
    }
    placeholder
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| spans.get(index))
                .map_or_else(|| caps[0].to_owned(), Clone::clone)
        })
        .into_owned()
}

/// Lift stray sentinels, fenced blocks, then inline code spans out of
/// `text`.
pub(crate) fn stash_code(text: &str) -> (String, Shelf) {
    let mut shelf = Shelf::code();
    let text = shelf.stash(text, &SHARED.sentinel);
    let text = shelf.stash(&text, &SHARED.code_fence);
    let text = shelf.stash(&text, &SHARED.code_inline);
    (text, shelf)
}

/// Lift sentinel characters out of `text`, for passes that run on their
/// own outside the full pipeline.
pub(crate) fn stash_sentinels(text: &str) -> (String, Shelf) {
    let mut shelf = Shelf::code();
    let text = shelf.stash(text, &SHARED.sentinel);
    (text, shelf)
}

/// Lift bare URLs out of `text`.
pub(crate) fn stash_urls(text: &str) -> (String, Shelf) {
    let mut shelf = Shelf::urls();
    let text = shelf.stash(text, &SHARED.url);
    (text, shelf)
}

/// Lift finished chat tokens (`<url|label>`, `<@U1>`) and bare URLs out of
/// `text`, so later passes cannot rewrite inside them.
pub(crate) fn stash_links(text: &str) -> (String, Shelf) {
    let mut shelf = Shelf::urls();
    let text = shelf.stash(text, &SHARED.chat_token);
    let text = shelf.stash(&text, &SHARED.url);
    (text, shelf)
}
