//! # relaymark-markup
//!
//! The markup translation engine. Converts message bodies between
//! GitHub/GitLab Markdown and Slack `mrkdwn`, and linkifies titles.
//!
//! The body pipeline runs these passes in order:
//!
//! - **[`list`]** -- whitespace cleanup and bullet lists
//! - **[`style`]** -- bold, italic, strikethrough, headers
//! - **[`link`]** -- links, images and `#123` references
//! - **[`mention`]** -- user and group mentions
//! - **[`emoji`]** -- emoji aliases and skin tones
//! - **[`shorten`]** -- link collapsing for over-long messages
//!
//! Code spans are lifted out first and restored verbatim at the end.
//! [`title`] is a separate entry point for titles, and [`cache`] holds a
//! caching wrapper for identity resolvers. [`Translator`] ties it together.

pub mod cache;
pub mod emoji;
pub mod grammar;
pub mod link;
pub mod list;
pub mod mention;
mod protect;
pub mod shorten;
pub mod style;
pub mod title;
pub mod translator;

pub use cache::CachingResolver;
pub use emoji::EmojiAliasTable;
pub use mention::Mention;
pub use title::{TitleLinkifier, linkify_title};
pub use translator::Translator;
