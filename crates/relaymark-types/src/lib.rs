//! # relaymark-types
//!
//! Core type definitions for the relaymark markup translation engine.
//!
//! - **[`dialect`]** -- [`Dialect`], [`DialectPair`] and [`MarkupText`]
//! - **[`context`]** -- [`ConversionContext`], supplied per translation
//! - **[`thread`]** -- canonical thread URLs and short references
//! - **[`identity`]** -- the [`IdentityResolver`] collaborator
//! - **[`config`]** -- configuration schema and discovery
//! - **[`error`]** -- [`RelaymarkError`] and [`ResolveError`]

pub mod config;
pub mod context;
pub mod dialect;
pub mod error;
pub mod identity;
pub mod thread;

pub use config::RelaymarkConfig;
pub use context::ConversionContext;
pub use dialect::{Dialect, DialectPair, MarkupText, SourceHost};
pub use error::{RelaymarkError, ResolveError, Result};
pub use identity::{Identity, IdentityResolver, NoopResolver, StaticResolver};
pub use thread::{Reference, ThreadKind, ThreadUrl};
