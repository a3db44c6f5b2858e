//! `relaymark convert` -- translate a message body.
//!
//! # Example
//!
//! ```text
//! relaymark convert --from github --to slack body.md
//! echo '*done*' | relaymark convert --from slack --to gitlab
//! ```

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use relaymark_markup::Translator;
use relaymark_types::{Dialect, DialectPair, RelaymarkConfig};

use super::{build_context, print_output, read_input};

/// Arguments for the `relaymark convert` subcommand.
#[derive(Args)]
pub struct ConvertArgs {
    /// Dialect of the input (github, gitlab, slack).
    #[arg(long)]
    pub from: Dialect,

    /// Dialect to produce.
    #[arg(long)]
    pub to: Dialect,

    /// Canonical URL of the thread the message belongs to.
    #[arg(long)]
    pub thread_url: Option<String>,

    /// Chat message length budget in characters (overrides config).
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Input file. Reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,
}

/// Run the convert command.
pub fn run(args: ConvertArgs, config: &RelaymarkConfig) -> anyhow::Result<()> {
    let pair = DialectPair::try_new(args.from, args.to)?;
    let input = read_input(args.file.as_deref())?;
    let ctx = build_context(pair, config, args.thread_url, args.max_length);

    let resolver = config.resolver();
    debug!(%pair, identities = resolver.len(), "converting");
    let translator = Translator::with_resolver(resolver);

    print_output(&translator.translate_pair(pair, &input, &ctx));
    Ok(())
}
