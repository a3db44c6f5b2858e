//! `relaymark emoji` -- normalize emoji aliases without touching anything
//! else.

use std::path::PathBuf;

use clap::Args;

use relaymark_markup::emoji;
use relaymark_types::{Dialect, DialectPair};

use super::{print_output, read_input};

/// Arguments for the `relaymark emoji` subcommand.
#[derive(Args)]
pub struct EmojiArgs {
    /// Dialect of the input (github, gitlab, slack).
    #[arg(long)]
    pub from: Dialect,

    /// Dialect to produce.
    #[arg(long)]
    pub to: Dialect,

    /// Input file. Reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,
}

/// Run the emoji command.
pub fn run(args: EmojiArgs) -> anyhow::Result<()> {
    let pair = DialectPair::try_new(args.from, args.to)?;
    let input = read_input(args.file.as_deref())?;
    print_output(&emoji::convert(pair, &input));
    Ok(())
}
