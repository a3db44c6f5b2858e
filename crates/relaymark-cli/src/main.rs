//! `relaymark` -- CLI binary for the relaymark markup translator.
//!
//! Provides the following subcommands:
//!
//! - `relaymark convert` -- Translate a message body between dialects.
//! - `relaymark title` -- Linkify tracker IDs and references in a title.
//! - `relaymark emoji` -- Normalize emoji aliases only.

use clap::{Parser, Subcommand};

mod commands;

/// relaymark markup translator.
#[derive(Parser)]
#[command(
    name = "relaymark",
    about = "Translate markup between GitHub, GitLab and Slack",
    version
)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (overrides auto-discovery).
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Translate a message body from one dialect to another.
    Convert(commands::convert::ConvertArgs),

    /// Linkify tracker IDs and short references in a title.
    Title(commands::title::TitleArgs),

    /// Normalize emoji aliases between dialects.
    Emoji(commands::emoji::EmojiArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, &config)?,
        Commands::Title(args) => commands::title::run(args, &config)?,
        Commands::Emoji(args) => commands::emoji::run(args)?,
    }

    Ok(())
}
