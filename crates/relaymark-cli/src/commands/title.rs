//! `relaymark title` -- linkify a pull request or issue title.

use clap::Args;

use relaymark_markup::linkify_title;
use relaymark_types::{DialectPair, RelaymarkConfig, SourceHost, ThreadUrl};

use super::{build_context, print_output};

/// Arguments for the `relaymark title` subcommand.
#[derive(Args)]
pub struct TitleArgs {
    /// Canonical URL of the thread the title belongs to.
    #[arg(long)]
    pub thread_url: Option<String>,

    /// The title text.
    pub title: String,
}

/// Run the title command.
pub fn run(args: TitleArgs, config: &RelaymarkConfig) -> anyhow::Result<()> {
    let host = args
        .thread_url
        .as_deref()
        .and_then(ThreadUrl::parse)
        .map_or(SourceHost::GitHub, |thread| thread.host);
    let pair = match host {
        SourceHost::GitHub => DialectPair::GitHubToSlack,
        SourceHost::GitLab => DialectPair::GitLabToSlack,
    };
    let ctx = build_context(pair, config, args.thread_url, None);
    print_output(&linkify_title(&args.title, &ctx));
    Ok(())
}
