//! Subcommand implementations and the helpers they share.

pub mod convert;
pub mod emoji;
pub mod title;

use std::io::Read;
use std::path::Path;

use relaymark_types::{ConversionContext, DialectPair, RelaymarkConfig};

/// Load the configuration.
///
/// Resolution order:
/// 1. `--config` path (must exist)
/// 2. `RELAYMARK_CONFIG` env var
/// 3. `<config_dir>/relaymark/config.json`
///
/// Returns the defaults if no config file is found.
pub fn load_config(config_override: Option<&str>) -> anyhow::Result<RelaymarkConfig> {
    let config = match config_override {
        Some(path_str) => {
            let path = Path::new(path_str);
            if !path.exists() {
                anyhow::bail!("config file not found: {path_str}");
            }
            RelaymarkConfig::load(path)
        }
        None => RelaymarkConfig::load_or_default(None),
    };
    config.map_err(|e| anyhow::anyhow!("failed to load config: {e}"))
}

/// Read the whole input: the named file, or stdin for `None` and `-`.
pub fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Build the context for one translation from config and flags.
///
/// Flags win over the config file.
pub fn build_context(
    pair: DialectPair,
    config: &RelaymarkConfig,
    thread_url: Option<String>,
    max_length: Option<usize>,
) -> ConversionContext {
    let mut ctx = ConversionContext::from_config(pair, config);
    if let Some(url) = thread_url {
        ctx = ctx.with_thread_url(url);
    }
    if let Some(max) = max_length {
        ctx = ctx.with_max_length(max);
    }
    ctx
}

/// Print `text` followed by exactly one newline.
pub fn print_output(text: &str) {
    println!("{}", text.trim_end_matches('\n'));
}
