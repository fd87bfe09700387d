//! Normalize command implementation

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use resolute_core::Config;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `normalize` subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Phrases to normalize
    #[arg(required = true)]
    pub phrases: Vec<String>,
}

#[derive(Serialize)]
struct Normalized {
    phrase: String,
    normalized: String,
}

/// Print the normalized form of each phrase.
#[instrument(name = "cmd_normalize", skip_all, fields(count = args.phrases.len()))]
pub async fn cmd_normalize(
    args: NormalizeArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let normalizer = super::build_normalizer(config).await?;
    debug!(lexicon = normalizer.lexicon_name(), "executing normalize command");

    let mut results = Vec::with_capacity(args.phrases.len());
    for phrase in args.phrases {
        let normalized = normalizer
            .normalize(&phrase)
            .await
            .with_context(|| format!("failed to normalize \"{phrase}\""))?;
        results.push(Normalized { phrase, normalized });
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!("{} {} {}", result.phrase, "->".dimmed(), result.normalized.cyan());
        }
    }
    Ok(())
}
