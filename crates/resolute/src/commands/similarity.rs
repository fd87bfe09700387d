//! Similarity command implementation

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use resolute_core::Config;
use resolute_core::similarity::{self, DUPLICATE_THRESHOLD};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `similarity` subcommand.
#[derive(Args, Debug)]
pub struct SimilarityArgs {
    /// First phrase
    pub first: String,

    /// Second phrase
    pub second: String,

    /// Score the phrases as given, without normalizing them first
    #[arg(long)]
    pub literal: bool,
}

#[derive(Serialize)]
struct SimilarityReport {
    first: String,
    second: String,
    score: f64,
    threshold: f64,
    duplicate: bool,
}

/// Score two phrases the way the dedup pass compares them.
#[instrument(name = "cmd_similarity", skip_all, fields(literal = args.literal))]
pub async fn cmd_similarity(
    args: SimilarityArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let (first, second) = if args.literal {
        (args.first, args.second)
    } else {
        let normalizer = super::build_normalizer(config).await?;
        let (first, second) = tokio::join!(
            normalizer.normalize(&args.first),
            normalizer.normalize(&args.second),
        );
        (
            first.context("failed to normalize first phrase")?,
            second.context("failed to normalize second phrase")?,
        )
    };

    let score = similarity::similarity(&first, &second);
    debug!(score, "executing similarity command");
    let report = SimilarityReport {
        duplicate: similarity::exceeds_threshold(score),
        first,
        second,
        score,
        threshold: DUPLICATE_THRESHOLD,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}: \"{}\"", "First".dimmed(), report.first);
        println!("{}: \"{}\"", "Second".dimmed(), report.second);
        let score = format!("{:.3}", report.score);
        if report.duplicate {
            println!("{}: {} ({})", "Score".dimmed(), score.yellow(), "duplicate".yellow());
        } else {
            println!("{}: {} ({})", "Score".dimmed(), score.green(), "distinct".green());
        }
    }
    Ok(())
}
