//! Dedup command implementation

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use resolute_core::dedup::{Candidate, DedupEngine, DedupReport, Suppression};
use resolute_core::{Config, generation};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `dedup` subcommand.
#[derive(Args, Debug)]
pub struct DedupArgs {
    /// Candidates, one per line (`-` for stdin)
    pub input: Utf8PathBuf,

    /// Seed phrases the user already has, one per line
    #[arg(long, value_name = "FILE")]
    pub seeds: Option<Utf8PathBuf>,

    /// A seed phrase (repeatable)
    #[arg(long, value_name = "PHRASE")]
    pub seed: Vec<String>,

    /// Treat the input as raw generated text (bulleted list ending in `-----`)
    #[arg(long)]
    pub raw: bool,

    /// Show the verdict for every candidate, not just the kept ones
    #[arg(long)]
    pub explain: bool,
}

#[derive(Serialize)]
struct DedupOutput {
    kept: Vec<String>,
    #[serde(flatten)]
    report: DedupReport,
}

/// Filter candidates against seeds and each other.
#[instrument(name = "cmd_dedup", skip_all, fields(input = %args.input, raw = args.raw))]
pub async fn cmd_dedup(
    args: DedupArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let content = super::read_input(&args.input, max_input)?;
    let candidates = if args.raw {
        generation::parse_generated_list(&content)
    } else {
        super::non_empty_lines(&content)
    };

    let mut seeds = args.seed;
    if let Some(ref path) = args.seeds {
        seeds.extend(super::non_empty_lines(&super::read_input_file(path, max_input)?));
    }
    debug!(
        candidates = candidates.len(),
        seeds = seeds.len(),
        "executing dedup command"
    );

    let engine = DedupEngine::new(super::build_normalizer(config).await?);
    let report = engine
        .filter_report(&candidates, &seeds)
        .await
        .context("failed to normalize phrases")?;

    if global_json {
        let output = DedupOutput {
            kept: report.kept(),
            report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if args.explain {
        print_explanation(&report, &seeds, &candidates);
    } else {
        for phrase in report.kept() {
            println!("{phrase}");
        }
    }
    Ok(())
}

fn print_explanation(report: &DedupReport, seeds: &[String], raw: &[String]) {
    for candidate in &report.candidates {
        println!("{} {}", verdict(candidate, seeds, raw), candidate.raw);
        println!("  {}: {}", "normalized".dimmed(), candidate.normalized);
    }
    if report.truncated > 0 {
        println!(
            "{}",
            format!("{} candidates past the cap were not considered", report.truncated).yellow()
        );
    }
    println!(
        "{}: {} kept, {} duplicates, {} malformed",
        "Summary".bold(),
        report.kept().len().green(),
        report.suppressed_count(),
        report.unclean_count()
    );
}

fn verdict(candidate: &Candidate, seeds: &[String], raw: &[String]) -> String {
    let lookup = |list: &[String], index: usize| list.get(index).cloned().unwrap_or_default();
    match candidate.suppressed {
        _ if !candidate.clean => "malformed".red().to_string(),
        Some(Suppression::Seed { index }) => {
            format!("{} (seed \"{}\")", "duplicate".yellow(), lookup(seeds, index))
        }
        Some(Suppression::Candidate { index }) => {
            format!("{} (\"{}\")", "duplicate".yellow(), lookup(raw, index))
        }
        None if candidate.raw.is_empty() => "empty".dimmed().to_string(),
        None => "kept".green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(raw: &str, clean: bool, suppressed: Option<Suppression>) -> Candidate {
        Candidate {
            raw: raw.to_string(),
            normalized: String::new(),
            index: 0,
            clean,
            suppressed,
        }
    }

    #[test]
    fn verdict_names_the_source() {
        let seeds = vec!["Save more money".to_string()];
        let raw = vec!["Read more books".to_string()];

        let seed_dup = candidate("Save money", true, Some(Suppression::Seed { index: 0 }));
        let text = verdict(&seed_dup, &seeds, &raw);
        assert!(text.contains("duplicate"));
        assert!(text.contains("(seed \"Save more money\")"));

        let cand_dup = candidate("Read books", true, Some(Suppression::Candidate { index: 0 }));
        assert!(verdict(&cand_dup, &seeds, &raw).contains("(\"Read more books\")"));

        // Malformed wins over any suppression
        let both = candidate("$$$", false, Some(Suppression::Seed { index: 0 }));
        assert!(verdict(&both, &seeds, &raw).contains("malformed"));
        assert!(verdict(&candidate("Adopt a cat", true, None), &seeds, &raw).contains("kept"));
    }
}
