//! Library interface for the `resolute` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions via `xtask`.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                      Log filter (e.g., debug, resolute_core=trace)
    RESOLUTE_LOG_PATH             Explicit log file path
    RESOLUTE_LOG_DIR              Log directory
    RESOLUTE_LEXICON_FILE         Extra verb forms, one per line
    RESOLUTE_RATE_LIMIT__LIMIT    Requests per client per window (MCP server)
";
/// Command-line interface definition for resolute.
#[derive(Parser)]
#[command(name = "resolute")]
#[command(
    about = "Keep only novel, well-formed suggestions from generated lists",
    long_about = None
)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Filter generated suggestions against seeds and each other
    Dedup(commands::dedup::DedupArgs),

    /// Show the normalized form of phrases
    Normalize(commands::normalize::NormalizeArgs),

    /// Score how similar two phrases are
    Similarity(commands::similarity::SimilarityArgs),

    /// Keep the well-formed items from generated next steps
    NextSteps(commands::next_steps::NextStepsArgs),

    /// Print a generation prompt
    Prompt(commands::prompt::PromptArgs),

    /// Show package information
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn dedup_args_parse() {
        let cli = Cli::try_parse_from([
            "resolute",
            "--json",
            "dedup",
            "candidates.txt",
            "--seed",
            "Save more money",
            "--seeds",
            "seeds.txt",
        ])
        .unwrap();
        assert!(cli.json);
        let Some(Commands::Dedup(args)) = cli.command else {
            panic!("expected dedup command");
        };
        assert_eq!(args.input.as_str(), "candidates.txt");
        assert_eq!(args.seed, vec!["Save more money"]);
        assert_eq!(args.seeds.as_ref().map(|p| p.as_str()), Some("seeds.txt"));
    }
}
