//! Core library for resolute.
//!
//! Filters batches of generated suggestions so that only novel, well-formed
//! phrases reach the user, and rate-limits the clients asking for them.
//!
//! # Modules
//!
//! - [`normalize`] - Reduce a phrase to comparable stems
//! - [`quality`] - Reject malformed phrases by punctuation density
//! - [`similarity`] - Jaro-Winkler scoring and the duplicate threshold
//! - [`dedup`] - Seed and cross-candidate duplicate suppression
//! - [`rate_limit`] - Per-token request counting
//! - [`generation`] - Prompt building and generated-output parsing
//! - [`lexicon`] - Verb lookup services
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use resolute_core::DedupEngine;
//!
//! # async fn run() -> resolute_core::NormalizeResult<()> {
//! let engine = DedupEngine::default();
//! let kept = engine
//!     .filter(
//!         &["Read more books", "Read books more often", "Exercise daily"],
//!         &["Save more money"],
//!     )
//!     .await?;
//! assert_eq!(kept, vec!["Read more books", "Exercise daily"]);
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dedup;
pub mod dictionaries;
pub mod error;
pub mod generation;
pub mod lexicon;
pub mod normalize;
pub mod quality;
pub mod rate_limit;
pub mod similarity;
pub mod tokenize;
pub mod word_lists;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, RateLimitConfig};
pub use dedup::{Candidate, DedupEngine, DedupReport, MAX_CANDIDATES, Suppression};
pub use error::{
    ConfigError, ConfigResult, NormalizeError, NormalizeResult, RateLimitExceeded,
};
pub use lexicon::{EmbeddedLexicon, FileLexicon, Lexicon};
pub use normalize::Normalizer;
pub use rate_limit::{RateLimitStatus, RateLimiter};
pub use similarity::DUPLICATE_THRESHOLD;

/// Default maximum input size: 1 MiB.
///
/// Generated lists and seed files are a few hundred bytes; anything much
/// larger is not a suggestion batch.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1_048_576;
