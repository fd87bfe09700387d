//! Error types for resolute-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while normalizing a phrase.
///
/// A failed verb lookup changes what two phrases compare as, so it is never
/// downgraded to "no verbs found".
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// The lexical database backing verb detection could not be used.
    #[error("lexicon unavailable: {reason}")]
    LexiconUnavailable {
        /// Why the lexicon could not answer.
        reason: String,
    },

    /// A user-supplied lexicon word list could not be read.
    #[error("failed to read lexicon file {path}: {source}")]
    LexiconFile {
        /// The word list that was requested.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`NormalizeError`].
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// A request was denied because its token used up the window's quota.
///
/// Retryable: the caller should back off until the window expires.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("rate limit exceeded: {limit} requests per window")]
pub struct RateLimitExceeded {
    /// The limit that was applied.
    pub limit: u32,
    /// Remaining quota, always zero for a denial.
    pub remaining: u32,
}
