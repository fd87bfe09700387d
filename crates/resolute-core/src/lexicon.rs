//! Verb lookup services used by the normalizer.
//!
//! A [`Lexicon`] answers one question: which words of a phrase are verbs.
//! Implementations are constructed explicitly and handed to the
//! [`Normalizer`](crate::normalize::Normalizer), so there is no process-wide
//! lookup state.
//!
//! - [`EmbeddedLexicon`] - the built-in verb dictionary
//! - [`FileLexicon`] - the built-in dictionary extended with a word list on disk

use std::collections::HashSet;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};

use crate::dictionaries::verbs;
use crate::error::{NormalizeError, NormalizeResult};
use crate::tokenize::lookup_words;
use crate::word_lists::is_stop_word;

/// A part-of-speech source that can identify verbs.
///
/// Lookups may suspend (a remote or on-disk database), so the trait is async.
/// Returning an error must mean the lexicon could not answer, never that the
/// phrase has no verbs.
#[async_trait]
pub trait Lexicon: Send + Sync {
    /// Return the lowercased words of `text` that are verbs.
    async fn verbs(&self, text: &str) -> NormalizeResult<HashSet<String>>;

    /// Short name for logs and diagnostics.
    fn name(&self) -> &str;
}

/// Collect the distinct, non-stop words of `text` that satisfy `is_verb`.
fn collect_verbs(text: &str, is_verb: impl Fn(&str) -> bool) -> HashSet<String> {
    lookup_words(text)
        .into_iter()
        .filter(|word| !is_stop_word(word))
        .filter(|word| is_verb(word))
        .collect()
}

/// Lexicon backed by the built-in verb dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLexicon;

impl EmbeddedLexicon {
    /// Create the embedded lexicon.
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Lexicon for EmbeddedLexicon {
    async fn verbs(&self, text: &str) -> NormalizeResult<HashSet<String>> {
        Ok(collect_verbs(text, verbs::is_verb_form))
    }

    fn name(&self) -> &str {
        "embedded"
    }
}

/// Lexicon that extends the built-in dictionary with a user word list.
///
/// The file holds one verb form per line; blank lines and lines starting
/// with `#` are ignored.
#[derive(Debug, Clone)]
pub struct FileLexicon {
    path: Utf8PathBuf,
    extra: HashSet<String>,
}

impl FileLexicon {
    /// Load a word list from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::LexiconFile`] if the file cannot be read.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub async fn load(path: &Utf8Path) -> NormalizeResult<Self> {
        let content = tokio::fs::read_to_string(path.as_std_path())
            .await
            .map_err(|source| NormalizeError::LexiconFile {
                path: path.to_path_buf(),
                source,
            })?;

        let extra: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        tracing::debug!(words = extra.len(), "loaded lexicon word list");
        Ok(Self {
            path: path.to_path_buf(),
            extra,
        })
    }

    /// Path the word list was loaded from.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Number of words contributed by the file.
    pub fn len(&self) -> usize {
        self.extra.len()
    }

    /// Returns `true` if the file contributed no words.
    pub fn is_empty(&self) -> bool {
        self.extra.is_empty()
    }
}

#[async_trait]
impl Lexicon for FileLexicon {
    async fn verbs(&self, text: &str) -> NormalizeResult<HashSet<String>> {
        Ok(collect_verbs(text, |word| {
            verbs::is_verb_form(word) || self.extra.contains(word)
        }))
    }

    fn name(&self) -> &str {
        "file"
    }
}
