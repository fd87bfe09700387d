//! Phrase normalization.
//!
//! Reduces a phrase to the tokens that carry meaning for comparison:
//!
//! 1. Treebank tokenization ([`tokenize`](crate::tokenize::tokenize))
//! 2. Lowercasing
//! 3. Verb removal, using verbs found by the [`Lexicon`] in the original text
//! 4. Stop-word removal ([`STOP_WORDS`](crate::word_lists::STOP_WORDS))
//! 5. Stemming with the Snowball English stemmer (Porter2)
//! 6. Empty-token removal, then joining with single spaces
//!
//! "Save more money" and "save money" both normalize to `money`.
//!
//! Porter2 revises the original 1980 Porter rules and conflates fewer
//! unrelated words: `skies` stems to `sky` rather than `ski`, and `news`
//! stays `news` rather than `new`.

use std::fmt;
use std::sync::Arc;

use rust_stemmers::{Algorithm, Stemmer};

use crate::error::NormalizeResult;
use crate::lexicon::{EmbeddedLexicon, Lexicon};
use crate::tokenize::tokenize;
use crate::word_lists::is_stop_word;

/// Normalizes phrases using an owned lexicon and stemmer.
///
/// Cheap to clone; clones share the lexicon.
#[derive(Clone)]
pub struct Normalizer {
    lexicon: Arc<dyn Lexicon>,
    stemmer: Arc<Stemmer>,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("lexicon", &self.lexicon.name())
            .finish_non_exhaustive()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Arc::new(EmbeddedLexicon::new()))
    }
}

impl Normalizer {
    /// Create a normalizer backed by `lexicon`.
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self {
            lexicon,
            stemmer: Arc::new(Stemmer::create(Algorithm::English)),
        }
    }

    /// Name of the lexicon in use.
    pub fn lexicon_name(&self) -> &str {
        self.lexicon.name()
    }

    /// Normalize `text` into a space-joined sequence of stems.
    ///
    /// # Errors
    ///
    /// Propagates lexicon failures; a phrase is never compared with its verbs
    /// silently left in.
    #[tracing::instrument(skip(self), fields(lexicon = self.lexicon.name()))]
    pub async fn normalize(&self, text: &str) -> NormalizeResult<String> {
        let verbs = self.lexicon.verbs(text).await?;

        let normalized = tokenize(text)
            .into_iter()
            .map(|token| token.to_lowercase())
            .filter(|token| !is_stop_word(token) && !verbs.contains(token))
            .map(|token| self.stemmer.stem(&token).into_owned())
            .filter(|stem| !stem.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        tracing::trace!(%normalized, verbs = verbs.len(), "normalized phrase");
        Ok(normalized)
    }
}
