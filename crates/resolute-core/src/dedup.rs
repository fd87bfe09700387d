//! Novelty filtering for generated suggestion batches.
//!
//! Given raw candidates from a generation backend and the seed phrases the
//! caller already has, keep only candidates that are well formed, not close
//! to any seed, and not close to an earlier candidate.
//!
//! Candidates are compared on their normalized forms (see
//! [`Normalizer`]). Among mutually similar candidates the one generated
//! first wins; a candidate that was itself suppressed still suppresses later
//! candidates it resembles. Similarity is not closed transitively, so two
//! candidates that each resemble a third but not each other can both
//! survive.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NormalizeResult;
use crate::normalize::Normalizer;
use crate::quality;
use crate::similarity;

/// Maximum number of raw candidates considered per batch.
pub const MAX_CANDIDATES: usize = 6;

/// Why a candidate was suppressed as a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suppression {
    /// Too similar to the seed at this index.
    Seed {
        /// Index into the seed list.
        index: usize,
    },
    /// Too similar to the earlier candidate at this index.
    Candidate {
        /// Index into the candidate batch.
        index: usize,
    },
}

/// One generated phrase and its dedup verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Candidate {
    /// Phrase as generated.
    pub raw: String,
    /// Normalized form used for comparison.
    pub normalized: String,
    /// Position in the generated batch.
    pub index: usize,
    /// Whether the phrase passed the punctuation check.
    pub clean: bool,
    /// Set when the phrase duplicates a seed or an earlier candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppressed: Option<Suppression>,
}

impl Candidate {
    /// Returns `true` if the candidate was marked as a duplicate.
    pub const fn is_suppressed(&self) -> bool {
        self.suppressed.is_some()
    }

    /// Returns `true` if the candidate belongs in the filtered output.
    pub fn is_kept(&self) -> bool {
        !self.raw.is_empty() && self.clean && self.suppressed.is_none()
    }
}

/// Full outcome of a dedup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DedupReport {
    /// Every considered candidate, in generation order.
    pub candidates: Vec<Candidate>,
    /// Raw candidates dropped by the [`MAX_CANDIDATES`] cap.
    pub truncated: usize,
    /// Normalized seed phrases, in input order.
    pub seeds: Vec<String>,
}

impl DedupReport {
    /// Kept phrases, in generation order.
    pub fn kept(&self) -> Vec<String> {
        self.candidates
            .iter()
            .filter(|c| c.is_kept())
            .map(|c| c.raw.clone())
            .collect()
    }

    /// Number of candidates rejected by the punctuation check.
    pub fn unclean_count(&self) -> usize {
        self.candidates.iter().filter(|c| !c.clean).count()
    }

    /// Number of candidates suppressed as duplicates.
    pub fn suppressed_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.is_suppressed()).count()
    }
}

/// Filters generated candidates against seeds and each other.
#[derive(Debug, Clone, Default)]
pub struct DedupEngine {
    normalizer: Normalizer,
}

impl DedupEngine {
    /// Create an engine that compares phrases with `normalizer`.
    pub const fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// The normalizer used for comparisons.
    pub const fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Return the novel, well-formed candidates in generation order.
    ///
    /// An empty result is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Fails if any phrase cannot be normalized.
    pub async fn filter<C, S>(&self, raw_candidates: &[C], seeds: &[S]) -> NormalizeResult<Vec<String>>
    where
        C: AsRef<str>,
        S: AsRef<str>,
    {
        Ok(self.filter_report(raw_candidates, seeds).await?.kept())
    }

    /// Run the dedup pass and return the verdict for every candidate.
    ///
    /// # Errors
    ///
    /// Fails if any phrase cannot be normalized.
    #[tracing::instrument(
        skip_all,
        fields(candidates = raw_candidates.len(), seeds = seeds.len())
    )]
    pub async fn filter_report<C, S>(
        &self,
        raw_candidates: &[C],
        seeds: &[S],
    ) -> NormalizeResult<DedupReport>
    where
        C: AsRef<str>,
        S: AsRef<str>,
    {
        if raw_candidates.is_empty() {
            tracing::debug!("no candidates to filter");
            return Ok(DedupReport::default());
        }

        let considered = &raw_candidates[..raw_candidates.len().min(MAX_CANDIDATES)];
        let truncated = raw_candidates.len() - considered.len();

        let normalized = futures::future::try_join_all(
            considered
                .iter()
                .map(|raw| self.normalizer.normalize(raw.as_ref())),
        )
        .await?;

        let mut candidates: Vec<Candidate> = considered
            .iter()
            .zip(normalized)
            .enumerate()
            .map(|(index, (raw, normalized))| {
                let raw = raw.as_ref();
                Candidate {
                    raw: raw.to_string(),
                    normalized,
                    index,
                    clean: quality::is_clean(raw),
                    suppressed: None,
                }
            })
            .collect();

        let normalized_seeds = futures::future::try_join_all(
            seeds
                .iter()
                .map(|seed| self.normalizer.normalize(seed.as_ref())),
        )
        .await?;

        suppress_seed_duplicates(&mut candidates, &normalized_seeds);
        suppress_later_duplicates(&mut candidates);

        let report = DedupReport {
            candidates,
            truncated,
            seeds: normalized_seeds,
        };
        tracing::info!(
            kept = report.candidates.iter().filter(|c| c.is_kept()).count(),
            unclean = report.unclean_count(),
            suppressed = report.suppressed_count(),
            truncated,
            "dedup pass complete"
        );
        Ok(report)
    }
}

/// Suppress every candidate that resembles a seed.
fn suppress_seed_duplicates(candidates: &mut [Candidate], seeds: &[String]) {
    for (seed_index, seed) in seeds.iter().enumerate() {
        for candidate in candidates.iter_mut().filter(|c| !c.is_suppressed()) {
            if similarity::is_duplicate(seed, &candidate.normalized) {
                tracing::debug!(
                    candidate = candidate.index,
                    seed = seed_index,
                    "candidate duplicates seed"
                );
                candidate.suppressed = Some(Suppression::Seed { index: seed_index });
            }
        }
    }
}

/// Suppress every candidate that resembles an earlier one.
///
/// Earlier candidates act as a source even when already suppressed.
fn suppress_later_duplicates(candidates: &mut [Candidate]) {
    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            if candidates[j].is_suppressed() {
                continue;
            }
            if similarity::is_duplicate(&candidates[i].normalized, &candidates[j].normalized) {
                tracing::debug!(candidate = j, earlier = i, "candidate duplicates earlier candidate");
                candidates[j].suppressed = Some(Suppression::Candidate { index: i });
            }
        }
    }
}
