//! Curated word lists for phrase normalization.

use std::collections::HashSet;
use std::sync::LazyLock;

/// English function words dropped before phrases are compared.
///
/// Pronouns, auxiliaries, articles, prepositions, conjunctions, and the
/// contraction fragments (`s`, `t`, `don`) left behind by tokenization.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // pronouns
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
        // interrogatives and demonstratives
        "what", "which", "who", "whom", "this", "that", "these", "those",
        // auxiliaries
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing",
        // articles and conjunctions
        "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while",
        // prepositions
        "of", "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "before", "after", "above", "below", "to", "from", "up", "down", "in", "out",
        "on", "off", "over", "under",
        // adverbs and quantifiers
        "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
        "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
        "only", "own", "same", "so", "than", "too", "very",
        // contraction fragments and modals
        "s", "t", "can", "will", "just", "don", "should", "now",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if `word` (already lowercased) is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
