//! Jaro-Winkler similarity between normalized phrases.

/// Scores strictly above this value mark two phrases as duplicates.
pub const DUPLICATE_THRESHOLD: f64 = 0.8;

/// Jaro-Winkler similarity of `a` and `b`, in `[0, 1]`.
///
/// Arguments are put in a fixed order before scoring, so the result does not
/// depend on which side is which. Two empty strings score 1.0; one empty
/// string scores 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    strsim::jaro_winkler(first, second).clamp(0.0, 1.0)
}

/// Returns `true` if `score` is above [`DUPLICATE_THRESHOLD`].
pub fn exceeds_threshold(score: f64) -> bool {
    score > DUPLICATE_THRESHOLD
}

/// Returns `true` if the normalized phrases `a` and `b` are duplicates.
pub fn is_duplicate(a: &str, b: &str) -> bool {
    exceeds_threshold(similarity(a, b))
}
