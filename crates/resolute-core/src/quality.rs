//! Punctuation-density check for generated phrases.
//!
//! Truncated or garbled generation output tends to be dense with symbols.
//! A suggestion is rejected when more than a fifth of its characters belong
//! to [`PUNCTUATION`]. Next steps use a stricter cut: a fifth or more.

/// Characters counted as punctuation.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')',
];

/// Count characters of `text` that belong to [`PUNCTUATION`].
pub fn punctuation_count(text: &str) -> usize {
    text.chars().filter(|c| PUNCTUATION.contains(c)).count()
}

/// Returns `true` if `text` is clean enough to keep.
///
/// Unclean when `punctuation_count > length / 5`, with length in characters.
pub fn is_clean(text: &str) -> bool {
    let length = text.chars().count() as f64;
    (punctuation_count(text) as f64) <= length / 5.0
}

/// Returns `true` if a next-step suggestion is clean enough to keep.
///
/// Clean only when `punctuation_count < length / 5`, so an empty step is
/// never clean.
pub fn is_clean_step(text: &str) -> bool {
    let length = text.chars().count() as f64;
    (punctuation_count(text) as f64) < length / 5.0
}
