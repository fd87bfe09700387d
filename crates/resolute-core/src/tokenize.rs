//! Penn Treebank style word tokenization.
//!
//! Contractions are split into their treebank parts (`don't` becomes
//! `do n't`, `gonna` becomes `gon na`), punctuation is isolated into its own
//! token, and in-word characters such as `-`, `/` and `&` are left alone.

use regex::Regex;
use std::sync::LazyLock;

/// Two-part contractions, replaced with `$1 $2`.
static CONTRACTIONS2: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(.)('ll|'re|'ve|n't|'s|'m|'d)\b",
        r"(?i)\b(can)(not)\b",
        r"(?i)\b(d)('ye)\b",
        r"(?i)\b(gim)(me)\b",
        r"(?i)\b(gon)(na)\b",
        r"(?i)\b(got)(ta)\b",
        r"(?i)\b(lem)(me)\b",
        r"(?i)\b(mor)('n)\b",
        r"(?i)\b(t)(is)\b",
        r"(?i)\b(t)(was)\b",
        r"(?i)\b(wan)(na)\b",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

/// Three-part contractions, replaced with `$1 $2 $3`.
static CONTRACTIONS3: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(?i)\b(whad)(dd)(ya)\b", r"(?i)\b(wha)(t)(cha)\b"]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("valid regex"))
        .collect()
});

/// Any character that is never part of a word token.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\w.'\-/+<>,&])").expect("valid regex"));

/// Commas followed by whitespace.
static COMMA_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(,\s)").expect("valid regex"));

/// Single quotes followed by whitespace.
static QUOTE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"('\s)").expect("valid regex"));

/// Periods at the end of a line or of the text.
static FINAL_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\. *(\n|$)").expect("valid regex"));

/// Split text into treebank word tokens.
///
/// Case is preserved; callers lowercase as needed.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut text = text.to_string();

    for pattern in CONTRACTIONS2.iter() {
        text = pattern.replace_all(&text, "${1} ${2}").into_owned();
    }
    for pattern in CONTRACTIONS3.iter() {
        text = pattern.replace_all(&text, "${1} ${2} ${3}").into_owned();
    }

    text = PUNCTUATION.replace_all(&text, " ${1} ").into_owned();
    text = COMMA_SPACE.replace_all(&text, " ${1}").into_owned();
    text = QUOTE_SPACE.replace_all(&text, " ${1}").into_owned();
    text = FINAL_PERIOD.replace_all(&text, " . ").into_owned();

    text.split_whitespace().map(str::to_string).collect()
}

/// Split text into bare lowercase words for dictionary lookup.
///
/// Unlike [`tokenize`], punctuation is discarded rather than kept as tokens,
/// and apostrophes stay inside the word.
pub fn lookup_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-')
        .map(|w| w.trim_matches(|c: char| c == '\'' || c == '-'))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}
