//! Dictionaries for phrase normalization.
//!
//! Provides the curated verb sets consulted by the embedded lexicon.

pub mod verbs;
