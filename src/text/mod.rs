//! Fuzzy string matching for free-text answers.
//!
//! Everything here is a pure function of its arguments. Positions are
//! character indices, not byte offsets.
//!
//! # Layers
//!
//! 1. [`levenshtein_distance`] — edit distance, optionally counting adjacent
//!    swaps as one edit
//! 2. [`jaro_distance`] — Jaro / Jaro-Winkler similarity score
//! 3. [`is_isolated`] — whole-word check inside a longer text
//! 4. [`are_similar`] — typo-tolerant word equality on top of (1)
//! 5. [`fuzzy_find`] — approximate search of a word or phrase, built on
//!    (3) and (4)

pub mod fuzzy;
pub mod isolation;
pub mod jaro;
pub mod levenshtein;
pub mod similarity;

pub use fuzzy::{
    fuzzy_contains, fuzzy_find, fuzzy_index_of, fuzzy_match, FuzzyMatch, FuzzyParams,
    DEFAULT_WINDOW_SIZE,
};
pub use isolation::{is_isolated, word_delimiter, Delimiter, IsolationParams};
pub use jaro::jaro_distance;
pub use levenshtein::levenshtein_distance;
pub use similarity::{are_similar, are_similar_with, SimilarityPolicy};
