//! Approximate search of a word or phrase inside a longer text.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{non_empty, InputError, TextResult};
use crate::text::isolation::{char_index_of, isolated_at, word_delimiter};
use crate::text::similarity::{are_similar_with, SimilarityPolicy};

/// Candidate lengths tried per window position unless configured otherwise.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Options for [`fuzzy_find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FuzzyParams {
    /// Number of candidate lengths (`len(needle) + 0..window_size`) tried at
    /// each position of the sliding window.
    pub window_size: usize,
    /// Thresholds used to compare each candidate with the needle.
    pub policy: SimilarityPolicy,
}

impl Default for FuzzyParams {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            policy: SimilarityPolicy::default(),
        }
    }
}

/// Outcome of a fuzzy search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    /// Whether an approximate occurrence was found.
    pub contains: bool,
    /// The text of the haystack that matched.
    #[serde(rename = "match")]
    pub matched: Option<String>,
    /// Character index of the match in the haystack.
    pub index: Option<usize>,
}

impl FuzzyMatch {
    fn found(matched: String, index: usize) -> Self {
        Self {
            contains: true,
            matched: Some(matched),
            index: Some(index),
        }
    }

    fn not_found() -> Self {
        Self {
            contains: false,
            matched: None,
            index: None,
        }
    }
}

/// Find an approximate occurrence of `needle` in `haystack`.
///
/// Two passes:
/// 1. Each space-separated token of the haystack is compared with the needle
///    as a whole word.
/// 2. For phrases, a window slides over every character position and tries
///    `window_size` candidate lengths starting at `len(needle)`. A candidate
///    matches only if its first occurrence in the haystack is
///    delimiter-bounded, so `pea` is not found inside `peas`.
///
/// The reported index is the first occurrence of the matched text, which may
/// precede the token or window that matched.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for an empty needle or haystack, and
/// [`InputError::InvalidWindowSize`] for a zero window.
pub fn fuzzy_find(needle: &str, haystack: &str, params: &FuzzyParams) -> TextResult<FuzzyMatch> {
    non_empty("needle", needle)?;
    non_empty("haystack", haystack)?;
    if params.window_size == 0 {
        return Err(InputError::InvalidWindowSize);
    }

    for token in haystack.split(' ').filter(|t| !t.is_empty()) {
        if are_similar_with(needle, token, &params.policy)? {
            let index = char_index_of(haystack, token).unwrap_or_default();
            debug!(token, index, "fuzzy match on whole token");
            return Ok(FuzzyMatch::found(token.to_owned(), index));
        }
    }

    let hay_chars: Vec<char> = haystack.chars().collect();
    let needle_len = needle.chars().count();
    if needle_len > hay_chars.len() {
        return Ok(FuzzyMatch::not_found());
    }

    // Every substring of a tried length is visited in haystack order, so the
    // first window that produced a candidate is its first occurrence.
    let mut first_seen: HashMap<&[char], usize> = HashMap::new();

    for start in 0..=hay_chars.len() - needle_len {
        for extra in 0..params.window_size {
            let end = (start + needle_len + extra).min(hay_chars.len());
            let window = &hay_chars[start..end];
            let first = *first_seen.entry(window).or_insert(start);

            if isolated_at(&hay_chars, window, first, word_delimiter) {
                let candidate: String = window.iter().collect();
                if are_similar_with(needle, &candidate, &params.policy)? {
                    debug!(candidate, index = first, "fuzzy match in sliding window");
                    return Ok(FuzzyMatch::found(candidate, first));
                }
            }
            if end == hay_chars.len() {
                break;
            }
        }
    }

    Ok(FuzzyMatch::not_found())
}

/// Whether `haystack` approximately contains `needle`.
///
/// # Errors
///
/// See [`fuzzy_find`].
pub fn fuzzy_contains(needle: &str, haystack: &str) -> TextResult<bool> {
    Ok(fuzzy_find(needle, haystack, &FuzzyParams::default())?.contains)
}

/// Character index of the approximate occurrence of `needle`, if any.
///
/// # Errors
///
/// See [`fuzzy_find`].
pub fn fuzzy_index_of(needle: &str, haystack: &str) -> TextResult<Option<usize>> {
    Ok(fuzzy_find(needle, haystack, &FuzzyParams::default())?.index)
}

/// The text in `haystack` that approximately matches `needle`, if any.
///
/// # Errors
///
/// See [`fuzzy_find`].
pub fn fuzzy_match(needle: &str, haystack: &str) -> TextResult<Option<String>> {
    Ok(fuzzy_find(needle, haystack, &FuzzyParams::default())?.matched)
}
