//! Typo-tolerant word equality.

use serde::{Deserialize, Serialize};

use crate::error::{non_empty, TextResult};
use crate::text::levenshtein::levenshtein_distance;

/// Length and distance limits for [`are_similar_with`].
///
/// Two words are similar when they are identical, or when the shorter one
/// has at least `*_min_len` characters and the swap-aware edit distance is
/// within the matching `*_max_distance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityPolicy {
    pub long_word_min_len: usize,
    pub long_word_max_distance: usize,
    pub short_word_min_len: usize,
    pub short_word_max_distance: usize,
}

impl Default for SimilarityPolicy {
    fn default() -> Self {
        Self {
            long_word_min_len: 10,
            long_word_max_distance: 2,
            short_word_min_len: 4,
            short_word_max_distance: 1,
        }
    }
}

impl SimilarityPolicy {
    /// Whether a pair with the given shorter length and distance passes.
    pub fn accepts(&self, shorter_len: usize, distance: usize) -> bool {
        distance == 0
            || (shorter_len >= self.long_word_min_len && distance <= self.long_word_max_distance)
            || (shorter_len >= self.short_word_min_len && distance <= self.short_word_max_distance)
    }
}

/// Decide whether two words are the same up to small typos, using the
/// default policy.
///
/// # Errors
///
/// Returns [`InputError::Empty`](crate::InputError::Empty) if either string
/// is empty.
pub fn are_similar(a: &str, b: &str) -> TextResult<bool> {
    are_similar_with(a, b, &SimilarityPolicy::default())
}

/// [`are_similar`] with custom thresholds.
///
/// # Errors
///
/// Returns [`InputError::Empty`](crate::InputError::Empty) if either string
/// is empty.
pub fn are_similar_with(a: &str, b: &str, policy: &SimilarityPolicy) -> TextResult<bool> {
    non_empty("a", a)?;
    non_empty("b", b)?;

    let shorter_len = a.chars().count().min(b.chars().count());
    let distance = levenshtein_distance(a, b, true);
    Ok(policy.accepts(shorter_len, distance))
}
