//! Whole-word checks: is a substring bounded by delimiters inside its text?

use crate::error::{non_empty, TextResult};

/// Character predicate deciding what separates words.
pub type Delimiter = fn(char) -> bool;

/// Default word delimiter: whitespace and `. ? ! , ' "`.
pub fn word_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '.' | '?' | '!' | ',' | '\'' | '"')
}

/// Options for [`is_isolated`].
#[derive(Debug, Clone, Copy)]
pub struct IsolationParams {
    /// Which characters count as word boundaries.
    pub delimiter: Delimiter,
    /// Character index of the candidate in the text. `None` uses the first
    /// occurrence. An index where the text does not read `candidate` is
    /// never isolated.
    pub index: Option<usize>,
}

impl Default for IsolationParams {
    fn default() -> Self {
        Self {
            delimiter: word_delimiter,
            index: None,
        }
    }
}

impl IsolationParams {
    /// Check the candidate at a known character index.
    pub fn at(index: usize) -> Self {
        Self {
            index: Some(index),
            ..Self::default()
        }
    }
}

/// Check whether `candidate` occurs in `text` as a delimiter-bounded unit.
///
/// The character before the candidate and the one after it must each be
/// absent (text edge) or a delimiter. Only one position is checked: the
/// explicit `params.index`, or else the first occurrence. A candidate that
/// does not occur, or does not occur at the given index, is not isolated.
///
/// # Errors
///
/// Returns [`InputError::Empty`](crate::InputError::Empty) if either string
/// is empty.
pub fn is_isolated(candidate: &str, text: &str, params: IsolationParams) -> TextResult<bool> {
    non_empty("candidate", candidate)?;
    non_empty("text", text)?;

    let Some(pos) = params.index.or_else(|| char_index_of(text, candidate)) else {
        return Ok(false);
    };

    let text_chars: Vec<char> = text.chars().collect();
    let candidate_chars: Vec<char> = candidate.chars().collect();
    Ok(isolated_at(&text_chars, &candidate_chars, pos, params.delimiter))
}

/// Whether `candidate` sits at `pos` in `text` with a delimiter or text edge
/// on both sides.
pub(crate) fn isolated_at(text: &[char], candidate: &[char], pos: usize, delimiter: Delimiter) -> bool {
    let Some(end) = pos.checked_add(candidate.len()).filter(|&end| end <= text.len()) else {
        return false;
    };
    if text[pos..end] != *candidate {
        return false;
    }

    let bounded = |ch: Option<&char>| ch.is_none_or(|&c| delimiter(c));
    let before = pos.checked_sub(1).and_then(|i| text.get(i));
    bounded(before) && bounded(text.get(end))
}

/// Character index of the first occurrence of `needle` in `haystack`.
pub(crate) fn char_index_of(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_pos| haystack[..byte_pos].chars().count())
}
