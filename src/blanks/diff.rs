//! Answer feedback diff using the `similar` crate.
//!
//! Shows a learner which letters of a typed answer differ from the solution.

use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};

/// Where a piece of text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffKind {
    /// In both the typed answer and the solution.
    Same,
    /// Only in the solution.
    Added,
    /// Only in the typed answer.
    Removed,
}

/// A run of characters with the same [`DiffKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub text: String,
    pub kind: DiffKind,
}

/// Character-level diff between a typed answer and a solution.
///
/// Adjacent characters of the same kind are merged into one segment.
pub fn answer_diff(typed: &str, solution: &str) -> Vec<DiffSegment> {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(typed, solution);

    let mut segments: Vec<DiffSegment> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => DiffKind::Same,
            ChangeTag::Insert => DiffKind::Added,
            ChangeTag::Delete => DiffKind::Removed,
        };
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => segments.push(DiffSegment {
                text: change.value().to_owned(),
                kind,
            }),
        }
    }

    segments
}
