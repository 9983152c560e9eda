//! Grading of typed answers against a blank's accepted solutions.

use serde::{Deserialize, Serialize};

use crate::blanks::Blank;
use crate::text::{are_similar_with, levenshtein_distance, SimilarityPolicy};

/// How strictly answers are compared with solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradingPolicy {
    /// Compare letter case as typed.
    pub case_sensitive: bool,
    /// Accept answers that are similar, not just equal, to a solution.
    pub accept_spelling_errors: bool,
    /// Thresholds used when spelling errors are accepted.
    pub similarity: SimilarityPolicy,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            accept_spelling_errors: true,
            similarity: SimilarityPolicy::default(),
        }
    }
}

/// Verdict for one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub correct: bool,
    /// The accepted solution the answer was matched against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_solution: Option<String>,
    /// Swap-aware edit distance to the matched solution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
}

impl Grade {
    fn incorrect() -> Self {
        Self {
            correct: false,
            matched_solution: None,
            distance: None,
        }
    }
}

impl Blank {
    /// Grade a typed answer.
    ///
    /// Exact matches are preferred over near matches, so an answer equal to
    /// the second solution is not reported as a typo of the first.
    pub fn grade(&self, answer: &str, policy: &GradingPolicy) -> Grade {
        let answer = fold_case(answer.trim(), policy.case_sensitive);
        if answer.is_empty() {
            return Grade::incorrect();
        }

        let solutions: Vec<(&String, String)> = self
            .solutions
            .iter()
            .map(|s| (s, fold_case(s, policy.case_sensitive)))
            .collect();

        if let Some((original, _)) = solutions.iter().find(|(_, folded)| *folded == answer) {
            return Grade {
                correct: true,
                matched_solution: Some((*original).clone()),
                distance: Some(0),
            };
        }

        if !policy.accept_spelling_errors {
            return Grade::incorrect();
        }

        solutions
            .iter()
            .find(|(_, folded)| {
                are_similar_with(&answer, folded, &policy.similarity).unwrap_or(false)
            })
            .map_or_else(Grade::incorrect, |(original, folded)| Grade {
                correct: true,
                matched_solution: Some((*original).clone()),
                distance: Some(levenshtein_distance(&answer, folded, true)),
            })
    }
}

fn fold_case(s: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        s.to_owned()
    } else {
        s.to_lowercase()
    }
}
