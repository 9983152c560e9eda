//! Fill-in-the-blank exercises.
//!
//! Exercise text marks each gap with asterisks. Alternatives are separated by
//! `/` and an optional tip follows the first `:`:
//!
//! ```text
//! The *cat/kitten:a small pet* sat on the *mat*.
//! ```
//!
//! Typed answers are graded against the accepted solutions, optionally
//! tolerating spelling errors via [`are_similar_with`](crate::text::are_similar_with).

pub mod diff;
pub mod grade;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{InputError, TextResult};

pub use diff::{answer_diff, DiffKind, DiffSegment};
pub use grade::{Grade, GradingPolicy};

static GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("gap pattern is valid"));

/// A single gap with its accepted answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blank {
    /// Accepted answers, in authoring order.
    pub solutions: Vec<String>,
    /// Hint shown to the learner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl Blank {
    /// Parse the inside of a `*...*` gap.
    fn parse(index: usize, gap: &str) -> TextResult<Self> {
        let (answers, tip) = match gap.split_once(':') {
            Some((answers, tip)) => (answers, Some(tip.trim()).filter(|t| !t.is_empty())),
            None => (gap, None),
        };

        let solutions: Vec<String> = answers
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();

        if solutions.is_empty() {
            return Err(InputError::EmptyBlank { index });
        }

        Ok(Self {
            solutions,
            tip: tip.map(str::to_owned),
        })
    }
}

/// A piece of exercise text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Segment {
    Text { text: String },
    Blank(Blank),
}

/// Exercise text split into literal text and blanks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub segments: Vec<Segment>,
}

impl Exercise {
    /// Parse exercise text.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::EmptyBlank`] for a gap without any solution,
    /// such as `*/:tip*`.
    pub fn parse(text: &str) -> TextResult<Self> {
        let mut segments = Vec::new();
        let mut last = 0;

        for (index, caps) in GAP.captures_iter(text).enumerate() {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Text {
                    text: text[last..whole.start()].to_owned(),
                });
            }
            segments.push(Segment::Blank(Blank::parse(index, inner.as_str())?));
            last = whole.end();
        }

        if last < text.len() {
            segments.push(Segment::Text {
                text: text[last..].to_owned(),
            });
        }

        Ok(Self { segments })
    }

    /// Blanks in reading order.
    pub fn blanks(&self) -> impl Iterator<Item = &Blank> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Blank(blank) => Some(blank),
            Segment::Text { .. } => None,
        })
    }

    /// Grade one answer per blank, in reading order.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::AnswerCount`] if `answers` does not have exactly
    /// one entry per blank.
    pub fn grade<S: AsRef<str>>(&self, answers: &[S], policy: &GradingPolicy) -> TextResult<Vec<Grade>> {
        let expected = self.blanks().count();
        if answers.len() != expected {
            return Err(InputError::AnswerCount {
                expected,
                actual: answers.len(),
            });
        }

        Ok(self
            .blanks()
            .zip(answers)
            .map(|(blank, answer)| blank.grade(answer.as_ref(), policy))
            .collect())
    }
}
