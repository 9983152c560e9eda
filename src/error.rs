//! Error types for the textsim crate.

/// Rejected inputs.
///
/// A legitimate non-match is never an error: those come back as `Ok(false)`,
/// `Ok(None)` or a [`FuzzyMatch`](crate::text::FuzzyMatch) with
/// `contains == false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A string argument that must be non-empty was empty.
    #[error("argument `{argument}` must not be empty")]
    Empty { argument: &'static str },

    /// Fuzzy search was asked to try zero candidate lengths per position.
    #[error("window size must be at least 1")]
    InvalidWindowSize,

    /// A `*...*` gap contained no solution.
    #[error("blank #{index} has no solution")]
    EmptyBlank { index: usize },

    /// The number of answers does not match the number of blanks.
    #[error("expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },
}

/// Convenience result type for textsim operations.
pub type TextResult<T> = Result<T, InputError>;

/// Reject an empty string argument.
pub(crate) fn non_empty(argument: &'static str, value: &str) -> TextResult<()> {
    if value.is_empty() {
        return Err(InputError::Empty { argument });
    }
    Ok(())
}
