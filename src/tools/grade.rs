//! `grade_blanks` tool — grade answers to a fill-in-the-blank exercise.
//!
//! Besides the verdict, every graded blank carries a character diff between
//! the typed answer and the solution it was compared with, for feedback.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::blanks::{answer_diff, DiffSegment, Exercise, Grade, GradingPolicy};
use super::{oversized, MAX_INPUT_CHARS};
use crate::error::TextResult;
use crate::server::{ToolCallResult, ToolDefinition};

/// Parameters for the `grade_blanks` tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeParams {
    /// Exercise text with `*solution/alternative:tip*` gaps.
    pub text: String,
    /// One answer per gap, in reading order.
    pub answers: Vec<String>,
    #[serde(default)]
    pub case_sensitive: Option<bool>,
    #[serde(default)]
    pub accept_spelling_errors: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GradedBlank {
    #[serde(flatten)]
    grade: Grade,
    diff: Vec<DiffSegment>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GradeReport {
    score: usize,
    max_score: usize,
    grades: Vec<GradedBlank>,
}

/// Return the MCP tool definition for `grade_blanks`.
pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "grade_blanks".to_owned(),
        description: "Grade answers to a fill-in-the-blank text. Gaps are written *answer*, \
            alternatives separated by '/', an optional tip after ':'."
            .to_owned(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Exercise text, e.g. \"The *cat/kitten:a pet* sat.\""
                },
                "answers": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "One typed answer per gap, in order"
                },
                "caseSensitive": {
                    "type": "boolean",
                    "description": "Compare letter case (default: server setting, normally false)"
                },
                "acceptSpellingErrors": {
                    "type": "boolean",
                    "description": "Accept small typos (default: server setting, normally true)"
                }
            },
            "required": ["text", "answers"]
        }),
    }
}

/// Execute the `grade_blanks` tool.
///
/// # Errors
///
/// Returns an error if the arguments are malformed.
pub fn execute(defaults: &GradingPolicy, arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: GradeParams =
        serde_json::from_value(arguments).context("invalid grade_blanks parameters")?;
    let inputs: Vec<(&str, &str)> = std::iter::once(("text", params.text.as_str()))
        .chain(params.answers.iter().map(|answer| ("answer", answer.as_str())))
        .collect();
    if let Some(rejected) = oversized(&inputs, MAX_INPUT_CHARS) {
        return Ok(rejected);
    }

    let policy = GradingPolicy {
        case_sensitive: params.case_sensitive.unwrap_or(defaults.case_sensitive),
        accept_spelling_errors: params
            .accept_spelling_errors
            .unwrap_or(defaults.accept_spelling_errors),
        ..*defaults
    };

    super::respond(report(&params.text, &params.answers, &policy))
}

fn report(text: &str, answers: &[String], policy: &GradingPolicy) -> TextResult<GradeReport> {
    let exercise = Exercise::parse(text)?;
    let grades = exercise.grade(answers, policy)?;

    let graded: Vec<GradedBlank> = exercise
        .blanks()
        .zip(answers)
        .zip(grades)
        .map(|((blank, answer), grade)| {
            let reference = grade
                .matched_solution
                .as_deref()
                .or_else(|| blank.solutions.first().map(String::as_str))
                .unwrap_or_default();
            GradedBlank {
                diff: answer_diff(answer.trim(), reference),
                grade,
            }
        })
        .collect();

    Ok(GradeReport {
        score: graded.iter().filter(|g| g.grade.correct).count(),
        max_score: graded.len(),
        grades: graded,
    })
}
