//! `is_isolated` tool — whole-word check.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;

use super::{oversized, MAX_INPUT_CHARS};
use crate::server::{ToolCallResult, ToolDefinition};
use crate::text::{is_isolated, IsolationParams};

/// Parameters for the `is_isolated` tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolatedParams {
    pub candidate: String,
    pub text: String,
    /// Character index of the candidate; first occurrence when omitted.
    #[serde(default)]
    pub index: Option<usize>,
}

/// Return the MCP tool definition for `is_isolated`.
pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "is_isolated".to_owned(),
        description: "Check whether candidate occurs in text as a whole word, bounded by \
            whitespace, punctuation, or the text edges."
            .to_owned(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "candidate": {
                    "type": "string",
                    "description": "The word or phrase to check"
                },
                "text": {
                    "type": "string",
                    "description": "The text containing the candidate"
                },
                "index": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Character index of the candidate (default: first occurrence)"
                }
            },
            "required": ["candidate", "text"]
        }),
    }
}

/// Execute the `is_isolated` tool.
///
/// # Errors
///
/// Returns an error if the arguments are malformed.
pub fn execute(arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: IsolatedParams =
        serde_json::from_value(arguments).context("invalid is_isolated parameters")?;
    let inputs = [("candidate", params.candidate.as_str()), ("text", params.text.as_str())];
    if let Some(rejected) = oversized(&inputs, MAX_INPUT_CHARS) {
        return Ok(rejected);
    }

    let options = IsolationParams {
        index: params.index,
        ..IsolationParams::default()
    };

    super::respond(
        is_isolated(&params.candidate, &params.text, options)
            .map(|isolated| json!({ "isolated": isolated })),
    )
}
