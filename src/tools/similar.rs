//! `are_similar` tool — typo-tolerant word equality.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;

use super::{oversized, MAX_INPUT_CHARS};
use crate::server::{ToolCallResult, ToolDefinition};
use crate::text::{are_similar_with, SimilarityPolicy};

/// Parameters for the `are_similar` tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarParams {
    pub a: String,
    pub b: String,
    /// Thresholds; the standard ones when omitted.
    #[serde(default)]
    pub policy: SimilarityPolicy,
}

/// Return the MCP tool definition for `are_similar`.
pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "are_similar".to_owned(),
        description: "Decide whether two words are the same up to small typos: one edit from \
            4 characters, two edits from 10 characters (adjacent swaps count once)."
            .to_owned(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "a": { "type": "string", "description": "First word" },
                "b": { "type": "string", "description": "Second word" },
                "policy": {
                    "type": "object",
                    "description": "Custom thresholds",
                    "properties": {
                        "longWordMinLen": { "type": "integer", "minimum": 0 },
                        "longWordMaxDistance": { "type": "integer", "minimum": 0 },
                        "shortWordMinLen": { "type": "integer", "minimum": 0 },
                        "shortWordMaxDistance": { "type": "integer", "minimum": 0 }
                    },
                    "required": [
                        "longWordMinLen",
                        "longWordMaxDistance",
                        "shortWordMinLen",
                        "shortWordMaxDistance"
                    ]
                }
            },
            "required": ["a", "b"]
        }),
    }
}

/// Execute the `are_similar` tool.
///
/// # Errors
///
/// Returns an error if the arguments are malformed.
pub fn execute(arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: SimilarParams =
        serde_json::from_value(arguments).context("invalid are_similar parameters")?;
    let inputs = [("a", params.a.as_str()), ("b", params.b.as_str())];
    if let Some(rejected) = oversized(&inputs, MAX_INPUT_CHARS) {
        return Ok(rejected);
    }

    super::respond(
        are_similar_with(&params.a, &params.b, &params.policy)
            .map(|similar| json!({ "similar": similar })),
    )
}
