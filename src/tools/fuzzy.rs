//! `fuzzy_find` tool — approximate search in a text.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;

use super::{oversized, MAX_INPUT_CHARS, MAX_NEEDLE_CHARS};
use crate::server::{ToolCallResult, ToolDefinition};
use crate::text::{fuzzy_find, FuzzyParams};

/// Parameters for the `fuzzy_find` tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyFindParams {
    pub needle: String,
    pub haystack: String,
    /// Overrides the server's window size.
    #[serde(default)]
    pub window_size: Option<usize>,
}

/// Return the MCP tool definition for `fuzzy_find`.
pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "fuzzy_find".to_owned(),
        description: "Find a word or phrase in a text while tolerating small typos. Returns \
            {contains, match, index}; index is a character offset."
            .to_owned(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "needle": {
                    "type": "string",
                    "maxLength": MAX_NEEDLE_CHARS,
                    "description": "The word or phrase to find"
                },
                "haystack": {
                    "type": "string",
                    "maxLength": MAX_INPUT_CHARS,
                    "description": "The text to search"
                },
                "windowSize": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Candidate lengths tried per position (default: server setting, normally 3)"
                }
            },
            "required": ["needle", "haystack"]
        }),
    }
}

/// Execute the `fuzzy_find` tool.
///
/// # Errors
///
/// Returns an error if the arguments are malformed.
pub fn execute(defaults: &FuzzyParams, arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: FuzzyFindParams =
        serde_json::from_value(arguments).context("invalid fuzzy_find parameters")?;
    if let Some(rejected) = oversized(&[("needle", params.needle.as_str())], MAX_NEEDLE_CHARS)
        .or_else(|| oversized(&[("haystack", params.haystack.as_str())], MAX_INPUT_CHARS))
    {
        return Ok(rejected);
    }

    let options = FuzzyParams {
        window_size: params.window_size.unwrap_or(defaults.window_size),
        ..*defaults
    };

    super::respond(fuzzy_find(&params.needle, &params.haystack, &options))
}
