//! `levenshtein` and `jaro` tools — raw string distances.
//!
//! Neither computation rejects input: empty strings are valid and score as
//! documented on [`levenshtein_distance`] and [`jaro_distance`].

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;

use super::{oversized, MAX_INPUT_CHARS};
use crate::server::{ToolCallResult, ToolDefinition};
use crate::text::{jaro_distance, levenshtein_distance};

/// Parameters for the `levenshtein` tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevenshteinParams {
    pub a: String,
    pub b: String,
    /// Count an adjacent swap as one edit.
    #[serde(default)]
    pub count_swapping: bool,
}

/// Parameters for the `jaro` tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JaroParams {
    pub a: String,
    pub b: String,
    #[serde(default)]
    pub favor_same_start: bool,
    #[serde(default)]
    pub long_tolerance: bool,
}

fn string_pair() -> serde_json::Value {
    json!({
        "a": { "type": "string", "description": "First string" },
        "b": { "type": "string", "description": "Second string" }
    })
}

/// Return the MCP tool definition for `levenshtein`.
pub fn levenshtein_definition() -> ToolDefinition {
    let mut properties = string_pair();
    properties["countSwapping"] = json!({
        "type": "boolean",
        "description": "Count swapping two adjacent characters as one edit (default: false)",
        "default": false
    });

    ToolDefinition {
        name: "levenshtein".to_owned(),
        description: "Edit distance between two strings, optionally Damerau-style.".to_owned(),
        input_schema: json!({
            "type": "object",
            "properties": properties,
            "required": ["a", "b"]
        }),
    }
}

/// Return the MCP tool definition for `jaro`.
pub fn jaro_definition() -> ToolDefinition {
    let mut properties = string_pair();
    properties["favorSameStart"] = json!({
        "type": "boolean",
        "description": "Apply the Winkler bonus for a shared prefix (default: false)",
        "default": false
    });
    properties["longTolerance"] = json!({
        "type": "boolean",
        "description": "Extra bonus for long strings; needs favorSameStart (default: false)",
        "default": false
    });

    ToolDefinition {
        name: "jaro".to_owned(),
        description: "Jaro or Jaro-Winkler similarity between two strings, from 0 to 1.".to_owned(),
        input_schema: json!({
            "type": "object",
            "properties": properties,
            "required": ["a", "b"]
        }),
    }
}

/// Execute the `levenshtein` tool.
///
/// # Errors
///
/// Returns an error if the arguments are malformed.
pub fn execute_levenshtein(arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: LevenshteinParams =
        serde_json::from_value(arguments).context("invalid levenshtein parameters")?;
    let inputs = [("a", params.a.as_str()), ("b", params.b.as_str())];
    if let Some(rejected) = oversized(&inputs, MAX_INPUT_CHARS) {
        return Ok(rejected);
    }

    let distance = levenshtein_distance(&params.a, &params.b, params.count_swapping);
    ToolCallResult::json(&json!({ "distance": distance }))
}

/// Execute the `jaro` tool.
///
/// # Errors
///
/// Returns an error if the arguments are malformed.
pub fn execute_jaro(arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: JaroParams =
        serde_json::from_value(arguments).context("invalid jaro parameters")?;
    let inputs = [("a", params.a.as_str()), ("b", params.b.as_str())];
    if let Some(rejected) = oversized(&inputs, MAX_INPUT_CHARS) {
        return Ok(rejected);
    }

    let similarity = jaro_distance(
        &params.a,
        &params.b,
        params.favor_same_start,
        params.long_tolerance,
    );
    ToolCallResult::json(&json!({ "similarity": similarity }))
}
