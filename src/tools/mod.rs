//! Tool router — registers and dispatches MCP tool calls.
//!
//! Each tool is a function that takes JSON arguments and returns a
//! [`ToolCallResult`]. The router maintains the tool registry and
//! provides `list_tools()` / `call_tool()` for the MCP server.

pub mod distance;
pub mod fuzzy;
pub mod grade;
pub mod isolated;
pub mod similar;

use anyhow::Result;
use tracing::debug;

use crate::error::TextResult;
use crate::server::{ServerConfig, ToolCallResult, ToolDefinition};

/// Longest string argument, in characters, a tool accepts.
pub const MAX_INPUT_CHARS: usize = 10_000;

/// Longest `fuzzy_find` needle, in characters. Every window position runs an
/// edit distance against the needle.
pub const MAX_NEEDLE_CHARS: usize = 100;

/// Reject the first argument longer than `limit` characters.
fn oversized(inputs: &[(&str, &str)], limit: usize) -> Option<ToolCallResult> {
    inputs
        .iter()
        .find(|(_, value)| value.chars().count() > limit)
        .map(|(argument, _)| {
            debug!(argument, limit, "tool argument too long");
            ToolCallResult::error(format_args!("{argument} is longer than {limit} characters"))
        })
}

/// Turn a library outcome into a tool result: rejected input becomes an
/// `isError` result rather than a protocol error.
fn respond<T: serde::Serialize>(outcome: TextResult<T>) -> Result<ToolCallResult> {
    match outcome {
        Ok(value) => ToolCallResult::json(&value),
        Err(e) => Ok(ToolCallResult::error(e)),
    }
}

/// Tool router that dispatches MCP tool calls to implementations.
pub struct ToolRouter {
    /// Defaults for arguments a call leaves out.
    config: ServerConfig,
}

impl ToolRouter {
    /// Create a new tool router.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// List all available tools with their JSON Schema definitions.
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        vec![
            isolated::tool_definition(),
            distance::levenshtein_definition(),
            distance::jaro_definition(),
            similar::tool_definition(),
            fuzzy::tool_definition(),
            grade::tool_definition(),
        ]
    }

    /// Call a tool by name with the given JSON arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments do not match the tool's schema.
    pub fn call_tool(&self, name: &str, arguments: serde_json::Value) -> Result<ToolCallResult> {
        debug!(tool = name, "dispatching tool call");

        match name {
            "is_isolated" => isolated::execute(arguments),
            "levenshtein" => distance::execute_levenshtein(arguments),
            "jaro" => distance::execute_jaro(arguments),
            "are_similar" => similar::execute(arguments),
            "fuzzy_find" => fuzzy::execute(&self.config.fuzzy, arguments),
            "grade_blanks" => grade::execute(&self.config.grading, arguments),
            _ => Ok(ToolCallResult::error(format_args!("Unknown tool: {name}"))),
        }
    }
}
