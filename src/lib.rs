//! `textsim` — fuzzy text matching for grading free-text answers.
//!
//! Compares typed words with expected ones while tolerating small typos,
//! finds approximate occurrences of words and phrases in longer texts, and
//! grades fill-in-the-blank exercises. The same operations are exposed as
//! tools of a Model Context Protocol (MCP) server over stdio (JSON-RPC 2.0,
//! newline-delimited).
//!
//! # Modules
//!
//! - [`text`] — edit distance, Jaro-Winkler, whole-word checks, typo-tolerant
//!   equality, and fuzzy search
//! - [`blanks`] — `*solution/alternative:tip*` exercise parsing, grading, and
//!   feedback diffs
//! - [`server`] / [`tools`] — the MCP server
//!
//! # Architecture
//!
//! ```text
//! stdin (JSON-RPC) → McpServer → ToolRouter → text / blanks
//! stdout (JSON-RPC) ←────────────────────────────┘
//! ```

pub mod blanks;
pub mod error;
pub mod server;
pub mod text;
pub mod tools;

pub use error::{InputError, TextResult};
pub use server::{run_mcp_server, ServerConfig};
pub use text::{
    are_similar, fuzzy_contains, fuzzy_find, fuzzy_index_of, fuzzy_match, is_isolated,
    jaro_distance, levenshtein_distance,
};
