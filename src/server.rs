//! The textsim MCP server: one JSON-RPC 2.0 message per line in, one
//! response per line out.
//!
//! Malformed input never ends the session. Unparseable lines, bad UTF-8 and
//! overlong lines each get an error response, and the loop stops only at EOF
//! or on an I/O failure.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::blanks::GradingPolicy;
use crate::text::FuzzyParams;
use crate::tools::ToolRouter;

/// Longest request line accepted, in bytes.
const MAX_LINE_BYTES: usize = 10 * 1024 * 1024;

/// MCP revision reported by `initialize`.
const PROTOCOL_VERSION: &str = "2025-06-18";

/// An incoming message. Without an `id` it is a notification.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// One output line: either `result` or `error` is set.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ServerInfo {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct ServerCapabilities {
    tools: ToolsCapability,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolsCapability {
    list_changed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InitializeResult {
    protocol_version: String,
    capabilities: ServerCapabilities,
    server_info: ServerInfo,
}

/// A tool as advertised by `tools/list`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ToolsListResult {
    tools: Vec<ToolDefinition>,
}

#[derive(Debug, Deserialize)]
struct ToolCallParams {
    name: String,
    #[serde(default)]
    arguments: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

/// Outcome of a tool call. Rejected input is reported here with
/// `is_error`, not as a JSON-RPC error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    pub content: Vec<ContentItem>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolCallResult {
    /// A successful result carrying `value` as JSON text.
    pub fn json(value: &impl Serialize) -> anyhow::Result<Self> {
        let text = serde_json::to_string(value).context("failed to serialize tool result")?;
        Ok(Self {
            content: vec![ContentItem {
                content_type: "text".to_owned(),
                text,
            }],
            is_error: false,
        })
    }

    /// A failed result with a human-readable message.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            content: vec![ContentItem {
                content_type: "text".to_owned(),
                text: format!("Error: {message}"),
            }],
            is_error: true,
        }
    }
}

/// Server-wide defaults; a tool call may override them with its own
/// arguments.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Fuzzy search options used by `fuzzy_find`.
    pub fuzzy: FuzzyParams,
    /// Answer comparison options used by `grade_blanks`.
    pub grading: GradingPolicy,
}

/// Run the MCP server on stdin/stdout.
///
/// # Errors
///
/// Returns an error if stdin/stdout I/O fails fatally.
pub fn run_mcp_server(config: ServerConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let mut reader = std::io::BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout().lock();
    serve(config, &mut reader, &mut stdout)
}

/// Answer requests from `reader` on `writer` until `reader` is exhausted.
///
/// # Errors
///
/// Returns an error if reading or writing fails fatally.
pub fn serve(config: ServerConfig, reader: &mut impl BufRead, writer: &mut impl Write) -> Result<()> {
    info!(
        window_size = config.fuzzy.window_size,
        case_sensitive = config.grading.case_sensitive,
        accept_spelling_errors = config.grading.accept_spelling_errors,
        "textsim MCP server starting"
    );

    let router = ToolRouter::new(config);
    let mut line_buf = String::new();

    loop {
        line_buf.clear();
        match read_line_limited(reader, &mut line_buf, MAX_LINE_BYTES)
            .context("failed to read request")?
        {
            LineRead::Eof => {
                info!("input closed, shutting down");
                break;
            }
            LineRead::TooLong => {
                warn!(limit = MAX_LINE_BYTES, "request line too long, discarded");
                let resp = error_response(
                    None,
                    -32600,
                    &format!("invalid request: line exceeds maximum size ({MAX_LINE_BYTES} bytes)"),
                );
                write_response(writer, &resp)?;
                continue;
            }
            LineRead::InvalidUtf8 => {
                warn!("request line is not valid UTF-8, discarded");
                let resp = error_response(None, -32700, "parse error: request is not valid UTF-8");
                write_response(writer, &resp)?;
                continue;
            }
            LineRead::Line => {}
        }

        let trimmed = line_buf.trim();
        if trimmed.is_empty() {
            continue;
        }

        debug!(raw = trimmed, "received request");

        let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "invalid JSON-RPC request");
                let resp = error_response(None, -32700, &format!("parse error: {e}"));
                write_response(writer, &resp)?;
                continue;
            }
        };

        if request.jsonrpc != "2.0" {
            warn!(
                version = request.jsonrpc,
                "invalid JSON-RPC version (expected \"2.0\")"
            );
            let resp = error_response(
                request.id.clone(),
                -32600,
                &format!("invalid request: jsonrpc version must be \"2.0\", got \"{}\"", request.jsonrpc),
            );
            write_response(writer, &resp)?;
            continue;
        }

        let is_notification = request.id.is_none();
        let response = dispatch(&router, &request);

        if is_notification {
            debug!(method = request.method, "notification handled (no response)");
            continue;
        }

        if let Some(resp) = response {
            write_response(writer, &resp)?;
        }
    }

    info!("textsim MCP server stopped");
    Ok(())
}

fn dispatch(router: &ToolRouter, req: &JsonRpcRequest) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => Some(handle_initialize(req)),
        "notifications/initialized" => {
            info!("client initialized");
            None
        }
        "tools/list" => Some(handle_tools_list(router, req)),
        "tools/call" => Some(handle_tools_call(router, req)),
        "ping" => Some(handle_ping(req)),
        _ => {
            warn!(method = req.method, "unknown method");
            Some(error_response(
                req.id.clone(),
                -32601,
                &format!("method not found: {}", req.method),
            ))
        }
    }
}

fn handle_initialize(req: &JsonRpcRequest) -> JsonRpcResponse {
    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_owned(),
        capabilities: ServerCapabilities {
            tools: ToolsCapability {
                list_changed: false,
            },
        },
        server_info: ServerInfo {
            name: "textsim".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        },
    };

    success_response(req.id.clone(), &result)
}

fn handle_tools_list(router: &ToolRouter, req: &JsonRpcRequest) -> JsonRpcResponse {
    let tools = router.list_tools();
    let result = ToolsListResult { tools };
    success_response(req.id.clone(), &result)
}

fn handle_tools_call(router: &ToolRouter, req: &JsonRpcRequest) -> JsonRpcResponse {
    let params: ToolCallParams = match serde_json::from_value(req.params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return error_response(
                req.id.clone(),
                -32602,
                &format!("invalid tools/call params: {e}"),
            );
        }
    };

    match router.call_tool(&params.name, params.arguments) {
        Ok(result) => success_response(req.id.clone(), &result),
        Err(e) => {
            error!(tool = params.name, error = %e, "tool call failed");
            success_response(req.id.clone(), &ToolCallResult::error(format!("{e:#}")))
        }
    }
}

fn handle_ping(req: &JsonRpcRequest) -> JsonRpcResponse {
    success_response(req.id.clone(), &serde_json::json!({}))
}

fn success_response(id: Option<serde_json::Value>, result: &impl Serialize) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(v) => JsonRpcResponse {
            jsonrpc: "2.0".to_owned(),
            id,
            result: Some(v),
            error: None,
        },
        Err(e) => {
            error!(error = %e, "failed to serialize success response");
            JsonRpcResponse {
                jsonrpc: "2.0".to_owned(),
                id,
                result: None,
                error: Some(JsonRpcError {
                    code: -32603,
                    message: format!("internal error: failed to serialize result: {e}"),
                    data: None,
                }),
            }
        }
    }
}

fn error_response(id: Option<serde_json::Value>, code: i64, message: &str) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".to_owned(),
        id,
        result: None,
        error: Some(JsonRpcError {
            code,
            message: message.to_owned(),
            data: None,
        }),
    }
}

fn write_response(out: &mut impl Write, resp: &JsonRpcResponse) -> Result<()> {
    let json = serde_json::to_string(resp).context("failed to serialize response")?;
    debug!(response = json, "sending response");
    out.write_all(json.as_bytes())
        .context("failed to write response")?;
    out.write_all(b"\n")
        .context("failed to write newline")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Outcome of reading one request line.
#[derive(Debug, PartialEq, Eq)]
enum LineRead {
    /// The reader is exhausted.
    Eof,
    /// A line (possibly without trailing newline) was read into the buffer.
    Line,
    /// The line exceeded the limit and was discarded.
    TooLong,
    /// The line was not valid UTF-8 and was discarded.
    InvalidUtf8,
}

/// Read a line from `reader` into `buf`, stopping at newline or `max_bytes`.
///
/// Bytes are collected before UTF-8 decoding so multi-byte characters split
/// across buffer refills decode correctly. An overlong line is consumed up
/// to its newline and reported as [`LineRead::TooLong`]; a line that does not
/// decode is consumed and reported as [`LineRead::InvalidUtf8`]. Only I/O
/// failures are errors.
fn read_line_limited(reader: &mut impl BufRead, buf: &mut String, max_bytes: usize) -> Result<LineRead> {
    let mut bytes = Vec::new();
    let mut too_long = false;
    loop {
        let available = reader.fill_buf().context("fill_buf failed")?;
        if available.is_empty() {
            break;
        }
        let (consumed, found_newline) = match available.iter().position(|&b| b == b'\n') {
            Some(pos) => (pos + 1, true),
            None => (available.len(), false),
        };
        if !too_long {
            if bytes.len() + consumed > max_bytes {
                too_long = true;
                bytes.clear();
            } else {
                bytes.extend_from_slice(&available[..consumed]);
            }
        }
        reader.consume(consumed);
        if found_newline {
            break;
        }
    }

    if too_long {
        return Ok(LineRead::TooLong);
    }
    if bytes.is_empty() {
        return Ok(LineRead::Eof);
    }
    match std::str::from_utf8(&bytes) {
        Ok(line) => {
            buf.push_str(line);
            Ok(LineRead::Line)
        }
        Err(_) => Ok(LineRead::InvalidUtf8),
    }
}
