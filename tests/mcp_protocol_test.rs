//! MCP protocol integration tests.
//!
//! Tests the JSON-RPC 2.0 MCP server by feeding requests through an
//! in-memory reader and collecting the response lines.

use serde_json::{json, Value};
use textsim::server::{serve, ServerConfig};
use textsim::tools::ToolRouter;

/// Run the server over `requests` (one JSON value per line) and parse every
/// response line.
fn run_session(requests: &[Value]) -> Vec<Value> {
    let input: String = requests.iter().map(|r| format!("{r}\n")).collect();
    run_raw(&input)
}

fn run_raw(input: &str) -> Vec<Value> {
    run_bytes(input.as_bytes())
}

fn run_bytes(input: &[u8]) -> Vec<Value> {
    let mut reader = std::io::Cursor::new(input.to_vec());
    let mut output = Vec::new();
    serve(ServerConfig::default(), &mut reader, &mut output).expect("server should exit cleanly");

    String::from_utf8(output)
        .expect("utf-8 output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("response is JSON"))
        .collect()
}

/// Parse the JSON text content of a tools/call result.
fn tool_payload(result: &textsim::server::ToolCallResult) -> Value {
    serde_json::from_str(&result.content[0].text).expect("tool result is JSON")
}

#[test]
fn test_json_rpc_request_parsing() {
    let req_json = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-06-18",
            "capabilities": {},
            "clientInfo": {
                "name": "test-client",
                "version": "0.1.0"
            }
        }
    });

    let req: textsim::server::JsonRpcRequest =
        serde_json::from_value(req_json).expect("should parse initialize request");

    assert_eq!(req.method, "initialize");
    assert_eq!(req.id, Some(json!(1)));
}

#[test]
fn test_json_rpc_error_response() {
    let resp = textsim::server::JsonRpcResponse {
        jsonrpc: "2.0".to_owned(),
        id: Some(json!(2)),
        result: None,
        error: Some(textsim::server::JsonRpcError {
            code: -32601,
            message: "method not found".to_owned(),
            data: None,
        }),
    };

    let json_str = serde_json::to_string(&resp).expect("should serialize");
    assert!(json_str.contains("-32601"));
    assert!(json_str.contains("method not found"));
    assert!(!json_str.contains("result")); // result is None, should be skipped
}

#[test]
fn test_tool_definitions_complete() {
    let router = ToolRouter::new(ServerConfig::default());

    let tools = router.list_tools();
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "is_isolated",
            "levenshtein",
            "jaro",
            "are_similar",
            "fuzzy_find",
            "grade_blanks"
        ]
    );

    for tool in &tools {
        assert!(
            !tool.description.is_empty(),
            "tool {} missing description",
            tool.name
        );
        assert!(
            tool.input_schema["required"].is_array(),
            "tool {} missing required list",
            tool.name
        );
    }
}

#[test]
fn test_tool_call_unknown() {
    let router = ToolRouter::new(ServerConfig::default());

    let result = router
        .call_tool("nonexistent_tool", json!({}))
        .expect("should not error");

    assert!(result.is_error);
    assert!(result.content[0].text.contains("Unknown tool"));
}

#[test]
fn test_tool_call_levenshtein_and_jaro() {
    let router = ToolRouter::new(ServerConfig::default());

    let result = router
        .call_tool("levenshtein", json!({ "a": "ab", "b": "ba", "countSwapping": true }))
        .expect("levenshtein should succeed");
    assert_eq!(tool_payload(&result)["distance"], 1);

    let result = router
        .call_tool("jaro", json!({ "a": "MARTHA", "b": "MARHTA" }))
        .expect("jaro should succeed");
    let similarity = tool_payload(&result)["similarity"].as_f64().expect("number");
    assert!((similarity - 0.944).abs() < 1e-3);
}

#[test]
fn test_tool_call_is_isolated() {
    let router = ToolRouter::new(ServerConfig::default());

    let result = router
        .call_tool("is_isolated", json!({ "candidate": "cat", "text": "concatenate" }))
        .expect("should succeed");
    assert!(!result.is_error);
    assert_eq!(tool_payload(&result)["isolated"], false);

    let result = router
        .call_tool("is_isolated", json!({ "candidate": "", "text": "concatenate" }))
        .expect("should succeed");
    assert!(result.is_error);
    assert!(result.content[0].text.contains("candidate"));
}

#[test]
fn test_tool_call_are_similar_with_policy() {
    let router = ToolRouter::new(ServerConfig::default());

    let result = router
        .call_tool("are_similar", json!({ "a": "wrld", "b": "world" }))
        .expect("should succeed");
    assert_eq!(tool_payload(&result)["similar"], true);

    let result = router
        .call_tool(
            "are_similar",
            json!({
                "a": "wrld",
                "b": "world",
                "policy": {
                    "longWordMinLen": 10,
                    "longWordMaxDistance": 2,
                    "shortWordMinLen": 5,
                    "shortWordMaxDistance": 1
                }
            }),
        )
        .expect("should succeed");
    assert_eq!(tool_payload(&result)["similar"], false);
}

#[test]
fn test_tool_call_fuzzy_find() {
    let router = ToolRouter::new(ServerConfig::default());

    let result = router
        .call_tool(
            "fuzzy_find",
            json!({ "needle": "wrld", "haystack": "hello world today" }),
        )
        .expect("should succeed");
    let payload = tool_payload(&result);
    assert_eq!(payload["contains"], true);
    assert_eq!(payload["match"], "world");
    assert_eq!(payload["index"], 6);

    let result = router
        .call_tool(
            "fuzzy_find",
            json!({ "needle": "wrld", "haystack": "hello world", "windowSize": 0 }),
        )
        .expect("should succeed");
    assert!(result.is_error);
}

#[test]
fn test_tool_call_rejects_oversized_input() {
    let router = ToolRouter::new(ServerConfig::default());
    let long = "a".repeat(textsim::tools::MAX_INPUT_CHARS + 1);

    let result = router
        .call_tool("levenshtein", json!({ "a": long, "b": "b" }))
        .expect("should succeed");
    assert!(result.is_error);
    assert!(result.content[0].text.contains("a is longer than 10000 characters"));

    let needle = "n".repeat(textsim::tools::MAX_NEEDLE_CHARS + 1);
    let result = router
        .call_tool("fuzzy_find", json!({ "needle": needle, "haystack": "short text" }))
        .expect("should succeed");
    assert!(result.is_error);
    assert!(result.content[0].text.contains("needle"));

    let result = router
        .call_tool("grade_blanks", json!({ "text": "*cat*", "answers": [long] }))
        .expect("should succeed");
    assert!(result.is_error);

    let at_limit = "a".repeat(textsim::tools::MAX_INPUT_CHARS);
    let result = router
        .call_tool("levenshtein", json!({ "a": at_limit, "b": "" }))
        .expect("should succeed");
    assert_eq!(tool_payload(&result)["distance"], textsim::tools::MAX_INPUT_CHARS);
}

#[test]
fn test_tool_call_bad_arguments() {
    let router = ToolRouter::new(ServerConfig::default());

    let err = router
        .call_tool("levenshtein", json!({ "a": "x" }))
        .expect_err("missing b");
    assert!(err.to_string().contains("invalid levenshtein parameters"));
}

#[test]
fn test_tool_call_grade_blanks() {
    let router = ToolRouter::new(ServerConfig::default());

    let result = router
        .call_tool(
            "grade_blanks",
            json!({
                "text": "The *cat/kitten:a pet* sat on the *carpet*.",
                "answers": ["Kitten", "carpt"]
            }),
        )
        .expect("should succeed");
    assert!(!result.is_error);
    let payload = tool_payload(&result);
    assert_eq!(payload["score"], 2);
    assert_eq!(payload["maxScore"], 2);
    assert_eq!(payload["grades"][0]["matchedSolution"], "kitten");
    assert_eq!(payload["grades"][1]["distance"], 1);

    let result = router
        .call_tool(
            "grade_blanks",
            json!({
                "text": "The *carpet*.",
                "answers": ["carpt"],
                "acceptSpellingErrors": false
            }),
        )
        .expect("should succeed");
    assert_eq!(tool_payload(&result)["score"], 0);

    let result = router
        .call_tool("grade_blanks", json!({ "text": "*a* *b*", "answers": ["a"] }))
        .expect("should succeed");
    assert!(result.is_error);
    assert!(result.content[0].text.contains("expected 2 answers"));
}

#[test]
fn test_session_round_trip() {
    let responses = run_session(&[
        json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }),
        json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
        json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
        json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": { "name": "are_similar", "arguments": { "a": "hello", "b": "xyzzy" } }
        }),
        json!({ "jsonrpc": "2.0", "id": 4, "method": "ping" }),
    ]);

    // The notification gets no response.
    assert_eq!(responses.len(), 4);

    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["protocolVersion"], "2025-06-18");
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "textsim");

    assert_eq!(responses[1]["result"]["tools"].as_array().map(Vec::len), Some(6));

    let text = responses[2]["result"]["content"][0]["text"]
        .as_str()
        .expect("text content");
    assert_eq!(
        serde_json::from_str::<Value>(text).expect("json"),
        json!({ "similar": false })
    );
    assert!(responses[2]["result"].get("isError").is_none());

    assert_eq!(responses[3]["id"], 4);
    assert_eq!(responses[3]["result"], json!({}));
}

#[test]
fn test_session_protocol_errors() {
    let responses = run_raw(concat!(
        "not json\n",
        "\n",
        "{\"jsonrpc\":\"1.0\",\"id\":1,\"method\":\"ping\"}\n",
        "{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"resources/list\"}\n",
        "{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"tools/call\",\"params\":{\"arguments\":{}}}\n",
    ));

    let codes: Vec<i64> = responses
        .iter()
        .map(|r| r["error"]["code"].as_i64().expect("error code"))
        .collect();
    assert_eq!(codes, [-32700, -32600, -32601, -32602]);
    assert!(responses[0]["id"].is_null());
    assert_eq!(responses[1]["id"], 1);
}

#[test]
fn test_session_survives_invalid_utf8() {
    let mut input = b"\xff\xfe garbage\n".to_vec();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":5,\"method\":\"ping\"}\n");

    let responses = run_bytes(&input);

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], -32700);
    assert!(responses[0]["id"].is_null());
    assert_eq!(responses[1]["id"], 5);
    assert_eq!(responses[1]["result"], json!({}));
}

#[test]
fn test_session_tool_failure_is_tool_error() {
    let responses = run_session(&[json!({
        "jsonrpc": "2.0",
        "id": 9,
        "method": "tools/call",
        "params": { "name": "jaro", "arguments": { "a": 1 } }
    })]);

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["result"]["isError"], true);
    let text = responses[0]["result"]["content"][0]["text"]
        .as_str()
        .expect("text");
    assert!(text.starts_with("Error: invalid jaro parameters"));
}
