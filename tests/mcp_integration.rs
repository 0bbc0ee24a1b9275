//! Integration tests for the MCP server public API.
//! Exercises handle_request from outside the crate (initialize, tools/list, tools/call).

use contentblitz::mcp::{handle_request, JsonRpcRequest};
use serde_json::json;

fn make_request(method: &str, params: Option<serde_json::Value>) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: Some("2.0".to_string()),
        id: Some(json!(1)),
        method: method.to_string(),
        params,
    }
}

fn call_tool(name: &str, arguments: serde_json::Value) -> serde_json::Value {
    let req = make_request(
        "tools/call",
        Some(json!({ "name": name, "arguments": arguments })),
    );
    let resp = handle_request(&req);
    assert!(resp.error.is_none());
    resp.result.expect("expected result")
}

fn tool_payload(result: &serde_json::Value) -> serde_json::Value {
    assert!(result.get("isError").is_none(), "unexpected error: {:?}", result);
    let text = result["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).expect("tool text is JSON")
}

#[test]
fn mcp_initialize_returns_protocol_and_server_info() {
    let req = make_request("initialize", None);
    let resp = handle_request(&req);

    assert_eq!(resp.jsonrpc, "2.0");
    assert!(resp.error.is_none());
    let result = resp.result.expect("expected result");
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "contentblitz");
    assert!(result["serverInfo"]["version"].as_str().is_some());
}

#[test]
fn mcp_tools_list_returns_all_tools() {
    let req = make_request("tools/list", None);
    let resp = handle_request(&req);

    let result = resp.result.expect("expected result");
    let tools = result["tools"].as_array().expect("tools array");
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["score_content", "analyze_seo", "revision_prompt", "analyze_file"]
    );
    for tool in tools {
        assert_eq!(tool["inputSchema"]["type"], "object");
    }
}

#[test]
fn mcp_score_content_empty_general() {
    let result = call_tool("score_content", json!({ "text": "" }));
    let report = tool_payload(&result);
    assert_eq!(report["overall_score"], 6.7);
    assert_eq!(report["grade"], "B-");
    assert_eq!(report["dimension_scores"]["clarity"], 7.0);
    assert_eq!(report["dimension_scores"]["engagement"], 5.0);
    assert_eq!(report["dimension_scores"]["professionalism"], 8.0);
}

#[test]
fn mcp_analyze_seo_stuffing_example() {
    let result = call_tool(
        "analyze_seo",
        json!({
            "text": "# Title\n\nAI is transforming marketing. AI AI AI AI AI AI AI AI.",
            "keywords": ["AI"]
        }),
    );
    let report = tool_payload(&result);
    assert_eq!(report["keyword_analysis"]["AI"]["count"], 9);
    assert_eq!(report["keyword_analysis"]["AI"]["status"], "too_high");
    assert_eq!(report["structure"]["has_proper_hierarchy"], false);
    assert_eq!(report["seo_score"], 45);
}

#[test]
fn mcp_analyze_file_fixture() {
    let result = call_tool(
        "analyze_file",
        json!({ "file": "test-content/social/launch-post.md" }),
    );
    let report = tool_payload(&result);
    assert_eq!(report["score"]["content_type"], "short_form");
    assert!(report["seo"].is_object());
}

#[test]
fn mcp_tools_call_nonexistent_file_returns_error_content() {
    let result = call_tool(
        "analyze_file",
        json!({ "file": "/nonexistent/path/does-not-exist.md" }),
    );
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("File not found"));
}

#[test]
fn mcp_unknown_content_type_is_error_content() {
    let result = call_tool(
        "score_content",
        json!({ "text": "hi", "contentType": "tweet" }),
    );
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("tweet"));
}
