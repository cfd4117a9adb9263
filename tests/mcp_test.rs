//! Tests for MCP types and transport framing helpers

use prompt_boost::mcp::types::*;
use prompt_boost::mcp::{is_header_line, parse_content_length};
use serde_json::json;

// ============================================================================
// JSON-RPC Type Tests
// ============================================================================

#[test]
fn test_json_rpc_request_serialization() {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(1)),
        method: "tools/list".to_string(),
        params: None,
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"jsonrpc\":\"2.0\""));
    assert!(json.contains("\"method\":\"tools/list\""));

    let deserialized: JsonRpcRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.method, "tools/list");
}

#[test]
fn test_json_rpc_request_without_id_is_notification() {
    let json = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
    let request: JsonRpcRequest = serde_json::from_str(json).unwrap();

    assert!(request.id.is_none());
}

#[test]
fn test_json_rpc_response_success() {
    let response = JsonRpcResponse::success(Some(json!(1)), json!({"status": "ok"}));

    assert_eq!(response.jsonrpc, "2.0");
    assert!(response.result.is_some());
    assert!(response.error.is_none());

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"result\""));
    assert!(!json.contains("\"error\""));
}

#[test]
fn test_json_rpc_response_error() {
    let response = JsonRpcResponse::error(Some(json!(1)), -32601, "Method not found".to_string());

    assert!(response.result.is_none());
    let error = response.error.unwrap();
    assert_eq!(error.code, -32601);
    assert_eq!(error.message, "Method not found");
}

#[test]
fn test_initialize_result_camel_case_fields() {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "prompt-boost".to_string(),
            version: "1.0.0".to_string(),
        },
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"protocolVersion\":\"2024-11-05\""));
    assert!(json.contains("\"serverInfo\""));
    assert!(json.contains("prompt-boost"));
}

#[test]
fn test_tool_input_schema_field_name() {
    let tool = Tool {
        name: "enhance_prompt".to_string(),
        description: "Enhances a prompt".to_string(),
        input_schema: json!({"type": "object"}),
    };

    let json = serde_json::to_string(&tool).unwrap();
    assert!(json.contains("\"inputSchema\""));
}

#[test]
fn test_call_tool_params_deserialization() {
    let json = r#"{"name":"enhance_prompt","arguments":{"prompt":"hi","strategy":"context"}}"#;
    let params: CallToolParams = serde_json::from_str(json).unwrap();

    assert_eq!(params.name, "enhance_prompt");
    assert!(params.arguments.is_some());
}

#[test]
fn test_call_tool_params_without_arguments() {
    let json = r#"{"name":"list_enhancers"}"#;
    let params: CallToolParams = serde_json::from_str(json).unwrap();

    assert!(params.arguments.is_none());
}

#[test]
fn test_text_content_new() {
    let content = TextContent::new("hello".to_string());

    assert_eq!(content.content_type, "text");
    assert_eq!(content.text, "hello");

    let json = serde_json::to_string(&content).unwrap();
    assert!(json.contains("\"type\":\"text\""));
}

// ============================================================================
// Transport Framing Tests
// ============================================================================

#[test]
fn test_is_header_line_content_length() {
    assert!(is_header_line("Content-Length: 42"));
    assert!(is_header_line("content-length: 42"));
    assert!(is_header_line("Content-Type: application/json"));
}

#[test]
fn test_is_header_line_rejects_json() {
    assert!(!is_header_line("{\"jsonrpc\":\"2.0\"}"));
    assert!(!is_header_line("plain text"));
}

#[test]
fn test_parse_content_length_valid() {
    let length = parse_content_length("Content-Length: 128").unwrap();
    assert_eq!(length, Some(128));
}

#[test]
fn test_parse_content_length_case_insensitive() {
    let length = parse_content_length("CONTENT-LENGTH:  64  ").unwrap();
    assert_eq!(length, Some(64));
}

#[test]
fn test_parse_content_length_other_header() {
    let length = parse_content_length("Content-Type: application/json").unwrap();
    assert_eq!(length, None);
}

#[test]
fn test_parse_content_length_no_colon() {
    let length = parse_content_length("not a header").unwrap();
    assert_eq!(length, None);
}

#[test]
fn test_parse_content_length_invalid_number() {
    assert!(parse_content_length("Content-Length: abc").is_err());
}
