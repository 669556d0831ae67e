//! JSON-RPC protocol types for the MCP transport
//!
//! - **Requests**: client → server, carry an `id` (number or string)
//! - **Notifications**: client → server, no `id`, never answered
//! - **Responses**: server → client, echo the request `id` with either
//!   a `result` or an `error`

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parse error: the line was not valid JSON
pub const PARSE_ERROR: i64 = -32700;
/// The message was valid JSON but not a well-formed request
pub const INVALID_REQUEST: i64 = -32600;
/// The requested method is not implemented
pub const METHOD_NOT_FOUND: i64 = -32601;
/// The params object is missing or malformed
pub const INVALID_PARAMS: i64 = -32602;
/// Internal server error
pub const INTERNAL_ERROR: i64 = -32603;

/// Incoming JSON-RPC message
///
/// A request when `id` is present, a notification when it is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Whether this message is a notification (no response expected)
    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Outgoing JSON-RPC response
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl JsonRpcResponse {
    /// Successful response echoing the request id
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Error response echoing the request id
    pub fn failure(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn parse_error(detail: impl Into<String>) -> Self {
        Self {
            code: PARSE_ERROR,
            message: detail.into(),
            data: None,
        }
    }

    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self {
            code: INVALID_REQUEST,
            message: detail.into(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {method}"),
            data: None,
        }
    }

    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self {
            code: INVALID_PARAMS,
            message: detail.into(),
            data: None,
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            code: INTERNAL_ERROR,
            message: detail.into(),
            data: None,
        }
    }
}

/// A single content block in a tool result
#[derive(Debug, Clone, Serialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub text: String,
}

impl ToolContent {
    /// Plain text content block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text",
            text: text.into(),
        }
    }
}

/// Result payload for a `tools/call` response
#[derive(Debug, Clone, Serialize)]
pub struct CallToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl CallToolResult {
    /// Wrap tool output as a single text block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
            is_error: false,
        }
    }
}

/// Arguments for the weather tools: all three take a single location
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArguments {
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_with_numeric_id() {
        let line = r#"{"jsonrpc":"2.0","id":7,"method":"tools/list"}"#;
        let request: JsonRpcRequest = serde_json::from_str(line).expect("parse");
        assert_eq!(request.method, "tools/list");
        assert_eq!(request.id, Some(json!(7)));
        assert!(!request.is_notification());
    }

    #[test]
    fn request_with_string_id() {
        let line = r#"{"jsonrpc":"2.0","id":"abc-1","method":"ping"}"#;
        let request: JsonRpcRequest = serde_json::from_str(line).expect("parse");
        assert_eq!(request.id, Some(json!("abc-1")));
    }

    #[test]
    fn notification_has_no_id() {
        let line = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        let request: JsonRpcRequest = serde_json::from_str(line).expect("parse");
        assert!(request.is_notification());
    }

    #[test]
    fn success_response_omits_error() {
        let response = JsonRpcResponse::success(json!(3), json!({"ok": true}));
        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], 3);
        assert_eq!(value["result"]["ok"], true);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn failure_response_carries_code() {
        let response = JsonRpcResponse::failure(json!(3), RpcError::method_not_found("nope"));
        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(value["error"]["code"], METHOD_NOT_FOUND);
        assert_eq!(value["error"]["message"], "Method not found: nope");
        assert!(value.get("result").is_none());
    }

    #[test]
    fn call_tool_result_shape() {
        let result = CallToolResult::text("Sunny, 72°F");
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "Sunny, 72°F");
        assert_eq!(value["isError"], false);
    }

    #[test]
    fn location_arguments_require_location() {
        let ok: Result<LocationArguments, _> = serde_json::from_value(json!({"location": "Oslo"}));
        assert_eq!(ok.expect("parse").location, "Oslo");

        let missing: Result<LocationArguments, _> = serde_json::from_value(json!({}));
        assert!(missing.is_err());
    }
}
