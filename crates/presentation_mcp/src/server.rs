//! Line-delimited JSON-RPC server over arbitrary byte streams
//!
//! The binary wires this to stdin/stdout; tests drive it with in-memory
//! buffers. Notifications are consumed without a reply, everything else
//! gets exactly one response line.

use std::sync::Arc;

use application::WeatherToolService;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, instrument, warn};

use crate::protocol::{CallToolResult, JsonRpcRequest, JsonRpcResponse, LocationArguments, RpcError};
use crate::tools;

/// MCP protocol revision implemented by this server
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Name advertised in the `initialize` handshake
pub const SERVER_NAME: &str = "stratus-mcp";

/// MCP server dispatching tool calls to the application layer
#[derive(Debug)]
pub struct McpServer {
    tools: Arc<WeatherToolService>,
}

impl McpServer {
    /// Create a server around the weather tool service
    pub fn new(tools: Arc<WeatherToolService>) -> Self {
        Self { tools }
    }

    /// Serve requests until the reader reaches end of input
    ///
    /// # Errors
    ///
    /// Returns an error if reading a line or writing a response fails.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(version = PROTOCOL_VERSION, "MCP server ready");

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(line).await {
                match serde_json::to_vec(&response) {
                    Ok(payload) => {
                        writer.write_all(&payload).await?;
                        writer.write_all(b"\n").await?;
                        writer.flush().await?;
                    },
                    Err(e) => error!(error = %e, "Failed to serialize response"),
                }
            }
        }

        info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle one protocol line, returning the response if one is due
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Dropping unparseable line");
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    RpcError::parse_error(e.to_string()),
                ));
            },
        };

        if request.jsonrpc != "2.0" {
            warn!(version = %request.jsonrpc, "Unsupported JSON-RPC version");
            return request.id.map(|id| {
                JsonRpcResponse::failure(
                    id,
                    RpcError::invalid_request(format!(
                        "Unsupported JSON-RPC version: {}",
                        request.jsonrpc
                    )),
                )
            });
        }

        if request.is_notification() {
            debug!(method = %request.method, "Ignoring notification");
            return None;
        }

        let id = request.id.unwrap_or(Value::Null);
        Some(self.dispatch(&request.method, request.params, id).await)
    }

    #[instrument(skip(self, params, id))]
    async fn dispatch(&self, method: &str, params: Option<Value>, id: Value) -> JsonRpcResponse {
        match method {
            "initialize" => JsonRpcResponse::success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": SERVER_NAME,
                        "version": env!("CARGO_PKG_VERSION"),
                    },
                }),
            ),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, json!({ "tools": tools::definitions() })),
            "tools/call" => self.call_tool(params, id).await,
            other => {
                warn!(method = %other, "Unknown method");
                JsonRpcResponse::failure(id, RpcError::method_not_found(other))
            },
        }
    }

    async fn call_tool(&self, params: Option<Value>, id: Value) -> JsonRpcResponse {
        let Some(params) = params else {
            return JsonRpcResponse::failure(id, RpcError::invalid_params("Missing params"));
        };

        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::failure(id, RpcError::invalid_params("Missing tool name"));
        };

        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));
        let arguments: LocationArguments = match serde_json::from_value(arguments) {
            Ok(arguments) => arguments,
            Err(e) => {
                return JsonRpcResponse::failure(
                    id,
                    RpcError::invalid_params(format!("Invalid arguments: {e}")),
                );
            },
        };

        debug!(tool = %name, location = %arguments.location, "Calling tool");

        let text = match name {
            tools::CURRENT_WEATHER => self.tools.current_weather(&arguments.location).await,
            tools::WEATHER_FORECAST => self.tools.weather_forecast(&arguments.location).await,
            tools::WEATHER_INSIGHTS => self.tools.weather_insights(&arguments.location).await,
            other => {
                return JsonRpcResponse::failure(
                    id,
                    RpcError::invalid_params(format!("Unknown tool: {other}")),
                );
            },
        };

        match serde_json::to_value(CallToolResult::text(text)) {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => JsonRpcResponse::failure(id, RpcError::internal(e.to_string())),
        }
    }
}
