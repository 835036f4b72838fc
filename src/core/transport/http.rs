//! HTTP transport implementation.
//!
//! JSON-RPC over POST for clients that cannot spawn the server. The endpoint
//! is stateless: every request is answered on its own, so `initialize` is
//! optional and tool calls work right away.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::server::INSTRUCTIONS;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Protocol revision reported by `initialize`.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC request structure.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    server: McpServer,
    /// Path of the JSON-RPC endpoint, reported by the root handler.
    rpc_path: Arc<str>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let state = AppState {
            server,
            rpc_path: Arc::from(self.config.rpc_path.as_str()),
        };

        // Build router
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state);

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "tools": state.server.list_tools().len(),
        "endpoints": {
            "rpc": &*state.rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0",
        "documentation": format!("Send POST requests to {} with JSON-RPC messages", state.rpc_path)
    }))
}

/// Health check endpoint.
///
/// Reports the process only; the Petstore backends are not contacted.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let petstore = &state.server.config().petstore;
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "backends": {
            "auth": petstore.auth_url,
            "core": petstore.core_url
        }
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", &request.method);
    info!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&state, request).await;

    (StatusCode::OK, Json(response))
}

/// Process a JSON-RPC request and return the response.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    // Validate JSON-RPC version
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => handle_initialize(state, request),
        "tools/list" => handle_tools_list(state, request),
        "tools/call" => handle_tools_call(state, request).await,
        "ping" => JsonRpcResponse::success(request.id, serde_json::json!({})),

        // Nothing to track between requests
        method if method.starts_with("notifications/") => {
            debug!("Ignoring notification: {}", method);
            JsonRpcResponse::success(request.id, serde_json::Value::Null)
        }

        // Unknown method
        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

/// Handle initialize request.
fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    let result = serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": INSTRUCTIONS
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/list request.
fn handle_tools_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let tools = state.server.list_tools();
    JsonRpcResponse::success(request.id, serde_json::json!({ "tools": tools }))
}

/// Handle tools/call request.
async fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let Some(mut params) = request.params else {
        return JsonRpcResponse::invalid_params(request.id, "Missing params");
    };

    let Some(name) = params.get("name").and_then(|v| v.as_str()).map(str::to_owned) else {
        return JsonRpcResponse::invalid_params(request.id, "Missing tool name");
    };

    let arguments = params
        .get_mut("arguments")
        .map(serde_json::Value::take)
        .unwrap_or_else(|| serde_json::json!({}));

    info!("Calling tool {} over HTTP", name);

    match state.server.call_tool(&name, arguments).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::petstore::PetService;
    use crate::domains::petstore::testing::{MockAuth, MockBackend, pet};

    fn test_state() -> AppState {
        let backend = MockBackend::with_pets(vec![pet("1", "Rex")]);
        let service = Arc::new(PetService::new(Arc::new(MockAuth::default()), Arc::new(backend)));
        AppState {
            server: McpServer::with_service(Config::default(), service),
            rpc_path: Arc::from("/mcp"),
        }
    }

    fn request(method: &str, params: Option<serde_json::Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(serde_json::json!(1)),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_tools_list() {
        let response = process_request(&test_state(), request("tools/list", None)).await;
        let tools = &response.result.unwrap()["tools"];
        assert_eq!(tools.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_tools_call_find_by_name() {
        let params = serde_json::json!({
            "name": "find_pets_by_name",
            "arguments": {"name": "Rex"}
        });
        let response = process_request(&test_state(), request("tools/call", Some(params))).await;
        let result = response.result.unwrap();
        assert_eq!(result["isError"], serde_json::json!(false));
        assert_eq!(result["structuredContent"]["total_count"], 1);
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let params = serde_json::json!({"name": "delete_pet", "arguments": {}});
        let response = process_request(&test_state(), request("tools/call", Some(params))).await;
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_initialize_without_session() {
        let response = process_request(&test_state(), request("initialize", None)).await;
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert!(result["capabilities"]["tools"].is_object());
        assert_eq!(result["serverInfo"]["name"], "petstore-mcp-server");
    }

    #[tokio::test]
    async fn test_tools_call_missing_name() {
        let params = serde_json::json!({"arguments": {}});
        let response = process_request(&test_state(), request("tools/call", Some(params))).await;
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Missing tool name");
    }

    #[tokio::test]
    async fn test_notification_and_ping_succeed() {
        let state = test_state();
        let notified = process_request(&state, request("notifications/initialized", None)).await;
        assert!(notified.error.is_none());
        let pong = process_request(&state, request("ping", None)).await;
        assert_eq!(pong.result, Some(serde_json::json!({})));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let response = process_request(&test_state(), request("resources/list", None)).await;
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_wrong_jsonrpc_version() {
        let mut req = request("tools/list", None);
        req.jsonrpc = "1.0".to_string();
        let response = process_request(&test_state(), req).await;
        assert_eq!(response.error.unwrap().code, -32600);
    }
}
