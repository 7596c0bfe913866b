// JSON-RPC envelope types for the MCP server
//
// This module defines the request/response shapes of the MCP wire protocol
// and the HTTP response builders that stamp the CORS headers every reply
// carries. The contract pins exact header values on every response,
// including error paths, so the headers are set here rather than through
// middleware.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC version constant.
pub const JSONRPC_VERSION: &str = "2.0";

/// Standard JSON-RPC error codes used by this server.
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// Inbound RPC request envelope.
///
/// `id` is an opaque value echoed back verbatim; a request without one
/// echoes as `null`. Fields are read the way a loose JSON client sends
/// them: anything absent or mistyped collapses to its empty value rather
/// than rejecting the body, so a body like `42` or `[]` dispatches through
/// the unknown-method branch.
#[derive(Debug, Clone)]
pub struct RpcRequest {
    pub method: String,
    pub params: Value,
    pub id: Value,
}

impl RpcRequest {
    /// Read an envelope out of a parsed JSON body.
    pub fn from_value(body: &Value) -> Self {
        Self {
            method: body
                .get("method")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            params: body.get("params").cloned().unwrap_or(Value::Null),
            id: body.get("id").cloned().unwrap_or(Value::Null),
        }
    }
}

/// Outbound RPC response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: Value,
}

/// JSON-RPC error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcResponse {
    pub fn success(result: Value, id: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn failure(code: i32, message: impl Into<String>, id: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
            id,
        }
    }
}

/// The five recognized RPC methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Init,
    ListTools,
    CallTool,
    ListResources,
    ReadResource,
}

impl Method {
    /// Parse a wire method name. Unknown names map to the documented
    /// -32601 branch, never to a fallthrough.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "mcp/init" => Some(Self::Init),
            "mcp/listTools" => Some(Self::ListTools),
            "mcp/callTool" => Some(Self::CallTool),
            "mcp/listResources" => Some(Self::ListResources),
            "mcp/readResource" => Some(Self::ReadResource),
            _ => None,
        }
    }
}

/// Build a successful RPC reply (HTTP 200).
pub fn rpc_result(result: Value, id: Value) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .json(RpcResponse::success(result, id))
}

/// Build an RPC error reply with the given HTTP status.
pub fn rpc_error(
    status: StatusCode,
    code: i32,
    message: impl Into<String>,
    id: Value,
) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .json(RpcResponse::failure(code, message, id))
}

/// Build the internal-error reply. The request id is deliberately not
/// echoed on this path.
pub fn rpc_internal_error(details: impl std::fmt::Display) -> HttpResponse {
    rpc_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_ERROR,
        format!("Internal error: {}", details),
        Value::Null,
    )
}

/// Reply to a CORS preflight: empty body, no Content-Type.
pub fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
        .insert_header(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .finish()
}

/// Reply to a request with an unsupported HTTP verb.
pub fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
        .insert_header(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .json(serde_json::json!({ "error": "Method not allowed" }))
}
