// Per-method handlers for the MCP endpoint.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::{json, Map, Value};

use crate::errors::ToolError;
use crate::protocol::{self, INVALID_PARAMS};
use crate::resources;
use crate::tools::{self, ToolRegistry};

/// `mcp/init`: fixed capabilities and server identity.
pub fn handle_init(id: Value) -> HttpResponse {
    protocol::rpc_result(
        json!({
            "protocolVersion": crate::MCP_PROTOCOL_VERSION,
            "capabilities": {
                "tools": {},
                "resources": {}
            },
            "serverInfo": {
                "name": crate::SERVER_NAME,
                "version": crate::SERVER_VERSION,
                "description": crate::SERVER_DESCRIPTION
            }
        }),
        id,
    )
}

/// `mcp/listTools`: the static tool descriptors, in registration order.
pub fn handle_list_tools(registry: &ToolRegistry, id: Value) -> HttpResponse {
    protocol::rpc_result(json!({ "tools": registry.list_tools() }), id)
}

/// `mcp/callTool`: route on `params.name` to a response builder.
pub async fn handle_call_tool(registry: &ToolRegistry, params: &Value, id: Value) -> HttpResponse {
    let params = match require_object(params) {
        Ok(params) => params,
        Err(response) => return response,
    };

    // A missing name falls through to the unknown-tool branch; schema
    // constraints stay descriptive only.
    let name = params.get("name").and_then(Value::as_str).unwrap_or_default();

    match tools::call_tool(registry, name, params.get("args")).await {
        Ok(result) => protocol::rpc_result(result, id),
        Err(ToolError::Unknown(_)) => {
            protocol::rpc_error(StatusCode::BAD_REQUEST, INVALID_PARAMS, "Unknown tool", id)
        }
        // Absent args for a recognized tool, id deliberately not echoed
        Err(err @ ToolError::MissingArguments(_)) => protocol::rpc_internal_error(err),
    }
}

/// `mcp/listResources`: the static resource descriptors.
pub fn handle_list_resources(id: Value) -> HttpResponse {
    protocol::rpc_result(json!({ "resources": resources::list_resources() }), id)
}

/// `mcp/readResource`: literal document text keyed by `params.uri`.
pub fn handle_read_resource(params: &Value, id: Value) -> HttpResponse {
    let params = match require_object(params) {
        Ok(params) => params,
        Err(response) => return response,
    };

    let uri = params.get("uri").and_then(Value::as_str).unwrap_or_default();

    match resources::read_resource(uri) {
        Some(text) => protocol::rpc_result(
            json!({
                "contents": [
                    {
                        "uri": uri,
                        "text": text
                    }
                ]
            }),
            id,
        ),
        None => protocol::rpc_error(
            StatusCode::NOT_FOUND,
            INVALID_PARAMS,
            "Resource not found",
            id,
        ),
    }
}

/// Methods that read from `params` require it to be an object; anything
/// else takes the internal-error path, id deliberately not echoed.
fn require_object(params: &Value) -> Result<&Map<String, Value>, HttpResponse> {
    params
        .as_object()
        .ok_or_else(|| protocol::rpc_internal_error("params is not an object"))
}
