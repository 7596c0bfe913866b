// API handlers for the MCP server
//
// This module contains the request handlers for the MCP endpoint. The
// entry handler parses the envelope and dispatches on the RPC method;
// per-method handlers live in `rpc`.

pub mod rpc;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::debug;
use serde_json::Value;

use crate::protocol::{self, Method, RpcRequest, METHOD_NOT_FOUND};
use crate::tools::ToolRegistry;

/// Entry point for the MCP endpoint.
///
/// The body is parsed by hand rather than through `web::Json` so that a
/// malformed body reports through the -32603 envelope (HTTP 500, id null)
/// instead of actix's default 400. Bodies that parse to a non-object value
/// read as an empty envelope and dispatch as an unknown method.
pub async fn rpc_endpoint(
    registry: web::Data<Arc<ToolRegistry>>,
    body: web::Bytes,
) -> HttpResponse {
    let body_json: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => return protocol::rpc_internal_error(e),
    };
    let request = RpcRequest::from_value(&body_json);

    debug!("rpc method={}", request.method);

    match Method::parse(&request.method) {
        Some(Method::Init) => rpc::handle_init(request.id),
        Some(Method::ListTools) => rpc::handle_list_tools(registry.get_ref(), request.id),
        Some(Method::CallTool) => {
            rpc::handle_call_tool(registry.get_ref(), &request.params, request.id).await
        }
        Some(Method::ListResources) => rpc::handle_list_resources(request.id),
        Some(Method::ReadResource) => rpc::handle_read_resource(&request.params, request.id),
        None => protocol::rpc_error(
            StatusCode::BAD_REQUEST,
            METHOD_NOT_FOUND,
            "Method not found",
            request.id,
        ),
    }
}
