// API routes for the MCP server
//
// This file defines the routing for the MCP server endpoint. The RPC
// surface is a single path: POST carries the RPC envelope, OPTIONS is the
// CORS preflight, and every other verb is rejected with 405.

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::api::{handlers, health_check};
use crate::protocol;

/// Configure API routes for the MCP server
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // The MCP endpoint
        .route("/", web::post().to(handlers::rpc_endpoint))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Preflight and unsupported verbs
        .default_service(web::route().to(fallback));
}

/// Handler for everything outside POST /: preflight gets its CORS reply,
/// any other verb gets 405.
async fn fallback(req: HttpRequest) -> impl Responder {
    if req.method() == Method::OPTIONS {
        protocol::preflight()
    } else {
        method_not_allowed(req)
    }
}

fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    log::debug!("rejected {} {}", req.method(), req.path());
    protocol::method_not_allowed()
}
