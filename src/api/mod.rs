// API module for the MCP server
//
// This module contains the HTTP endpoint, handlers, and server bootstrap
// for the MCP server.

pub mod handlers;
pub mod routes;

use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use log::info;

use crate::config::Settings;
use crate::tools::ToolRegistry;

/// Initialize the API server with the appropriate routes and middleware
pub async fn init_server(
    settings: Arc<Settings>,
    registry: Arc<ToolRegistry>,
) -> std::io::Result<()> {
    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);
    let workers = settings.effective_workers();

    info!("Listening on {} with {} workers", bind_addr, workers);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(registry.clone()))
            .configure(routes::configure)
    })
    .workers(workers)
    .bind(bind_addr)?
    .run()
    .await
}

/// Health check handler
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": crate::SERVER_VERSION,
    }))
}
