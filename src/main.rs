use std::env;
use std::process;

use anyhow::Result;
use log::{error, info};
use pandaagi_mcp::{api, resources, tools};

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!(
        "Starting {} v{}",
        pandaagi_mcp::SERVER_NAME,
        pandaagi_mcp::SERVER_VERSION
    );

    // Get configuration path from command line arguments
    let config_path = env::args().nth(1);

    // Load configuration
    let settings = match pandaagi_mcp::config::load_config(config_path.as_deref()) {
        Ok(settings) => {
            info!("Loaded configuration successfully");
            settings
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Initialize tool registry and resource catalog
    let registry = tools::init_registry();
    info!(
        "Initialized tool registry with {} tools",
        registry.list_tools().len()
    );
    info!(
        "Serving {} documentation resources",
        resources::list_resources().len()
    );

    // Start the API server
    match api::init_server(settings, registry).await {
        Ok(_) => {
            info!("pandaagi-mcp server stopped gracefully");
            Ok(())
        }
        Err(e) => {
            error!("Error starting pandaagi-mcp server: {}", e);
            process::exit(1);
        }
    }
}
