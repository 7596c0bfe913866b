// Settings module for configuration
//
// This module defines the settings structure and loading/saving functions
// for the MCP server configuration.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Server settings for the MCP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Number of worker threads (0 = one per CPU)
    pub workers: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: crate::defaults::SERVER_HOST.to_string(),
            port: crate::defaults::SERVER_PORT,
            workers: crate::defaults::WORKERS,
        }
    }
}

/// Complete settings for the MCP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Environment (development, staging, production)
    pub environment: String,
    /// Server settings
    pub server: ServerSettings,
    /// Log level
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Effective worker count for the HTTP server.
    pub fn effective_workers(&self) -> usize {
        if self.server.workers == 0 {
            num_cpus::get()
        } else {
            self.server.workers
        }
    }
}

/// Load settings from a file
pub fn load(path: impl AsRef<Path>) -> Result<Settings> {
    let config_str = match fs::read_to_string(&path) {
        Ok(config_str) => config_str,
        Err(_) => {
            // If the file doesn't exist, create default settings
            let default_settings = Settings::default();
            save(&default_settings, path)?;
            return Ok(default_settings);
        }
    };

    let settings: Settings = toml::from_str(&config_str)?;
    Ok(settings)
}

/// Save settings to a file
pub fn save(settings: &Settings, path: impl AsRef<Path>) -> Result<()> {
    let config_str = toml::to_string_pretty(settings)?;

    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, config_str)?;
    Ok(())
}
