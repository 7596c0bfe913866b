// Error handling module for the MCP server
//
// This module defines the error types used throughout the MCP server.
// Wire-level failures are expressed directly as JSON-RPC error envelopes in
// the protocol module; these types cover everything behind the endpoint.

use thiserror::Error;

/// Common error types for the MCP server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Tool-specific errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    Unknown(String),

    #[error("missing arguments for tool: {0}")]
    MissingArguments(String),
}
