// pandaagi-mcp: Model Context Protocol Server for the PandaAGI SDK
//
// This library implements a Model Context Protocol (MCP) server which exposes
// the PandaAGI SDK to AI clients as a set of tools and documentation
// resources. Tool calls return configuration records and ready-to-run Python
// snippets; no agent is created or executed server-side.

pub mod api;
pub mod config;
pub mod errors;
pub mod protocol;
pub mod resources;
pub mod tools;

/// Version of the MCP specification implemented by this server
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Server identity reported by `mcp/init`
pub const SERVER_NAME: &str = "pandaagi-mcp-server";
pub const SERVER_VERSION: &str = "1.0.0";
pub const SERVER_DESCRIPTION: &str = "MCP server for PandaAGI - Agentic General Intelligence";

/// Default server configuration constants
pub mod defaults {
    /// Default port for the MCP server
    pub const SERVER_PORT: u16 = 3010;
    /// Default host address to bind to
    pub const SERVER_HOST: &str = "127.0.0.1";
    /// Default number of worker threads (0 = auto)
    pub const WORKERS: usize = 0;
}
