// Tool registry module
//
// This module defines the tool registry system which manages tool
// registration and discovery for the MCP server.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// ToolDefinition describes a tool as it appears in `mcp/listTools`.
///
/// `schema` is a JSON-Schema-shaped object describing accepted arguments,
/// defaults, enums and required fields. The schema is descriptive only:
/// builders substitute defaults for anything missing and never reject
/// arguments against it.
#[derive(Clone, Debug, Serialize)]
pub struct ToolDefinition {
    /// Name of the tool
    pub name: &'static str,
    /// Description of the tool
    pub description: &'static str,
    /// Argument schema for the tool
    pub schema: Value,
}

/// Tool trait for implementing tool functionality
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool definition
    fn definition(&self) -> ToolDefinition;

    /// Build the canned result payload for the given arguments
    async fn execute(&self, args: &Value) -> Value;
}

/// ToolRegistry manages tool registration and discovery.
///
/// Tools are stored in registration order; `mcp/listTools` reports them in
/// exactly that order on every call.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool with the registry
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.push(tool);
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools
            .iter()
            .find(|tool| tool.definition().name == name)
            .cloned()
    }

    /// List all registered tools in registration order
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|tool| tool.definition()).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
