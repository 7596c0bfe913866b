// Tools module for the MCP server
//
// This module implements the tool registration and dispatch system for the
// MCP server. Every tool is a canned response builder: it substitutes the
// caller's arguments into a fixed configuration record and a Python snippet
// showing how the real PandaAGI SDK would be invoked. Nothing is executed.

pub mod agent;
pub mod analysis;
pub mod deploy;
mod registry;

pub use registry::{Tool, ToolDefinition, ToolRegistry};

use std::sync::Arc;

use serde_json::Value;

use crate::errors::ToolError;

/// Initialize the tool registry.
///
/// Registration order is the order tools are reported by `mcp/listTools`.
pub fn init_registry() -> Arc<ToolRegistry> {
    let mut registry = ToolRegistry::new();

    // Agent lifecycle tools
    agent::register_tools(&mut registry);

    // Analysis and visualization tools
    analysis::register_tools(&mut registry);

    // Deployment tools
    deploy::register_tools(&mut registry);

    Arc::new(registry)
}

/// Dispatch a tool call by name.
///
/// Names resolve before arguments are inspected, so an unknown tool reports
/// as unknown even without arguments. Absent or null `args` for a
/// recognized tool is an error; any other value passes through, and missing
/// keys pick up their documented defaults.
pub async fn call_tool(
    registry: &ToolRegistry,
    name: &str,
    args: Option<&Value>,
) -> Result<Value, ToolError> {
    let tool = registry
        .get_tool(name)
        .ok_or_else(|| ToolError::Unknown(name.to_string()))?;
    let args = match args {
        Some(args) if !args.is_null() => args,
        _ => return Err(ToolError::MissingArguments(name.to_string())),
    };
    Ok(tool.execute(args).await)
}

/// Wrap builder text into the single text content block every tool returns.
pub(crate) fn text_content(text: String) -> Value {
    serde_json::json!({
        "content": [
            {
                "type": "text",
                "text": text
            }
        ]
    })
}

/// Read a string argument, substituting the documented default when the key
/// is absent or not a string.
pub(crate) fn arg_str<'a>(args: &'a Value, key: &str, default: &'a str) -> &'a str {
    args.get(key).and_then(Value::as_str).unwrap_or(default)
}

/// Read a string-array argument, substituting the documented default.
pub(crate) fn arg_str_list(args: &Value, key: &str, default: &[&str]) -> Vec<String> {
    match args.get(key).and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        None => default.iter().map(|s| s.to_string()).collect(),
    }
}
