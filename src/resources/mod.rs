// Resources module for the MCP server
//
// Four static documentation resources addressable by docs:// URIs. The
// catalog is immutable; lookups either hit a fixed key or map to the
// documented not-found error in the handler.

mod docs;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Descriptor for a static documentation resource, as reported by
/// `mcp/listResources`.
#[derive(Clone, Debug, Serialize)]
pub struct ResourceDescriptor {
    /// Display name of the resource
    pub name: &'static str,
    /// URI key used by `mcp/readResource`
    pub uri: &'static str,
    /// Resource metadata
    pub metadata: ResourceMetadata,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResourceMetadata {
    #[serde(rename = "mimeType")]
    pub mime_type: &'static str,
}

static CATALOG: Lazy<Vec<ResourceDescriptor>> = Lazy::new(|| {
    vec![
        ResourceDescriptor {
            name: "PandaAGI Documentation",
            uri: "docs://pandaagi-docs",
            metadata: ResourceMetadata {
                mime_type: "text/markdown",
            },
        },
        ResourceDescriptor {
            name: "PandaAGI Quick Start Guide",
            uri: "docs://pandaagi-quickstart",
            metadata: ResourceMetadata {
                mime_type: "text/markdown",
            },
        },
        ResourceDescriptor {
            name: "Agent Best Practices",
            uri: "docs://agent-best-practices",
            metadata: ResourceMetadata {
                mime_type: "text/markdown",
            },
        },
        ResourceDescriptor {
            name: "PandaAGI Examples",
            uri: "docs://pandaagi-examples",
            metadata: ResourceMetadata {
                mime_type: "text/markdown",
            },
        },
    ]
});

/// List the resource catalog in its fixed order.
pub fn list_resources() -> &'static [ResourceDescriptor] {
    &CATALOG
}

/// Look up the document body for a resource URI.
pub fn read_resource(uri: &str) -> Option<&'static str> {
    match uri {
        "docs://pandaagi-docs" => Some(docs::PANDAAGI_DOCS),
        "docs://pandaagi-quickstart" => Some(docs::PANDAAGI_QUICKSTART),
        "docs://agent-best-practices" => Some(docs::AGENT_BEST_PRACTICES),
        "docs://pandaagi-examples" => Some(docs::PANDAAGI_EXAMPLES),
        _ => None,
    }
}
