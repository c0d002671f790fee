use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by structural edits on a workflow graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Node '{node_id}' does not exist, so it cannot be used as the {role} of an edge")]
    NodeNotFound { node_id: String, role: EndpointRole },

    #[error("Edge '{0}' does not exist in the workflow")]
    EdgeNotFound(String),

    #[error("Node id '{0}' appears more than once in the workflow")]
    DuplicateNodeId(String),

    #[error("Edge id '{0}' appears more than once in the workflow")]
    DuplicateEdgeId(String),

    #[error("Edge '{edge_id}' references node '{missing_node_id}', which is not in the workflow")]
    DanglingEdge {
        edge_id: String,
        missing_node_id: String,
    },
}

/// Which end of an edge a node id was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Source,
    Target,
    /// The node was addressed directly (drag, selection), not through an edge.
    Subject,
}

impl std::fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndpointRole::Source => write!(f, "source"),
            EndpointRole::Target => write!(f, "target"),
            EndpointRole::Subject => write!(f, "subject"),
        }
    }
}

/// Errors raised when looking up templates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Template '{0}' is not in the catalog")]
    TemplateNotFound(String),
}

/// Errors raised while writing or releasing exported resources.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Could not write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading a shell configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
