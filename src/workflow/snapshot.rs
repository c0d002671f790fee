use super::edge::WorkflowEdge;
use super::node::WorkflowNode;
use serde::{Deserialize, Serialize};

/// An owned copy of a workflow's nodes and edges.
///
/// Snapshots share nothing with the graph they were taken from, so later edits
/// to the graph are never visible through them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
}

impl WorkflowSnapshot {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
