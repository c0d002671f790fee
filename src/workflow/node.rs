use serde::{Deserialize, Serialize};

/// Canvas coordinates of a node's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where a node sits in the pipeline: entry point, inner stage, or sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Input,
    #[default]
    Intermediate,
    Output,
}

/// A named stage in the orchestration pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    pub label: String,
    pub position: Position,
    #[serde(default)]
    pub role: NodeRole,
    #[serde(default)]
    pub selected: bool,
}

impl WorkflowNode {
    pub fn new(id: &str, label: &str, position: Position, role: NodeRole) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            position,
            role,
            selected: false,
        }
    }
}
