use serde::{Deserialize, Serialize};

/// A directed connection between two workflow nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub animated: bool,
    #[serde(default)]
    pub selected: bool,
}

impl WorkflowEdge {
    /// Creates an animated, unselected edge.
    pub fn new(id: &str, source: &str, target: &str) -> Self {
        Self {
            id: id.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            animated: true,
            selected: false,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
