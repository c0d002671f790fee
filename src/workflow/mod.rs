//! The orchestration pipeline graph: stage nodes, directed edges between them,
//! and the structural edits the pipeline editor performs.
//!
//! The graph keeps an index from each node id to the ids of the edges touching
//! it, so removing a node always removes its edges too. No edge may ever point
//! at a node that is not in the graph.

mod edge;
mod ids;
mod layout;
mod node;
mod snapshot;

pub use edge::WorkflowEdge;
pub use ids::{ID_LEN, IdSource};
pub use layout::LayoutMode;
pub use node::{NodeRole, Position, WorkflowNode};
pub use snapshot::WorkflowSnapshot;

use crate::config::{LayoutSpacing, SpawnArea};
use crate::error::{EndpointRole, WorkflowError};
use ahash::{AHashMap, AHashSet};
use tracing::{debug, info};

/// Label given to nodes created by the "Add Step" action.
pub const DEFAULT_STEP_LABEL: &str = "Custom Step";

/// Ids of everything removed by a single delete action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Removed {
    pub nodes: Vec<String>,
    pub edges: Vec<String>,
}

impl Removed {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// A mutable graph of pipeline stages.
#[derive(Debug, Clone)]
pub struct WorkflowGraph {
    nodes: Vec<WorkflowNode>,
    edges: Vec<WorkflowEdge>,
    incident: AHashMap<String, AHashSet<String>>,
    ids: IdSource,
    spawn_area: SpawnArea,
    spacing: LayoutSpacing,
}

/// What a freshly built graph starts out containing.
enum Start {
    Initial,
    Empty,
    Snapshot(WorkflowSnapshot),
}

/// Configures how a [`WorkflowGraph`] is seeded and laid out.
pub struct WorkflowGraphBuilder {
    start: Start,
    ids: Option<IdSource>,
    spawn_area: SpawnArea,
    spacing: LayoutSpacing,
}

impl Default for WorkflowGraphBuilder {
    fn default() -> Self {
        Self {
            start: Start::Initial,
            ids: None,
            spawn_area: SpawnArea::default(),
            spacing: LayoutSpacing::default(),
        }
    }
}

impl WorkflowGraphBuilder {
    /// Restores from a snapshot instead of the default pipeline. A snapshot
    /// without nodes still yields the default pipeline.
    pub fn snapshot(mut self, snapshot: WorkflowSnapshot) -> Self {
        self.start = if snapshot.is_empty() {
            Start::Initial
        } else {
            Start::Snapshot(snapshot)
        };
        self
    }

    /// Starts from a graph with no nodes at all.
    pub fn empty(mut self) -> Self {
        self.start = Start::Empty;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.ids = Some(IdSource::seeded(seed));
        self
    }

    pub fn id_source(mut self, ids: IdSource) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn spawn_area(mut self, area: SpawnArea) -> Self {
        self.spawn_area = area;
        self
    }

    pub fn spacing(mut self, spacing: LayoutSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn build(self) -> Result<WorkflowGraph, WorkflowError> {
        let mut graph = WorkflowGraph::blank(self.ids.unwrap_or_default());
        graph.spawn_area = self.spawn_area;
        graph.spacing = self.spacing;
        match self.start {
            Start::Initial => graph.load(initial_snapshot())?,
            Start::Empty => {}
            Start::Snapshot(snapshot) => graph.load(snapshot)?,
        }
        Ok(graph)
    }
}

/// The default four-stage linear pipeline.
pub fn initial_snapshot() -> WorkflowSnapshot {
    let nodes = vec![
        WorkflowNode::new("architect", "Architect", Position::new(20.0, 40.0), NodeRole::Input),
        WorkflowNode::new("coder", "Coder", Position::new(240.0, 40.0), NodeRole::Intermediate),
        WorkflowNode::new("debugger", "Debugger", Position::new(460.0, 40.0), NodeRole::Intermediate),
        WorkflowNode::new("handler", "Error Handler", Position::new(680.0, 40.0), NodeRole::Output),
    ];
    let edges = vec![
        WorkflowEdge::new("e1", "architect", "coder"),
        WorkflowEdge::new("e2", "coder", "debugger"),
        WorkflowEdge::new("e3", "debugger", "handler"),
    ];
    WorkflowSnapshot { nodes, edges }
}

impl Default for WorkflowGraph {
    fn default() -> Self {
        Self::initial_state()
    }
}

impl WorkflowGraph {
    pub fn builder() -> WorkflowGraphBuilder {
        WorkflowGraphBuilder::default()
    }

    /// The default Architect → Coder → Debugger → Error Handler pipeline.
    pub fn initial_state() -> Self {
        let mut graph = Self::blank(IdSource::default());
        let snapshot = initial_snapshot();
        for node in snapshot.nodes {
            graph.insert_node(node);
        }
        for edge in snapshot.edges {
            graph.insert_edge(edge);
        }
        graph
    }

    /// A graph with no nodes.
    pub fn empty() -> Self {
        Self::blank(IdSource::default())
    }

    /// Restores a graph from a snapshot, falling back to the default pipeline
    /// when the snapshot has no nodes.
    pub fn from_snapshot(snapshot: WorkflowSnapshot) -> Result<Self, WorkflowError> {
        Self::builder().snapshot(snapshot).build()
    }

    fn blank(ids: IdSource) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            incident: AHashMap::new(),
            ids,
            spawn_area: SpawnArea::default(),
            spacing: LayoutSpacing::default(),
        }
    }

    /// Replaces the current contents with a validated snapshot.
    fn load(&mut self, snapshot: WorkflowSnapshot) -> Result<(), WorkflowError> {
        let mut node_ids = AHashSet::new();
        for node in &snapshot.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(WorkflowError::DuplicateNodeId(node.id.clone()));
            }
        }
        let mut edge_ids = AHashSet::new();
        for edge in &snapshot.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(WorkflowError::DuplicateEdgeId(edge.id.clone()));
            }
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(WorkflowError::DanglingEdge {
                        edge_id: edge.id.clone(),
                        missing_node_id: endpoint.clone(),
                    });
                }
            }
        }

        self.nodes.clear();
        self.edges.clear();
        self.incident.clear();
        for node in snapshot.nodes {
            self.insert_node(node);
        }
        for edge in snapshot.edges {
            self.insert_edge(edge);
        }
        Ok(())
    }

    pub fn nodes(&self) -> &[WorkflowNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[WorkflowEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&WorkflowEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.incident.contains_key(id)
    }

    /// Ids of every edge that starts or ends at `node_id`, sorted.
    pub fn incident_edges(&self, node_id: &str) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .incident
            .get(node_id)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    /// Adds an intermediate node at a pseudo-random spot in the spawn area.
    pub fn add_node(&mut self, label: &str) -> WorkflowNode {
        let id = self.fresh_id(|graph, id| graph.contains_node(id));
        let position = self.ids.next_position(&self.spawn_area);
        let node = WorkflowNode::new(&id, label, position, NodeRole::Intermediate);
        info!(node_id = %id, label, "Added workflow node");
        self.insert_node(node.clone());
        node
    }

    /// Connects two existing nodes with an animated edge.
    ///
    /// Self-loops, parallel edges and cycles are all accepted.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<WorkflowEdge, WorkflowError> {
        self.require_node(source, EndpointRole::Source)?;
        self.require_node(target, EndpointRole::Target)?;

        let suffix = self.fresh_id(|graph, id| graph.edge(&format!("e-{}", id)).is_some());
        let edge = WorkflowEdge::new(&format!("e-{}", suffix), source, target);
        info!(edge_id = %edge.id, source, target, "Connected workflow nodes");
        self.insert_edge(edge.clone());
        Ok(edge)
    }

    /// Moves a node, as a drag on the canvas does.
    pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), WorkflowError> {
        let node = self.node_mut(id)?;
        node.position = position;
        debug!(node_id = id, x = position.x, y = position.y, "Moved workflow node");
        Ok(())
    }

    pub fn set_node_selected(&mut self, id: &str, selected: bool) -> Result<(), WorkflowError> {
        self.node_mut(id)?.selected = selected;
        Ok(())
    }

    pub fn set_edge_selected(&mut self, id: &str, selected: bool) -> Result<(), WorkflowError> {
        let edge = self
            .edges
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| WorkflowError::EdgeNotFound(id.to_string()))?;
        edge.selected = selected;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.nodes.iter_mut().for_each(|n| n.selected = false);
        self.edges.iter_mut().for_each(|e| e.selected = false);
    }

    /// Removes every selected node and edge, plus any edge left without one of
    /// its endpoints.
    pub fn delete_selected(&mut self) -> Removed {
        let doomed_nodes: Vec<String> = self
            .nodes
            .iter()
            .filter(|n| n.selected)
            .map(|n| n.id.clone())
            .collect();

        let mut doomed_edges: AHashSet<String> = self
            .edges
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.id.clone())
            .collect();
        for node_id in &doomed_nodes {
            if let Some(incident) = self.incident.get(node_id) {
                doomed_edges.extend(incident.iter().cloned());
            }
        }

        let mut removed = Removed::default();
        let edges = std::mem::take(&mut self.edges);
        for edge in edges {
            if doomed_edges.contains(&edge.id) {
                self.unindex_edge(&edge);
                removed.edges.push(edge.id);
            } else {
                self.edges.push(edge);
            }
        }

        self.nodes.retain(|n| !n.selected);
        for node_id in &doomed_nodes {
            self.incident.remove(node_id);
        }
        removed.nodes = doomed_nodes;

        if !removed.is_empty() {
            info!(
                nodes = removed.nodes.len(),
                edges = removed.edges.len(),
                "Deleted selected workflow elements"
            );
        }
        removed
    }

    /// Repositions every node in iteration order along one axis.
    pub fn apply_layout(&mut self, mode: LayoutMode) {
        let spacing = self.spacing;
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.position = mode.position_for(i, &spacing);
        }
        debug!(?mode, nodes = self.nodes.len(), "Applied workflow layout");
    }

    /// An owned copy of the current nodes and edges.
    pub fn serialize(&self) -> WorkflowSnapshot {
        WorkflowSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    fn fresh_id(&mut self, taken: impl Fn(&Self, &str) -> bool) -> String {
        loop {
            let id = self.ids.next_id();
            if !taken(self, &id) {
                return id;
            }
        }
    }

    fn require_node(&self, id: &str, role: EndpointRole) -> Result<(), WorkflowError> {
        if self.contains_node(id) {
            Ok(())
        } else {
            Err(WorkflowError::NodeNotFound {
                node_id: id.to_string(),
                role,
            })
        }
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut WorkflowNode, WorkflowError> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| WorkflowError::NodeNotFound {
                node_id: id.to_string(),
                role: EndpointRole::Subject,
            })
    }

    fn insert_node(&mut self, node: WorkflowNode) {
        self.incident.entry(node.id.clone()).or_default();
        self.nodes.push(node);
    }

    fn insert_edge(&mut self, edge: WorkflowEdge) {
        for endpoint in [&edge.source, &edge.target] {
            self.incident
                .entry(endpoint.clone())
                .or_default()
                .insert(edge.id.clone());
        }
        self.edges.push(edge);
    }

    fn unindex_edge(&mut self, edge: &WorkflowEdge) {
        for endpoint in [&edge.source, &edge.target] {
            if let Some(set) = self.incident.get_mut(endpoint) {
                set.remove(&edge.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_linear_pipeline() {
        let graph = WorkflowGraph::initial_state();
        let labels: Vec<_> = graph.nodes().iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, ["Architect", "Coder", "Debugger", "Error Handler"]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.node("architect").map(|n| n.role), Some(NodeRole::Input));
        assert_eq!(graph.node("handler").map(|n| n.role), Some(NodeRole::Output));
        assert_eq!(graph.incident_edges("coder"), ["e1", "e2"]);
    }

    #[test]
    fn test_self_loop_is_indexed_once() {
        let mut graph = WorkflowGraph::builder().seed(9).build().unwrap();
        let edge = graph.connect("coder", "coder").unwrap();
        assert!(edge.is_self_loop());
        assert_eq!(graph.incident_edges("coder").len(), 3);

        graph.set_node_selected("coder", true).unwrap();
        let removed = graph.delete_selected();
        assert_eq!(removed.edges.len(), 3);
        assert_eq!(graph.edge_count(), 1);
    }
}
