//! Common test utilities for building sessions, graphs and documents.
use bolt_lovable::prelude::*;
use std::time::Duration;

/// Step delay used by the default configuration.
#[allow(dead_code)]
pub const STEP_DELAY: Duration = Duration::from_millis(700);

/// A config with a fixed seed so node ids and positions are reproducible.
#[allow(dead_code)]
pub fn seeded_config() -> ShellConfig {
    ShellConfig {
        seed: Some(42),
        ..ShellConfig::default()
    }
}

/// The default pipeline with a seeded id source.
#[allow(dead_code)]
pub fn seeded_graph() -> WorkflowGraph {
    WorkflowGraph::builder()
        .seed(42)
        .build()
        .expect("default pipeline is valid")
}

/// A graph without any nodes.
#[allow(dead_code)]
pub fn empty_graph() -> WorkflowGraph {
    WorkflowGraph::builder()
        .empty()
        .seed(42)
        .build()
        .expect("empty graph is valid")
}

/// Opens a session over the builtin catalog and the given graph.
#[allow(dead_code)]
pub fn session_with(graph: WorkflowGraph) -> (Session, NotificationStream) {
    Session::with_parts(seeded_config(), TemplateCatalog::builtin(), graph)
}

/// Node ids of a graph, in iteration order.
#[allow(dead_code)]
pub fn node_ids(graph: &WorkflowGraph) -> Vec<String> {
    graph.nodes().iter().map(|n| n.id.clone()).collect()
}

/// Edge ids of a graph, in iteration order.
#[allow(dead_code)]
pub fn edge_ids(graph: &WorkflowGraph) -> Vec<String> {
    graph.edges().iter().map(|e| e.id.clone()).collect()
}

/// Checks that every edge's endpoints exist and that ids are unique.
#[allow(dead_code)]
pub fn assert_graph_integrity(graph: &WorkflowGraph) {
    let nodes = node_ids(graph);
    let edges = edge_ids(graph);
    let mut unique_nodes = nodes.clone();
    unique_nodes.sort();
    unique_nodes.dedup();
    assert_eq!(unique_nodes.len(), nodes.len(), "duplicate node ids");
    let mut unique_edges = edges.clone();
    unique_edges.sort();
    unique_edges.dedup();
    assert_eq!(unique_edges.len(), edges.len(), "duplicate edge ids");
    for edge in graph.edges() {
        assert!(graph.contains_node(&edge.source), "dangling source in {}", edge.id);
        assert!(graph.contains_node(&edge.target), "dangling target in {}", edge.id);
    }
}

/// Titles of a batch of notifications, in order.
#[allow(dead_code)]
pub fn titles(notifications: &[Notification]) -> Vec<&str> {
    notifications.iter().map(|n| n.title.as_str()).collect()
}
