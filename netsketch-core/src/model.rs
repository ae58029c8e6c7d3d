use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which way an edge points when drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// from -> to
    #[default]
    Forward,
    /// from <- to
    Reverse,
    /// from <-> to
    Both,
}

impl Direction {
    fn is_forward(&self) -> bool {
        *self == Direction::Forward
    }
}

/// A connection between two devices, identified by canonical label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Direction::is_forward", default)]
    pub direction: Direction,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            direction: Direction::Forward,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Weight stored on each petgraph edge
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeData {
    pub label: Option<String>,
    pub direction: Direction,
}

/// Plain list form of a [`Graph`], used for serialization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
}

/// Topology graph: devices in first-seen order, edges in discovery order.
///
/// Parallel edges and self-loops are kept. Adding an edge inserts any missing
/// endpoint, so every edge endpoint is always a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "GraphSnapshot", into = "GraphSnapshot")]
pub struct Graph {
    inner: DiGraph<String, EdgeData>,
    index: HashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node unless it already exists
    pub fn add_node(&mut self, label: &str) -> NodeIndex {
        if let Some(idx) = self.index.get(label) {
            return *idx;
        }
        let idx = self.inner.add_node(label.to_string());
        self.index.insert(label.to_string(), idx);
        idx
    }

    pub fn add_edge(&mut self, edge: Edge) {
        let from = self.add_node(&edge.from);
        let to = self.add_node(&edge.to);
        self.inner.add_edge(
            from,
            to,
            EdgeData {
                label: edge.label,
                direction: edge.direction,
            },
        );
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Node labels in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.inner.node_indices().map(|idx| self.inner[idx].as_str())
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.inner.edge_references().map(|edge| Edge {
            from: self.inner[edge.source()].clone(),
            to: self.inner[edge.target()].clone(),
            label: edge.weight().label.clone(),
            direction: edge.weight().direction,
        })
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// No nodes and no edges
    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Underlying petgraph structure, for callers that want graph algorithms
    pub fn as_petgraph(&self) -> &DiGraph<String, EdgeData> {
        &self.inner
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().eq(other.nodes()) && self.edges().eq(other.edges())
    }
}

impl Eq for Graph {}

impl From<GraphSnapshot> for Graph {
    fn from(snapshot: GraphSnapshot) -> Self {
        let mut graph = Graph::new();
        for node in &snapshot.nodes {
            graph.add_node(node);
        }
        for edge in snapshot.edges {
            graph.add_edge(edge);
        }
        graph
    }
}

impl From<Graph> for GraphSnapshot {
    fn from(graph: Graph) -> Self {
        Self {
            nodes: graph.nodes().map(String::from).collect(),
            edges: graph.edges().collect(),
        }
    }
}
