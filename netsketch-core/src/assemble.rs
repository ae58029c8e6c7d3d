//! Graph assembly from connector-separated fragments

use crate::matcher::KeywordMatcher;
use crate::model::{Edge, Graph};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How the edges of an extraction were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Edges came from connector phrases in the prompt
    Parsed,
    /// No connector resolved, so the discovered devices were chained in order.
    /// The topology is a guess.
    FallbackChain,
    /// Devices were recognized but no edge could be formed
    NodesOnly,
    /// Nothing recognized
    Empty,
}

/// Non-fatal events recorded while assembling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Fragment pair `index`/`index + 1` had a side with no known device
    UnresolvedPair {
        index: usize,
        from: String,
        to: String,
    },
    /// A linear chain was synthesized over these nodes
    FallbackChain { nodes: Vec<String> },
}

/// Result of running the pipeline on one prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub graph: Graph,
    pub provenance: Provenance,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// True when the edges were guessed rather than parsed
    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::FallbackChain
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}

/// Resolves fragment pairs into edges
pub struct GraphAssembler<'a> {
    matcher: &'a KeywordMatcher,
}

impl<'a> GraphAssembler<'a> {
    pub fn new(matcher: &'a KeywordMatcher) -> Self {
        Self { matcher }
    }

    /// Build the graph for a normalized prompt and its fragments.
    ///
    /// Nodes are seeded from a whole-prompt keyword scan. Each adjacent
    /// fragment pair becomes an edge when both sides resolve; otherwise the
    /// pair is skipped. With no edges and two or more devices, the devices are
    /// chained in node order.
    pub fn assemble(&self, normalized: &str, fragments: &[String]) -> Extraction {
        let mut graph = Graph::new();
        let mut diagnostics = Vec::new();

        for label in self.matcher.find_all_keywords(normalized) {
            graph.add_node(&label);
        }

        for (index, pair) in fragments.windows(2).enumerate() {
            let from = self.matcher.resolve(&pair[0]);
            let to = self.matcher.resolve(&pair[1]);

            match (from, to) {
                (Some(from), Some(to)) => {
                    debug!("Edge parsed: {} --> {}", from, to);
                    graph.add_edge(Edge::new(from, to));
                }
                _ => {
                    warn!(
                        "Incomplete edge between fragments '{}' and '{}'",
                        pair[0], pair[1]
                    );
                    diagnostics.push(Diagnostic::UnresolvedPair {
                        index,
                        from: pair[0].clone(),
                        to: pair[1].clone(),
                    });
                }
            }
        }

        let provenance = if graph.edge_count() > 0 {
            Provenance::Parsed
        } else if graph.node_count() > 1 {
            let nodes: Vec<String> = graph.nodes().map(String::from).collect();
            for pair in nodes.windows(2) {
                graph.add_edge(Edge::new(&pair[0], &pair[1]));
            }
            warn!(
                "No edge patterns found; fallback linear chaining applied over {} nodes",
                nodes.len()
            );
            diagnostics.push(Diagnostic::FallbackChain { nodes });
            Provenance::FallbackChain
        } else if graph.node_count() == 1 {
            Provenance::NodesOnly
        } else {
            Provenance::Empty
        };

        debug!(
            "Assembled {} nodes and {} edges ({:?})",
            graph.node_count(),
            graph.edge_count(),
            provenance
        );

        Extraction {
            graph,
            provenance,
            diagnostics,
        }
    }
}
