//! Value types shared by the graph, validation and transport layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a node within one submitted pipeline.
///
/// The validator never interprets the contents; two nodes are the same node
/// exactly when their identifiers compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a node ID from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A directed arc from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Node the arc leaves.
    pub source: NodeId,
    /// Node the arc enters.
    pub target: NodeId,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Result of classifying one pipeline.
///
/// `node_count` and `edge_count` are the raw lengths of the submitted
/// sequences; duplicates are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Number of submitted nodes.
    pub node_count: usize,
    /// Number of submitted edges.
    pub edge_count: usize,
    /// Whether the pipeline is a weakly connected DAG.
    pub is_valid: bool,
}

/// Why a pipeline was classified as invalid.
///
/// Invalidity is an ordinary outcome and not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Invalidity {
    /// No nodes were submitted.
    Empty,
    /// A directed cycle exists. The path is closed: first == last.
    Cycle {
        /// Nodes along the cycle.
        path: Vec<NodeId>,
    },
    /// The same identifier was submitted more than once.
    DuplicateNodes {
        /// Each repeated id, once.
        ids: Vec<NodeId>,
    },
    /// The undirected graph splits into more than one component.
    Disconnected {
        /// Number of weakly connected components.
        components: usize,
        /// Nodes the first node cannot reach.
        unreached: Vec<NodeId>,
    },
}

impl fmt::Display for Invalidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invalidity::Empty => write!(f, "pipeline has no nodes"),
            Invalidity::Cycle { path } => {
                let joined: Vec<&str> = path.iter().map(NodeId::as_str).collect();
                write!(f, "cycle detected: {}", joined.join(" -> "))
            }
            Invalidity::DuplicateNodes { ids } => {
                let joined: Vec<&str> = ids.iter().map(NodeId::as_str).collect();
                write!(f, "duplicate node ids: {}", joined.join(", "))
            }
            Invalidity::Disconnected {
                components,
                unreached,
            } => write!(
                f,
                "pipeline splits into {} components ({} node(s) unreachable from the first node)",
                components,
                unreached.len()
            ),
        }
    }
}
