//! Error types for pipecheck.
//!
//! Uses thiserror for structured errors with context. Structural problems
//! (cycles, fragmentation) are not errors; see [`Invalidity`](super::types::Invalidity).
//! Errors here mean the caller broke the input contract or I/O failed.

use crate::core::types::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which end of an edge an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeEnd {
    /// The node the edge leaves.
    Source,
    /// The node the edge enters.
    Target,
}

impl fmt::Display for EdgeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeEnd::Source => write!(f, "source"),
            EdgeEnd::Target => write!(f, "target"),
        }
    }
}

/// Top-level error type for pipecheck.
#[derive(Error, Debug)]
pub enum PipecheckError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Errors raised while building a graph from submitted nodes and edges.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphError {
    #[error("Edge {edge_index} {end} references unknown node '{id}'")]
    UnknownNode {
        edge_index: usize,
        end: EdgeEnd,
        id: NodeId,
    },

    #[error("Cycle detected in graph involving nodes: {nodes:?}")]
    CycleDetected { nodes: Vec<NodeId> },
}

impl GraphError {
    /// Get suggestion for fixing this error.
    pub fn suggested_fix(&self) -> Option<String> {
        match self {
            GraphError::UnknownNode { id, .. } => {
                Some(format!("Add a node with id '{}' or remove the edge", id))
            }
            GraphError::CycleDetected { .. } => {
                Some("Remove one of the edges along the cycle".to_string())
            }
        }
    }
}

/// Result type alias for pipecheck operations.
pub type PipecheckResult<T> = Result<T, PipecheckError>;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_node_message() {
        let error = GraphError::UnknownNode {
            edge_index: 2,
            end: EdgeEnd::Target,
            id: NodeId::from("ghost"),
        };
        assert_eq!(
            error.to_string(),
            "Edge 2 target references unknown node 'ghost'"
        );
        assert!(error.suggested_fix().unwrap().contains("ghost"));
    }

    #[test]
    fn test_graph_error_converts() {
        let cycle = GraphError::CycleDetected {
            nodes: vec![NodeId::from("a")],
        };
        let err: PipecheckError = cycle.clone().into();
        assert!(matches!(err, PipecheckError::Graph(inner) if inner == cycle));
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PipecheckError = parse.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
