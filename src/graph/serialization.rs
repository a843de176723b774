//! Wire shapes for submitting pipelines and reporting results.
//!
//! Nodes and edges may carry arbitrary extra attributes (positions, labels,
//! UI data). They are kept in `extra` so nothing is rejected, but the
//! validator never looks at them.

use crate::core::error::{GraphResult, PipecheckResult};
use crate::core::types::{Edge, NodeId, PipelineSummary};
use crate::validation::pipeline::ValidationPipeline;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable representation of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedNode {
    /// Node ID
    pub id: NodeId,
    /// Attributes the validator ignores
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl SerializedNode {
    /// Create a node with no extra attributes.
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            extra: IndexMap::new(),
        }
    }
}

/// Serializable representation of an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedEdge {
    /// Source node ID
    pub source: NodeId,
    /// Target node ID
    pub target: NodeId,
    /// Attributes the validator ignores
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl SerializedEdge {
    /// Create an edge with no extra attributes.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            extra: IndexMap::new(),
        }
    }
}

impl From<&SerializedEdge> for Edge {
    fn from(edge: &SerializedEdge) -> Self {
        Edge::new(edge.source.clone(), edge.target.clone())
    }
}

/// Request body for one validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedPipeline {
    /// Optional free-form pipeline name
    #[serde(default)]
    pub pipeline: Option<String>,
    /// Submitted nodes
    pub nodes: Vec<SerializedNode>,
    /// Submitted edges
    pub edges: Vec<SerializedEdge>,
}

impl SerializedPipeline {
    /// Parse a request body.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read and parse a pipeline file.
    pub fn load(path: impl AsRef<Path>) -> PipecheckResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let pipeline = Self::from_json(&text)?;
        log::debug!(
            "loaded pipeline from {}: {} node(s), {} edge(s)",
            path.as_ref().display(),
            pipeline.nodes.len(),
            pipeline.edges.len()
        );
        Ok(pipeline)
    }

    /// Node ids in submission order, duplicates kept.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Edges stripped of their extra attributes.
    pub fn to_edges(&self) -> Vec<Edge> {
        self.edges.iter().map(Edge::from).collect()
    }

    /// Validate with the default pipeline and shape the response.
    pub fn validate(&self) -> GraphResult<PipelineResponse> {
        self.validate_with(&ValidationPipeline::default())
    }

    /// Validate with a caller-supplied pipeline.
    pub fn validate_with(&self, pipeline: &ValidationPipeline) -> GraphResult<PipelineResponse> {
        let report = pipeline.validate(&self.node_ids(), &self.to_edges())?;
        Ok(report.summary.into())
    }
}

/// Response body: the three summary fields under their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResponse {
    /// Submitted node count
    pub num_nodes: usize,
    /// Submitted edge count
    pub num_edges: usize,
    /// Whether the pipeline is a connected DAG
    pub is_dag: bool,
}

impl From<PipelineSummary> for PipelineResponse {
    fn from(summary: PipelineSummary) -> Self {
        Self {
            num_nodes: summary.node_count,
            num_edges: summary.edge_count,
            is_dag: summary.is_valid,
        }
    }
}
