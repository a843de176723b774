//! Graph module for submitted pipelines.
//!
//! A pipeline graph is a set of node ids plus directed edges between them.
//! This module builds adjacency over one submission and analyzes its shape.

pub mod structure;
pub mod topology;
pub mod serialization;

// Re-export commonly used types
pub use structure::{Adjacency, PipelineGraph};
pub use topology::TopologyAnalyzer;
pub use serialization::{PipelineResponse, SerializedEdge, SerializedNode, SerializedPipeline};
