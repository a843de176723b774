//! # Pipecheck - Pipeline Structure Validation
//!
//! Pipecheck classifies a submitted pipeline (node ids plus directed edges)
//! as valid when it is a directed acyclic graph whose nodes are all weakly
//! connected, and reports node and edge counts alongside the verdict.
//!
//! ## Quick Start
//!
//! ```rust
//! use pipecheck::prelude::*;
//!
//! let nodes: Vec<NodeId> = ["load", "blur", "save"].into_iter().map(NodeId::from).collect();
//! let edges = vec![Edge::new("load", "blur"), Edge::new("blur", "save")];
//!
//! let summary = validate(&nodes, &edges).unwrap();
//! assert_eq!(summary.node_count, 3);
//! assert!(summary.is_valid);
//!
//! // The staged form also says why a pipeline was rejected.
//! let report = ValidationPipeline::default()
//!     .validate(&nodes, &[Edge::new("load", "blur"), Edge::new("blur", "load")])
//!     .unwrap();
//! assert!(matches!(report.reason, Some(Invalidity::Cycle { .. })));
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: identifiers, summary types and errors
//! - [`graph`]: adjacency construction, topology analysis, wire shapes
//! - [`validation`]: the ordered validation rules
//! - [`config`]: server settings loaded from TOML
//! - [`server`]: the HTTP transport
//!
//! Validation is pure and synchronous; only the server is async.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod graph;
pub mod server;
pub mod validation;

pub use crate::core::types::{Edge, Invalidity, NodeId, PipelineSummary};
pub use crate::validation::pipeline::validate;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust
/// use pipecheck::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{Edge, Invalidity, NodeId, PipelineSummary};

    // Errors
    pub use crate::core::error::{
        EdgeEnd, GraphError, GraphResult, PipecheckError, PipecheckResult,
    };

    // Graph
    pub use crate::graph::serialization::{
        PipelineResponse, SerializedEdge, SerializedNode, SerializedPipeline,
    };
    pub use crate::graph::structure::PipelineGraph;
    pub use crate::graph::topology::TopologyAnalyzer;

    // Validation
    pub use crate::validation::pipeline::{validate, ValidationPipeline, ValidationReport};
    pub use crate::validation::stages::{
        AcyclicValidation, ConnectivityValidation, ValidationStage,
    };

    // Configuration
    pub use crate::config::ServerConfig;
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
        assert_eq!(super::NAME, "pipecheck");
    }

    #[test]
    fn test_basic_validation() {
        let nodes = vec![NodeId::from("a"), NodeId::from("b")];
        let summary = validate(&nodes, &[Edge::new("a", "b")]).unwrap();

        assert_eq!(
            summary,
            PipelineSummary {
                node_count: 2,
                edge_count: 1,
                is_valid: true,
            }
        );
    }
}
