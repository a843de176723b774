//! Individual validation stages.
//!
//! Each stage checks one structural property of an already-built graph.
//! A stage that finds a problem returns the [`Invalidity`] describing it.

use crate::core::types::Invalidity;
use crate::graph::structure::PipelineGraph;
use crate::graph::topology::TopologyAnalyzer;

/// Trait for validation stages.
pub trait ValidationStage: Send + Sync {
    /// Name of this validation stage.
    fn name(&self) -> &str;

    /// Validate the graph.
    ///
    /// Returns Ok if the property holds, or Err with the reason it does not.
    fn validate(&self, graph: &PipelineGraph) -> Result<(), Invalidity>;
}

/// Acyclicity - no directed cycle anywhere in the graph.
pub struct AcyclicValidation;

impl ValidationStage for AcyclicValidation {
    fn name(&self) -> &str {
        "Acyclic Validation"
    }

    fn validate(&self, graph: &PipelineGraph) -> Result<(), Invalidity> {
        match TopologyAnalyzer::new(graph).find_cycle() {
            Some(path) => Err(Invalidity::Cycle { path }),
            None => Ok(()),
        }
    }
}

/// Connectivity - the first submitted node reaches every submitted node
/// when edges are followed in either direction.
///
/// The reached set is compared against the raw node count, so a pipeline
/// that repeats an id can never pass.
pub struct ConnectivityValidation;

impl ValidationStage for ConnectivityValidation {
    fn name(&self) -> &str {
        "Connectivity Validation"
    }

    fn validate(&self, graph: &PipelineGraph) -> Result<(), Invalidity> {
        let Some(first) = graph.first_node() else {
            return Err(Invalidity::Empty);
        };

        let analyzer = TopologyAnalyzer::new(graph);
        let reached = analyzer.reachable_undirected(first);
        if reached.len() == graph.node_count() {
            return Ok(());
        }

        let duplicates = graph.duplicate_ids();
        if !duplicates.is_empty() {
            return Err(Invalidity::DuplicateNodes { ids: duplicates });
        }

        let unreached = graph
            .node_ids()
            .filter(|id| !reached.contains(*id))
            .cloned()
            .collect();
        Err(Invalidity::Disconnected {
            components: analyzer.find_subgraphs().len(),
            unreached,
        })
    }
}
