//! Validation pipeline implementation.

use crate::core::error::GraphResult;
use crate::core::types::{Edge, Invalidity, NodeId, PipelineSummary};
use crate::graph::structure::PipelineGraph;
use crate::validation::stages::{AcyclicValidation, ConnectivityValidation, ValidationStage};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Counts plus the valid/invalid verdict.
    pub summary: PipelineSummary,
    /// Why the pipeline is invalid, when it is.
    pub reason: Option<Invalidity>,
    /// Names of the stages that ran, in order.
    pub stages_run: Vec<String>,
    /// Time taken for validation in microseconds.
    pub duration_us: u64,
}

impl ValidationReport {
    fn new(node_count: usize, edge_count: usize) -> Self {
        Self {
            summary: PipelineSummary {
                node_count,
                edge_count,
                is_valid: true,
            },
            reason: None,
            stages_run: Vec::new(),
            duration_us: 0,
        }
    }

    fn reject(&mut self, reason: Invalidity) {
        self.summary.is_valid = false;
        self.reason = Some(reason);
    }

    /// Check if the pipeline is a connected DAG.
    pub fn is_valid(&self) -> bool {
        self.summary.is_valid
    }

    /// Get a human-readable summary.
    pub fn summary_text(&self) -> String {
        match &self.reason {
            None => format!(
                "valid pipeline: {} node(s), {} edge(s)",
                self.summary.node_count, self.summary.edge_count
            ),
            Some(reason) => format!("invalid pipeline: {}", reason),
        }
    }
}

/// Multi-stage validation pipeline.
///
/// Two fixed rules run before any graph is built: an empty node list is
/// invalid, and a single node with no edges is valid. Everything else is
/// built into a [`PipelineGraph`] and handed to the stages in order; the
/// first stage that fails decides the verdict.
pub struct ValidationPipeline {
    stages: Vec<Box<dyn ValidationStage>>,
}

impl ValidationPipeline {
    /// Create a new pipeline with the given stages.
    pub fn new(stages: Vec<Box<dyn ValidationStage>>) -> Self {
        Self { stages }
    }

    /// Create the default pipeline: acyclic, then connected.
    pub fn default_pipeline() -> Self {
        Self {
            stages: vec![Box::new(AcyclicValidation), Box::new(ConnectivityValidation)],
        }
    }

    /// Add a custom validation stage.
    pub fn add_stage(&mut self, stage: Box<dyn ValidationStage>) {
        self.stages.push(stage);
    }

    /// Names of the configured stages, in run order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Validate a submitted node list and edge list.
    ///
    /// Fails only when an edge names a node that was not submitted.
    pub fn validate(&self, nodes: &[NodeId], edges: &[Edge]) -> GraphResult<ValidationReport> {
        let start = Instant::now();
        let mut report = ValidationReport::new(nodes.len(), edges.len());

        if !self.apply_shortcuts(&mut report) {
            let graph = PipelineGraph::new(nodes.to_vec(), edges.to_vec())?;
            self.run_stages(&graph, &mut report);
        }

        report.duration_us = start.elapsed().as_micros() as u64;
        Ok(report)
    }

    /// Validate an already-built graph.
    pub fn validate_graph(&self, graph: &PipelineGraph) -> ValidationReport {
        let start = Instant::now();
        let mut report = ValidationReport::new(graph.node_count(), graph.edge_count());

        if !self.apply_shortcuts(&mut report) {
            self.run_stages(graph, &mut report);
        }

        report.duration_us = start.elapsed().as_micros() as u64;
        report
    }

    /// Applies the rules that decide without a graph. Returns true if decided.
    fn apply_shortcuts(&self, report: &mut ValidationReport) -> bool {
        let PipelineSummary {
            node_count,
            edge_count,
            ..
        } = report.summary;

        if node_count == 0 {
            log::debug!("rejecting pipeline with no nodes");
            report.reject(Invalidity::Empty);
            return true;
        }
        if node_count == 1 && edge_count == 0 {
            log::debug!("single node without edges, accepted without graph checks");
            return true;
        }
        false
    }

    fn run_stages(&self, graph: &PipelineGraph, report: &mut ValidationReport) {
        for stage in &self.stages {
            report.stages_run.push(stage.name().to_string());
            if let Err(reason) = stage.validate(graph) {
                log::debug!("{} failed: {}", stage.name(), reason);
                report.reject(reason);
                return;
            }
        }
    }
}

impl Default for ValidationPipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}

/// Validate a pipeline with the default stages and return its summary.
///
/// ```
/// use pipecheck::{validate, Edge, NodeId};
///
/// let nodes = vec![NodeId::from("a"), NodeId::from("b")];
/// let summary = validate(&nodes, &[Edge::new("a", "b")]).unwrap();
/// assert!(summary.is_valid);
/// ```
pub fn validate(nodes: &[NodeId], edges: &[Edge]) -> GraphResult<PipelineSummary> {
    Ok(ValidationPipeline::default().validate(nodes, edges)?.summary)
}
