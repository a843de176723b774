//! Graph structure built from one submitted pipeline.
//!
//! The PipelineGraph keeps the raw node and edge sequences exactly as
//! submitted (so counts are never altered) alongside forward and reverse
//! adjacency keyed by node id. Adjacency uses `IndexMap` so every traversal
//! follows node submission order and neighbor lists follow edge order.

use crate::core::error::{EdgeEnd, GraphError, GraphResult};
use crate::core::types::{Edge, NodeId};
use indexmap::{IndexMap, IndexSet};

/// Node id -> ordered neighbor ids.
pub type Adjacency = IndexMap<NodeId, Vec<NodeId>>;

/// A submitted pipeline with adjacency built over it.
#[derive(Debug, Clone, Default)]
pub struct PipelineGraph {
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
    forward: Adjacency,
    reverse: Adjacency,
}

impl PipelineGraph {
    /// Build the graph, rejecting edges whose endpoints are not submitted nodes.
    ///
    /// Duplicate node ids collapse into one adjacency entry; the raw node
    /// sequence is kept as-is.
    pub fn new(nodes: Vec<NodeId>, edges: Vec<Edge>) -> GraphResult<Self> {
        let mut forward: Adjacency = IndexMap::with_capacity(nodes.len());
        let mut reverse: Adjacency = IndexMap::with_capacity(nodes.len());
        for id in &nodes {
            forward.entry(id.clone()).or_default();
            reverse.entry(id.clone()).or_default();
        }

        for (edge_index, edge) in edges.iter().enumerate() {
            if !forward.contains_key(&edge.source) {
                return Err(GraphError::UnknownNode {
                    edge_index,
                    end: EdgeEnd::Source,
                    id: edge.source.clone(),
                });
            }
            if !forward.contains_key(&edge.target) {
                return Err(GraphError::UnknownNode {
                    edge_index,
                    end: EdgeEnd::Target,
                    id: edge.target.clone(),
                });
            }
            if let Some(targets) = forward.get_mut(&edge.source) {
                targets.push(edge.target.clone());
            }
            if let Some(sources) = reverse.get_mut(&edge.target) {
                sources.push(edge.source.clone());
            }
        }

        Ok(Self {
            nodes,
            edges,
            forward,
            reverse,
        })
    }

    /// Number of submitted nodes, duplicates included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of submitted edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of distinct node ids.
    pub fn unique_node_count(&self) -> usize {
        self.forward.len()
    }

    /// Distinct node ids in first-submission order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.forward.keys()
    }

    /// First submitted node, if any.
    pub fn first_node(&self) -> Option<&NodeId> {
        self.nodes.first()
    }

    /// Check if a node id was submitted.
    pub fn has_node(&self, id: &NodeId) -> bool {
        self.forward.contains_key(id)
    }

    /// Targets of edges leaving `id`, in edge order.
    pub fn successors(&self, id: &NodeId) -> &[NodeId] {
        self.forward.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sources of edges entering `id`, in edge order.
    pub fn predecessors(&self, id: &NodeId) -> &[NodeId] {
        self.reverse.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Forward adjacency (node -> targets).
    pub fn forward(&self) -> &Adjacency {
        &self.forward
    }

    /// Reverse adjacency (node -> sources).
    pub fn reverse(&self) -> &Adjacency {
        &self.reverse
    }

    /// Ids submitted more than once, each listed once, in order of first repeat.
    pub fn duplicate_ids(&self) -> Vec<NodeId> {
        let mut seen: IndexSet<&NodeId> = IndexSet::with_capacity(self.nodes.len());
        let mut repeated: IndexSet<&NodeId> = IndexSet::new();
        for id in &self.nodes {
            if !seen.insert(id) {
                repeated.insert(id);
            }
        }
        repeated.into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|n| NodeId::from(*n)).collect()
    }

    #[test]
    fn test_adjacency_preserves_edge_order() {
        let graph = PipelineGraph::new(
            ids(&["a", "b", "c"]),
            vec![Edge::new("a", "c"), Edge::new("a", "b"), Edge::new("b", "c")],
        )
        .unwrap();

        assert_eq!(graph.successors(&"a".into()), &ids(&["c", "b"])[..]);
        assert_eq!(graph.predecessors(&"c".into()), &ids(&["a", "b"])[..]);
        assert!(graph.successors(&"c".into()).is_empty());
    }

    #[test]
    fn test_isolated_nodes_get_empty_lists() {
        let graph = PipelineGraph::new(ids(&["a", "b"]), vec![]).unwrap();
        assert_eq!(graph.forward().len(), 2);
        assert!(graph.predecessors(&"b".into()).is_empty());
    }

    #[test]
    fn test_unknown_source_rejected() {
        let err = PipelineGraph::new(ids(&["a"]), vec![Edge::new("x", "a")]).unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownNode {
                edge_index: 0,
                end: EdgeEnd::Source,
                id: "x".into(),
            }
        );
    }

    #[test]
    fn test_unknown_target_rejected() {
        let err = PipelineGraph::new(
            ids(&["a", "b"]),
            vec![Edge::new("a", "b"), Edge::new("b", "z")],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GraphError::UnknownNode { edge_index: 1, end: EdgeEnd::Target, .. }
        ));
    }

    #[test]
    fn test_duplicates_collapse_but_counts_stay_raw() {
        let graph = PipelineGraph::new(
            ids(&["a", "b", "a", "b", "a"]),
            vec![Edge::new("a", "b")],
        )
        .unwrap();

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.unique_node_count(), 2);
        assert_eq!(graph.duplicate_ids(), ids(&["a", "b"]));
        assert_eq!(graph.node_ids().count(), 2);
    }
}
