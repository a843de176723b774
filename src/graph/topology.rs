//! Topological analysis of pipeline graphs.
//!
//! Provides algorithms for:
//! - Directed cycle search (depth-first, explicit stack)
//! - Weak connectivity (edges followed in both directions)
//! - Component listing and topological ordering
//!
//! None of the traversals recurse, so pipeline size is bounded by memory
//! rather than call-stack depth.

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::NodeId;
use crate::graph::structure::PipelineGraph;
use indexmap::{IndexMap, IndexSet};
use std::collections::{HashSet, VecDeque};

/// Analyzer for graph topology.
pub struct TopologyAnalyzer<'a> {
    graph: &'a PipelineGraph,
}

impl<'a> TopologyAnalyzer<'a> {
    /// Create a new analyzer for the given graph.
    pub fn new(graph: &'a PipelineGraph) -> Self {
        Self { graph }
    }

    /// Find a directed cycle, if one exists.
    ///
    /// Starts a depth-first walk from every node not yet fully explored, in
    /// submission order. A successor that is still on the current path closes
    /// a cycle. The returned path is closed: its first and last entries are
    /// the same node.
    pub fn find_cycle(&self) -> Option<Vec<NodeId>> {
        let mut explored: HashSet<&'a NodeId> =
            HashSet::with_capacity(self.graph.unique_node_count());
        let mut on_path: HashSet<&'a NodeId> = HashSet::new();

        for start in self.graph.node_ids() {
            if explored.contains(start) {
                continue;
            }

            // (node, index of the next successor to look at)
            let mut stack: Vec<(&'a NodeId, usize)> = vec![(start, 0)];
            explored.insert(start);
            on_path.insert(start);

            while let Some(&(node, next_index)) = stack.last() {
                let successors = self.graph.successors(node);
                let Some(next) = successors.get(next_index) else {
                    on_path.remove(node);
                    stack.pop();
                    continue;
                };
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }

                if on_path.contains(next) {
                    let from = stack
                        .iter()
                        .position(|(id, _)| *id == next)
                        .unwrap_or(0);
                    let mut path: Vec<NodeId> =
                        stack[from..].iter().map(|(id, _)| (*id).clone()).collect();
                    path.push(next.clone());
                    log::debug!("cycle found: {} node(s) on path", path.len() - 1);
                    return Some(path);
                }

                if explored.insert(next) {
                    on_path.insert(next);
                    stack.push((next, 0));
                }
            }
        }

        None
    }

    /// Check if the graph has any directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// All nodes reachable from `start` when edge direction is ignored.
    ///
    /// The start node is included. An unknown start yields an empty set.
    pub fn reachable_undirected(&self, start: &NodeId) -> IndexSet<NodeId> {
        let mut seen: IndexSet<&'a NodeId> = IndexSet::new();
        let Some((_, start, _)) = self.graph.forward().get_full(start) else {
            return IndexSet::new();
        };

        let mut stack: Vec<&'a NodeId> = vec![start];
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            for next in self
                .graph
                .successors(current)
                .iter()
                .chain(self.graph.predecessors(current))
            {
                if !seen.contains(next) {
                    stack.push(next);
                }
            }
        }

        seen.into_iter().cloned().collect()
    }

    /// Check whether every distinct node is reachable from the first one,
    /// ignoring edge direction.
    ///
    /// An empty graph is not connected.
    pub fn is_weakly_connected(&self) -> bool {
        match self.graph.first_node() {
            Some(first) => {
                self.reachable_undirected(first).len() == self.graph.unique_node_count()
            }
            None => false,
        }
    }

    /// Find all weakly connected components, in submission order of their
    /// first node.
    pub fn find_subgraphs(&self) -> Vec<IndexSet<NodeId>> {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut subgraphs = Vec::new();

        for node_id in self.graph.node_ids() {
            if !visited.contains(node_id) {
                let subgraph = self.reachable_undirected(node_id);
                visited.extend(subgraph.iter().cloned());
                subgraphs.push(subgraph);
            }
        }

        subgraphs
    }

    /// Get the topological sort order (Kahn's algorithm).
    ///
    /// Returns distinct nodes in an order where every edge source comes
    /// before its target. Ties keep submission order.
    pub fn topological_sort(&self) -> GraphResult<Vec<NodeId>> {
        let mut in_degree: IndexMap<&NodeId, usize> = self
            .graph
            .node_ids()
            .map(|id| (id, self.graph.predecessors(id).len()))
            .collect();

        let mut queue: VecDeque<&NodeId> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(&id, _)| id)
            .collect();

        let mut result = Vec::with_capacity(in_degree.len());

        while let Some(node) = queue.pop_front() {
            result.push(node.clone());

            for neighbor in self.graph.successors(node) {
                if let Some(degree) = in_degree.get_mut(neighbor) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        // If we haven't visited all nodes, there's a cycle
        if result.len() != in_degree.len() {
            let remaining: Vec<NodeId> = in_degree
                .iter()
                .filter(|(_, degree)| **degree > 0)
                .map(|(&id, _)| id.clone())
                .collect();

            return Err(GraphError::CycleDetected { nodes: remaining });
        }

        Ok(result)
    }
}
