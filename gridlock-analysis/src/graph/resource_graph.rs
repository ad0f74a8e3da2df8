//! ResourceGraph -- petgraph multigraph plus a string-to-index side map.
//!
//! One graph is built per analysis run, consumed once by the cycle
//! detectors, then dropped with the run. Edges are appended and never
//! removed or deduplicated: repeated identical facts add parallel
//! edges, and the detector sees one neighbor entry per edge.

use gridlock_core::types::collections::FxHashMap;
use gridlock_core::{LockKind, NodeKind};
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{EdgeRelation, GraphNode};
use crate::parsers::types::{FactRelation, LockFact};

/// Process/Resource allocation graph for a single run.
#[derive(Debug, Default)]
pub struct ResourceGraph {
    graph: DiGraph<GraphNode, EdgeRelation>,
    node_map: FxHashMap<String, NodeIndex>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `process` currently holds `resource`: the resource
    /// points at whoever holds it.
    pub fn add_holds(&mut self, process: &str, resource: &str, lock: LockKind) {
        let process = self.get_or_create_node(process, NodeKind::Process, None);
        let resource = self.get_or_create_node(resource, NodeKind::Resource, Some(lock));
        self.graph.add_edge(resource, process, EdgeRelation::Holds);
    }

    /// Record that `process` is contending for `resource`.
    pub fn add_waits_for(&mut self, process: &str, resource: &str, lock: LockKind) {
        let process = self.get_or_create_node(process, NodeKind::Process, None);
        let resource = self.get_or_create_node(resource, NodeKind::Resource, Some(lock));
        self.graph.add_edge(process, resource, EdgeRelation::WaitsFor);
    }

    /// Fold parser output into the graph, in fact order.
    pub fn apply(&mut self, facts: &[LockFact]) {
        for fact in facts {
            match fact.relation {
                FactRelation::WaitsFor => {
                    self.add_waits_for(&fact.process, &fact.resource, fact.lock)
                }
                FactRelation::Holds => self.add_holds(&fact.process, &fact.resource, fact.lock),
            }
        }
    }

    /// Look up `id`, creating a node of `kind` if absent. An existing
    /// node wins regardless of the requested kind.
    pub fn get_or_create_node(
        &mut self,
        id: &str,
        kind: NodeKind,
        lock: Option<LockKind>,
    ) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(GraphNode {
            id: id.to_string(),
            kind,
            lock,
        });
        self.node_map.insert(id.to_string(), idx);
        idx
    }

    pub fn node(&self, idx: NodeIndex) -> &GraphNode {
        &self.graph[idx]
    }

    /// All nodes in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    /// Outgoing edge targets in edge-insertion order, one entry per
    /// edge. petgraph walks adjacency newest-first; the detector relies
    /// on first-inserted-first, so restore it here.
    pub fn neighbors_in_insertion_order(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut targets: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        targets.reverse();
        targets
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Multi-line dump of every node and its outgoing edges with their
    /// relations, for debug-level tracing.
    pub fn describe(&self) -> String {
        use petgraph::visit::EdgeRef;

        let mut out = String::new();
        for idx in self.graph.node_indices() {
            let node = &self.graph[idx];
            out.push_str(&format!("{} ({})\n", node.id, node.kind));
            // Edge walks share the newest-first caveat of neighbor walks.
            let mut edges: Vec<_> = self.graph.edges(idx).collect();
            edges.reverse();
            for edge in edges {
                let to = &self.graph[edge.target()];
                out.push_str(&format!(
                    "  -> {} ({}) [{}]\n",
                    to.id,
                    to.kind,
                    edge.weight().name()
                ));
            }
        }
        out
    }
}
