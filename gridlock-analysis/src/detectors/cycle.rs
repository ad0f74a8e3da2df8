//! DFS cycle discovery.
//!
//! One tri-state table is shared across the whole multi-root scan: a
//! node fully explored under an earlier root is never re-explored, so
//! cycles reachable only through such a node from a later root are not
//! rediscovered. This is reachability-based discovery, not exhaustive
//! enumeration of every cycle in the multigraph. O(V+E) per scan.

use petgraph::graph::NodeIndex;

use crate::graph::ResourceGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    /// On the active root-to-node traversal stack.
    OnPath,
    /// Fully explored, globally, for the remainder of the scan.
    Done,
}

/// Discover raw cycles, roots taken in node-insertion order.
///
/// Every cycle is the suffix of the active path from the re-entered
/// node's first occurrence through the current node, plus that node
/// repeated as the closer. Validation happens elsewhere; length-2 and
/// single-process cycles are reported here as found.
pub fn find_cycles(graph: &ResourceGraph) -> Vec<Vec<NodeIndex>> {
    let mut state = vec![VisitState::Unvisited; graph.node_count()];
    let mut path = Vec::new();
    let mut cycles = Vec::new();

    for root in graph.node_indices() {
        if state[root.index()] == VisitState::Unvisited {
            visit(graph, root, &mut state, &mut path, &mut cycles);
        }
    }

    cycles
}

fn visit(
    graph: &ResourceGraph,
    current: NodeIndex,
    state: &mut [VisitState],
    path: &mut Vec<NodeIndex>,
    cycles: &mut Vec<Vec<NodeIndex>>,
) {
    state[current.index()] = VisitState::OnPath;
    path.push(current);

    for neighbor in graph.neighbors_in_insertion_order(current) {
        match state[neighbor.index()] {
            VisitState::Unvisited => visit(graph, neighbor, state, path, cycles),
            VisitState::OnPath => {
                if let Some(start) = path.iter().position(|&n| n == neighbor) {
                    let mut cycle = path[start..].to_vec();
                    cycle.push(neighbor);
                    cycles.push(cycle);
                }
            }
            VisitState::Done => {}
        }
    }

    path.pop();
    state[current.index()] = VisitState::Done;
}
