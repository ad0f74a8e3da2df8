//! Cycle discovery and deadlock validation over the resource graph.

pub mod cycle;
pub mod validator;

use gridlock_core::{CycleNode, DeadlockCycle, DetectionResult};

use crate::graph::ResourceGraph;

/// Run the full detection stage on a built graph: discover raw cycles,
/// materialize them, and keep only the deadlock-indicative ones.
pub fn detect_deadlocks(graph: &ResourceGraph) -> DetectionResult {
    let raw = cycle::find_cycles(graph);
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        raw_cycles = raw.len(),
        "cycle scan complete"
    );

    let materialized = raw
        .into_iter()
        .map(|indices| DeadlockCycle {
            nodes: indices
                .into_iter()
                .map(|idx| {
                    let node = graph.node(idx);
                    CycleNode {
                        id: node.id.clone(),
                        kind: node.kind,
                        lock: node.lock,
                    }
                })
                .collect(),
        })
        .collect();

    let cycles = validator::validate(materialized);
    DetectionResult {
        has_deadlock: !cycles.is_empty(),
        cycles,
    }
}
