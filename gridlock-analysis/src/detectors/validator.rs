//! Filters raw cycles down to deadlock-indicative ones.
//!
//! A cycle survives iff its length (counting the repeated closer) is at
//! least 4, node kinds strictly alternate Process/Resource all the way
//! around, and at least two distinct process identifiers take part.
//! Anything shorter or single-threaded is discarded with a debug log
//! line, never reported.

use gridlock_core::types::collections::FxHashSet;
use gridlock_core::{CycleNode, DeadlockCycle, NodeKind};

/// Minimum cycle length, including the repeated closing node.
const MIN_CYCLE_LEN: usize = 4;

/// Pure predicate: is this cycle evidence of a cross-thread deadlock?
pub fn is_deadlock_indicative(nodes: &[CycleNode]) -> bool {
    if nodes.len() < MIN_CYCLE_LEN {
        return false;
    }

    for pair in nodes.windows(2) {
        if pair[0].kind == pair[1].kind {
            return false;
        }
    }

    let processes: FxHashSet<&str> = nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Process)
        .map(|n| n.id.as_str())
        .collect();
    processes.len() >= 2
}

/// Keep the deadlock-indicative cycles, in discovery order.
pub fn validate(cycles: Vec<DeadlockCycle>) -> Vec<DeadlockCycle> {
    cycles
        .into_iter()
        .filter(|cycle| {
            let keep = is_deadlock_indicative(&cycle.nodes);
            if !keep {
                tracing::debug!(len = cycle.len(), "discarding non-deadlock cycle");
            }
            keep
        })
        .collect()
}
