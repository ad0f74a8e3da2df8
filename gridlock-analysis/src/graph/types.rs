//! Graph node and edge weights.

use gridlock_core::{LockKind, NodeKind};

/// One node of the resource-allocation graph.
///
/// Identity is the id string alone; the kind is fixed at creation and
/// never consulted for lookup, so a process and a resource sharing an
/// id collide into a single node.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    /// Which synchronization family created a resource node, when known.
    pub lock: Option<LockKind>,
}

/// Edge meaning. Direction already encodes it (waits-for runs
/// Process→Resource, holds runs Resource→Process); the weight keeps
/// traces and dumps readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRelation {
    WaitsFor,
    Holds,
}

impl EdgeRelation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::WaitsFor => "waits-for",
            Self::Holds => "holds",
        }
    }
}
