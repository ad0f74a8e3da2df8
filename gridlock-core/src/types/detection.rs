//! The structured detection result, the universal output type.
//!
//! A host integration feeds source text in and renders these types as
//! diagnostics; nothing in here depends on any host API.

use serde::{Deserialize, Serialize};

use super::collections::FxHashSet;

/// What a graph node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// One analyzed thread.
    Process,
    /// One lock identity, keyed by its literal expression text.
    Resource,
}

impl NodeKind {
    /// Kind label as rendered in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Process => "process",
            Self::Resource => "resource",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which synchronization family a lock fact came from.
///
/// Metadata only; cycle logic never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockKind {
    /// A block-scoped `synchronized (expr) { … }` section.
    Synchronized,
    /// An explicit `expr.lock()` / `expr.unlock()` call pair.
    Explicit,
}

impl LockKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Synchronized => "synchronized",
            Self::Explicit => "explicit",
        }
    }
}

/// One node of a detected cycle, in cycle order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleNode {
    pub id: String,
    pub kind: NodeKind,
    /// Which synchronization family created a resource node; `None`
    /// for process nodes.
    pub lock: Option<LockKind>,
}

/// An ordered cycle through the resource-allocation graph.
///
/// The first and last node are the same node; `len()` counts the
/// repeated closer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlockCycle {
    pub nodes: Vec<CycleNode>,
}

impl DeadlockCycle {
    /// Cycle length including the repeated closing node.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The distinct process identifiers touched by this cycle.
    pub fn process_ids(&self) -> FxHashSet<&str> {
        self.nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Process)
            .map(|n| n.id.as_str())
            .collect()
    }

    /// The distinct resource nodes, in first-appearance order.
    pub fn resource_sequence(&self) -> Vec<&CycleNode> {
        let mut seen = FxHashSet::default();
        self.nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Resource)
            .filter(|n| seen.insert(n.id.as_str()))
            .collect()
    }
}

/// Result of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub has_deadlock: bool,
    pub cycles: Vec<DeadlockCycle>,
}

impl DetectionResult {
    /// The deterministic result for inputs with nothing to report.
    pub fn no_deadlock() -> Self {
        Self {
            has_deadlock: false,
            cycles: Vec::new(),
        }
    }
}
