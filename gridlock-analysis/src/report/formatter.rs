//! Human-readable report rendering. Pure function of the cycle list.

use std::fmt::Write;

use gridlock_core::DeadlockCycle;

/// The fixed sentinel for runs with nothing to report.
pub const NO_DEADLOCK: &str = "No deadlock detected.";

/// Render validated cycles: the sentinel when empty, otherwise one
/// numbered line per cycle with each node as `id(kind)` joined by
/// arrows, in cycle order.
pub fn format_report(cycles: &[DeadlockCycle]) -> String {
    if cycles.is_empty() {
        return NO_DEADLOCK.to_string();
    }

    let mut out = String::from("Deadlock detected!\n");
    for (i, cycle) in cycles.iter().enumerate() {
        let _ = write!(out, "Deadlock cycle {}: ", i + 1);
        let chain: Vec<String> = cycle
            .nodes
            .iter()
            .map(|n| format!("{}({})", n.id, n.kind))
            .collect();
        out.push_str(&chain.join(" → "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlock_core::{CycleNode, NodeKind};

    fn crossed() -> DeadlockCycle {
        let node = |id: &str, kind| CycleNode {
            id: id.to_string(),
            kind,
            lock: None,
        };
        DeadlockCycle {
            nodes: vec![
                node("thread1", NodeKind::Process),
                node("lock2", NodeKind::Resource),
                node("thread2", NodeKind::Process),
                node("lock1", NodeKind::Resource),
                node("thread1", NodeKind::Process),
            ],
        }
    }

    #[test]
    fn test_empty_list_renders_sentinel() {
        assert_eq!(format_report(&[]), NO_DEADLOCK);
    }

    #[test]
    fn test_cycles_render_numbered_arrow_chains() {
        let report = format_report(&[crossed(), crossed()]);
        assert!(report.starts_with("Deadlock detected!\n"));
        assert!(report.contains(
            "Deadlock cycle 1: thread1(process) → lock2(resource) → thread2(process) → lock1(resource) → thread1(process)\n"
        ));
        assert!(report.contains("Deadlock cycle 2: "));
    }
}
