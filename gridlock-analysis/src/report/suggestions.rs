//! Remediation advice for reported deadlocks.
//!
//! Text only; nothing here feeds back into detection.

use std::fmt::Write;

use gridlock_core::DeadlockCycle;

const GENERAL_ADVICE: &[&str] = &[
    "Acquire locks in one global order across all threads",
    "Prefer tryLock() with a timeout over unbounded lock()",
    "Reduce lock granularity to shrink contention windows",
    "Avoid acquiring one lock while already holding another",
    "Prefer higher-level concurrency utilities over explicit locking",
];

/// Render remediation advice for the validated cycles.
pub fn remediation_advice(cycles: &[DeadlockCycle]) -> String {
    if cycles.is_empty() {
        return "No deadlock detected; nothing to remediate.".to_string();
    }

    let mut out = String::from("Suggested remediation:\n");
    for (i, advice) in GENERAL_ADVICE.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, advice);
    }

    for (i, cycle) in cycles.iter().enumerate() {
        let _ = writeln!(out, "\nFor deadlock cycle {}:", i + 1);
        let sequence = cycle.resource_sequence();
        if sequence.len() >= 2 {
            let rendered: Vec<String> = sequence
                .iter()
                .map(|n| match n.lock {
                    Some(kind) => format!("{} [{}]", n.id, kind.name()),
                    None => n.id.clone(),
                })
                .collect();
            let _ = writeln!(
                out,
                "   - Order these locks consistently: {}",
                rendered.join(" → ")
            );
        }
        out.push_str("   - Restructure to avoid nesting acquisitions of this lock set\n");
    }

    out
}
