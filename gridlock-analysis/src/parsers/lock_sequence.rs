//! LockSequenceParser -- ordered lock-acquisition facts for one thread.
//!
//! Two operation families are recognized, each parsed in its own pass
//! with its own transient lock stack:
//!
//! - block-scoped `synchronized (expr) { … }` sections, where one
//!   combined pattern matches either an opening section or any bare
//!   closing brace; the pop is unconditional, so unrelated braces in
//!   the fragment desynchronize the stack;
//! - explicit `expr.lock()` / `expr.unlock()` calls, where an unlock
//!   truncates the stack from the most recent matching entry.

use gridlock_core::errors::AnalysisError;
use gridlock_core::{LockKind, WaitEmission};
use regex::Regex;
use smallvec::SmallVec;

use super::types::LockFact;
use crate::scanner::ThreadFragment;

const BLOCK_PATTERN: &str = r"(synchronized\s*\(([^)]+)\)\s*\{)|\}";
const CALL_PATTERN: &str = r"(\w+)\.(lock|unlock)\(\)";

type LockStack = SmallVec<[String; 4]>;

/// Walks one thread body and emits lock facts under the configured
/// waits-for emission policy.
pub struct LockSequenceParser {
    block_pattern: Regex,
    call_pattern: Regex,
    policy: WaitEmission,
}

impl LockSequenceParser {
    pub fn new(policy: WaitEmission) -> Result<Self, AnalysisError> {
        Ok(Self {
            block_pattern: compile(BLOCK_PATTERN, "synchronized_block")?,
            call_pattern: compile(CALL_PATTERN, "explicit_lock_call")?,
            policy,
        })
    }

    /// Emit the ordered facts for one fragment.
    pub fn parse(&self, fragment: &ThreadFragment) -> Vec<LockFact> {
        let mut facts = Vec::new();
        self.parse_block_sections(fragment, &mut facts);
        self.parse_explicit_calls(fragment, &mut facts);
        tracing::debug!(
            thread_id = %fragment.id,
            facts = facts.len(),
            "lock sequence parsed"
        );
        facts
    }

    fn parse_block_sections(&self, fragment: &ThreadFragment, facts: &mut Vec<LockFact>) {
        let mut stack = LockStack::new();

        for caps in self.block_pattern.captures_iter(&fragment.body) {
            if let Some(expr) = caps.get(2) {
                let resource = expr.as_str().trim();
                self.emit_acquire(&fragment.id, resource, LockKind::Synchronized, &stack, facts);
                stack.push(resource.to_string());
            } else {
                // Any closing brace pops, lock-related or not.
                stack.pop();
            }
        }
    }

    fn parse_explicit_calls(&self, fragment: &ThreadFragment, facts: &mut Vec<LockFact>) {
        let mut stack = LockStack::new();

        for caps in self.call_pattern.captures_iter(&fragment.body) {
            let (target, op) = match (caps.get(1), caps.get(2)) {
                (Some(target), Some(op)) => (target.as_str(), op.as_str()),
                _ => continue,
            };

            if op == "lock" {
                self.emit_acquire(&fragment.id, target, LockKind::Explicit, &stack, facts);
                stack.push(target.to_string());
            } else if let Some(pos) = stack.iter().rposition(|held| held == target) {
                // Releasing a lock drops everything nested above it too.
                stack.truncate(pos);
            }
        }
    }

    /// One acquisition: waits-for under the policy, then the hold.
    fn emit_acquire(
        &self,
        process: &str,
        resource: &str,
        lock: LockKind,
        stack: &LockStack,
        facts: &mut Vec<LockFact>,
    ) {
        let emit_wait = match self.policy {
            WaitEmission::Always => true,
            WaitEmission::NestedOnly => !stack.is_empty(),
        };
        if emit_wait {
            facts.push(LockFact::waits_for(process, resource, lock));
        }
        facts.push(LockFact::holds(process, resource, lock));
    }
}

fn compile(pattern: &str, rule: &'static str) -> Result<Regex, AnalysisError> {
    Regex::new(pattern).map_err(|e| AnalysisError::PatternCompile {
        rule,
        message: e.to_string(),
    })
}
