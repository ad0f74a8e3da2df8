//! Parser output types.

use gridlock_core::LockKind;
use serde::Serialize;

/// Direction of a lock fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FactRelation {
    /// The thread is contending for the resource.
    WaitsFor,
    /// The thread currently holds the resource.
    Holds,
}

/// One ordered lock-acquisition fact for one thread.
///
/// The resource identity is the literal lock-expression text; `null`
/// and quoted string literals are valid identities like any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockFact {
    pub relation: FactRelation,
    pub process: String,
    pub resource: String,
    pub lock: LockKind,
}

impl LockFact {
    pub fn waits_for(process: &str, resource: &str, lock: LockKind) -> Self {
        Self {
            relation: FactRelation::WaitsFor,
            process: process.to_string(),
            resource: resource.to_string(),
            lock,
        }
    }

    pub fn holds(process: &str, resource: &str, lock: LockKind) -> Self {
        Self {
            relation: FactRelation::Holds,
            process: process.to_string(),
            resource: resource.to_string(),
            lock,
        }
    }
}
