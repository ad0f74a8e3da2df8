//! Per-thread lock-sequence parsing.

pub mod lock_sequence;
pub mod types;

pub use lock_sequence::LockSequenceParser;
pub use types::{FactRelation, LockFact};
