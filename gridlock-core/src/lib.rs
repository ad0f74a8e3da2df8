//! # gridlock-core
//!
//! Foundation crate for the Gridlock deadlock analyzer.
//! Defines the shared types, errors, config, and tracing bootstrap.
//! The analysis engine crate depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{AnalysisConfig, WaitEmission};
pub use errors::error_code::GridlockErrorCode;
pub use errors::{AnalysisError, ConfigError};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::detection::{CycleNode, DeadlockCycle, DetectionResult, LockKind, NodeKind};
