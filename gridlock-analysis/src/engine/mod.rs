//! Analysis orchestration.

pub mod pipeline;

pub use pipeline::DeadlockAnalyzer;
