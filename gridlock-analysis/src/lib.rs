//! # gridlock-analysis
//!
//! Analysis engine for the Gridlock deadlock analyzer.
//! Contains the thread scanner, lock-sequence parser, resource
//! allocation graph, cycle detectors, and report rendering.

pub mod detectors;
pub mod engine;
pub mod graph;
pub mod parsers;
pub mod report;
pub mod scanner;

pub use engine::pipeline::DeadlockAnalyzer;
