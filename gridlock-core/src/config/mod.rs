//! Configuration types.

pub mod analysis_config;

pub use analysis_config::{AnalysisConfig, WaitEmission};
