//! Error types for the Gridlock workspace, one enum per concern.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
