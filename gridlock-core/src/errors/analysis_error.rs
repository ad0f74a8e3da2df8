//! Analysis construction errors.
//!
//! Analysis itself never fails on malformed input; unmatched text
//! simply contributes nothing to the graph. Fallibility is confined to
//! building an analyzer: compiling extraction patterns and reading
//! configuration.

use super::error_code::GridlockErrorCode;

/// Errors that can occur while constructing an analyzer.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Failed to compile extraction pattern `{rule}`: {message}")]
    PatternCompile { rule: &'static str, message: String },

    #[error("Config error: {0}")]
    Config(#[from] super::ConfigError),
}

impl GridlockErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PatternCompile { .. } => "ANALYSIS_PATTERN_COMPILE_ERROR",
            Self::Config(e) => e.error_code(),
        }
    }
}
