//! Configuration errors.

use super::error_code::GridlockErrorCode;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {message}")]
    Parse { message: String },
}

impl GridlockErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "CONFIG_PARSE_ERROR",
        }
    }
}
