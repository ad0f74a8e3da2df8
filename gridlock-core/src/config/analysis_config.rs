//! Analyzer configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// When the parser emits a "waits-for" fact for a lock acquisition.
///
/// Both behaviors exist in the wild; neither is silently preferred, so
/// the choice is part of the configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WaitEmission {
    /// Emit waits-for on every acquisition, even the outermost one.
    Always,
    /// Emit waits-for only when the thread already holds another lock
    /// of the same family. Holds facts are emitted either way.
    #[default]
    NestedOnly,
}

/// Configuration for one analyzer instance.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Waits-for emission policy. Default: nested-only.
    pub wait_emission: Option<WaitEmission>,
    /// Lookback window, in bytes, for the marker check that qualifies a
    /// standalone run-method as a thread body. Default: 100.
    pub lookback_window: Option<usize>,
}

impl AnalysisConfig {
    /// Parse a config from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the effective emission policy, defaulting to nested-only.
    pub fn effective_wait_emission(&self) -> WaitEmission {
        self.wait_emission.unwrap_or_default()
    }

    /// Returns the effective lookback window, defaulting to 100 bytes.
    pub fn effective_lookback_window(&self) -> usize {
        self.lookback_window.unwrap_or(100)
    }
}
