use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::logging::LogLevel;

/// Environment variable that overrides the configured log level
pub const LOG_ENV_VAR: &str = "BUILDENV_LOG";

/// Configuration for buildenv tooling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildenvConfig {
    /// Log level filter
    #[serde(default)]
    pub log_level: LogLevel,
    /// Strict validation settings
    #[serde(default)]
    pub validation: ValidationPolicy,
}

/// Settings for the opt-in strict validation pass.
///
/// Construction never applies these; they only take effect when a caller
/// asks for strict validation explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// How to treat enum values outside the known domain
    pub unknown_enums: UnknownEnumPolicy,
    /// Require `computeConfiguration` when `computeType` is attribute-based
    pub require_compute_configuration: bool,
}

impl ValidationPolicy {
    /// Policy that rejects everything it knows how to check
    pub fn strict() -> Self {
        Self {
            unknown_enums: UnknownEnumPolicy::Reject,
            require_compute_configuration: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownEnumPolicy {
    Accept,
    #[default]
    Warn,
    Reject,
}

impl BuildenvConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ModelResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ModelError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Create config from TOML string
    pub fn from_toml(content: &str) -> ModelResult<Self> {
        toml::from_str(content).map_err(|e| ModelError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Convert config to TOML string
    pub fn to_toml(&self) -> ModelResult<String> {
        toml::to_string(self).map_err(|e| ModelError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Apply `BUILDENV_LOG` if it is set to a recognized level
    pub fn with_env_overrides(self) -> Self {
        let level = std::env::var(LOG_ENV_VAR).ok();
        self.with_log_override(level.as_deref())
    }

    /// Replace the log level with an override value; unrecognized values
    /// leave it unchanged
    pub fn with_log_override(mut self, level: Option<&str>) -> Self {
        if let Some(level) = level {
            match level.parse() {
                Ok(level) => self.log_level = level,
                Err(e) => tracing::warn!("Ignoring {}: {}", LOG_ENV_VAR, e),
            }
        }
        self
    }
}
