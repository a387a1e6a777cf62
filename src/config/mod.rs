//! Configuration schema definitions and loading.
//!
//! Defines the configuration structure for dnsvigil. All settings are
//! serializable to/from TOML and carry sensible defaults, so a missing or
//! partial config file always yields a working setup.

mod general;
mod indicator;
mod paths;

pub use general::GeneralConfig;
pub use indicator::IndicatorConfig;
pub use paths::ConfigPaths;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{DnsvigilError, Result};

#[cfg(test)]
mod tests;

/// Main configuration structure for dnsvigil.
///
/// Represents the complete configuration schema that can be loaded from
/// TOML files.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Status indicator and provider-probe settings.
    #[serde(default)]
    pub indicator: IndicatorConfig,
}

impl Config {
    /// Load configuration from the main config file.
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&ConfigPaths::main_config()?)
    }

    /// Load configuration from an explicit file path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|err| DnsvigilError::IoError {
            path: path.to_path_buf(),
            details: err.to_string(),
        })?;

        toml::from_str(&raw).map_err(|err| DnsvigilError::toml_parse(err, Some(path)))
    }
}
