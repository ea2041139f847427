//! ParseConfig loading and serialization.

use super::model::ParseConfig;
use crate::error::{IniError, Result};
use std::path::Path;

impl ParseConfig {
    /// Load a parse configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(ParseConfig)` - Successfully loaded config
    /// * `Err(IniError::FileError)` - The file could not be read
    /// * `Err(IniError::UserError)` - The YAML is invalid
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            IniError::FileError(format!(
                "failed to read parse config '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a configuration from a YAML string.
    ///
    /// Unknown policy names are rejected; missing fields use defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml)
            .map_err(|e| IniError::UserError(format!("failed to parse config YAML: {}", e)))
    }

    /// Serialize the configuration to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| IniError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }
}
