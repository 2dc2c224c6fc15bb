//! Converter configuration.

use serde::Deserialize;

use crate::{ConvertError, ConvertResult};

/// Markers the converter looks for in a scene description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Object key naming the class to instantiate.
    pub type_key: String,
    /// String prefix marking an enumeration or constant reference.
    pub constant_prefix: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            type_key: "@@type".to_string(),
            constant_prefix: "@@#".to_string(),
        }
    }
}

impl ConverterConfig {
    /// Read a config from JSON; missing fields keep their defaults.
    pub fn from_json_str(text: &str) -> ConvertResult<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConvertError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConvertResult<()> {
        if self.type_key.is_empty() {
            return Err(ConvertError::invalid_config("type_key must not be empty"));
        }
        if self.constant_prefix.is_empty() {
            return Err(ConvertError::invalid_config(
                "constant_prefix must not be empty",
            ));
        }
        Ok(())
    }
}
