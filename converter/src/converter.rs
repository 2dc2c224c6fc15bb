//! The JSON to scene converter.

use scene_core::{Props, Value};
use scene_registry::Registry;
use tracing::debug;

use crate::{ConvertError, ConvertResult, ConverterConfig, JsonPath};

/// Converts scene descriptions against a borrowed registry.
///
/// - an object with the type key is instantiated through the class registry
/// - a string with the constant prefix resolves to an enumeration member
///   (`@@#GL.POINTS`) or a constant (`@@#DracoLoader`)
/// - everything else is copied structurally
#[derive(Debug, Clone)]
pub struct JsonConverter<'r> {
    registry: &'r Registry,
    config: ConverterConfig,
}

impl<'r> JsonConverter<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_config(registry, ConverterConfig::default())
    }

    pub fn with_config(registry: &'r Registry, config: ConverterConfig) -> Self {
        Self { registry, config }
    }

    /// Parse and convert a JSON document.
    pub fn convert_str(&self, text: &str) -> ConvertResult<Value> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        self.convert(&json)
    }

    /// Convert an already parsed JSON document.
    pub fn convert(&self, json: &serde_json::Value) -> ConvertResult<Value> {
        self.convert_at(json, &JsonPath::root())
    }

    fn convert_at(&self, json: &serde_json::Value, path: &JsonPath) -> ConvertResult<Value> {
        match json {
            serde_json::Value::String(s) => self.convert_string(s, path),
            serde_json::Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| self.convert_at(item, &path.index(i)))
                .collect::<ConvertResult<Vec<_>>>()
                .map(Value::List),
            serde_json::Value::Object(map) => match map.get(&self.config.type_key) {
                Some(class) => self.instantiate(class, map, path),
                None => self.convert_props(map, path).map(Value::Object),
            },
            other => Ok(Value::from(other.clone())),
        }
    }

    fn convert_string(&self, s: &str, path: &JsonPath) -> ConvertResult<Value> {
        let Some(name) = s.strip_prefix(self.config.constant_prefix.as_str()) else {
            return Ok(Value::String(s.to_string()));
        };

        let resolved = if name.contains('.') {
            self.registry.enumerations().resolve(name).cloned()
        } else {
            self.registry
                .constants()
                .get(name)
                .map(|constant| Value::Constant(constant.clone()))
        };
        resolved.map_err(|e| ConvertError::unknown_identifier(name, path.to_string(), e))
    }

    fn convert_props(
        &self,
        map: &serde_json::Map<String, serde_json::Value>,
        path: &JsonPath,
    ) -> ConvertResult<Props> {
        map.iter()
            .filter(|(key, _)| **key != self.config.type_key)
            .map(|(key, value)| {
                self.convert_at(value, &path.key(key))
                    .map(|converted| (key.clone(), converted))
            })
            .collect()
    }

    fn instantiate(
        &self,
        class: &serde_json::Value,
        map: &serde_json::Map<String, serde_json::Value>,
        path: &JsonPath,
    ) -> ConvertResult<Value> {
        let type_path = path.key(&self.config.type_key);
        let class = class.as_str().ok_or_else(|| ConvertError::InvalidTypeKey {
            key: self.config.type_key.clone(),
            path: type_path.to_string(),
        })?;

        let constructor = self
            .registry
            .classes()
            .get(class)
            .map_err(|e| ConvertError::unknown_identifier(class, type_path.to_string(), e))?;

        let props = self.convert_props(map, path)?;
        let instance = constructor
            .construct(props)
            .map_err(|source| ConvertError::Construct {
                path: path.to_string(),
                source,
            })?;

        debug!(class, path = %path, "Instantiated class");
        Ok(Value::Instance(instance))
    }
}
