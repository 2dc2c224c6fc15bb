//! Loader descriptors.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{LoaderError, LoaderResult};

/// Describes a format handler: which files it claims and where it lives.
///
/// Extensions are stored without the leading dot and, like MIME types,
/// lowercased, whether the descriptor comes from the builder methods or from
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderDescriptor {
    /// Stable identifier; registration is keyed on it.
    pub id: String,
    /// Display name, e.g. `CSV`.
    pub name: String,
    /// Package exporting the loader, e.g. `@loaders.gl/csv`.
    pub module: String,
    #[serde(default, deserialize_with = "deserialize_extensions")]
    pub extensions: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_mime_types")]
    pub mime_types: Vec<String>,
    /// Parses off the main thread.
    #[serde(default)]
    pub worker: bool,
}

impl LoaderDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            module: module.into(),
            extensions: Vec::new(),
            mime_types: Vec::new(),
            worker: false,
        }
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions
            .extend(extensions.into_iter().map(|ext| normalize_extension(ext.as_ref())));
        self
    }

    pub fn mime_types<I, S>(mut self, mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.mime_types
            .extend(mime_types.into_iter().map(|mime| normalize_mime_type(mime.as_ref())));
        self
    }

    pub fn worker(mut self) -> Self {
        self.worker = true;
        self
    }

    /// Check that the descriptor can be registered.
    pub fn validate(&self) -> LoaderResult<()> {
        if self.id.trim().is_empty() {
            return Err(LoaderError::invalid_descriptor(&self.id, "empty id"));
        }
        if self.extensions.is_empty() && self.mime_types.is_empty() {
            return Err(LoaderError::invalid_descriptor(
                &self.id,
                "no extensions or MIME types",
            ));
        }
        if self.extensions.iter().any(|ext| ext.is_empty()) {
            return Err(LoaderError::invalid_descriptor(&self.id, "empty extension"));
        }
        if self.mime_types.iter().any(|mime| mime.is_empty()) {
            return Err(LoaderError::invalid_descriptor(&self.id, "empty MIME type"));
        }
        Ok(())
    }

    pub fn handles_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    pub fn handles_mime_type(&self, mime_type: &str) -> bool {
        self.mime_types
            .iter()
            .any(|mime| mime.eq_ignore_ascii_case(mime_type))
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

fn normalize_mime_type(mime: &str) -> String {
    mime.trim().to_ascii_lowercase()
}

fn deserialize_extensions<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw.iter().map(|ext| normalize_extension(ext)).collect())
}

fn deserialize_mime_types<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw.iter().map(|mime| normalize_mime_type(mime)).collect())
}

/// The JSON loader every [`LoaderRegistry`](crate::LoaderRegistry) starts with
/// when built via `with_defaults`.
pub fn json_loader() -> LoaderDescriptor {
    LoaderDescriptor::new("json", "JSON", "@loaders.gl/json")
        .extensions(["json", "geojson"])
        .mime_types(["application/json", "application/geo+json"])
}
