//! JSON-pointer style locations for diagnostics.

use std::fmt;

/// A location inside a scene description, rendered as a JSON pointer
/// (`/layers/0/@@type`). The root renders as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath {
    segments: Vec<String>,
}

impl JsonPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of an object member.
    pub fn key(&self, key: &str) -> Self {
        self.child(key.to_string())
    }

    /// Path of an array element.
    pub fn index(&self, index: usize) -> Self {
        self.child(index.to_string())
    }

    fn child(&self, segment: String) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment.replace('~', "~0").replace('/', "~1"))?;
        }
        Ok(())
    }
}
