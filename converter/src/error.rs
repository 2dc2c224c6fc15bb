//! Converter error types.

use scene_registry::{ConstructError, RegistryError};
use thiserror::Error;

/// Errors produced while converting a scene description.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Converter configuration could not be read.
    #[error("invalid converter config: {0}")]
    InvalidConfig(String),

    /// A name in the description is not in the registry.
    #[error("unknown identifier {identifier} at {path}: {source}")]
    UnknownIdentifier {
        identifier: String,
        path: String,
        #[source]
        source: RegistryError,
    },

    /// The type key holds something other than a class name.
    #[error("{key} at {path} must be a string")]
    InvalidTypeKey { key: String, path: String },

    /// A constructor rejected its props.
    #[error("cannot construct object at {path}: {source}")]
    Construct {
        path: String,
        #[source]
        source: ConstructError,
    },
}

impl ConvertError {
    pub fn unknown_identifier(
        identifier: impl Into<String>,
        path: impl Into<String>,
        source: RegistryError,
    ) -> Self {
        Self::UnknownIdentifier {
            identifier: identifier.into(),
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Location in the description, when the error has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::UnknownIdentifier { path, .. }
            | Self::InvalidTypeKey { path, .. }
            | Self::Construct { path, .. } => Some(path),
            Self::InvalidJson(_) | Self::InvalidConfig(_) => None,
        }
    }
}

/// Result type for conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;
