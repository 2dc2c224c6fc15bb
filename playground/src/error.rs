//! Playground error types.

use std::path::PathBuf;

use scene_converter::ConvertError;
use scene_loaders::LoaderError;
use scene_registry::RegistryError;
use thiserror::Error;

/// Errors surfaced by the playground and its binary.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("loader error: {0}")]
    Loader(#[from] LoaderError),

    #[error("{path}: {source}")]
    Convert {
        path: PathBuf,
        #[source]
        source: ConvertError,
    },

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlaygroundError {
    pub fn convert(path: impl Into<PathBuf>, source: ConvertError) -> Self {
        Self::Convert {
            path: path.into(),
            source,
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}

/// Result type for playground operations.
pub type PlaygroundResult<T> = Result<T, PlaygroundError>;
