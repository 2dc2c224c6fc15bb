//! Loader error types.

use thiserror::Error;

/// Errors from registering or selecting format loaders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// A different descriptor is already registered under this id.
    #[error("Loader {id} is already registered with a different descriptor")]
    Conflict { id: String },

    /// The descriptor cannot be used to match any file.
    #[error("Invalid loader {id}: {reason}")]
    InvalidDescriptor { id: String, reason: String },

    /// No registered loader handles the resource.
    #[error("No loader registered for {url}")]
    NoMatchingLoader { url: String },
}

impl LoaderError {
    pub fn conflict(id: impl Into<String>) -> Self {
        Self::Conflict { id: id.into() }
    }

    pub fn invalid_descriptor(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn no_matching_loader(url: impl Into<String>) -> Self {
        Self::NoMatchingLoader { url: url.into() }
    }
}

/// Result type for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;
