//! Common error types for the scene registry.

use thiserror::Error;

/// Errors raised by the core name and value types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A registry key is not a valid identifier.
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// A provider was given an empty label.
    #[error("Provider id must not be empty")]
    EmptyProviderId,
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
