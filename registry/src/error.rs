//! Registry error types.

use scene_core::{CoreError, ProviderId};
use thiserror::Error;

/// Errors from building or querying a registry.
///
/// `Collision`, the `Duplicate*` variants, `InvalidIdentifier` and
/// `EmptyProviderId` are construction-time and abort the build. The
/// `Unknown*` variants are lookup-time and are meant to be surfaced by the
/// converter as an unknown identifier in the scene description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Class {name} registered by both {first} and {second}")]
    Collision {
        name: String,
        first: ProviderId,
        second: ProviderId,
    },

    #[error("Duplicate enumeration name: {0}")]
    DuplicateEnumeration(String),

    #[error("Duplicate constant name: {0}")]
    DuplicateConstant(String),

    #[error("Duplicate member {member} in enumeration {enumeration}")]
    DuplicateMember { enumeration: String, member: String },

    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Provider id must not be empty")]
    EmptyProviderId,

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Unknown enumeration: {0}")]
    UnknownEnumeration(String),

    #[error("Unknown member {member} of enumeration {enumeration}")]
    UnknownMember { enumeration: String, member: String },

    #[error("Unknown constant: {0}")]
    UnknownConstant(String),

    #[error("Expected <enum-name>.<member-name>, got {0:?}")]
    MalformedQualifiedName(String),
}

impl RegistryError {
    pub fn collision(name: impl Into<String>, first: ProviderId, second: ProviderId) -> Self {
        Self::Collision {
            name: name.into(),
            first,
            second,
        }
    }

    pub fn unknown_member(enumeration: impl Into<String>, member: impl Into<String>) -> Self {
        Self::UnknownMember {
            enumeration: enumeration.into(),
            member: member.into(),
        }
    }
}

impl From<CoreError> for RegistryError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidIdentifier(name) => Self::InvalidIdentifier(name),
            CoreError::EmptyProviderId => Self::EmptyProviderId,
        }
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
