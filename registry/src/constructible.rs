//! The constructor contract.
//!
//! Anything registered as a class must implement [`Constructible`]: given a
//! property mapping it produces an [`Instance`]. Dispatch is checked when a
//! provider is assembled, never discovered at call time.

use std::fmt;

use scene_core::{Instance, Props};
use thiserror::Error;

/// Errors a constructor may report for the props it was given.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructError {
    #[error("{class}: missing required prop {prop}")]
    MissingProp { class: String, prop: String },

    #[error("{class}: prop {prop} must be {expected}, got {actual}")]
    InvalidProp {
        class: String,
        prop: String,
        expected: String,
        actual: String,
    },

    #[error("{class}: {message}")]
    Failed { class: String, message: String },
}

impl ConstructError {
    pub fn missing_prop(class: impl Into<String>, prop: impl Into<String>) -> Self {
        Self::MissingProp {
            class: class.into(),
            prop: prop.into(),
        }
    }

    pub fn invalid_prop(
        class: impl Into<String>,
        prop: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidProp {
            class: class.into(),
            prop: prop.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn failed(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            class: class.into(),
            message: message.into(),
        }
    }
}

/// A factory that can be instantiated by name from a scene description.
pub trait Constructible: Send + Sync + fmt::Debug {
    /// The name this constructor is registered under by default.
    fn class_name(&self) -> &str;

    /// Build an instance from converted props.
    fn construct(&self, props: Props) -> Result<Instance, ConstructError>;
}

/// Adapts a closure into a [`Constructible`].
pub struct FnConstructor<F> {
    class_name: String,
    build: F,
}

impl<F> FnConstructor<F>
where
    F: Fn(Props) -> Result<Instance, ConstructError> + Send + Sync,
{
    pub fn new(class_name: impl Into<String>, build: F) -> Self {
        Self {
            class_name: class_name.into(),
            build,
        }
    }
}

impl<F> fmt::Debug for FnConstructor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConstructor")
            .field("class_name", &self.class_name)
            .finish_non_exhaustive()
    }
}

impl<F> Constructible for FnConstructor<F>
where
    F: Fn(Props) -> Result<Instance, ConstructError> + Send + Sync,
{
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn construct(&self, props: Props) -> Result<Instance, ConstructError> {
        (self.build)(props)
    }
}
