//! Name types for registry keys.
//!
//! Every name that can be referenced from a scene description is an
//! [`Identifier`]: non-empty, starting with a letter, `_` or `$`, followed by
//! letters, digits, `_` or `$`.

use std::borrow::Borrow;
use std::fmt;
use std::sync::OnceLock;

use regex_lite::Regex;

use crate::{CoreError, CoreResult};

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is a valid literal")
    })
}

/// Check whether a string is a valid identifier without allocating.
pub fn is_valid_identifier(name: &str) -> bool {
    identifier_pattern().is_match(name)
}

/// A validated registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Validate and wrap a name.
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        if is_valid_identifier(&name) {
            Ok(Self(name))
        } else {
            Err(CoreError::InvalidIdentifier(name))
        }
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Identifier {
    type Error = CoreError;

    fn try_from(name: &str) -> CoreResult<Self> {
        Self::new(name)
    }
}

impl TryFrom<String> for Identifier {
    type Error = CoreError;

    fn try_from(name: String) -> CoreResult<Self> {
        Self::new(name)
    }
}

/// Label of a capability provider, e.g. `@deck.gl/layers`.
///
/// Used only for diagnostics; it is not an [`Identifier`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProviderId(String);

impl ProviderId {
    /// Create a provider label. Empty labels are rejected.
    pub fn new(label: impl Into<String>) -> CoreResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(CoreError::EmptyProviderId);
        }
        Ok(Self(label))
    }

    /// Get the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
