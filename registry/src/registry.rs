//! The Registry - immutable name lookup for the scene converter.

use crate::{ClassRegistry, ConstantRegistry, EnumerationRegistry};

/// The three lookup tables a scene converter resolves names against.
/// It is immutable after construction and safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    classes: ClassRegistry,
    enumerations: EnumerationRegistry,
    constants: ConstantRegistry,
}

impl Registry {
    /// Assemble a registry from already built tables (use RegistryBuilder for construction).
    pub(crate) fn new(
        classes: ClassRegistry,
        enumerations: EnumerationRegistry,
        constants: ConstantRegistry,
    ) -> Self {
        Self {
            classes,
            enumerations,
            constants,
        }
    }

    /// Classes that may be instantiated by name.
    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    /// Enumerations resolved as `<enum-name>.<member-name>`.
    pub fn enumerations(&self) -> &EnumerationRegistry {
        &self.enumerations
    }

    /// Constants substituted verbatim.
    pub fn constants(&self) -> &ConstantRegistry {
        &self.constants
    }
}
