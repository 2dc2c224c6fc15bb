//! RegistryBuilder for constructing an immutable Registry.

use std::sync::Arc;

use scene_core::Constant;
use tracing::debug;

use crate::{
    build_class_registry, build_constant_registry, build_enumeration_registry, CollisionPolicy,
    Enumeration, Provider, Registry, RegistryResult,
};

/// Builder for constructing an immutable Registry.
///
/// Nothing is validated until [`build`](Self::build); the build either
/// returns a complete registry or the first error, never a partial one.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// How class name collisions between providers are handled.
    policy: CollisionPolicy,
    /// Class providers, in merge order.
    providers: Vec<Provider>,
    /// Enumerations to expose.
    enumerations: Vec<Arc<Enumeration>>,
    /// Named constants to expose.
    constants: Vec<(String, Constant)>,
}

impl RegistryBuilder {
    /// Create a new builder with the fail-fast collision policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the collision policy for class providers.
    pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Append a class provider.
    pub fn provider(mut self, provider: Provider) -> Self {
        self.providers.push(provider);
        self
    }

    /// Expose an enumeration.
    pub fn enumeration(mut self, enumeration: impl Into<Arc<Enumeration>>) -> Self {
        self.enumerations.push(enumeration.into());
        self
    }

    /// Expose a constant under `name`.
    pub fn constant(mut self, name: impl Into<String>, constant: Constant) -> Self {
        self.constants.push((name.into(), constant));
        self
    }

    /// Build the immutable Registry.
    pub fn build(self) -> RegistryResult<Registry> {
        let classes = build_class_registry(&self.providers, self.policy)?;
        let enumerations = build_enumeration_registry(self.enumerations)?;
        let constants = build_constant_registry(self.constants)?;

        debug!(
            classes = classes.len(),
            enumerations = enumerations.len(),
            constants = constants.len(),
            "Built scene registry"
        );
        Ok(Registry::new(classes, enumerations, constants))
    }
}
