//! Capability providers.

use std::sync::Arc;

use scene_core::ProviderId;

use crate::{Constructible, RegistryResult};

/// An ordered set of named constructors exported by one package.
///
/// Names are validated when the provider is merged into a
/// [`ClassRegistry`](crate::ClassRegistry), not when entries are added.
#[derive(Debug, Clone)]
pub struct Provider {
    id: ProviderId,
    entries: Vec<(String, Arc<dyn Constructible>)>,
}

impl Provider {
    pub fn new(id: ProviderId) -> Self {
        Self {
            id,
            entries: Vec::new(),
        }
    }

    /// Create a provider from a label such as `@deck.gl/layers`.
    pub fn named(label: impl Into<String>) -> RegistryResult<Self> {
        Ok(Self::new(ProviderId::new(label)?))
    }

    /// Add a constructor under its own class name.
    pub fn class(self, constructor: impl Constructible + 'static) -> Self {
        self.shared(Arc::new(constructor))
    }

    /// Add an already shared constructor under its own class name.
    pub fn shared(mut self, constructor: Arc<dyn Constructible>) -> Self {
        let name = constructor.class_name().to_string();
        self.entries.push((name, constructor));
        self
    }

    /// Add a constructor under an explicit name.
    pub fn alias(mut self, name: impl Into<String>, constructor: Arc<dyn Constructible>) -> Self {
        self.entries.push((name.into(), constructor));
        self
    }

    pub fn id(&self) -> &ProviderId {
        &self.id
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Arc<dyn Constructible>)> {
        self.entries.iter().map(|(name, ctor)| (name.as_str(), ctor))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
