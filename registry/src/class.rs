//! Class registry: name to constructor.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

use scene_core::{Identifier, ProviderId};
use tracing::{debug, warn};

use crate::{Constructible, Provider, RegistryError, RegistryResult};

/// What to do when two providers export the same class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Abort the build with [`RegistryError::Collision`].
    #[default]
    FailFast,
    /// Keep the entry from the earliest provider.
    FirstWins,
    /// Replace with the entry from the latest provider.
    LastWins,
}

#[derive(Debug, Clone)]
struct ClassEntry {
    constructor: Arc<dyn Constructible>,
    provider: ProviderId,
}

/// Immutable mapping from class name to constructor.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    entries: BTreeMap<Identifier, ClassEntry>,
}

impl ClassRegistry {
    /// Get the constructor registered under `name`.
    pub fn get(&self, name: &str) -> RegistryResult<&Arc<dyn Constructible>> {
        self.find(name)
            .ok_or_else(|| RegistryError::UnknownClass(name.to_string()))
    }

    /// Get the constructor registered under `name`, if any.
    pub fn find(&self, name: &str) -> Option<&Arc<dyn Constructible>> {
        self.entries.get(name).map(|entry| &entry.constructor)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The provider that supplied the entry for `name`.
    pub fn provider_of(&self, name: &str) -> Option<&ProviderId> {
        self.entries.get(name).map(|entry| &entry.provider)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Merge provider exports into one flat class registry.
///
/// Providers are merged in order; order only matters for `FirstWins` and
/// `LastWins`. Duplicate names inside a single provider are collisions too.
pub fn build_class_registry(
    providers: &[Provider],
    policy: CollisionPolicy,
) -> RegistryResult<ClassRegistry> {
    let mut entries: BTreeMap<Identifier, ClassEntry> = BTreeMap::new();

    for provider in providers {
        for (name, constructor) in provider.entries() {
            let key = Identifier::new(name)?;
            match entries.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(ClassEntry {
                        constructor: Arc::clone(constructor),
                        provider: provider.id().clone(),
                    });
                }
                Entry::Occupied(mut slot) => match policy {
                    CollisionPolicy::FailFast => {
                        return Err(RegistryError::collision(
                            name,
                            slot.get().provider.clone(),
                            provider.id().clone(),
                        ));
                    }
                    CollisionPolicy::FirstWins => {
                        warn!(
                            class = name,
                            kept = %slot.get().provider,
                            ignored = %provider.id(),
                            "Class shadowed by earlier provider"
                        );
                    }
                    CollisionPolicy::LastWins => {
                        warn!(
                            class = name,
                            replaced = %slot.get().provider,
                            kept = %provider.id(),
                            "Class shadowed by later provider"
                        );
                        slot.insert(ClassEntry {
                            constructor: Arc::clone(constructor),
                            provider: provider.id().clone(),
                        });
                    }
                },
            }
        }
    }

    debug!(
        providers = providers.len(),
        classes = entries.len(),
        ?policy,
        "Built class registry"
    );
    Ok(ClassRegistry { entries })
}
