//! Constant registry: name to pre-built value.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use scene_core::{Constant, Identifier};
use tracing::debug;

use crate::{RegistryError, RegistryResult};

/// Immutable mapping from constant name to opaque value.
#[derive(Debug, Clone, Default)]
pub struct ConstantRegistry {
    constants: BTreeMap<Identifier, Constant>,
}

impl ConstantRegistry {
    /// Get the constant registered under `name`.
    pub fn get(&self, name: &str) -> RegistryResult<&Constant> {
        self.constants
            .get(name)
            .ok_or_else(|| RegistryError::UnknownConstant(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constants.keys().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

/// Collect named constants into a registry.
pub fn build_constant_registry<I, K>(constants: I) -> RegistryResult<ConstantRegistry>
where
    I: IntoIterator<Item = (K, Constant)>,
    K: Into<String>,
{
    let mut table = BTreeMap::new();
    for (name, constant) in constants {
        match table.entry(Identifier::new(name)?) {
            Entry::Vacant(slot) => {
                slot.insert(constant);
            }
            Entry::Occupied(slot) => {
                return Err(RegistryError::DuplicateConstant(slot.key().to_string()));
            }
        }
    }

    debug!(constants = table.len(), "Built constant registry");
    Ok(ConstantRegistry { constants: table })
}
