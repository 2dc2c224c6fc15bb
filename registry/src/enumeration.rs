//! Enumerations resolved as `<enum-name>.<member-name>`.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

use scene_core::{Identifier, Value};
use tracing::debug;

use crate::{RegistryError, RegistryResult};

/// A read-only, named table of member values.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumeration {
    name: Identifier,
    members: BTreeMap<Identifier, Value>,
}

impl Enumeration {
    /// Build an enumeration, rejecting invalid or repeated member names.
    pub fn new<I, K, V>(name: impl Into<String>, members: I) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let name = Identifier::new(name)?;
        let mut table = BTreeMap::new();
        for (member, value) in members {
            let member = Identifier::new(member)?;
            match table.entry(member) {
                Entry::Vacant(slot) => {
                    slot.insert(value.into());
                }
                Entry::Occupied(slot) => {
                    return Err(RegistryError::DuplicateMember {
                        enumeration: name.to_string(),
                        member: slot.key().to_string(),
                    });
                }
            }
        }
        Ok(Self {
            name,
            members: table,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get a member value, if present.
    pub fn get(&self, member: &str) -> Option<&Value> {
        self.members.get(member)
    }

    /// Get a member value or fail with `UnknownMember`.
    pub fn member(&self, member: &str) -> RegistryResult<&Value> {
        self.get(member)
            .ok_or_else(|| RegistryError::unknown_member(self.name.as_str(), member))
    }

    /// Members sorted by name.
    pub fn members(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Immutable mapping from enumeration name to shared enumeration.
#[derive(Debug, Clone, Default)]
pub struct EnumerationRegistry {
    enumerations: BTreeMap<Identifier, Arc<Enumeration>>,
}

impl EnumerationRegistry {
    /// Get an enumeration by name.
    pub fn get(&self, name: &str) -> RegistryResult<&Arc<Enumeration>> {
        self.enumerations
            .get(name)
            .ok_or_else(|| RegistryError::UnknownEnumeration(name.to_string()))
    }

    /// Resolve a qualified name such as `COORDINATE_SYSTEM.LNGLAT`.
    ///
    /// The name is split on the first `.`.
    pub fn resolve(&self, qualified: &str) -> RegistryResult<&Value> {
        let (enumeration, member) = qualified
            .split_once('.')
            .ok_or_else(|| RegistryError::MalformedQualifiedName(qualified.to_string()))?;
        self.get(enumeration)?.member(member)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.enumerations.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.enumerations.keys().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.enumerations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enumerations.is_empty()
    }
}

/// Collect enumerations into a registry. References are shared, not cloned.
pub fn build_enumeration_registry<I>(enumerations: I) -> RegistryResult<EnumerationRegistry>
where
    I: IntoIterator,
    I::Item: Into<Arc<Enumeration>>,
{
    let mut table = BTreeMap::new();
    for enumeration in enumerations {
        let enumeration: Arc<Enumeration> = enumeration.into();
        match table.entry(enumeration.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(enumeration);
            }
            Entry::Occupied(slot) => {
                return Err(RegistryError::DuplicateEnumeration(slot.key().to_string()));
            }
        }
    }

    debug!(enumerations = table.len(), "Built enumeration registry");
    Ok(EnumerationRegistry {
        enumerations: table,
    })
}
