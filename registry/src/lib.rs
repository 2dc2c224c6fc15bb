//! Scene Registry
//!
//! Name resolution for the declarative scene converter: which classes,
//! enumerations and constants a scene description may reference by name.
//! The registry is immutable after construction via RegistryBuilder and is
//! passed by reference to whoever needs it; there is no global instance.

mod builder;
mod class;
mod constant;
mod constructible;
mod enumeration;
mod error;
mod provider;
mod registry;

pub use builder::RegistryBuilder;
pub use class::{build_class_registry, ClassRegistry, CollisionPolicy};
pub use constant::{build_constant_registry, ConstantRegistry};
pub use constructible::{ConstructError, Constructible, FnConstructor};
pub use enumeration::{build_enumeration_registry, Enumeration, EnumerationRegistry};
pub use error::{RegistryError, RegistryResult};
pub use provider::Provider;
pub use registry::Registry;
