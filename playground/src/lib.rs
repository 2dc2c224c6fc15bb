//! Scene Playground
//!
//! The configuration that decides which deck.gl classes a playground scene
//! may instantiate, which enumerations and constants it may reference, and
//! which extra file formats the loader subsystem should accept.

mod catalog;
mod configuration;
mod enums;
mod error;
mod formats;
mod render;

pub use catalog::{
    aggregation_layers, core_views, geo_layers, layers, mesh_layers, CatalogClass, ObjectKind,
    SceneObject,
};
pub use configuration::{playground_builder, playground_providers, playground_registry};
pub use enums::{coordinate_system, gl};
pub use error::{PlaygroundError, PlaygroundResult};
pub use formats::{
    csv_loader, draco_loader, draco_worker_loader, register_playground_loaders, DataSource,
};
pub use render::{data_sources, render};
