//! The playground registry configuration.

use std::sync::Arc;

use scene_core::Constant;
use scene_registry::{Provider, Registry, RegistryBuilder, RegistryResult};

use crate::{
    aggregation_layers, coordinate_system, core_views, draco_loader, draco_worker_loader,
    geo_layers, gl, layers, mesh_layers,
};

/// Class providers in merge order: views first, then each layer package.
pub fn playground_providers() -> RegistryResult<Vec<Provider>> {
    Ok(vec![
        core_views()?,
        layers()?,
        aggregation_layers()?,
        geo_layers()?,
        mesh_layers()?,
    ])
}

/// A builder preloaded with the playground configuration.
///
/// Applications can append their own providers (custom views or layers)
/// before building; name clashes with the catalog fail the build.
pub fn playground_builder() -> RegistryResult<RegistryBuilder> {
    let builder = playground_providers()?
        .into_iter()
        .fold(RegistryBuilder::new(), RegistryBuilder::provider);

    Ok(builder
        .enumeration(coordinate_system()?)
        .enumeration(gl()?)
        .constant("DracoLoader", Constant::from_arc(Arc::new(draco_loader())))
        .constant(
            "DracoWorkerLoader",
            Constant::from_arc(Arc::new(draco_worker_loader())),
        ))
}

/// Build the playground registry.
pub fn playground_registry() -> RegistryResult<Registry> {
    playground_builder()?.build()
}
