//! File formats the playground adds to the loader subsystem.

use std::sync::Arc;

use scene_loaders::{register_format_loaders, LoaderDescriptor, LoaderRegistry, LoaderResult};

/// `CSVLoader` from `@loaders.gl/csv`.
pub fn csv_loader() -> LoaderDescriptor {
    LoaderDescriptor::new("csv", "CSV", "@loaders.gl/csv")
        .extensions(["csv", "tsv", "dsv"])
        .mime_types(["text/csv", "text/tab-separated-values", "text/dsv"])
}

/// `DracoLoader` from `@loaders.gl/draco`.
pub fn draco_loader() -> LoaderDescriptor {
    LoaderDescriptor::new("draco", "Draco", "@loaders.gl/draco")
        .extensions(["drc"])
        .mime_types(["application/octet-stream"])
}

/// `DracoWorkerLoader` from `@loaders.gl/draco`: Draco decoding off the main thread.
pub fn draco_worker_loader() -> LoaderDescriptor {
    LoaderDescriptor::new("draco-worker", "Draco", "@loaders.gl/draco")
        .extensions(["drc"])
        .mime_types(["application/octet-stream"])
        .worker()
}

/// Register the playground's extra formats.
///
/// The JSON loader is expected to be registered already and is left alone.
/// Safe to call more than once.
pub fn register_playground_loaders(registry: &mut LoaderRegistry) -> LoaderResult<usize> {
    register_format_loaders(registry, [Arc::new(csv_loader())])
}

/// A `data` URL found in a scene and the loader that would fetch it.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    /// Id of the layer carrying the URL.
    pub layer: String,
    pub url: String,
    /// Chosen loader id, or `None` if no registered loader handles the URL.
    pub loader: Option<String>,
}
