//! The loader registry.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{json_loader, LoaderDescriptor, LoaderError, LoaderResult};

/// Registered format handlers, in registration order.
#[derive(Debug, Clone, Default)]
pub struct LoaderRegistry {
    loaders: Vec<Arc<LoaderDescriptor>>,
}

impl LoaderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the JSON loader pre-registered.
    pub fn with_defaults() -> Self {
        Self {
            loaders: vec![Arc::new(json_loader())],
        }
    }

    /// Register loaders, skipping any already present.
    ///
    /// Returns how many were newly added. Re-registering an identical
    /// descriptor is a no-op; a different descriptor under a registered id
    /// fails with `Conflict` and nothing from the call is registered.
    pub fn register<I>(&mut self, loaders: I) -> LoaderResult<usize>
    where
        I: IntoIterator,
        I::Item: Into<Arc<LoaderDescriptor>>,
    {
        let mut pending: Vec<Arc<LoaderDescriptor>> = Vec::new();

        for loader in loaders {
            let loader: Arc<LoaderDescriptor> = loader.into();
            loader.validate()?;

            let existing = self
                .get(&loader.id)
                .or_else(|| pending.iter().find(|p| p.id == loader.id));
            match existing {
                Some(existing) if **existing == *loader => {
                    debug!(loader = %loader.id, "Loader already registered");
                }
                Some(_) => return Err(LoaderError::conflict(&loader.id)),
                None => pending.push(loader),
            }
        }

        let added = pending.len();
        for loader in &pending {
            info!(
                loader = %loader.id,
                module = %loader.module,
                extensions = ?loader.extensions,
                "Registered format loader"
            );
        }
        self.loaders.extend(pending);
        Ok(added)
    }

    /// Get a loader by id.
    pub fn get(&self, id: &str) -> Option<&Arc<LoaderDescriptor>> {
        self.loaders.iter().find(|loader| loader.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Registered loaders in registration order.
    pub fn loaders(&self) -> impl Iterator<Item = &Arc<LoaderDescriptor>> {
        self.loaders.iter()
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Pick the loader for a resource.
    ///
    /// A MIME type match wins over an extension match; within each, the
    /// earliest registered loader wins.
    pub fn select(&self, url: &str, mime_type: Option<&str>) -> LoaderResult<&Arc<LoaderDescriptor>> {
        if let Some(mime) = mime_type.map(essence) {
            if let Some(loader) = self.loaders.iter().find(|l| l.handles_mime_type(mime)) {
                return Ok(loader);
            }
        }

        extension(url)
            .and_then(|ext| self.loaders.iter().find(|l| l.handles_extension(ext)))
            .ok_or_else(|| LoaderError::no_matching_loader(url))
    }
}

/// Register loaders with `registry`. See [`LoaderRegistry::register`].
pub fn register_format_loaders<I>(registry: &mut LoaderRegistry, loaders: I) -> LoaderResult<usize>
where
    I: IntoIterator,
    I::Item: Into<Arc<LoaderDescriptor>>,
{
    registry.register(loaders)
}

/// Strip parameters from a MIME type: `text/csv; charset=utf-8` -> `text/csv`.
fn essence(mime: &str) -> &str {
    mime.split(';').next().unwrap_or(mime).trim()
}

/// Extension of the last path segment, ignoring query and fragment.
fn extension(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}
