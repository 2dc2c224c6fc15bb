//! Scene Loaders
//!
//! The format-handler table consulted when scene data is fetched. Each
//! application owns its own [`LoaderRegistry`]; registration is idempotent.

mod descriptor;
mod error;
mod registry;

pub use descriptor::{json_loader, LoaderDescriptor};
pub use error::{LoaderError, LoaderResult};
pub use registry::{register_format_loaders, LoaderRegistry};
