//! Scene Converter
//!
//! Turns a declarative JSON scene description into a tree of [`Value`]s,
//! instantiating classes and substituting enumerations and constants by name
//! from a [`Registry`](scene_registry::Registry).
//!
//! [`Value`]: scene_core::Value

mod config;
mod converter;
mod error;
mod path;

pub use config::ConverterConfig;
pub use converter::JsonConverter;
pub use error::{ConvertError, ConvertResult};
pub use path::JsonPath;
