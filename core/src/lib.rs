//! Scene Core Types
//!
//! This crate provides the foundational types shared by the scene registry:
//! - Name types (Identifier, ProviderId)
//! - Value types (the Value enum produced by the JSON converter)
//! - Opaque shared objects (Instance, Constant)
//! - Common error types

mod error;
mod id;
mod object;
mod value;

pub use error::*;
pub use id::*;
pub use object::*;
pub use value::*;
