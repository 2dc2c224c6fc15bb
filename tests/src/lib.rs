//! Scene Integration Test Framework
//!
//! Provides a fluent API for converting playground scenes and checking the
//! result.
//!
//! # Example
//!
//! ```ignore
//! use scene_tests::prelude::*;
//!
//! pub fn scenario() -> Scenario {
//!     Scenario::new("scatterplot")
//!         .scene("scatterplot.json")
//!         .expect(|a| a.instance_at("/layers/0", "ScatterplotLayer").value_at("/layers/0/radiusScale", 6i64))
//! }
//!
//! #[test]
//! fn test() {
//!     scenario().run().unwrap();
//! }
//! ```

mod assertion;
mod error;
mod pointer;
mod runner;

pub use assertion::{Assertion, AssertionBuilder};
pub use error::{ScenarioError, ScenarioResult};
pub use pointer::lookup;
pub use scenario::Scenario;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::pointer::lookup;
    pub use crate::scenario::Scenario;
    pub use scene_core::Value;
}
