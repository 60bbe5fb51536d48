//! texforge canonical parameter types and validation.
//!
//! This crate holds the data model shared by the synthesis backend and the
//! CLI: the two immutable control-parameter structs, the output-dimension
//! selector, reusable validation helpers, and the configuration error
//! taxonomy. It performs no I/O and has no synthesis logic of its own.

pub mod dimension;
pub mod error;
pub mod params;
pub mod validation;

// Re-export main types for convenience
pub use dimension::{OutputDimension, DIMENSION_PRESETS};
pub use error::ConfigError;
pub use params::{NormalMapParams, RoughnessMapParams, Tiling};
