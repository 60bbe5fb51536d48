//! Configuration error taxonomy.
//!
//! These errors fire at the configuration-validation boundary, before any
//! per-image I/O starts. Per-image processing failures are handled at the
//! batch driver's per-image boundary instead and never use these codes.

use thiserror::Error;

/// Errors raised while assembling a batch configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No source file or directory was selected.
    #[error("no source file or directory selected")]
    NoSource,

    /// No output directory was selected.
    #[error("no output directory selected")]
    NoOutput,

    /// The source path does not exist.
    #[error("source path does not exist: {0}")]
    SourceNotFound(String),

    /// The output dimension text was not `original` or a positive
    /// `WIDTHxHEIGHT` pair.
    #[error("invalid output dimension: {0:?} (expected \"original\" or WIDTHxHEIGHT)")]
    InvalidDimension(String),

    /// A control parameter was outside its documented range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The JSON parameter document could not be read or parsed.
    #[error("failed to load parameter file {path}: {message}")]
    BadParamsFile {
        /// Path of the offending file.
        path: String,
        /// Underlying read or parse message.
        message: String,
    },
}

impl ConfigError {
    /// Returns the stable error code string (e.g., "C001").
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::NoSource => "C001",
            ConfigError::NoOutput => "C002",
            ConfigError::SourceNotFound(_) => "C003",
            ConfigError::InvalidDimension(_) => "C004",
            ConfigError::InvalidParameter(_) => "C005",
            ConfigError::BadParamsFile { .. } => "C006",
        }
    }
}
