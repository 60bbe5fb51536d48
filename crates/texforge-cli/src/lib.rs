//! texforge CLI library.
//!
//! This crate provides the batch conversion driver behind the `texforge`
//! binary: source discovery, configuration validation, and the per-image
//! convert loop.

pub mod commands;
pub mod input;
