//! texforge synthesis core.
//!
//! This crate turns a decoded source image into GPU-ready texture maps:
//! a frequency-band-weighted tangent-space normal map and a tileable,
//! bump-enhanced roughness map, plus the block-compressed DDS encoding
//! both are written through.
//!
//! # Pipeline
//!
//! Both synthesizers share the same front half: the source image is reduced
//! to a luminance height field (with a fixed contrast boost and an optional
//! Gaussian pre-blur), then split into high/medium/low spatial-frequency
//! bands by blur differencing. The normal path recombines weighted bands
//! and derives per-pixel unit normals from Sobel gradients; the roughness
//! path recombines, optionally retiles, and adds an edge-magnitude bump
//! term.
//!
//! # Example
//!
//! ```no_run
//! use texforge_spec::NormalMapParams;
//! use texforge_texture::field::RgbaBuffer;
//! use texforge_texture::{dds, normal};
//! use std::path::Path;
//!
//! let source = RgbaBuffer::new(256, 256);
//! let map = normal::generate_normal_map(&source, &NormalMapParams::default());
//! dds::write_file(&map, dds::DdsFormat::Bc5, Path::new("out_normal.dds")).unwrap();
//! ```
//!
//! # Determinism
//!
//! Synthesis performs no I/O and uses no randomness: the same source bytes
//! and the same parameters produce byte-identical maps and byte-identical
//! DDS payloads, and encoded results carry a BLAKE3 payload hash for
//! verification.

pub mod bands;
pub mod dds;
pub mod field;
pub mod filter;
pub mod height;
pub mod normal;
pub mod roughness;

// Re-export main types for convenience
pub use bands::FrequencyBands;
pub use dds::{DdsError, DdsFormat, EncodedTexture};
pub use field::{HeightField, IntensityMap, RgbaBuffer};
pub use normal::generate_normal_map;
pub use roughness::generate_roughness_map;
