//! Block-compressed DDS texture encoding.
//!
//! Texture maps are persisted as DDS containers with DX10 headers and BC
//! block payloads: BC3 for opaque color data (base color and roughness
//! maps), BC5 for two-channel directional data (normal maps). The
//! container header comes from the `ddsfile` crate; the block payloads are
//! produced by [`block`]. Encoding is fully deterministic and every result
//! carries a BLAKE3 hash of its payload.

mod block;

use std::path::Path;

use ddsfile::{AlphaMode, D3D10ResourceDimension, Dds, DxgiFormat, NewDxgiParams};
use thiserror::Error;

use crate::field::RgbaBuffer;

/// Errors from DDS encoding.
#[derive(Debug, Error)]
pub enum DdsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DDS container error: {0}")]
    Container(#[from] ddsfile::Error),

    #[error("invalid dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),
}

/// Block compression format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdsFormat {
    /// BC3 (DXT5): BC1-style color block plus an interpolated alpha block.
    Bc3,
    /// BC5: two interpolated single-channel blocks taken from R and G.
    Bc5,
}

impl DdsFormat {
    fn dxgi(&self) -> DxgiFormat {
        match self {
            DdsFormat::Bc3 => DxgiFormat::BC3_UNorm,
            DdsFormat::Bc5 => DxgiFormat::BC5_UNorm,
        }
    }
}

/// A fully encoded DDS texture.
#[derive(Debug, Clone)]
pub struct EncodedTexture {
    /// Complete DDS file bytes (header + payload).
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Compression format used.
    pub format: DdsFormat,
    /// BLAKE3 hex digest of the block payload.
    pub hash: String,
}

/// Compress an RGBA buffer and wrap it in a DDS container.
pub fn encode(buffer: &RgbaBuffer, format: DdsFormat) -> Result<EncodedTexture, DdsError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(DdsError::InvalidDimensions(buffer.width, buffer.height));
    }

    let payload = match format {
        DdsFormat::Bc3 => block::compress_bc3(buffer),
        DdsFormat::Bc5 => block::compress_bc5(buffer),
    };
    let hash = blake3::hash(&payload).to_hex().to_string();

    let params = NewDxgiParams {
        height: buffer.height,
        width: buffer.width,
        depth: None,
        format: format.dxgi(),
        mipmap_levels: Some(1),
        array_layers: Some(1),
        caps2: None,
        is_cubemap: false,
        resource_dimension: D3D10ResourceDimension::Texture2D,
        alpha_mode: AlphaMode::Unknown,
    };
    let mut dds = Dds::new_dxgi(params)?;
    dds.data = payload;

    let mut data = Vec::new();
    dds.write(&mut data)?;

    Ok(EncodedTexture {
        data,
        width: buffer.width,
        height: buffer.height,
        format,
        hash,
    })
}

/// Encode and write a DDS file.
pub fn write_file(
    buffer: &RgbaBuffer,
    format: DdsFormat,
    path: &Path,
) -> Result<EncodedTexture, DdsError> {
    let encoded = encode(buffer, format)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &encoded.data)?;
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> RgbaBuffer {
        let mut buffer = RgbaBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                buffer.set_pixel(
                    x,
                    y,
                    [(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8, 255],
                );
            }
        }
        buffer
    }

    fn payload_len(width: u32, height: u32) -> usize {
        (width.div_ceil(4) * height.div_ceil(4)) as usize * 16
    }

    #[test]
    fn encoded_files_start_with_the_dds_magic() {
        let encoded = encode(&gradient(8, 8), DdsFormat::Bc3).unwrap();
        assert_eq!(&encoded.data[..4], b"DDS ");
    }

    #[test]
    fn payload_sizes_match_block_math() {
        for format in [DdsFormat::Bc3, DdsFormat::Bc5] {
            for (w, h) in [(4u32, 4u32), (8, 4), (16, 16), (5, 3), (1, 1)] {
                let encoded = encode(&gradient(w, h), format).unwrap();
                // DX10 header: 4 magic + 124 header + 20 extension.
                assert_eq!(
                    encoded.data.len(),
                    148 + payload_len(w, h),
                    "{:?} {}x{}",
                    format,
                    w,
                    h
                );
            }
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let buffer = gradient(16, 16);
        let a = encode(&buffer, DdsFormat::Bc5).unwrap();
        let b = encode(&buffer, DdsFormat::Bc5).unwrap();
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn formats_produce_distinct_payloads() {
        let buffer = gradient(8, 8);
        let bc3 = encode(&buffer, DdsFormat::Bc3).unwrap();
        let bc5 = encode(&buffer, DdsFormat::Bc5).unwrap();
        assert_ne!(bc3.hash, bc5.hash);
    }

    #[test]
    fn zero_sized_buffers_are_rejected() {
        let buffer = RgbaBuffer::from_raw(0, 4, Vec::new());
        assert!(matches!(
            encode(&buffer, DdsFormat::Bc3),
            Err(DdsError::InvalidDimensions(0, 4))
        ));
    }

    #[test]
    fn write_file_persists_the_encoded_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dds");
        let encoded = write_file(&gradient(8, 8), DdsFormat::Bc3, &path).unwrap();
        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, encoded.data);
    }
}
