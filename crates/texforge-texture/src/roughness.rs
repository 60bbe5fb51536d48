//! Roughness/specular map synthesis.

use texforge_spec::{RoughnessMapParams, Tiling};

use crate::bands::FrequencyBands;
use crate::field::{HeightField, IntensityMap, RgbaBuffer};
use crate::filter::sobel_gradients;
use crate::height::derive_height_field;

/// Contrast boost applied to the luminance field.
const CONTRAST: f32 = 1.1;
/// Band split sigmas for the roughness path.
const BAND_SIGMAS: (f32, f32) = (1.0, 3.0);

/// Synthesize a single-channel roughness map from a source image.
///
/// The contrast-weighted band recombination is scaled by the detail
/// factor, optionally retiled in UV space, and enhanced with an
/// edge-magnitude bump term before quantization. Expansion to RGBA for
/// persistence is the caller's concern, not this function's.
pub fn generate_roughness_map(source: &RgbaBuffer, params: &RoughnessMapParams) -> IntensityMap {
    let field = derive_height_field(source, CONTRAST, params.blur_sigma());
    let bands = FrequencyBands::decompose(&field, BAND_SIGMAS.0, BAND_SIGMAS.1);

    let (c_low, c_medium, c_high) = params.contrast_weights();
    let detail = params.detail();
    let mut field = bands.recombine(c_high * detail, c_medium * detail, c_low * detail);

    if let Some(tiling) = &params.tiling {
        if !tiling.is_identity() {
            field = remap_tiling(&field, tiling);
        }
    }

    let bump = params.bump_strength();
    if bump > 0.0 {
        let (dx, dy) = sobel_gradients(&field);
        for (v, (gx, gy)) in field.data.iter_mut().zip(dx.data.iter().zip(&dy.data)) {
            *v += (gx * gx + gy * gy).sqrt() * bump;
        }
    }

    field.to_intensity()
}

/// Nearest-neighbor tiling/offset remap in pixel space.
///
/// Destination pixel (x, y) samples source
/// ((x * tile_u + offset_u * W) mod W, (y * tile_v + offset_v * H) mod H).
/// Tile 1.0 with offset 0.0 is the identity.
fn remap_tiling(field: &HeightField, tiling: &Tiling) -> HeightField {
    let width = field.width;
    let height = field.height;
    let w = width as f64;
    let h = height as f64;

    let column: Vec<u32> = (0..width)
        .map(|x| {
            let sx = (x as f64 * tiling.tile_u as f64 + tiling.offset_u as f64 * w).rem_euclid(w);
            (sx as u32).min(width - 1)
        })
        .collect();

    let mut out = HeightField::new(width, height, 0.0);
    for y in 0..height {
        let sy = (y as f64 * tiling.tile_v as f64 + tiling.offset_v as f64 * h).rem_euclid(h);
        let sy = (sy as u32).min(height - 1);
        for x in 0..width {
            out.set(x, y, field.get(column[x as usize], sy));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_source(width: u32, height: u32) -> RgbaBuffer {
        let mut buffer = RgbaBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = (((x * 31 + y * 17) % 256) as u8).wrapping_add(13);
                buffer.set_pixel(x, y, [v, v, v, 255]);
            }
        }
        buffer
    }

    fn pattern_field(width: u32, height: u32) -> HeightField {
        let mut field = HeightField::new(width, height, 0.0);
        for y in 0..height {
            for x in 0..width {
                field.set(x, y, ((x * 13 + y * 7) % 32) as f32 / 31.0);
            }
        }
        field
    }

    #[test]
    fn identity_tiling_matches_no_tiling() {
        let source = gradient_source(16, 16);
        let with_identity = generate_roughness_map(&source, &RoughnessMapParams::default());
        let without = generate_roughness_map(
            &source,
            &RoughnessMapParams {
                tiling: None,
                ..Default::default()
            },
        );
        assert_eq!(with_identity, without);
    }

    #[test]
    fn remap_with_identity_settings_copies_the_field() {
        let field = pattern_field(9, 7);
        let out = remap_tiling(&field, &Tiling::default());
        assert_eq!(out, field);
    }

    #[test]
    fn tile_two_is_periodic_across_half_the_width() {
        let field = pattern_field(16, 8);
        let tiling = Tiling {
            tile_u: 2.0,
            ..Tiling::default()
        };
        let out = remap_tiling(&field, &tiling);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(out.get(x, y), out.get(x + 8, y));
            }
        }
    }

    #[test]
    fn offset_shifts_the_field() {
        let field = pattern_field(8, 8);
        let tiling = Tiling {
            offset_u: 0.5,
            ..Tiling::default()
        };
        let out = remap_tiling(&field, &tiling);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(out.get(x, y), field.get((x + 4) % 8, y));
            }
        }
    }

    #[test]
    fn flat_source_yields_uniform_intensity() {
        let mut source = RgbaBuffer::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                source.set_pixel(x, y, [128, 128, 128, 255]);
            }
        }
        let map = generate_roughness_map(&source, &RoughnessMapParams::default());

        // Flat field: only the low band carries signal, the bump term is
        // zero, so every pixel lands on the same quantized value.
        let first = map.data[0];
        assert!(map.data.iter().all(|&v| v == first));
        // 0.5 luminance * 0.5 contrast weight * (100/150 * 2) detail
        let expected = (0.5f32 * 0.5 * (100.0 / 150.0 * 2.0) * 255.0) as u8;
        assert!((first as i16 - expected as i16).abs() <= 1);
    }

    #[test]
    fn bump_only_adds_intensity() {
        let source = gradient_source(16, 16);
        let flat = generate_roughness_map(
            &source,
            &RoughnessMapParams {
                bump: 0.0,
                ..Default::default()
            },
        );
        let bumped = generate_roughness_map(
            &source,
            &RoughnessMapParams {
                bump: 80.0,
                ..Default::default()
            },
        );
        for (a, b) in flat.data.iter().zip(&bumped.data) {
            assert!(b >= a);
        }
    }

    #[test]
    fn synthesis_is_deterministic() {
        let source = gradient_source(16, 16);
        let params = RoughnessMapParams {
            blur: 20.0,
            tiling: Some(Tiling {
                tile_u: 2.0,
                tile_v: 3.0,
                offset_u: 0.25,
                offset_v: 0.1,
            }),
            ..Default::default()
        };
        assert_eq!(
            generate_roughness_map(&source, &params),
            generate_roughness_map(&source, &params)
        );
    }
}
