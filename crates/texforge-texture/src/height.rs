//! Height-field derivation from source images.

use crate::field::{HeightField, RgbaBuffer};
use crate::filter::{contrast_boost, gaussian_blur};

/// Derive the working height field for a synthesis pass: luminance
/// conversion, fixed contrast boost, optional Gaussian pre-blur.
///
/// Each synthesizer calls this with its own contrast factor and blur
/// sigma, so the two paths never share a field instance.
pub fn derive_height_field(source: &RgbaBuffer, contrast: f32, blur_sigma: f32) -> HeightField {
    let mut field = source.luminance();
    contrast_boost(&mut field, contrast);
    if blur_sigma > 0.0 {
        field = gaussian_blur(&field, blur_sigma);
    }
    field
}
