//! Normal map synthesis.

use texforge_spec::NormalMapParams;

use crate::bands::FrequencyBands;
use crate::field::RgbaBuffer;
use crate::filter::sobel_gradients;
use crate::height::derive_height_field;

/// Contrast boost applied to the luminance field.
const CONTRAST: f32 = 1.2;
/// Band split sigmas for the normal path.
const BAND_SIGMAS: (f32, f32) = (2.0, 4.0);

/// Synthesize a tangent-space normal map from a source image.
///
/// The weighted band recombination is differentiated with a 3x3 Sobel
/// operator, the gradient is scaled, and each pixel's `(dx, dy, 1)` vector
/// is normalized to a unit surface normal encoded as R = (nx+1)/2,
/// G = (ny+1)/2, B = nz, A = 1. A flat source has zero gradient everywhere
/// and encodes as (127, 127, 255, 255).
pub fn generate_normal_map(source: &RgbaBuffer, params: &NormalMapParams) -> RgbaBuffer {
    let field = derive_height_field(source, CONTRAST, params.blur_sigma());
    let bands = FrequencyBands::decompose(&field, BAND_SIGMAS.0, BAND_SIGMAS.1);

    let (w_high, w_medium, w_low) = params.band_weights();
    let recombined = bands.recombine(w_high, w_medium, w_low);

    let scale = params.gradient_scale();
    let (dx, dy) = sobel_gradients(&recombined);

    let mut out = RgbaBuffer::new(source.width, source.height);
    for y in 0..source.height {
        for x in 0..source.width {
            let gx = dx.get(x, y) * scale;
            let gy = dy.get(x, y) * scale;

            let len = (gx * gx + gy * gy + 1.0).sqrt();
            let nx = gx / len;
            let ny = gy / len;
            let nz = 1.0 / len;

            out.set_pixel(
                x,
                y,
                [
                    quantize((nx + 1.0) * 0.5),
                    quantize((ny + 1.0) * 0.5),
                    quantize(nz),
                    255,
                ],
            );
        }
    }
    out
}

#[inline]
fn quantize(v: f32) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}
