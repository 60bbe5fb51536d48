//! Scalar-field filters: separable Gaussian blur, Sobel gradients, and the
//! mean-anchored contrast boost.

use crate::field::HeightField;

/// Apply a separable Gaussian blur with toroidal borders.
///
/// Kernel half-width is `ceil(3 sigma)`; sigma <= 0 degenerates to the
/// identity.
pub fn gaussian_blur(field: &HeightField, sigma: f32) -> HeightField {
    if sigma <= 0.0 {
        return field.clone();
    }

    let width = field.width;
    let height = field.height;
    let kernel = gaussian_kernel(sigma);
    let half = (kernel.len() / 2) as i32;

    // Horizontal pass
    let mut temp = HeightField::new(width, height, 0.0);
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0;
            for (i, k) in kernel.iter().enumerate() {
                let sx = x as i32 + i as i32 - half;
                sum += field.get_wrapped(sx, y as i32) * k;
            }
            temp.set(x, y, sum);
        }
    }

    // Vertical pass
    let mut out = HeightField::new(width, height, 0.0);
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0;
            for (i, k) in kernel.iter().enumerate() {
                let sy = y as i32 + i as i32 - half;
                sum += temp.get_wrapped(x as i32, sy) * k;
            }
            out.set(x, y, sum);
        }
    }

    out
}

fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let half = (sigma * 3.0).ceil() as usize;
    let size = (half * 2 + 1).max(3);
    let half = size / 2;

    let mut kernel = vec![0.0f32; size];
    let mut sum = 0.0;
    for (i, value) in kernel.iter_mut().enumerate() {
        let x = i as f32 - half as f32;
        *value = (-x * x / (2.0 * sigma * sigma)).exp();
        sum += *value;
    }
    for value in &mut kernel {
        *value /= sum;
    }
    kernel
}

/// Compute 3x3 Sobel gradients with toroidal borders.
///
/// Returns (dx, dy) using the standard kernels:
///
/// ```text
/// Gx = | -1  0  1 |    Gy = | -1 -2 -1 |
///      | -2  0  2 |         |  0  0  0 |
///      | -1  0  1 |         |  1  2  1 |
/// ```
pub fn sobel_gradients(field: &HeightField) -> (HeightField, HeightField) {
    let width = field.width;
    let height = field.height;
    let mut dx = HeightField::new(width, height, 0.0);
    let mut dy = HeightField::new(width, height, 0.0);

    for y in 0..height {
        for x in 0..width {
            let mut samples = [[0.0f32; 3]; 3];
            for (sy, row) in samples.iter_mut().enumerate() {
                for (sx, sample) in row.iter_mut().enumerate() {
                    *sample =
                        field.get_wrapped(x as i32 + sx as i32 - 1, y as i32 + sy as i32 - 1);
                }
            }

            let gx = (samples[0][2] + 2.0 * samples[1][2] + samples[2][2])
                - (samples[0][0] + 2.0 * samples[1][0] + samples[2][0]);
            let gy = (samples[2][0] + 2.0 * samples[2][1] + samples[2][2])
                - (samples[0][0] + 2.0 * samples[0][1] + samples[0][2]);

            dx.set(x, y, gx);
            dy.set(x, y, gy);
        }
    }

    (dx, dy)
}

/// Boost contrast about the mean: `v -> mean + (v - mean) * factor`,
/// clamped to [0, 1].
pub fn contrast_boost(field: &mut HeightField, factor: f32) {
    if field.data.is_empty() {
        return;
    }
    let mean = field.data.iter().sum::<f32>() / field.data.len() as f32;
    for v in &mut field.data {
        *v = (mean + (*v - mean) * factor).clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn blur_with_zero_sigma_is_identity() {
        let field = HeightField::from_data(2, 2, vec![0.1, 0.9, 0.4, 0.6]);
        assert_eq!(gaussian_blur(&field, 0.0), field);
    }

    #[test]
    fn blur_preserves_constant_fields() {
        let field = HeightField::new(8, 8, 0.37);
        let blurred = gaussian_blur(&field, 2.0);
        for &v in &blurred.data {
            assert!(approx_eq(v, 0.37, 1e-5));
        }
    }

    #[test]
    fn blur_preserves_mean() {
        let mut field = HeightField::new(8, 8, 0.0);
        field.set(3, 4, 1.0);
        field.set(5, 1, 0.5);
        let mean = field.data.iter().sum::<f32>() / 64.0;

        let blurred = gaussian_blur(&field, 1.5);
        let blurred_mean = blurred.data.iter().sum::<f32>() / 64.0;
        assert!(approx_eq(mean, blurred_mean, 1e-5));
    }

    #[test]
    fn sobel_of_flat_field_is_zero() {
        let field = HeightField::new(6, 6, 0.5);
        let (dx, dy) = sobel_gradients(&field);
        assert!(dx.data.iter().all(|&v| v == 0.0));
        assert!(dy.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn sobel_of_horizontal_ramp_matches_kernel_weights() {
        // data(x) = 0.1 * x; interior columns see gx = 8 * 0.1.
        let mut field = HeightField::new(8, 5, 0.0);
        for y in 0..5 {
            for x in 0..8 {
                field.set(x, y, 0.1 * x as f32);
            }
        }
        let (dx, dy) = sobel_gradients(&field);
        assert!(approx_eq(dx.get(3, 2), 0.8, 1e-5));
        assert!(approx_eq(dy.get(3, 2), 0.0, 1e-5));
    }

    #[test]
    fn contrast_boost_spreads_about_the_mean() {
        let mut field = HeightField::from_data(2, 1, vec![0.25, 0.75]);
        contrast_boost(&mut field, 1.2);
        // mean = 0.5; 0.5 + (0.25 - 0.5) * 1.2 = 0.2
        assert!(approx_eq(field.get(0, 0), 0.2, 1e-6));
        assert!(approx_eq(field.get(1, 0), 0.8, 1e-6));
    }

    #[test]
    fn contrast_boost_clamps_to_unit_range() {
        let mut field = HeightField::from_data(2, 1, vec![0.0, 1.0]);
        contrast_boost(&mut field, 3.0);
        assert_eq!(field.get(0, 0), 0.0);
        assert_eq!(field.get(1, 0), 1.0);
    }
}
