//! Frequency-band decomposition of a height field.

use crate::field::HeightField;
use crate::filter::gaussian_blur;

/// High/medium/low spatial-frequency bands of one height field.
///
/// `high + medium + low` telescopes back to the input field exactly.
#[derive(Debug, Clone)]
pub struct FrequencyBands {
    /// Detail above the first blur radius.
    pub high: HeightField,
    /// Detail between the two blur radii.
    pub medium: HeightField,
    /// Everything below the second blur radius.
    pub low: HeightField,
}

impl FrequencyBands {
    /// Split `field` by Gaussian blur differencing at sigmas `r1 < r2`:
    /// high = H - blur(H, r1), medium = blur(H, r1) - blur(H, r2),
    /// low = blur(H, r2).
    pub fn decompose(field: &HeightField, r1: f32, r2: f32) -> Self {
        let b1 = gaussian_blur(field, r1);
        let b2 = gaussian_blur(field, r2);

        let high = diff(field, &b1);
        let medium = diff(&b1, &b2);

        Self {
            high,
            medium,
            low: b2,
        }
    }

    /// Weighted recombination into a single field.
    pub fn recombine(&self, w_high: f32, w_medium: f32, w_low: f32) -> HeightField {
        let data = self
            .high
            .data
            .iter()
            .zip(&self.medium.data)
            .zip(&self.low.data)
            .map(|((&h, &m), &l)| h * w_high + m * w_medium + l * w_low)
            .collect();
        HeightField::from_data(self.high.width, self.high.height, data)
    }
}

fn diff(a: &HeightField, b: &HeightField) -> HeightField {
    let data = a
        .data
        .iter()
        .zip(&b.data)
        .map(|(&va, &vb)| va - vb)
        .collect();
    HeightField::from_data(a.width, a.height, data)
}
