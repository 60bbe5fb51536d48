//! Pixel buffer types shared by the synthesis pipeline.

/// A 2-D grid of `f32` samples, row-major.
///
/// Height fields derived from a source image hold values in [0, 1];
/// intermediate band arithmetic goes outside that range and is clamped
/// only on quantization. Out-of-range reads wrap toroidally.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Sample data, row-major.
    pub data: Vec<f32>,
}

impl HeightField {
    /// Create a new field filled with a value.
    pub fn new(width: u32, height: u32, fill: f32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Wrap existing sample data.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            data,
        }
    }

    /// Get a sample at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx]
    }

    /// Set a sample at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx] = value;
    }

    /// Get a sample with wrapping coordinates.
    #[inline]
    pub fn get_wrapped(&self, x: i32, y: i32) -> f32 {
        let wx = x.rem_euclid(self.width as i32) as u32;
        let wy = y.rem_euclid(self.height as i32) as u32;
        self.get(wx, wy)
    }

    /// Quantize to an 8-bit intensity map: clamp to [0, 1], scale to
    /// [0, 255], truncate.
    pub fn to_intensity(&self) -> IntensityMap {
        let data = self
            .data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8)
            .collect();
        IntensityMap {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// An 8-bit RGBA image, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data, 4 bytes per pixel, row-major.
    pub data: Vec<u8>,
}

impl RgbaBuffer {
    /// Create a new opaque black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        let mut data = vec![0u8; size * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap raw RGBA bytes (4 per pixel, row-major).
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width as usize) * (height as usize) * 4);
        Self {
            width,
            height,
            data,
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Convert to a [0, 1] luminance field using BT.601 weights.
    pub fn luminance(&self) -> HeightField {
        let data = self
            .data
            .chunks_exact(4)
            .map(|px| {
                (0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32) / 255.0
            })
            .collect();
        HeightField::from_data(self.width, self.height, data)
    }
}

/// An 8-bit single-channel image, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityMap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Intensity data, one byte per pixel, row-major.
    pub data: Vec<u8>,
}

impl IntensityMap {
    /// Expand to RGBA by replicating the channel into R, G, B with full
    /// alpha.
    pub fn expand_rgba(&self) -> RgbaBuffer {
        let mut data = Vec::with_capacity(self.data.len() * 4);
        for &v in &self.data {
            data.extend_from_slice(&[v, v, v, 255]);
        }
        RgbaBuffer::from_raw(self.width, self.height, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_field_get_set_and_wrapping() {
        let mut field = HeightField::new(2, 2, 0.0);
        field.set(0, 0, 0.1);
        field.set(1, 0, 0.2);
        field.set(0, 1, 0.3);
        field.set(1, 1, 0.4);

        assert_eq!(field.get(1, 0), 0.2);
        // Negative wrap
        assert_eq!(field.get_wrapped(-1, -1), 0.4);
        assert_eq!(field.get_wrapped(-2, 0), 0.1);
        // Positive wrap
        assert_eq!(field.get_wrapped(2, 0), 0.1);
        assert_eq!(field.get_wrapped(3, 1), 0.4);
    }

    #[test]
    fn intensity_quantization_clamps_and_truncates() {
        let field = HeightField::from_data(4, 1, vec![-0.5, 0.0, 0.5, 1.5]);
        let map = field.to_intensity();
        assert_eq!(map.data, vec![0, 0, 127, 255]);
    }

    #[test]
    fn luminance_uses_bt601_weights() {
        let mut buffer = RgbaBuffer::new(3, 1);
        buffer.set_pixel(0, 0, [255, 0, 0, 255]);
        buffer.set_pixel(1, 0, [0, 255, 0, 255]);
        buffer.set_pixel(2, 0, [128, 128, 128, 255]);

        let field = buffer.luminance();
        assert!((field.get(0, 0) - 0.299).abs() < 1e-6);
        assert!((field.get(1, 0) - 0.587).abs() < 1e-6);
        assert!((field.get(2, 0) - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn expand_rgba_replicates_channel() {
        let map = IntensityMap {
            width: 2,
            height: 1,
            data: vec![7, 250],
        };
        let rgba = map.expand_rgba();
        assert_eq!(rgba.pixel(0, 0), [7, 7, 7, 255]);
        assert_eq!(rgba.pixel(1, 0), [250, 250, 250, 255]);
    }
}
