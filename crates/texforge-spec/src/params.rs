//! Control parameters for the two map synthesizers.
//!
//! Fields store the values exposed by the control surface (percentage
//! sliders and free-text tiling entries); accessor methods map them onto
//! the effective ranges the synthesis math consumes. Both structs are
//! plain immutable data passed into each synthesis call, so every call is
//! pure and independently testable.

use serde::{Deserialize, Serialize};

use crate::validation::{validate_finite, validate_range, ValidationError};

/// Parameters for normal map synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalMapParams {
    /// Pre-blur amount, 0-100. Effective Gaussian sigma is `blur / 10` pixels.
    pub blur: f32,
    /// Gradient scale slider, 0-300. Maps linearly onto [0, 4].
    pub scale: f32,
    /// High-frequency band weight, 0-150. Maps linearly onto [0, 2].
    pub weight_high: f32,
    /// Medium-frequency band weight, 0-150. Maps linearly onto [0, 1.5].
    pub weight_medium: f32,
    /// Low-frequency band weight, 0-150. Maps linearly onto [0, 1].
    pub weight_low: f32,
}

impl Default for NormalMapParams {
    fn default() -> Self {
        Self {
            blur: 0.0,
            scale: 300.0,
            weight_high: 100.0,
            weight_medium: 100.0,
            weight_low: 100.0,
        }
    }
}

impl NormalMapParams {
    /// Gaussian sigma in pixels for the optional pre-blur.
    pub fn blur_sigma(&self) -> f32 {
        self.blur / 10.0
    }

    /// Effective gradient scale factor in [0, 4].
    pub fn gradient_scale(&self) -> f32 {
        self.scale / 300.0 * 4.0
    }

    /// Effective band weights as (high, medium, low).
    pub fn band_weights(&self) -> (f32, f32, f32) {
        (
            self.weight_high / 150.0 * 2.0,
            self.weight_medium / 150.0 * 1.5,
            self.weight_low / 150.0 * 1.0,
        )
    }

    /// Check every knob against its control-surface range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_range("normal.blur", self.blur, 0.0, 100.0)?;
        validate_range("normal.scale", self.scale, 0.0, 300.0)?;
        validate_range("normal.weight_high", self.weight_high, 0.0, 150.0)?;
        validate_range("normal.weight_medium", self.weight_medium, 0.0, 150.0)?;
        validate_range("normal.weight_low", self.weight_low, 0.0, 150.0)?;
        Ok(())
    }
}

/// UV tiling/offset remap settings for the roughness path.
///
/// Values come from free-text controls; the CLI boundary parses them and
/// degrades to no remap (with a diagnostic) when the text is unparsable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tiling {
    /// Horizontal tile factor.
    pub tile_u: f32,
    /// Vertical tile factor.
    pub tile_v: f32,
    /// Horizontal offset as a fraction of the image width.
    pub offset_u: f32,
    /// Vertical offset as a fraction of the image height.
    pub offset_v: f32,
}

impl Default for Tiling {
    fn default() -> Self {
        Self {
            tile_u: 1.0,
            tile_v: 1.0,
            offset_u: 0.0,
            offset_v: 0.0,
        }
    }
}

impl Tiling {
    /// Parse the four free-text control values.
    pub fn from_text(
        tile_u: &str,
        tile_v: &str,
        offset_u: &str,
        offset_v: &str,
    ) -> Result<Self, std::num::ParseFloatError> {
        Ok(Self {
            tile_u: tile_u.trim().parse()?,
            tile_v: tile_v.trim().parse()?,
            offset_u: offset_u.trim().parse()?,
            offset_v: offset_v.trim().parse()?,
        })
    }

    /// True when the remap would sample every pixel from itself.
    pub fn is_identity(&self) -> bool {
        self.tile_u == 1.0 && self.tile_v == 1.0 && self.offset_u == 0.0 && self.offset_v == 0.0
    }
}

/// Parameters for roughness/specular map synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoughnessMapParams {
    /// Pre-blur amount, 0-100. Effective Gaussian sigma is `blur / 10` pixels.
    pub blur: f32,
    /// Detail scale slider, 0-150. Maps linearly onto [0, 2].
    pub detail_scale: f32,
    /// Low-detail contrast weight, 0-100. Raw fraction.
    pub contrast_low: f32,
    /// Medium-detail contrast weight, 0-100. Raw fraction.
    pub contrast_medium: f32,
    /// High-detail contrast weight, 0-100. Raw fraction.
    pub contrast_high: f32,
    /// Bump contribution strength, 0-100. Raw fraction.
    pub bump: f32,
    /// UV remap settings. `None` leaves the field untouched.
    pub tiling: Option<Tiling>,
}

impl Default for RoughnessMapParams {
    fn default() -> Self {
        Self {
            blur: 0.0,
            detail_scale: 100.0,
            contrast_low: 50.0,
            contrast_medium: 50.0,
            contrast_high: 50.0,
            bump: 10.0,
            tiling: Some(Tiling::default()),
        }
    }
}

impl RoughnessMapParams {
    /// Gaussian sigma in pixels for the optional pre-blur.
    pub fn blur_sigma(&self) -> f32 {
        self.blur / 10.0
    }

    /// Effective detail scale factor in [0, 2].
    pub fn detail(&self) -> f32 {
        self.detail_scale / 150.0 * 2.0
    }

    /// Effective contrast weights as (low, medium, high) fractions.
    pub fn contrast_weights(&self) -> (f32, f32, f32) {
        (
            self.contrast_low / 100.0,
            self.contrast_medium / 100.0,
            self.contrast_high / 100.0,
        )
    }

    /// Effective bump strength fraction.
    pub fn bump_strength(&self) -> f32 {
        self.bump / 100.0
    }

    /// Check every knob against its control-surface range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_range("roughness.blur", self.blur, 0.0, 100.0)?;
        validate_range("roughness.detail_scale", self.detail_scale, 0.0, 150.0)?;
        validate_range("roughness.contrast_low", self.contrast_low, 0.0, 100.0)?;
        validate_range("roughness.contrast_medium", self.contrast_medium, 0.0, 100.0)?;
        validate_range("roughness.contrast_high", self.contrast_high, 0.0, 100.0)?;
        validate_range("roughness.bump", self.bump, 0.0, 100.0)?;
        if let Some(tiling) = &self.tiling {
            validate_finite("roughness.tile_u", tiling.tile_u)?;
            validate_finite("roughness.tile_v", tiling.tile_v)?;
            validate_finite("roughness.offset_u", tiling.offset_u)?;
            validate_finite("roughness.offset_v", tiling.offset_v)?;
        }
        Ok(())
    }
}
