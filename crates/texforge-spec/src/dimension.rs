//! Output dimension selection.
//!
//! The control surface offers "keep original", a fixed set of named square
//! presets, and an explicit width/height pair. The selector is a tagged
//! variant so the resize call site matches exhaustively instead of
//! special-casing sentinel strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Named square presets offered by the control surface.
pub const DIMENSION_PRESETS: &[(u32, u32)] = &[
    (4, 4),
    (128, 128),
    (289, 289),
    (512, 512),
    (1024, 1024),
    (2048, 2048),
];

/// Target dimensions for a conversion batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputDimension {
    /// Keep the source image dimensions.
    Original,
    /// One of the named square presets.
    Preset(u32, u32),
    /// Explicit width/height pair; both must be positive.
    Custom(u32, u32),
}

impl OutputDimension {
    /// Resolve against a source size, returning the target (width, height).
    pub fn resolve(&self, source: (u32, u32)) -> (u32, u32) {
        match *self {
            OutputDimension::Original => source,
            OutputDimension::Preset(w, h) => (w, h),
            OutputDimension::Custom(w, h) => (w, h),
        }
    }
}

impl fmt::Display for OutputDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OutputDimension::Original => write!(f, "original"),
            OutputDimension::Preset(w, h) | OutputDimension::Custom(w, h) => {
                write!(f, "{}x{}", w, h)
            }
        }
    }
}

impl FromStr for OutputDimension {
    type Err = ConfigError;

    /// Parse `original`, a named preset such as `512x512`, or a custom
    /// `WIDTHxHEIGHT` pair. Zero dimensions are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case("original") {
            return Ok(OutputDimension::Original);
        }

        let (w, h) = text
            .split_once(['x', 'X'])
            .ok_or_else(|| ConfigError::InvalidDimension(text.to_string()))?;
        let width: u32 = w
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidDimension(text.to_string()))?;
        let height: u32 = h
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidDimension(text.to_string()))?;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimension(text.to_string()));
        }

        if DIMENSION_PRESETS.contains(&(width, height)) {
            Ok(OutputDimension::Preset(width, height))
        } else {
            Ok(OutputDimension::Custom(width, height))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_original_case_insensitive() {
        assert_eq!(
            "original".parse::<OutputDimension>().unwrap(),
            OutputDimension::Original
        );
        assert_eq!(
            "Original".parse::<OutputDimension>().unwrap(),
            OutputDimension::Original
        );
    }

    #[test]
    fn parses_presets_and_custom_pairs() {
        assert_eq!(
            "512x512".parse::<OutputDimension>().unwrap(),
            OutputDimension::Preset(512, 512)
        );
        assert_eq!(
            "289X289".parse::<OutputDimension>().unwrap(),
            OutputDimension::Preset(289, 289)
        );
        assert_eq!(
            "640x480".parse::<OutputDimension>().unwrap(),
            OutputDimension::Custom(640, 480)
        );
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!("0x128".parse::<OutputDimension>().is_err());
        assert!("128x0".parse::<OutputDimension>().is_err());
        assert!("128".parse::<OutputDimension>().is_err());
        assert!("axb".parse::<OutputDimension>().is_err());
        assert!("-4x4".parse::<OutputDimension>().is_err());
    }

    #[test]
    fn resolve_is_exhaustive_over_variants() {
        assert_eq!(OutputDimension::Original.resolve((33, 44)), (33, 44));
        assert_eq!(OutputDimension::Preset(128, 128).resolve((33, 44)), (128, 128));
        assert_eq!(OutputDimension::Custom(640, 480).resolve((33, 44)), (640, 480));
    }

    #[test]
    fn display_round_trips_pairs() {
        assert_eq!(OutputDimension::Custom(640, 480).to_string(), "640x480");
        assert_eq!(OutputDimension::Original.to_string(), "original");
    }
}
