//! Source discovery and parameter document loading.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use texforge_spec::{ConfigError, NormalMapParams, RoughnessMapParams};

/// Accepted raster extensions (matched case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff", "tif"];

/// Returns true when the path carries an accepted raster extension.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Collect the batch's source images: a single file is taken as-is, a
/// directory contributes its top-level image files. Results are sorted by
/// file name for a stable batch order.
pub fn collect_sources(input: &Path) -> Vec<PathBuf> {
    if input.is_file() {
        return vec![input.to_path_buf()];
    }

    WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_image_file(path))
        .collect()
}

/// JSON parameter document: one section per synthesizer, each optional.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ParamsDocument {
    /// Normal map synthesis knobs.
    pub normal: NormalMapParams,
    /// Roughness map synthesis knobs.
    pub roughness: RoughnessMapParams,
}

/// Load a parameter document from disk.
pub fn load_params(path: &Path) -> Result<ParamsDocument, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|err| ConfigError::BadParamsFile {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|err| ConfigError::BadParamsFile {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}
