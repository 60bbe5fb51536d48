//! Convert command: the batch conversion driver.
//!
//! One image is fully processed (resize, synthesize, encode, write) before
//! the next begins. Failures inside the loop are reported per image and
//! never abort the batch; everything before the loop is a configuration
//! error that stops the run before any file I/O.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use texforge_spec::validation::validate_resolution;
use texforge_spec::{
    ConfigError, NormalMapParams, OutputDimension, RoughnessMapParams, Tiling,
};
use texforge_texture::dds::{self, DdsFormat};
use texforge_texture::field::RgbaBuffer;
use texforge_texture::{generate_normal_map, generate_roughness_map};

use crate::input::{self, ParamsDocument};

/// Arguments for the convert command.
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Source image file or directory
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output dimension: "original", a named preset (e.g. 512x512), or WIDTHxHEIGHT
    #[arg(long, default_value = "original")]
    pub size: String,

    /// Generate a tangent-space normal map alongside the base color map
    #[arg(long)]
    pub normal: bool,

    /// Generate a roughness/specular map alongside the base color map
    #[arg(long)]
    pub roughness: bool,

    /// JSON parameter document; individual flags override its values
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Normal map pre-blur (0-100)
    #[arg(long, value_name = "PCT")]
    pub normal_blur: Option<f32>,

    /// Normal map gradient scale (0-300)
    #[arg(long, value_name = "PCT")]
    pub normal_scale: Option<f32>,

    /// Normal map high-detail weight (0-150)
    #[arg(long, value_name = "PCT")]
    pub normal_high: Option<f32>,

    /// Normal map medium-detail weight (0-150)
    #[arg(long, value_name = "PCT")]
    pub normal_medium: Option<f32>,

    /// Normal map low-detail weight (0-150)
    #[arg(long, value_name = "PCT")]
    pub normal_low: Option<f32>,

    /// Roughness map pre-blur (0-100)
    #[arg(long, value_name = "PCT")]
    pub rough_blur: Option<f32>,

    /// Roughness detail scale (0-150)
    #[arg(long, value_name = "PCT")]
    pub rough_detail: Option<f32>,

    /// Roughness low-detail contrast (0-100)
    #[arg(long, value_name = "PCT")]
    pub rough_low: Option<f32>,

    /// Roughness medium-detail contrast (0-100)
    #[arg(long, value_name = "PCT")]
    pub rough_medium: Option<f32>,

    /// Roughness high-detail contrast (0-100)
    #[arg(long, value_name = "PCT")]
    pub rough_high: Option<f32>,

    /// Roughness bump strength (0-100)
    #[arg(long, value_name = "PCT")]
    pub rough_bump: Option<f32>,

    /// Roughness tile factor U (free text, parsed as float)
    #[arg(long, value_name = "TEXT")]
    pub tile_u: Option<String>,

    /// Roughness tile factor V (free text, parsed as float)
    #[arg(long, value_name = "TEXT")]
    pub tile_v: Option<String>,

    /// Roughness offset U (free text, parsed as float)
    #[arg(long, value_name = "TEXT")]
    pub offset_u: Option<String>,

    /// Roughness offset V (free text, parsed as float)
    #[arg(long, value_name = "TEXT")]
    pub offset_v: Option<String>,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            size: "original".to_string(),
            normal: false,
            roughness: false,
            params: None,
            normal_blur: None,
            normal_scale: None,
            normal_high: None,
            normal_medium: None,
            normal_low: None,
            rough_blur: None,
            rough_detail: None,
            rough_low: None,
            rough_medium: None,
            rough_high: None,
            rough_bump: None,
            tile_u: None,
            tile_v: None,
            offset_u: None,
            offset_v: None,
        }
    }
}

/// Validated batch configuration.
struct BatchConfig {
    sources: Vec<PathBuf>,
    output_dir: PathBuf,
    dimension: OutputDimension,
    normal: Option<NormalMapParams>,
    roughness: Option<RoughnessMapParams>,
}

/// What a batch did, for the summary line and the exit code.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Successfully converted source images.
    pub processed: usize,
    /// Source images that failed.
    pub failed: usize,
    /// Every output file written.
    pub written: Vec<PathBuf>,
}

/// Run the convert command.
///
/// Exit code: 0 on success, 1 on configuration errors, 2 when the batch
/// completed but some images failed.
pub fn run(args: &ConvertArgs) -> Result<ExitCode> {
    let start = Instant::now();
    let outcome = execute(args)?;

    let mut summary = format!("Converted {} image(s) to DDS", outcome.processed);
    if args.normal {
        summary.push_str(" with normal maps");
    }
    if args.roughness {
        summary.push_str(" and specular maps");
    }
    println!(
        "{} {} in {:.2?}",
        "Done:".cyan().bold(),
        summary,
        start.elapsed()
    );

    if outcome.failed > 0 {
        println!(
            "{} {} image(s) failed",
            "Warning:".yellow().bold(),
            outcome.failed
        );
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}

/// Validate the configuration and run the batch, printing per-image
/// progress as it goes.
pub fn execute(args: &ConvertArgs) -> Result<BatchOutcome> {
    let config = build_config(args)?;

    if config.sources.is_empty() {
        println!("{}", "No image files found.".yellow());
        return Ok(BatchOutcome {
            processed: 0,
            failed: 0,
            written: Vec::new(),
        });
    }

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut outcome = BatchOutcome {
        processed: 0,
        failed: 0,
        written: Vec::new(),
    };

    for source in &config.sources {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());
        match convert_one(source, &config) {
            Ok(mut written) => {
                outcome.processed += 1;
                println!("  {} {}", "ok".green(), name);
                outcome.written.append(&mut written);
            }
            Err(err) => {
                outcome.failed += 1;
                eprintln!("  {} {}: {:#}", "error".red().bold(), name, err);
            }
        }
    }

    Ok(outcome)
}

/// Assemble and validate the batch configuration. Everything that can be
/// rejected before touching an image is rejected here.
fn build_config(args: &ConvertArgs) -> Result<BatchConfig> {
    let input = args.input.as_ref().ok_or(ConfigError::NoSource)?;
    let output_dir = args.output.clone().ok_or(ConfigError::NoOutput)?;
    if !input.exists() {
        return Err(ConfigError::SourceNotFound(input.display().to_string()).into());
    }

    let dimension: OutputDimension = args.size.parse::<OutputDimension>()?;
    if let OutputDimension::Preset(w, h) | OutputDimension::Custom(w, h) = dimension {
        validate_resolution(w, h)
            .map_err(|err| ConfigError::InvalidDimension(err.message))?;
    }

    let doc = match &args.params {
        Some(path) => input::load_params(path)?,
        None => ParamsDocument::default(),
    };

    let normal = args.normal.then(|| {
        let mut params = doc.normal.clone();
        apply_normal_overrides(&mut params, args);
        params
    });
    if let Some(params) = &normal {
        params
            .validate()
            .map_err(|err| ConfigError::InvalidParameter(err.message))?;
    }

    let roughness = args.roughness.then(|| {
        let mut params = doc.roughness.clone();
        apply_roughness_overrides(&mut params, args);
        params
    });
    if let Some(params) = &roughness {
        params
            .validate()
            .map_err(|err| ConfigError::InvalidParameter(err.message))?;
    }

    Ok(BatchConfig {
        sources: input::collect_sources(input),
        output_dir,
        dimension,
        normal,
        roughness,
    })
}

fn apply_normal_overrides(params: &mut NormalMapParams, args: &ConvertArgs) {
    if let Some(v) = args.normal_blur {
        params.blur = v;
    }
    if let Some(v) = args.normal_scale {
        params.scale = v;
    }
    if let Some(v) = args.normal_high {
        params.weight_high = v;
    }
    if let Some(v) = args.normal_medium {
        params.weight_medium = v;
    }
    if let Some(v) = args.normal_low {
        params.weight_low = v;
    }
}

fn apply_roughness_overrides(params: &mut RoughnessMapParams, args: &ConvertArgs) {
    if let Some(v) = args.rough_blur {
        params.blur = v;
    }
    if let Some(v) = args.rough_detail {
        params.detail_scale = v;
    }
    if let Some(v) = args.rough_low {
        params.contrast_low = v;
    }
    if let Some(v) = args.rough_medium {
        params.contrast_medium = v;
    }
    if let Some(v) = args.rough_high {
        params.contrast_high = v;
    }
    if let Some(v) = args.rough_bump {
        params.bump = v;
    }

    let any_tiling_flag = args.tile_u.is_some()
        || args.tile_v.is_some()
        || args.offset_u.is_some()
        || args.offset_v.is_some();
    if any_tiling_flag {
        let tile_u = args.tile_u.as_deref().unwrap_or("1.0");
        let tile_v = args.tile_v.as_deref().unwrap_or("1.0");
        let offset_u = args.offset_u.as_deref().unwrap_or("0.0");
        let offset_v = args.offset_v.as_deref().unwrap_or("0.0");
        match Tiling::from_text(tile_u, tile_v, offset_u, offset_v) {
            Ok(tiling) => params.tiling = Some(tiling),
            Err(_) => {
                // Unparsable text degrades to no remap instead of aborting.
                eprintln!(
                    "{} unparsable tile/offset value ({:?} {:?} {:?} {:?}); tiling remap disabled",
                    "warning:".yellow().bold(),
                    tile_u,
                    tile_v,
                    offset_u,
                    offset_v
                );
                params.tiling = None;
            }
        }
    }
}

/// Convert one source image, returning the files written for it.
fn convert_one(source: &Path, config: &BatchConfig) -> Result<Vec<PathBuf>> {
    let decoded = image::open(source)
        .with_context(|| format!("failed to decode {}", source.display()))?
        .to_rgba8();

    let (width, height) = config.dimension.resolve(decoded.dimensions());
    let resized = if (width, height) != decoded.dimensions() {
        image::imageops::resize(&decoded, width, height, FilterType::Lanczos3)
    } else {
        decoded
    };
    let buffer = RgbaBuffer::from_raw(width, height, resized.into_raw());

    let stem = source
        .file_stem()
        .ok_or_else(|| anyhow!("source has no file name: {}", source.display()))?
        .to_string_lossy();

    let mut written = Vec::new();

    let base_path = config.output_dir.join(format!("{}.dds", stem));
    dds::write_file(&buffer, DdsFormat::Bc3, &base_path)
        .with_context(|| format!("failed to write {}", base_path.display()))?;
    written.push(base_path);

    if let Some(params) = &config.normal {
        let map = generate_normal_map(&buffer, params);
        let path = config.output_dir.join(format!("{}_normal.dds", stem));
        dds::write_file(&map, DdsFormat::Bc5, &path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }

    if let Some(params) = &config.roughness {
        let map = generate_roughness_map(&buffer, params);
        let rgba = map.expand_rgba();
        let path = config.output_dir.join(format!("{}_spec.dds", stem));
        dds::write_file(&rgba, DdsFormat::Bc3, &path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
