use std::path::Path;
use std::{io, fs};
use std::io::Write;
use std::str::FromStr;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbaImage};
use tracing::info;

use super::error::{Result, SkinError};
use super::geometry::{Alignment, Geometry};
use super::{DEFAULT_ALIGNMENT, DEFAULT_FILTER};

/// How the source is placed on the aligned canvas.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FitMode {
    /// Resize preserving aspect ratio until the canvas is covered, then crop
    /// the overflow.
    Fill,
    /// Copy the source to the origin of a transparent canvas, no resampling.
    Crop,
}

impl FromStr for FitMode {
    type Err = &'static str;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "fill" => Ok(FitMode::Fill),
            "crop" => Ok(FitMode::Crop),
            _ => Err("unexpected mode, should be one of 'fill' or 'crop'"),
        }
    }
}

impl Default for FitMode {
    fn default() -> Self {
        FitMode::Fill
    }
}

#[derive(Debug, Copy, Clone)]
pub struct NormalizeOptions {
    pub alignment: Alignment,
    pub mode: FitMode,
    /// Resampling filter, only used by `FitMode::Fill`.
    pub filter: FilterType,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            alignment: DEFAULT_ALIGNMENT,
            mode: FitMode::default(),
            filter: DEFAULT_FILTER,
        }
    }
}

/// Source and target size of a finished conversion.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Conversion {
    pub source: Geometry,
    pub target: Geometry,
}

pub fn load(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| SkinError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert to 8-bit RGBA and place the result on a `target` sized canvas.
pub fn fit(
    img: &DynamicImage, target: Geometry, mode: FitMode, filter: FilterType,
) -> RgbaImage {
    let (width, height) = img.dimensions();
    if Geometry::new(width, height) == target {
        return img.to_rgba8();
    }
    match mode {
        FitMode::Fill => img
            .resize_to_fill(target.width, target.height, filter)
            .to_rgba8(),
        FitMode::Crop => {
            let mut canvas = RgbaImage::new(target.width, target.height);
            imageops::replace(&mut canvas, &img.to_rgba8(), 0, 0);
            canvas
        }
    }
}

/// Write `img` as an 8-bit RGBA PNG tagged as sRGB. Fails if `path` exists.
pub fn save_png(path: &Path, img: &RgbaImage) -> Result<()> {
    let data = encode_png(img).map_err(|source| SkinError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    create_new_with(path, |file| file.write_all(&data))
}

fn encode_png(img: &RgbaImage) -> std::result::Result<Vec<u8>, png::EncodingError> {
    let mut data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut data, img.width(), img.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(img.as_raw())?;
        writer.finish()?;
    }
    Ok(data)
}

/// Create `path`, which must not exist yet, and fill it with `fill`. A file
/// left incomplete by a failing `fill` is removed again.
fn create_new_with<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut fs::File) -> io::Result<()>,
{
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| SkinError::io(path, err))?;
    if let Err(err) = fill(&mut file) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(SkinError::io(path, err));
    }
    Ok(())
}

/// Read `input`, round its size up to `opts.alignment` and write the result
/// to `output`.
pub fn normalize_skin(
    input: &Path, output: &Path, opts: &NormalizeOptions,
) -> Result<Conversion> {
    info!("Reading {}", input.display());
    let img = load(input)?;

    let (width, height) = img.dimensions();
    let source = Geometry::new(width, height);
    let target = source.normalize(opts.alignment);
    if source.is_aligned(opts.alignment) {
        info!("{} is already aligned", source);
    } else {
        info!("Resizing {} -> {} ({:?})", source, target, opts.mode);
    }
    let img = fit(&img, target, opts.mode, opts.filter);

    info!("Writing {}", output.display());
    save_png(output, &img)?;
    Ok(Conversion { source, target })
}
