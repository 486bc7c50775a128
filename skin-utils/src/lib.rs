pub mod error;
pub mod geometry;
pub mod logging;
pub mod skin;

pub use self::error::{Result, SkinError};
pub use self::geometry::{Alignment, Geometry};
pub use self::skin::{normalize_skin, Conversion, FitMode, NormalizeOptions};

/// Width must be a multiple of 8, height a multiple of 4.
pub const DEFAULT_ALIGNMENT: Alignment = Alignment::new(8, 4);

pub const DEFAULT_FILTER: image::imageops::FilterType =
    image::imageops::FilterType::Lanczos3;

pub const PBAR_TEMPLATE: &str = "\
    {wide_bar} {percent:>3}% {pos:>7}/{len} \
    Elapsed: {elapsed_precise} ETA: {eta_precise}\
";
