use structopt::StructOpt;
use std::path::PathBuf;

use image::imageops::FilterType;
use skin_utils::{Alignment, FitMode, NormalizeOptions, DEFAULT_ALIGNMENT};

/// Convert malformed DDNet skins into ones which will not cause an error
/// when loaded in the DDNet client.
///
/// Return codes:
///     0: Full success
///   > 0: Partial failure (x skins could not be converted)
///    -1: Full failure (no skin could be converted)
///    -2: Other error
#[derive(StructOpt)]
#[structopt(name = "fix-skins", verbatim_doc_comment)]
pub struct Cli {
    /// Report every converted skin
    #[structopt(short = "v", long = "verbose")]
    pub verbose: bool,
    /// Number of threads to spawn [default: number of CPU cores]
    #[structopt(short = "w", long = "workers")]
    pub workers: Option<usize>,
    /// Required height multiple. Accepted values: 4, 8.
    #[structopt(long = "height-multiple", default_value = "4",
        parse(try_from_str = parse_height_multiple))]
    pub height_multiple: u32,
    /// How the skin is placed on the new canvas. Supported modes: fill, crop.
    #[structopt(long = "mode", default_value = "fill")]
    pub mode: FitMode,
    /// Resampling filter used by the fill mode. Supported filters: nearest,
    /// triangle, catmullrom, gaussian, lanczos3.
    #[structopt(long = "filter", default_value = "lanczos3",
        parse(try_from_str = parse_filter))]
    pub filter: FilterType,
    /// Output file or directory
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    pub output: PathBuf,
    /// Semicolon-separated list of input file expressions (wildcard supported)
    #[structopt(short = "i", long = "input", required = true,
        use_delimiter = true, value_delimiter = ";")]
    pub input: Vec<String>,
}

impl Cli {
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            alignment: Alignment::new(
                DEFAULT_ALIGNMENT.width_multiple, self.height_multiple),
            mode: self.mode,
            filter: self.filter,
        }
    }
}

fn parse_height_multiple(s: &str) -> Result<u32, String> {
    let res = s.parse().map_err(|err| format!("{}", err))?;
    match res {
        4 | 8 => Ok(res),
        _ => Err("Unsupported height multiple".to_string()),
    }
}

fn parse_filter(s: &str) -> Result<FilterType, String> {
    match s {
        "nearest" => Ok(FilterType::Nearest),
        "triangle" => Ok(FilterType::Triangle),
        "catmullrom" => Ok(FilterType::CatmullRom),
        "gaussian" => Ok(FilterType::Gaussian),
        "lanczos3" => Ok(FilterType::Lanczos3),
        _ => Err(format!("unexpected filter '{}'", s)),
    }
}
