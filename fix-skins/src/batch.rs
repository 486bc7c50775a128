use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{anyhow, bail, Context};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{error, info, warn};

use skin_utils::{normalize_skin, NormalizeOptions, PBAR_TEMPLATE};

use super::cli::Cli;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Success,
    /// Number of skins that could not be converted.
    PartialFailure(usize),
    TotalFailure,
}

impl Outcome {
    fn new(total: usize, converted: usize) -> Self {
        match total - converted {
            0 => Outcome::Success,
            _ if converted == 0 => Outcome::TotalFailure,
            failed => Outcome::PartialFailure(failed),
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::PartialFailure(n) => n.min(i32::MAX as usize) as i32,
            Outcome::TotalFailure => -1,
        }
    }
}

/// Expand every glob expression and keep the regular files.
fn collect_inputs(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let paths = glob::glob(pattern)
            .with_context(|| format!("Failed to read glob pattern '{}'", pattern))?;
        for entry in paths {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            } else {
                warn!("Ignoring non-file directory item {}", path.display());
            }
        }
    }
    Ok(files)
}

fn output_path(output: &Path, input: &Path) -> anyhow::Result<PathBuf> {
    if !output.is_dir() {
        return Ok(output.to_path_buf());
    }
    let name = input.file_name()
        .ok_or_else(|| anyhow!("Input has no file name: {}", input.display()))?;
    Ok(output.join(name))
}

pub fn convert(cli: &Cli) -> anyhow::Result<Outcome> {
    let files = collect_inputs(&cli.input)?;
    match files.len() {
        0 => bail!("Input expression(s) yielded no files."),
        1 => (),
        _ => if !cli.output.is_dir() {
            bail!("Output must be a pre-existing directory when multiple inputs are provided.")
        },
    }

    let opts = cli.normalize_options();
    let workers = cli.workers.unwrap_or_else(num_cpus::get);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    let converted = AtomicUsize::new(0);
    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(ProgressStyle::default_bar().template(PBAR_TEMPLATE)?);
    pool.install(|| {
        files.par_iter()
            .progress_with(bar.clone())
            .for_each(|path| match convert_one(path, &cli.output, &opts) {
                Ok(target) => {
                    info!("Converted {} -> {}", path.display(), target.display());
                    converted.fetch_add(1, Ordering::SeqCst);
                }
                Err(err) => error!("{:#}", err),
            });
    });
    bar.finish();

    let converted = converted.load(Ordering::SeqCst);
    println!("Successfully converted {} skins.", converted);
    Ok(Outcome::new(files.len(), converted))
}

fn convert_one(
    input: &Path, output: &Path, opts: &NormalizeOptions,
) -> anyhow::Result<PathBuf> {
    let target = output_path(output, input)?;
    normalize_skin(input, &target, opts)?;
    Ok(target)
}
