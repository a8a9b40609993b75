//! tone - photographic tone adjustment CLI
//!
//! Adjusts brightness, contrast, saturation, color temperature, and
//! tint of an image file.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use tone_core::Params;
use tone_io::{enhance_file, read_params};

#[derive(Parser)]
#[command(name = "tone")]
#[command(author, version, about = "Adjust the tone of a raster image")]
#[command(long_about = "
Adjusts brightness, contrast, saturation, color temperature, and tint.

Every control lives in [0, 1] with 0.5 as the neutral position. A JSON
parameter file supplies a base setting; individual flags override it.

Examples:
  tone photo.jpg -o warmer.jpg --temperature 0.65
  tone photo.jpg -o punchy.jpg --contrast 0.7 --saturation 0.6
  tone photo.jpg -o graded.jpg -p look.json --brightness 0.55
  tone photo.png -o out.png --exact          # exact gamma formulas
")]
struct Cli {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// JSON parameter file used as the base setting
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Brightness in [0, 1], 0.5 = neutral
    #[arg(short, long)]
    brightness: Option<f64>,

    /// Contrast in [0, 1], 0.5 = neutral
    #[arg(short, long)]
    contrast: Option<f64>,

    /// Saturation in [0, 1], 0.5 = neutral
    #[arg(short, long)]
    saturation: Option<f64>,

    /// Color temperature in [0, 1], 0.5 = neutral
    #[arg(short, long)]
    temperature: Option<f64>,

    /// Tint in [0, 1], 0.5 = neutral
    #[arg(long)]
    tint: Option<f64>,

    /// Use the exact gamma formulas instead of the lookup table
    #[arg(long)]
    exact: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .init();
    }

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    if cli.exact {
        tone_transfer::set_lut_enabled(false);
    }

    let mut params = match &cli.params {
        Some(path) => read_params(path)
            .with_context(|| format!("Failed to read parameters from {}", path.display()))?,
        None => Params::NEUTRAL,
    };
    if let Some(v) = cli.brightness {
        params.brightness = v;
    }
    if let Some(v) = cli.contrast {
        params.contrast = v;
    }
    if let Some(v) = cli.saturation {
        params.saturation = v;
    }
    if let Some(v) = cli.temperature {
        params.temperature = v;
    }
    if let Some(v) = cli.tint {
        params.tint = v;
    }

    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        ?params,
        "Adjusting tone"
    );
    if cli.verbose {
        println!(
            "Adjusting {} -> {}",
            cli.input.display(),
            cli.output.display()
        );
    }

    enhance_file(&cli.input, &cli.output, params)
        .with_context(|| format!("Failed to enhance {}", cli.input.display()))?;

    if cli.verbose {
        println!("Done.");
    }

    Ok(())
}
