//! mask-sdf CLI
//!
//! Command-line front end for baking SDF textures and shadow threshold maps
//! from mask images.
//!
//! Author: Moroya Sakamoto

#![allow(clippy::needless_pass_by_value)]

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use mask_sdf::prelude::*;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::time::Instant;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mask-sdf")]
#[command(author = "Moroya Sakamoto")]
#[command(version = mask_sdf::VERSION)]
#[command(about = "Bake signed distance fields and shadow threshold maps from masks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Bake an SDF texture from one mask image
    Sdf {
        /// Input mask image (PNG/JPEG)
        input: PathBuf,
        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
        /// Distance in pixels mapped to full white / black (1..=127)
        #[arg(short, long)]
        spread: Option<u32>,
        /// Red channel threshold [0, 1]
        #[arg(long)]
        threshold_red: Option<f32>,
        /// Green channel threshold [0, 1]
        #[arg(long)]
        threshold_green: Option<f32>,
        /// Blue channel threshold [0, 1]
        #[arg(long)]
        threshold_blue: Option<f32>,
        /// JSON config file (command-line flags override it)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Blend nested masks (innermost first) into a threshold map
    ThresholdMap {
        /// Input mask images, innermost region first
        #[arg(required = true, num_args = 2..)]
        inputs: Vec<PathBuf>,
        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print dimensions and inside-pixel count of a mask image
    Info {
        /// Input mask image
        input: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sdf {
            input,
            output,
            spread,
            threshold_red,
            threshold_green,
            threshold_blue,
            config,
        } => cmd_sdf(
            input,
            output,
            spread,
            [threshold_red, threshold_green, threshold_blue],
            config,
        ),
        Commands::ThresholdMap {
            inputs,
            output,
            config,
        } => cmd_threshold_map(inputs, output, config),
        Commands::Info { input } => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI not enabled. Build with --features cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn cmd_sdf(
    input: PathBuf,
    output: PathBuf,
    spread: Option<u32>,
    thresholds: [Option<f32>; 3],
    config: Option<PathBuf>,
) -> Result<(), SdfError> {
    let mut config = match config {
        Some(path) => SdfConfig::load(path)?,
        None => SdfConfig::default(),
    };
    if let Some(s) = spread {
        config.spread = Spread::new(s)?;
    }
    let [red, green, blue] = thresholds;
    if let Some(t) = red {
        config.thresholds.red = t;
    }
    if let Some(t) = green {
        config.thresholds.green = t;
    }
    if let Some(t) = blue {
        config.thresholds.blue = t;
    }

    let buffer = load_rgba(&input)?;
    println!(
        "Loaded {} ({}x{})",
        input.display(),
        buffer.width(),
        buffer.height()
    );

    let start = Instant::now();
    let sdf = generate_sdf(&buffer, &config)?;
    let elapsed = start.elapsed();

    save_png(&sdf, &output)?;
    println!(
        "Saved SDF to {} (spread {}, {:.2?})",
        output.display(),
        config.spread.get(),
        elapsed
    );
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_threshold_map(
    inputs: Vec<PathBuf>,
    output: PathBuf,
    config: Option<PathBuf>,
) -> Result<(), SdfError> {
    let config = match config {
        Some(path) => ThresholdMapConfig::load(path)?,
        None => ThresholdMapConfig::default(),
    };

    let buffers = inputs
        .iter()
        .map(|path| load_rgba(path))
        .collect::<Result<Vec<_>, _>>()?;
    println!("Loaded {} masks", buffers.len());

    let start = Instant::now();
    let map = generate_threshold_map_with_config(&buffers, &config)?;
    let elapsed = start.elapsed();

    save_png(&map, &output)?;
    println!(
        "Saved threshold map to {} ({}x{}, {:.2?})",
        output.display(),
        map.width(),
        map.height(),
        elapsed
    );
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_info(input: PathBuf) -> Result<(), SdfError> {
    let buffer = load_rgba(&input)?;
    let mask = extract_inside_mask(&buffer, &ChannelThresholds::default())?;
    let total = buffer.width() as usize * buffer.height() as usize;
    println!("File: {}", input.display());
    println!("Size: {}x{}", buffer.width(), buffer.height());
    println!(
        "Inside pixels: {} / {} ({:.1}%)",
        mask.inside_count(),
        total,
        100.0 * mask.inside_count() as f64 / total as f64
    );
    Ok(())
}
