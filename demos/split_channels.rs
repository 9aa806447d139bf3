//! Split an image into red, green and blue isolations plus black and white canvases.
//!
//! Each result is written as a PNG into the output directory.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chansplit::image::{load_image, save_image, SaveOptions};
use chansplit::{black_like, shape_of, split_rgb, white_like, RasterImage};

/// Isolate the colour channels of an image.
#[derive(Parser, Debug)]
#[command(name = "split_channels")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image path.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Directory the channel images are written to.
    #[arg(short, long, default_value = "channels", value_name = "DIR")]
    out_dir: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    let default_filter = format!("chansplit={log_level},split_channels={log_level}");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let img = load_image(&args.input).context("Failed to load input image")?;
    tracing::info!("Image shape: {}", shape_of(&img));

    let [red, green, blue] = split_rgb(&img).context("Failed to isolate channels")?;

    fs::create_dir_all(&args.out_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.out_dir.display()
        )
    })?;

    let outputs: [(&str, RasterImage); 6] = [
        ("original", img.clone()),
        ("red", red),
        ("green", green),
        ("blue", blue),
        ("black", black_like(&img)),
        ("white", white_like(&img)),
    ];

    let options = SaveOptions::default();
    for (name, raster) in &outputs {
        let path = args.out_dir.join(format!("{name}.png"));
        save_image(raster, &path, &options)
            .with_context(|| format!("Failed to write {name} image"))?;
    }

    println!(
        "Wrote {} images to {}",
        outputs.len(),
        args.out_dir.display()
    );

    Ok(())
}
