//! Render an orthonormal rectangular Zernike basis as grayscale PNGs

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use image::{GrayImage, Luma};
use log::info;
use ndarray::Array2;
use rect_zernike::compute_basis;

#[derive(Parser, Debug)]
#[command(author, version, about = "Export rectangular Zernike modes as PNG images")]
struct Args {
    /// Number of modes to generate
    #[arg(long, default_value_t = 10)]
    n_modes: usize,

    /// Grid width in samples
    #[arg(long, default_value_t = 256)]
    width: usize,

    /// Grid height in samples
    #[arg(long, default_value_t = 256)]
    height: usize,

    /// Output directory for the PNG files
    #[arg(long, default_value = "modes")]
    output_dir: PathBuf,
}

/// Scale a mode array into an 8-bit grayscale image, mapping the value
/// range onto 0..=255
fn to_gray_image(mode: &Array2<f64>) -> GrayImage {
    let (width, height) = mode.dim();
    let min = mode.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = mode.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };

    GrayImage::from_fn(width as u32, height as u32, |px, py| {
        let v = mode[[px as usize, py as usize]];
        Luma([(((v - min) / range) * 255.0).round() as u8])
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let basis = compute_basis(args.n_modes, args.width, args.height)
        .context("failed to compute mode basis")?;

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir.display()))?;

    for (i, mode) in basis.modes.iter().enumerate() {
        let path = args.output_dir.join(format!("mode_{i:03}.png"));
        to_gray_image(mode)
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    // Orthonormality report: worst off-diagonal coupling in the gram matrix
    let gram = basis.gram_matrix();
    let worst = gram
        .indexed_iter()
        .filter(|&((i, j), _)| i != j)
        .map(|(_, v)| v.abs())
        .fold(0.0f64, f64::max);
    println!(
        "{} modes on a {}x{} grid, worst off-diagonal coupling {:.3e}",
        basis.modes.len(),
        args.width,
        args.height,
        worst
    );

    Ok(())
}
