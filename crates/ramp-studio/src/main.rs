use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ramp_engine::coords::{Affine, PixelRect, Vec2};
use ramp_engine::logging::{init_logging, LoggingConfig};
use ramp_engine::paint::{
    Argb, ColorSpace, CycleMethod, GradientGeometry, GradientPaint, LinearGradientPaint,
    RadialGradientPaint,
};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 160;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("ramp-out"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let rect = PixelRect::new(0, 0, WIDTH, HEIGHT);

    // ── linear ────────────────────────────────────────────────────────────
    let sunset = LinearGradientPaint::linear(
        Vec2::new(0.0, 0.0),
        Vec2::new(WIDTH as f32, 0.0),
        &[0.0, 0.45, 1.0],
        &[Argb::rgb(255, 94, 58), Argb::rgb(255, 149, 0), Argb::rgb(88, 86, 214)],
        CycleMethod::NoCycle,
        ColorSpace::Srgb,
        Affine::IDENTITY,
    )?;
    render(&out_dir.join("linear_srgb.png"), &sunset, rect)?;

    let sunset_linear = LinearGradientPaint::linear(
        Vec2::new(0.0, 0.0),
        Vec2::new(WIDTH as f32, 0.0),
        &[0.0, 0.45, 1.0],
        &[Argb::rgb(255, 94, 58), Argb::rgb(255, 149, 0), Argb::rgb(88, 86, 214)],
        CycleMethod::NoCycle,
        ColorSpace::LinearRgb,
        Affine::IDENTITY,
    )?;
    render(&out_dir.join("linear_lrgb.png"), &sunset_linear, rect)?;

    // Diagonal stripes: a short axis repeated, rotated by the gradient transform.
    let stripes = LinearGradientPaint::linear(
        Vec2::new(0.0, 0.0),
        Vec2::new(24.0, 0.0),
        &[0.3, 0.7],
        &[Argb::rgb(20, 20, 28), Argb::rgb(240, 240, 255)],
        CycleMethod::Repeat,
        ColorSpace::Srgb,
        Affine::rotate(std::f64::consts::FRAC_PI_4),
    )?;
    render(&out_dir.join("linear_repeat.png"), &stripes, rect)?;

    // ── radial ────────────────────────────────────────────────────────────
    let spotlight = RadialGradientPaint::radial(
        Vec2::new(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0),
        60.0,
        Vec2::new(WIDTH as f32 / 2.0 - 25.0, HEIGHT as f32 / 2.0 - 20.0),
        &[0.0, 0.6, 1.0],
        &[Argb::new(255, 255, 255, 230), Argb::new(200, 64, 160, 255), Argb::new(0, 0, 40, 120)],
        CycleMethod::Reflect,
        ColorSpace::Srgb,
        Affine::IDENTITY,
    )?;
    render(&out_dir.join("radial_reflect.png"), &spotlight, rect)?;

    // A hairline first interval: forces the per-interval table layout.
    let hairline = RadialGradientPaint::radial(
        Vec2::new(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0),
        70.0,
        Vec2::new(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0),
        &[0.0, 0.002, 1.0],
        &[Argb::WHITE, Argb::rgb(255, 40, 40), Argb::rgb(10, 10, 60)],
        CycleMethod::NoCycle,
        ColorSpace::LinearRgb,
        Affine::IDENTITY,
    )?;
    render(&out_dir.join("radial_jagged.png"), &hairline, rect)?;

    log::info!("wrote gradients to {}", out_dir.display());
    Ok(())
}

fn render<G: GradientGeometry + Clone>(path: &Path, paint: &GradientPaint<G>, rect: PixelRect) -> Result<()> {
    let mut ctx = paint.create_context(&Affine::IDENTITY, None);
    let table = ctx.lookup_table();
    log::info!(
        "{}: {:?} table, {} entries, {:?}",
        path.display(),
        table.strategy(),
        table.len(),
        table.pixel_format()
    );

    let raster = ctx.fill(rect).context("gradient fill failed")?;
    let image = image::RgbaImage::from_raw(rect.width, rect.height, raster.to_rgba8())
        .context("raster does not match image dimensions")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
