//! Integration tests for the composable step pipeline.
//!
//! Tests cover:
//! - Standard step order of each banner pipeline
//! - Partial runs
//! - Debug mode output files
//! - Custom steps

mod common;

use std::sync::Arc;

use storefront_banners::models::page_themes;
use storefront_banners::render::gradient::Gradient;
use storefront_banners::render::steps::GradientStep;
use storefront_banners::render::{
    build_hero_pipeline, build_pattern_pipeline, build_texture_pipeline,
};

use common::*;

/// Inverts every channel, used to check custom steps run in order
struct InvertStep;

impl PipelineStep for InvertStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> anyhow::Result<Canvas> {
        for pixel in canvas.image_mut().pixels_mut() {
            for c in 0..3 {
                pixel[c] = 255 - pixel[c];
            }
        }
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Invert"
    }
}

#[test]
fn test_hero_step_order() {
    let pipeline = build_hero_pipeline(false);

    assert_eq!(
        pipeline.step_names(),
        vec![
            "Gradient Background",
            "Sun Glow",
            "Field Rows",
            "Crop Plants",
            "Farmer Silhouette",
            "Noise Texture",
            "Vignette",
            "Saturation",
            "Contrast",
        ]
    );
}

#[test]
fn test_feature_step_order() {
    let theme = &page_themes()[0];

    assert_eq!(
        build_pattern_pipeline(theme, false).step_names(),
        vec!["Gradient Background", "Geometric Pattern", "Noise Texture"]
    );
    assert_eq!(
        build_texture_pipeline(false).step_names(),
        vec!["Field Bands", "Texture Dots", "Gaussian Blur"]
    );
}

#[test]
fn test_custom_steps_run_in_order() -> anyhow::Result<()> {
    let size = BannerSize::new(8, 8);
    let pipeline = Pipeline::new()
        .add_step(Arc::new(GradientStep {
            gradient: Gradient::two_stop(Color::new(10, 20, 30), Color::new(10, 20, 30)),
        }))
        .add_step_boxed(Box::new(InvertStep));

    let canvas = pipeline.run(Canvas::new(size))?;

    assert_eq!(canvas.pixel(3, 3).0, [245, 235, 225]);
    Ok(())
}

#[test]
fn test_run_partial_stops_early() -> anyhow::Result<()> {
    let size = BannerSize::new(8, 8);
    let pipeline = Pipeline::new()
        .add_step(Arc::new(GradientStep {
            gradient: Gradient::two_stop(Color::new(10, 20, 30), Color::new(10, 20, 30)),
        }))
        .add_step_boxed(Box::new(InvertStep));

    let canvas = pipeline.run_partial(Canvas::new(size), 1)?;
    assert_eq!(canvas.pixel(3, 3).0, [10, 20, 30]);

    let untouched = pipeline.run_partial(Canvas::new(size), 0)?;
    assert_eq!(untouched.pixel(3, 3).0, [0, 0, 0]);
    Ok(())
}

#[test]
fn test_debug_mode_saves_every_step() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let debug_dir = dir.path().join("debug");

    let pipeline = Pipeline::new()
        .with_debug(debug_dir.clone())?
        .add_step(Arc::new(GradientStep {
            gradient: Gradient::sunset(),
        }))
        .add_step_boxed(Box::new(InvertStep));
    pipeline.run(Canvas::new(BannerSize::new(16, 16)))?;

    assert!(debug_dir.join("00_input.png").exists());
    assert!(debug_dir.join("01_gradient_background.png").exists());
    assert!(debug_dir.join("02_invert.png").exists());
    Ok(())
}

#[test]
fn test_debug_dir_must_be_empty() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    std::fs::write(dir.path().join("leftover.txt"), "x")?;

    let result = Pipeline::new().with_debug(dir.path().to_path_buf());
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_scoped_context_uses_subdirectory() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let context = GeneratorConfig::default()
        .with_debug_dir(Some(dir.path().join("debug")))
        .pipeline_context()?;

    let scoped = context.scoped("banner-security")?;
    let debug = scoped.debug.expect("debug config should be kept");

    assert_eq!(debug.output_dir, dir.path().join("debug").join("banner-security"));
    assert!(debug.output_dir.is_dir());
    Ok(())
}
