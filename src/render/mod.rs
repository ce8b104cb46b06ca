pub mod effects;
pub mod enhance;
pub mod field;
pub mod figure;
pub mod gradient;
pub mod light;
pub mod pattern;
pub mod scatter;
pub mod steps;

use std::sync::Arc;

use image::Rgba;

use crate::models::Theme;
use crate::pipeline::Pipeline;
use crate::render::gradient::Gradient;
use crate::render::steps::*;

/// Noise fields are seeded so every run writes identical files
pub const NOISE_SEED: u64 = 0x6b69_7361;

/// Hero banner parameters
pub const HERO_FIELD_ROWS: u32 = 20;
pub const HERO_PLANT_SPACING: u32 = 80;
pub const HERO_PLANT_COLOR: Rgba<u8> = Rgba([30, 50, 30, 180]);
pub const HERO_NOISE_SIGMA: f32 = 25.0;
pub const HERO_NOISE_OPACITY: f32 = 0.03;
pub const HERO_VIGNETTE_FALLOFF: f32 = 0.5;
pub const HERO_VIGNETTE_BLUR: f32 = 100.0;
pub const HERO_SATURATION: f32 = 1.2;
pub const HERO_CONTRAST: f32 = 1.1;
/// Blur of the softened hero variant used behind overlaid text
pub const HERO_SOFT_BLUR: f32 = 5.0;

/// Feature banner parameters
pub const PATTERN_NOISE_SIGMA: f32 = 20.0;
pub const PATTERN_NOISE_OPACITY: f32 = 0.02;
pub const TEXTURE_BAND_SPACING: u32 = 40;
pub const TEXTURE_BAND_THICKNESS: u32 = 15;
pub const TEXTURE_DOT_COUNT: usize = 50;
pub const TEXTURE_BLUR: f32 = 3.0;

/// Sunset field with a farmer: every step up to and including colour enhancement.
/// The vignette blur is a parameter because it dominates the running time.
pub fn build_hero_pipeline_with_vignette_blur(verbose: bool, vignette_blur: f32) -> Pipeline {
    Pipeline::new()
        .with_verbose(verbose)
        .add_step(Arc::new(GradientStep {
            gradient: Gradient::sunset(),
        }))
        .add_step(Arc::new(SunStep))
        .add_step(Arc::new(FieldRowsStep {
            count: HERO_FIELD_ROWS,
        }))
        .add_step(Arc::new(PlantsStep {
            spacing: HERO_PLANT_SPACING,
            color: HERO_PLANT_COLOR,
        }))
        .add_step(Arc::new(FarmerStep))
        .add_step(Arc::new(NoiseStep {
            sigma: HERO_NOISE_SIGMA,
            opacity: HERO_NOISE_OPACITY,
            seed: NOISE_SEED,
        }))
        .add_step(Arc::new(VignetteStep {
            falloff: HERO_VIGNETTE_FALLOFF,
            blur_sigma: vignette_blur,
        }))
        .add_step(Arc::new(SaturationStep {
            factor: HERO_SATURATION,
        }))
        .add_step(Arc::new(ContrastStep {
            factor: HERO_CONTRAST,
        }))
}

pub fn build_hero_pipeline(verbose: bool) -> Pipeline {
    build_hero_pipeline_with_vignette_blur(verbose, HERO_VIGNETTE_BLUR)
}

/// Themed gradient with accent discs, diagonal lines and light grain
pub fn build_pattern_pipeline(theme: &Theme, verbose: bool) -> Pipeline {
    Pipeline::new()
        .with_verbose(verbose)
        .add_step(Arc::new(GradientStep {
            gradient: Gradient::two_stop(theme.primary, theme.secondary),
        }))
        .add_step(Arc::new(PatternStep {
            accent: theme.accent,
        }))
        .add_step(Arc::new(NoiseStep {
            sigma: PATTERN_NOISE_SIGMA,
            opacity: PATTERN_NOISE_OPACITY,
            seed: NOISE_SEED,
        }))
}

/// Faint field bands and dots, softened by a blur. Expects a canvas already
/// filled with the texture's base colour.
pub fn build_texture_pipeline(verbose: bool) -> Pipeline {
    Pipeline::new()
        .with_verbose(verbose)
        .add_step(Arc::new(FieldBandsStep {
            spacing: TEXTURE_BAND_SPACING,
            thickness: TEXTURE_BAND_THICKNESS,
        }))
        .add_step(Arc::new(DotsStep {
            count: TEXTURE_DOT_COUNT,
            seed: scatter::DOT_SEED,
        }))
        .add_step(Arc::new(BlurStep {
            sigma: TEXTURE_BLUR,
        }))
}

