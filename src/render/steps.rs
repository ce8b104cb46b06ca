use anyhow::Result;
use image::Rgba;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::canvas::Canvas;
use crate::pipeline::{PipelineContext, PipelineStep};
use crate::render::figure::Silhouette;
use crate::render::gradient::Gradient;
use crate::render::light::Glow;
use crate::render::{effects, enhance, field, pattern, scatter};

/// Fill the canvas with a vertical gradient
pub struct GradientStep {
    pub gradient: Gradient,
}

impl PipelineStep for GradientStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        self.gradient.fill_vertical(&mut canvas);
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Gradient Background"
    }
}

/// Sun disc with its halo in the top right corner
pub struct SunStep;

impl PipelineStep for SunStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        Glow::sun(canvas.size()).draw(&mut canvas)?;
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Sun Glow"
    }
}

/// Perspective crop rows over the lower part of the banner
pub struct FieldRowsStep {
    pub count: u32,
}

impl PipelineStep for FieldRowsStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        field::draw_field_rows(&mut canvas, self.count)?;
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Field Rows"
    }
}

/// Row of seeded plant silhouettes in the foreground
pub struct PlantsStep {
    pub spacing: u32,
    pub color: Rgba<u8>,
}

impl PipelineStep for PlantsStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        scatter::draw_plants(&mut canvas, self.spacing, self.color)?;
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Crop Plants"
    }
}

pub struct FarmerStep;

impl PipelineStep for FarmerStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        Silhouette::farmer(canvas.size()).draw(&mut canvas)?;
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Farmer Silhouette"
    }
}

/// Blend seeded Gaussian noise into the canvas for a grainy finish
pub struct NoiseStep {
    pub sigma: f32,
    pub opacity: f32,
    pub seed: u64,
}

impl PipelineStep for NoiseStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        effects::blend_noise(&mut canvas, self.sigma, self.opacity, self.seed)?;
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Noise Texture"
    }
}

pub struct VignetteStep {
    pub falloff: f32,
    pub blur_sigma: f32,
}

impl PipelineStep for VignetteStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        effects::apply_vignette(&mut canvas, self.falloff, self.blur_sigma)?;
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Vignette"
    }
}

pub struct SaturationStep {
    pub factor: f32,
}

impl PipelineStep for SaturationStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        enhance::adjust_saturation(&mut canvas, self.factor);
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Saturation"
    }
}

pub struct ContrastStep {
    pub factor: f32,
}

impl PipelineStep for ContrastStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        enhance::adjust_contrast(&mut canvas, self.factor);
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Contrast"
    }
}

/// Accent discs and diagonal lines of a themed feature banner
pub struct PatternStep {
    pub accent: crate::models::Color,
}

impl PipelineStep for PatternStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        pattern::draw_pattern(&mut canvas, self.accent)?;
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Geometric Pattern"
    }
}

pub struct FieldBandsStep {
    pub spacing: u32,
    pub thickness: u32,
}

impl PipelineStep for FieldBandsStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        field::draw_field_bands(&mut canvas, self.spacing, self.thickness)?;
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Field Bands"
    }
}

/// Translucent white dots from a generator seeded once per banner
pub struct DotsStep {
    pub count: usize,
    pub seed: u64,
}

impl PipelineStep for DotsStep {
    fn process(&self, mut canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        scatter::draw_dots(&mut canvas, self.count, &mut rng)?;
        Ok(canvas)
    }

    fn name(&self) -> &str {
        "Texture Dots"
    }
}

/// Apply Gaussian blur
pub struct BlurStep {
    pub sigma: f32,
}

impl PipelineStep for BlurStep {
    fn process(&self, canvas: Canvas, _context: &PipelineContext) -> Result<Canvas> {
        Ok(canvas.blurred(self.sigma))
    }

    fn name(&self) -> &str {
        "Gaussian Blur"
    }
}
