use anyhow::Result;
use log::debug;

use crate::canvas::Canvas;
use crate::config::GeneratorConfig;
use crate::models::{OutputSpec, Theme, TextureTint, page_themes, texture_tints};
use crate::output::{WrittenBanner, write_banner};
use crate::pipeline::PipelineContext;
use crate::render::{
    HERO_SOFT_BLUR, build_hero_pipeline_with_vignette_blur, build_pattern_pipeline,
    build_texture_pipeline,
};

pub const HERO_BANNER: &str = "hero-farmer-banner";
pub const HERO_BANNER_BLURRED: &str = "hero-farmer-banner-blurred";

/// Sunset hero banner, written sharp and blurred
pub struct HeroBannerGenerator {
    config: GeneratorConfig,
}

impl HeroBannerGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn outputs() -> (OutputSpec, OutputSpec) {
        (
            OutputSpec::jpeg(HERO_BANNER, 95),
            OutputSpec::jpeg(HERO_BANNER_BLURRED, 85),
        )
    }

    /// Run the full hero composition without writing anything
    pub fn compose(&self, context: &PipelineContext) -> Result<Canvas> {
        let pipeline =
            build_hero_pipeline_with_vignette_blur(context.verbose, self.config.vignette_blur)
                .with_pipeline_context(context.scoped(HERO_BANNER)?);
        pipeline.run(Canvas::new(self.config.hero_size))
    }

    /// Softened copy placed behind overlaid hero text
    pub fn soften(banner: &Canvas) -> Canvas {
        banner.blurred(HERO_SOFT_BLUR)
    }

    pub fn generate(&self, context: &PipelineContext) -> Result<Vec<WrittenBanner>> {
        let (sharp_spec, blurred_spec) = Self::outputs();

        let banner = self.compose(context)?;
        let sharp = write_banner(&banner, &self.config.output_dir, &sharp_spec)?;
        if context.verbose {
            println!("  ├─ Creating blurred version...");
        }
        let blurred = write_banner(&Self::soften(&banner), &self.config.output_dir, &blurred_spec)?;

        Ok(vec![sharp, blurred])
    }
}

/// Themed pattern banners and light field textures for the feature pages
pub struct FeatureBannerGenerator {
    config: GeneratorConfig,
    themes: Vec<Theme>,
    tints: Vec<TextureTint>,
}

impl FeatureBannerGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            themes: page_themes(),
            tints: texture_tints(),
        }
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn tints(&self) -> &[TextureTint] {
        &self.tints
    }

    /// Every file this generator writes, patterns first
    pub fn outputs(&self) -> Vec<OutputSpec> {
        self.themes
            .iter()
            .map(Theme::output)
            .chain(self.tints.iter().map(TextureTint::output))
            .collect()
    }

    pub fn compose_pattern(&self, theme: &Theme, context: &PipelineContext) -> Result<Canvas> {
        let pipeline = build_pattern_pipeline(theme, context.verbose)
            .with_pipeline_context(context.scoped(&theme.output().name)?);
        pipeline.run(Canvas::new(self.config.feature_size))
    }

    pub fn compose_texture(&self, tint: &TextureTint, context: &PipelineContext) -> Result<Canvas> {
        let pipeline = build_texture_pipeline(context.verbose)
            .with_pipeline_context(context.scoped(&tint.output().name)?);
        pipeline.run(Canvas::filled(self.config.feature_size, tint.base))
    }

    pub fn generate(&self, context: &PipelineContext) -> Result<Vec<WrittenBanner>> {
        let mut written = Vec::with_capacity(self.themes.len() + self.tints.len());

        for theme in &self.themes {
            debug!("composing {} pattern banner", theme.name);
            let canvas = self.compose_pattern(theme, context)?;
            written.push(write_banner(&canvas, &self.config.output_dir, &theme.output())?);
        }

        for tint in &self.tints {
            debug!("composing {} field texture", tint.name);
            let canvas = self.compose_texture(tint, context)?;
            written.push(write_banner(&canvas, &self.config.output_dir, &tint.output())?);
        }

        Ok(written)
    }
}
