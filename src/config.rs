use std::path::PathBuf;

use anyhow::Result;

use crate::models::{BannerSize, FEATURE_SIZE, HERO_SIZE};
use crate::pipeline::{DebugConfig, PipelineContext};
use crate::render::HERO_VIGNETTE_BLUR;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Settings shared by both generators
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub verbose: bool,
    /// Save every intermediate canvas as PNG here (must be empty or absent)
    pub debug_dir: Option<PathBuf>,
    pub hero_size: BannerSize,
    pub feature_size: BannerSize,
    pub vignette_blur: f32,
}

impl GeneratorConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_debug_dir(mut self, debug_dir: Option<PathBuf>) -> Self {
        self.debug_dir = debug_dir;
        self
    }

    /// Override both banner sizes, e.g. to render small previews
    pub fn with_sizes(mut self, hero_size: BannerSize, feature_size: BannerSize) -> Self {
        self.hero_size = hero_size;
        self.feature_size = feature_size;
        self
    }

    pub fn with_vignette_blur(mut self, sigma: f32) -> Self {
        self.vignette_blur = sigma;
        self
    }

    /// Pipeline context for one run. Prepares the debug directory, so call
    /// this once and share the context between generators.
    pub fn pipeline_context(&self) -> Result<PipelineContext> {
        let debug = match &self.debug_dir {
            Some(dir) => Some(DebugConfig::prepare(dir.clone())?),
            None => None,
        };
        Ok(PipelineContext {
            verbose: self.verbose,
            debug,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            verbose: false,
            debug_dir: None,
            hero_size: HERO_SIZE,
            feature_size: FEATURE_SIZE,
            vignette_blur: HERO_VIGNETTE_BLUR,
        }
    }
}
