pub mod banners;
pub mod canvas;
pub mod config;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod render;

pub use banners::{FeatureBannerGenerator, HeroBannerGenerator};
pub use canvas::{Canvas, CanvasError, Layer};
pub use config::GeneratorConfig;
pub use models::{BannerSize, Color, OutputSpec, TextureTint, Theme};
pub use output::WrittenBanner;
pub use pipeline::{DebugConfig, Pipeline, PipelineContext, PipelineStep};
