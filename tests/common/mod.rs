mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from storefront_banners for tests
#[allow(unused_imports)]
pub use storefront_banners::{
    BannerSize, Canvas, CanvasError, Color, FeatureBannerGenerator, GeneratorConfig,
    HeroBannerGenerator, Layer, Pipeline, PipelineContext, PipelineStep,
};
