#![allow(dead_code)]

use std::path::Path;

use storefront_banners::{BannerSize, Canvas, Color, GeneratorConfig};

/// Small sizes keep the full pipelines fast in unoptimised test builds
pub const PREVIEW_HERO: BannerSize = BannerSize::new(640, 400);
pub const PREVIEW_FEATURE: BannerSize = BannerSize::new(480, 150);
pub const PREVIEW_VIGNETTE_BLUR: f32 = 20.0;

/// Generator config writing preview-sized banners into `output_dir`
pub fn preview_config(output_dir: &Path) -> GeneratorConfig {
    GeneratorConfig::new(output_dir)
        .with_sizes(PREVIEW_HERO, PREVIEW_FEATURE)
        .with_vignette_blur(PREVIEW_VIGNETTE_BLUR)
}

pub fn solid(size: BannerSize, color: Color) -> Canvas {
    Canvas::filled(size, color)
}

/// Mean absolute difference between horizontally adjacent pixels.
/// Lower means softer.
pub fn sharpness(canvas: &Canvas) -> f32 {
    let img = canvas.image();
    let (width, height) = img.dimensions();
    if width < 2 || height == 0 {
        return 0.0;
    }

    let mut total = 0u64;
    for y in 0..height {
        for x in 1..width {
            let a = img.get_pixel(x - 1, y);
            let b = img.get_pixel(x, y);
            for c in 0..3 {
                total += (a[c] as i32 - b[c] as i32).unsigned_abs() as u64;
            }
        }
    }
    total as f32 / ((width - 1) as u64 * height as u64 * 3) as f32
}

/// Colour test pattern with mid-range channels, far from clipping
pub fn muted_swatches() -> Canvas {
    let size = BannerSize::new(40, 10);
    let swatches = [
        Color::new(150, 100, 80),
        Color::new(90, 130, 110),
        Color::new(110, 100, 150),
        Color::new(140, 140, 90),
    ];
    let mut canvas = Canvas::new(size);
    for (x, _, pixel) in canvas.image_mut().enumerate_pixels_mut() {
        *pixel = swatches[(x / 10) as usize].rgb();
    }
    canvas
}
