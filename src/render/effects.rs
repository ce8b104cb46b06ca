use image::{DynamicImage, GrayImage, Luma, Rgba};
use imageproc::filter::gaussian_blur_f32;
use imageproc::noise::gaussian_noise;

use crate::canvas::{Canvas, CanvasResult, Layer};
use crate::models::BannerSize;

/// Greyscale noise centred on mid grey, expanded to an RGB canvas
pub fn noise_canvas(size: BannerSize, sigma: f32, seed: u64) -> Canvas {
    let grey = GrayImage::from_pixel(size.width, size.height, Luma([128u8]));
    let noise = gaussian_noise(&grey, 0.0, sigma as f64, seed);
    Canvas::from_image(DynamicImage::ImageLuma8(noise).to_rgb8())
}

/// Blend a fresh noise field into the canvas at low opacity
pub fn blend_noise(
    canvas: &mut Canvas,
    sigma: f32,
    opacity: f32,
    seed: u64,
) -> CanvasResult<()> {
    let noise = noise_canvas(canvas.size(), sigma, seed);
    canvas.blend(&noise, opacity)
}

/// Radial brightness mask: 255 in the centre falling linearly with distance.
///
/// `falloff` is the fraction lost at the distance from the centre to the
/// top-left corner.
pub fn vignette_mask(size: BannerSize, falloff: f32) -> GrayImage {
    let (cx, cy) = size.center();
    let max_dist = ((cx * cx + cy * cy) as f32).sqrt().max(1.0);
    let mut mask = GrayImage::new(size.width, size.height);

    for (y, row) in mask.enumerate_rows_mut() {
        let dy = y as i32 - cy;
        let dy2 = (dy * dy) as f32;
        for (x, _, pixel) in row {
            let dx = x as i32 - cx;
            let dist = ((dx * dx) as f32 + dy2).sqrt();
            let intensity = 255.0 * (1.0 - (dist / max_dist) * falloff);
            *pixel = Luma([intensity.clamp(0.0, 255.0) as u8]);
        }
    }

    mask
}

/// Darken towards the edges through a blurred radial mask
pub fn apply_vignette(
    canvas: &mut Canvas,
    falloff: f32,
    blur_sigma: f32,
) -> CanvasResult<()> {
    let size = canvas.size();
    let mut mask = vignette_mask(size, falloff);
    if blur_sigma > 0.0 {
        mask = gaussian_blur_f32(&mask, blur_sigma);
    }

    let mut layer = Layer::transparent(size);
    for (pixel, intensity) in layer.image_mut().pixels_mut().zip(mask.pixels()) {
        *pixel = Rgba([0, 0, 0, 255 - intensity[0]]);
    }

    canvas.composite(&layer)
}
