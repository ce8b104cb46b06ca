use crate::canvas::{Canvas, luma};

fn scale_channel(base: f32, value: f32, factor: f32) -> u8 {
    (base + factor * (value - base)).round().clamp(0.0, 255.0) as u8
}

/// Push every pixel away from (or towards) its own grey level.
/// `factor` 1.0 leaves the canvas untouched, 0.0 makes it greyscale.
pub fn adjust_saturation(canvas: &mut Canvas, factor: f32) {
    for pixel in canvas.image_mut().pixels_mut() {
        let grey = luma(pixel) as f32;
        for c in 0..3 {
            pixel[c] = scale_channel(grey, pixel[c] as f32, factor);
        }
    }
}

/// Scale every channel around the mean luma of the whole canvas
pub fn adjust_contrast(canvas: &mut Canvas, factor: f32) {
    let mean = canvas.mean_luma().round();
    for pixel in canvas.image_mut().pixels_mut() {
        for c in 0..3 {
            pixel[c] = scale_channel(mean, pixel[c] as f32, factor);
        }
    }
}

/// Mean distance of each channel from the pixel's grey level
pub fn mean_saturation(canvas: &Canvas) -> f32 {
    let pixels = canvas.image().pixels();
    let count = canvas.width() as usize * canvas.height() as usize;
    if count == 0 {
        return 0.0;
    }
    let total: f32 = pixels
        .map(|p| {
            let grey = luma(p) as f32;
            (0..3).map(|c| (p[c] as f32 - grey).abs()).sum::<f32>() / 3.0
        })
        .sum();
    total / count as f32
}

/// Standard deviation of luma over the canvas
pub fn luma_contrast(canvas: &Canvas) -> f32 {
    let pixels = canvas.image().pixels();
    let count = canvas.width() as usize * canvas.height() as usize;
    if count == 0 {
        return 0.0;
    }
    let mean = canvas.mean_luma();
    let variance: f32 = pixels
        .map(|p| {
            let d = luma(p) as f32 - mean;
            d * d
        })
        .sum::<f32>()
        / count as f32;
    variance.sqrt()
}
