use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut, draw_line_segment_mut,
    draw_polygon_mut,
};
use imageproc::filter::gaussian_blur_f32;
use imageproc::point::Point;
use imageproc::rect::Rect;
use thiserror::Error;

use crate::models::{BannerSize, Color};

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error(
        "layer is {actual_width}x{actual_height} but canvas is {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("gradient needs at least one colour stop")]
    EmptyGradient,

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

pub type CanvasResult<T> = Result<T, CanvasError>;

/// Opaque RGB pixel grid that a banner is composed on
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Black canvas
    pub fn new(size: BannerSize) -> Self {
        Self {
            image: RgbImage::new(size.width, size.height),
        }
    }

    pub fn filled(size: BannerSize, color: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(size.width, size.height, color.rgb()),
        }
    }

    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn size(&self) -> BannerSize {
        BannerSize::new(self.image.width(), self.image.height())
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Paint a full-width row in one colour
    pub fn fill_row(&mut self, y: u32, color: Rgb<u8>) {
        if y >= self.image.height() {
            return;
        }
        for x in 0..self.image.width() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Opaque disc, drawn straight onto the canvas
    pub fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Color) {
        draw_filled_circle_mut(&mut self.image, center, radius, color.rgb());
    }

    /// Source-over composite of a transparent layer onto this canvas
    pub fn composite(&mut self, layer: &Layer) -> CanvasResult<()> {
        self.check_size(layer.width(), layer.height())?;

        for (dst, src) in self.image.pixels_mut().zip(layer.image.pixels()) {
            let alpha = src[3] as u32;
            if alpha == 0 {
                continue;
            }
            for c in 0..3 {
                let value = (src[c] as u32 * alpha + dst[c] as u32 * (255 - alpha) + 127) / 255;
                dst[c] = value as u8;
            }
        }

        Ok(())
    }

    /// Linear blend towards `other`: `self * (1 - amount) + other * amount`
    pub fn blend(&mut self, other: &Canvas, amount: f32) -> CanvasResult<()> {
        self.check_size(other.width(), other.height())?;
        let amount = amount.clamp(0.0, 1.0);

        for (dst, src) in self.image.pixels_mut().zip(other.image.pixels()) {
            for c in 0..3 {
                let a = dst[c] as f32;
                let b = src[c] as f32;
                dst[c] = (a + (b - a) * amount).round().clamp(0.0, 255.0) as u8;
            }
        }

        Ok(())
    }

    /// Gaussian blurred copy, `sigma <= 0` returns the canvas unchanged
    pub fn blurred(&self, sigma: f32) -> Canvas {
        if sigma <= 0.0 {
            return self.clone();
        }
        Canvas::from_image(gaussian_blur_f32(&self.image, sigma))
    }

    /// Mean ITU-R 601 luma over every pixel
    pub fn mean_luma(&self) -> f32 {
        let total = self.image.width() as u64 * self.image.height() as u64;
        if total == 0 {
            return 0.0;
        }
        let sum: u64 = self.image.pixels().map(|p| luma(p) as u64).sum();
        sum as f32 / total as f32
    }

    /// Encode as baseline JPEG at the given quality (1-100)
    pub fn save_jpeg(&self, path: impl AsRef<Path>, quality: u8) -> CanvasResult<()> {
        let file = File::create(path.as_ref())?;
        let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality.clamp(1, 100));
        self.image.write_with_encoder(encoder)?;
        Ok(())
    }

    /// Lossless dump used by pipeline debug mode
    pub fn save_png(&self, path: impl AsRef<Path>) -> CanvasResult<()> {
        self.image.save(path.as_ref())?;
        Ok(())
    }

    fn check_size(&self, width: u32, height: u32) -> CanvasResult<()> {
        if width != self.image.width() || height != self.image.height() {
            return Err(CanvasError::DimensionMismatch {
                expected_width: self.image.width(),
                expected_height: self.image.height(),
                actual_width: width,
                actual_height: height,
            });
        }
        Ok(())
    }
}

/// ITU-R 601-2 luma transform, the same weights used for greyscale conversion
pub fn luma(pixel: &Rgb<u8>) -> u8 {
    ((pixel[0] as u32 * 299 + pixel[1] as u32 * 587 + pixel[2] as u32 * 114) / 1000) as u8
}

/// Transparent RGBA overlay with the same dimensions as its canvas.
///
/// Shapes replace pixels in the layer, they do not blend with each other.
/// Blending only happens when the layer is composited with
/// [`Canvas::composite`].
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    image: RgbaImage,
}

impl Layer {
    pub fn transparent(size: BannerSize) -> Self {
        Self {
            image: RgbaImage::new(size.width, size.height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    pub fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Rgba<u8>) {
        draw_filled_circle_mut(&mut self.image, center, radius, color);
    }

    /// Ellipse inscribed in the box between two inclusive corners.
    ///
    /// imageproc ellipses always span an odd number of pixels, so an even
    /// side is covered by two ellipses one pixel apart.
    pub fn fill_ellipse(
        &mut self,
        top_left: (i32, i32),
        bottom_right: (i32, i32),
        color: Rgba<u8>,
    ) {
        let span_x = bottom_right.0 - top_left.0;
        let span_y = bottom_right.1 - top_left.1;
        if span_x < 0 || span_y < 0 {
            return;
        }
        let (radius_x, radius_y) = (span_x / 2, span_y / 2);
        let (cx, cy) = (top_left.0 + radius_x, top_left.1 + radius_y);

        for dx in 0..=(span_x % 2) {
            for dy in 0..=(span_y % 2) {
                draw_filled_ellipse_mut(
                    &mut self.image,
                    (cx + dx, cy + dy),
                    radius_x,
                    radius_y,
                    color,
                );
            }
        }
    }

    /// Rectangle between two inclusive corners
    pub fn fill_rect(&mut self, top_left: (i32, i32), bottom_right: (i32, i32), color: Rgba<u8>) {
        let width = (bottom_right.0 - top_left.0 + 1).max(0) as u32;
        let height = (bottom_right.1 - top_left.1 + 1).max(0) as u32;
        if width == 0 || height == 0 {
            return;
        }
        draw_filled_rect_mut(
            &mut self.image,
            Rect::at(top_left.0, top_left.1).of_size(width, height),
            color,
        );
    }

    pub fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgba<u8>) {
        let mut poly: Vec<Point<i32>> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        // imageproc rejects explicitly closed polygons
        while poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }
        if poly.len() < 3 {
            return;
        }
        draw_polygon_mut(&mut self.image, &poly, color);
    }

    /// Straight line `width` pixels thick, widened towards +x
    pub fn draw_line(&mut self, start: (f32, f32), end: (f32, f32), width: u32, color: Rgba<u8>) {
        for offset in 0..width.max(1) {
            let dx = offset as f32;
            draw_line_segment_mut(
                &mut self.image,
                (start.0 + dx, start.1),
                (end.0 + dx, end.1),
                color,
            );
        }
    }
}
