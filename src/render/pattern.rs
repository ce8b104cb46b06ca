use image::Rgba;

use crate::canvas::{Canvas, CanvasResult, Layer};
use crate::models::{BannerSize, Color};

pub const DISC_ALPHA: u8 = 30;
pub const LINE_SPACING: u32 = 80;
pub const LINE_WIDTH: u32 = 2;
pub const LINE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 15]);

/// Three accent discs stepping diagonally down across the banner, shrinking as they go
pub fn accent_discs(size: BannerSize) -> Vec<((i32, i32), i32)> {
    let (w, h) = (size.width as i32, size.height as i32);
    (0..3)
        .map(|i| {
            let x = w / 4 * (i + 1);
            let y = h / 2 + (i - 1) * 100;
            ((x, y), 200 - i * 30)
        })
        .collect()
}

/// Start and end of every diagonal line, each falling one banner height to the left
pub fn diagonal_lines(size: BannerSize, spacing: u32) -> Vec<((f32, f32), (f32, f32))> {
    let h = size.height as f32;
    (0..size.width + size.height)
        .step_by(spacing.max(1) as usize)
        .map(|i| {
            let x = i as f32;
            ((x, 0.0), (x - h, h))
        })
        .collect()
}

/// Discs and lines share one layer, so where they cross the line wins
pub fn draw_pattern(canvas: &mut Canvas, accent: Color) -> CanvasResult<()> {
    let size = canvas.size();
    let mut layer = Layer::transparent(size);

    for (center, radius) in accent_discs(size) {
        layer.fill_circle(center, radius, accent.with_alpha(DISC_ALPHA));
    }
    for (start, end) in diagonal_lines(size, LINE_SPACING) {
        layer.draw_line(start, end, LINE_WIDTH, LINE_COLOR);
    }

    canvas.composite(&layer)
}
