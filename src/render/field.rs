use image::Rgba;

use crate::canvas::{Canvas, CanvasResult, Layer};
use crate::models::BannerSize;

/// Field rows cover the bottom 40% of the banner
pub const FIELD_START: f32 = 0.6;
pub const ROW_DEPTH: i32 = 15;
/// How far each row's far edge overhangs its near edge
pub const ROW_FLARE: i32 = 10;

/// One crop row drawn as a trapezoid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRow {
    pub y: i32,
    pub inset: i32,
    pub color: Rgba<u8>,
}

impl FieldRow {
    pub fn polygon(&self, width: i32) -> [(i32, i32); 4] {
        [
            (self.inset, self.y),
            (width - self.inset, self.y),
            (width - self.inset + ROW_FLARE, self.y + ROW_DEPTH),
            (self.inset - ROW_FLARE, self.y + ROW_DEPTH),
        ]
    }
}

/// Horizontal inset of row `index` out of `count`.
///
/// Rows nearer the viewer (higher index) get a smaller inset and therefore
/// look wider, which fakes a vanishing point above the horizon.
pub fn row_inset(index: u32, count: u32, width: u32) -> i32 {
    let perspective = 1.0 + (index as f32 / count.max(1) as f32) * 2.0;
    (width as f32 * 0.2 / perspective) as i32
}

pub fn field_rows(size: BannerSize, count: u32) -> Vec<FieldRow> {
    let start = (size.height as f32 * FIELD_START) as i32;
    let span = size.height as i32 - start;
    let count = count.max(1);

    (0..count)
        .map(|i| {
            let step = i as i32;
            let y = start + step * span / count as i32;
            let color = Rgba([
                (40 + step * 2).min(255) as u8,
                (80 + step * 3).min(255) as u8,
                (30 + step * 2).min(255) as u8,
                (150 - step * 3).max(0) as u8,
            ]);
            FieldRow {
                y,
                inset: row_inset(i, count, size.width),
                color,
            }
        })
        .collect()
}

/// Rows are blended one at a time; on short canvases neighbouring rows overlap
pub fn draw_field_rows(canvas: &mut Canvas, count: u32) -> CanvasResult<()> {
    let size = canvas.size();
    for row in field_rows(size, count) {
        let mut layer = Layer::transparent(size);
        layer.fill_polygon(&row.polygon(size.width as i32), row.color);
        canvas.composite(&layer)?;
    }
    Ok(())
}

/// Darkening band every `spacing` rows, fading out towards the bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub y: u32,
    pub alpha: u8,
}

pub fn field_bands(size: BannerSize, spacing: u32) -> Vec<Band> {
    let height = size.height.max(1);
    (0..size.height)
        .step_by(spacing.max(1) as usize)
        .map(|y| Band {
            y,
            alpha: (20.0 - (y as f32 / height as f32) * 10.0) as u8,
        })
        .collect()
}

pub fn draw_field_bands(canvas: &mut Canvas, spacing: u32, thickness: u32) -> CanvasResult<()> {
    let size = canvas.size();
    let mut layer = Layer::transparent(size);
    for band in field_bands(size, spacing) {
        layer.fill_rect(
            (0, band.y as i32),
            (size.width as i32, (band.y + thickness) as i32),
            Rgba([0, 0, 0, band.alpha]),
        );
    }
    canvas.composite(&layer)
}
