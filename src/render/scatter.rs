use image::Rgba;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::canvas::{Canvas, CanvasResult, Layer};
use crate::models::BannerSize;

/// Seed used for the texture dots of every field texture banner
pub const DOT_SEED: u64 = 42;

/// Small crop silhouette in the foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plant {
    pub x: i32,
    pub base_y: i32,
    pub width: i32,
    pub height: i32,
}

impl Plant {
    /// Plant with a random height of 40..=70 and width of 20..=35
    pub fn grow<R: Rng>(x: i32, base_y: i32, rng: &mut R) -> Self {
        let height = 40 + rng.random_range(0..=30);
        let width = 20 + rng.random_range(0..=15);
        Self {
            x,
            base_y,
            width,
            height,
        }
    }

    pub fn polygon(&self) -> [(i32, i32); 6] {
        let (x, y, w, h) = (self.x, self.base_y, self.width, self.height);
        [
            (x, y),
            (x - w / 2, y - h / 2),
            (x - w / 3, y - h),
            (x, y - h - 10),
            (x + w / 3, y - h),
            (x + w / 2, y - h / 2),
        ]
    }
}

/// One plant every `spacing` pixels along the foreground line.
///
/// Each plant gets its own generator seeded with its x position, so a plant's
/// shape depends only on where it stands.
pub fn scatter_plants(size: BannerSize, spacing: u32) -> Vec<Plant> {
    let base_y = size.height as i32 - 150;
    (0..size.width)
        .step_by(spacing.max(1) as usize)
        .map(|x| {
            let mut rng = StdRng::seed_from_u64(x as u64);
            Plant::grow(x as i32, base_y, &mut rng)
        })
        .collect()
}

pub fn draw_plants(canvas: &mut Canvas, spacing: u32, color: Rgba<u8>) -> CanvasResult<()> {
    let size = canvas.size();
    let mut layer = Layer::transparent(size);
    for plant in scatter_plants(size, spacing) {
        layer.fill_polygon(&plant.polygon(), color);
    }
    canvas.composite(&layer)
}

/// Soft translucent disc used to break up flat texture backgrounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub center: (i32, i32),
    pub radius: i32,
    pub alpha: u8,
}

pub fn scatter_dots<R: Rng>(size: BannerSize, count: usize, rng: &mut R) -> Vec<Dot> {
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..=size.width) as i32;
            let y = rng.random_range(0..=size.height) as i32;
            let radius = rng.random_range(20..=60);
            let alpha = rng.random_range(5..=15);
            Dot {
                center: (x, y),
                radius,
                alpha,
            }
        })
        .collect()
}

pub fn draw_dots<R: Rng>(canvas: &mut Canvas, count: usize, rng: &mut R) -> CanvasResult<()> {
    let size = canvas.size();
    let mut layer = Layer::transparent(size);
    for dot in scatter_dots(size, count, rng) {
        layer.fill_circle(dot.center, dot.radius, Rgba([255, 255, 255, dot.alpha]));
    }
    canvas.composite(&layer)
}
