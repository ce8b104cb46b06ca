use image::Rgb;

use crate::canvas::{Canvas, CanvasError, CanvasResult};
use crate::models::Color;

/// Warm sunrise sky fading into dark ground, top to bottom
pub const SUNSET_STOPS: [Color; 10] = [
    Color::new(255, 200, 150),
    Color::new(255, 180, 120),
    Color::new(255, 160, 100),
    Color::new(240, 140, 80),
    Color::new(220, 130, 70),
    Color::new(180, 110, 60),
    Color::new(140, 90, 50),
    Color::new(100, 70, 40),
    Color::new(80, 60, 35),
    Color::new(60, 50, 30),
];

/// Evenly spaced colour stops interpolated along one axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    stops: Vec<Color>,
}

impl Gradient {
    pub fn new(stops: Vec<Color>) -> CanvasResult<Self> {
        if stops.is_empty() {
            return Err(CanvasError::EmptyGradient);
        }
        Ok(Self { stops })
    }

    pub fn two_stop(from: Color, to: Color) -> Self {
        Self {
            stops: vec![from, to],
        }
    }

    pub fn sunset() -> Self {
        Self {
            stops: SUNSET_STOPS.to_vec(),
        }
    }

    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Colour at `ratio` in `[0, 1)`, channels truncated towards zero
    ///
    /// Computed in `f64`: in `f32` a mix that is exactly whole, such as
    /// 255 between two 255 stops, can land just below it and truncate a unit.
    pub fn color_at(&self, ratio: f64) -> Color {
        let last = self.stops.len() - 1;
        let position = ratio.clamp(0.0, 1.0) * last as f64;
        let idx = (position as usize).min(last);
        let next_idx = (idx + 1).min(last);
        let t = position - idx as f64;

        let from = self.stops[idx];
        let to = self.stops[next_idx];
        let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t) as u8;

        Color::new(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b))
    }

    /// Colour of row `y` on a canvas `height` rows tall
    pub fn row_color(&self, y: u32, height: u32) -> Rgb<u8> {
        if height == 0 {
            return self.stops[0].rgb();
        }
        self.color_at(y as f64 / height as f64).rgb()
    }

    /// Paint every row of the canvas, top stop first
    pub fn fill_vertical(&self, canvas: &mut Canvas) {
        let height = canvas.height();
        for y in 0..height {
            canvas.fill_row(y, self.row_color(y, height));
        }
    }
}
