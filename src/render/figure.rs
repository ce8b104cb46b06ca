use image::Rgba;

use crate::canvas::{Canvas, CanvasResult, Layer};
use crate::models::BannerSize;

/// Basic shapes a silhouette is built from, in offsets from its anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Inscribed in the box between two inclusive corners
    Ellipse {
        top_left: (i32, i32),
        bottom_right: (i32, i32),
    },
    /// Inclusive corners
    Rect {
        top_left: (i32, i32),
        bottom_right: (i32, i32),
    },
    Polygon(Vec<(i32, i32)>),
}

impl Shape {
    fn translated(&self, (ax, ay): (i32, i32)) -> Shape {
        let shift = |(x, y): (i32, i32)| (x + ax, y + ay);
        match self {
            Shape::Ellipse {
                top_left,
                bottom_right,
            } => Shape::Ellipse {
                top_left: shift(*top_left),
                bottom_right: shift(*bottom_right),
            },
            Shape::Rect {
                top_left,
                bottom_right,
            } => Shape::Rect {
                top_left: shift(*top_left),
                bottom_right: shift(*bottom_right),
            },
            Shape::Polygon(points) => Shape::Polygon(points.iter().copied().map(shift).collect()),
        }
    }

    fn draw(&self, layer: &mut Layer, color: Rgba<u8>) {
        match self {
            Shape::Ellipse {
                top_left,
                bottom_right,
            } => layer.fill_ellipse(*top_left, *bottom_right, color),
            Shape::Rect {
                top_left,
                bottom_right,
            } => layer.fill_rect(*top_left, *bottom_right, color),
            Shape::Polygon(points) => layer.fill_polygon(points, color),
        }
    }
}

/// Farmer bent over planting: anchor is the waist, y grows downwards
pub fn farmer_shapes() -> Vec<Shape> {
    vec![
        // head
        Shape::Ellipse {
            top_left: (-25, -120),
            bottom_right: (25, -70),
        },
        // body
        Shape::Rect {
            top_left: (-30, -70),
            bottom_right: (30, 0),
        },
        // left arm reaching down to plant
        Shape::Polygon(vec![(-30, -60), (-60, -20), (-70, -10), (-40, -30)]),
        // right arm
        Shape::Polygon(vec![(30, -60), (40, -40), (50, -30), (35, -40)]),
        // legs
        Shape::Polygon(vec![(-25, 0), (-15, 0), (-20, 80), (-30, 80)]),
        Shape::Polygon(vec![(15, 0), (25, 0), (30, 80), (20, 80)]),
        // hat brim and crown
        Shape::Ellipse {
            top_left: (-35, -130),
            bottom_right: (35, -115),
        },
        Shape::Rect {
            top_left: (-20, -125),
            bottom_right: (20, -100),
        },
    ]
}

/// Fixed-shape figure placed at one position, drawn in a single flat colour
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    pub anchor: (i32, i32),
    pub color: Rgba<u8>,
    pub shapes: Vec<Shape>,
}

impl Silhouette {
    /// Farmer standing in the left part of the field
    pub fn farmer(size: BannerSize) -> Self {
        Self {
            anchor: (400, size.height as i32 - 300),
            color: Rgba([20, 20, 20, 200]),
            shapes: farmer_shapes(),
        }
    }

    /// Shapes in canvas coordinates
    pub fn placed_shapes(&self) -> Vec<Shape> {
        self.shapes.iter().map(|s| s.translated(self.anchor)).collect()
    }

    /// Each part is blended on its own, so overlaps darken twice
    pub fn draw(&self, canvas: &mut Canvas) -> CanvasResult<()> {
        for shape in self.placed_shapes() {
            let mut layer = Layer::transparent(canvas.size());
            shape.draw(&mut layer, self.color);
            canvas.composite(&layer)?;
        }
        Ok(())
    }
}
