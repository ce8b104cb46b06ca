use crate::canvas::{Canvas, CanvasResult, Layer};
use crate::models::{BannerSize, Color};

/// A glowing disc (the sun) and the halo drawn around it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub center: (i32, i32),
    pub radius: i32,
    /// Number of halo rings outside the disc
    pub rings: u32,
    /// Radius added per ring
    pub ring_spacing: i32,
    /// Alpha of the innermost ring, outer rings get `peak_alpha / ring`
    pub peak_alpha: u32,
    pub halo_color: Color,
    pub disc_color: Color,
}

impl Glow {
    /// Sun in the top right corner of the hero banner
    pub fn sun(size: BannerSize) -> Self {
        Self {
            center: (size.width as i32 - 300, 150),
            radius: 100,
            rings: 8,
            ring_spacing: 15,
            peak_alpha: 30,
            halo_color: Color::new(255, 230, 150),
            disc_color: Color::new(255, 240, 180),
        }
    }

    /// Radius and alpha of every halo ring, outermost first
    pub fn rings(&self) -> Vec<(i32, u8)> {
        (1..=self.rings)
            .rev()
            .map(|i| {
                let radius = self.radius + i as i32 * self.ring_spacing;
                let alpha = (self.peak_alpha / i).min(255) as u8;
                (radius, alpha)
            })
            .collect()
    }

    /// Each ring is composited separately so the halo brightens towards the disc
    pub fn draw(&self, canvas: &mut Canvas) -> CanvasResult<()> {
        let size = canvas.size();
        for (radius, alpha) in self.rings() {
            let mut layer = Layer::transparent(size);
            layer.fill_circle(self.center, radius, self.halo_color.with_alpha(alpha));
            canvas.composite(&layer)?;
        }

        canvas.fill_circle(self.center, self.radius, self.disc_color);
        Ok(())
    }
}
