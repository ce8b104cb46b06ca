use image::{Rgb, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgb(&self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

    /// Colour from a `0xRRGGBB` literal
    pub const fn hex(value: u32) -> Self {
        let r = ((value >> 16) & 0xFF) as u8;
        let g = ((value >> 8) & 0xFF) as u8;
        let b = (value & 0xFF) as u8;
        Color { r, g, b }
    }

    /// Same colour with an alpha channel, for drawing into a layer
    pub fn with_alpha(&self, alpha: u8) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, alpha])
    }
}

/// Pixel dimensions of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerSize {
    pub width: u32,
    pub height: u32,
}

impl BannerSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

/// Hero sections are taller than the feature page headers
pub const HERO_SIZE: BannerSize = BannerSize::new(1920, 800);
pub const FEATURE_SIZE: BannerSize = BannerSize::new(1920, 600);

/// Colour theme of one feature page banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

impl Theme {
    pub fn new(name: impl Into<String>, primary: Color, secondary: Color, accent: Color) -> Self {
        Self {
            name: name.into(),
            primary,
            secondary,
            accent,
        }
    }

    pub fn output(&self) -> OutputSpec {
        OutputSpec::jpeg(format!("banner-{}", self.name), 90)
    }
}

/// Security, pricing, returns and support page themes (Tailwind blue, green,
/// purple and orange: 600 and 700 shades with a lighter accent)
pub fn page_themes() -> Vec<Theme> {
    vec![
        Theme::new("security", Color::hex(0x2563EB), Color::hex(0x1D4ED8), Color::hex(0x60A5FA)),
        Theme::new("pricing", Color::hex(0x16A34A), Color::hex(0x15803D), Color::hex(0x86EFAC)),
        Theme::new("returns", Color::hex(0x9333EA), Color::hex(0x7E22CE), Color::hex(0xD8B4FE)),
        Theme::new("support", Color::hex(0xEA580C), Color::hex(0xC2410C), Color::hex(0xFB923C)),
    ]
}

/// Light base colour of one background texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureTint {
    pub name: String,
    pub base: Color,
}

impl TextureTint {
    pub fn new(name: impl Into<String>, base: Color) -> Self {
        Self {
            name: name.into(),
            base,
        }
    }

    pub fn output(&self) -> OutputSpec {
        OutputSpec::jpeg(format!("texture-{}-light", self.name), 85)
    }
}

pub fn texture_tints() -> Vec<TextureTint> {
    vec![
        TextureTint::new("green", Color::new(240, 253, 244)),
        TextureTint::new("blue", Color::new(239, 246, 255)),
        TextureTint::new("purple", Color::new(250, 245, 255)),
        TextureTint::new("orange", Color::new(255, 247, 237)),
    ]
}

/// Where and how a finished canvas is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    /// File stem, the `.jpg` extension is appended on save
    pub name: String,
    pub quality: u8,
}

impl OutputSpec {
    pub fn jpeg(name: impl Into<String>, quality: u8) -> Self {
        Self {
            name: name.into(),
            quality,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.jpg", self.name)
    }
}
