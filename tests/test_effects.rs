//! Integration tests for full-canvas effects.
//!
//! Tests cover:
//! - Seeded noise fields
//! - Vignette darkening towards the edges
//! - Saturation and contrast enhancement being monotonic in their factor

mod common;

use storefront_banners::render::effects::{
    apply_vignette, blend_noise, noise_canvas, vignette_mask,
};
use storefront_banners::render::enhance::{
    adjust_contrast, adjust_saturation, luma_contrast, mean_saturation,
};

use common::*;

#[test]
fn test_noise_is_seeded() {
    let size = BannerSize::new(64, 32);
    let first = noise_canvas(size, 25.0, 1);
    let second = noise_canvas(size, 25.0, 1);
    let other = noise_canvas(size, 25.0, 2);

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn test_noise_is_grey_around_midpoint() {
    let noise = noise_canvas(BannerSize::new(128, 128), 25.0, 9);

    for pixel in noise.image().pixels() {
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
    }
    let mean = noise.mean_luma();
    assert!((mean - 128.0).abs() < 3.0, "mean {}", mean);
}

#[test]
fn test_zero_opacity_noise_is_noop() -> anyhow::Result<()> {
    let size = BannerSize::new(16, 16);
    let original = solid(size, Color::new(10, 200, 90));
    let mut canvas = original.clone();

    blend_noise(&mut canvas, 25.0, 0.0, 3)?;

    assert_eq!(canvas, original);
    Ok(())
}

#[test]
fn test_vignette_mask_falls_off() {
    let size = BannerSize::new(200, 100);
    let mask = vignette_mask(size, 0.5);

    assert_eq!(mask.get_pixel(100, 50)[0], 255);
    assert_eq!(mask.get_pixel(0, 0)[0], 127);
    assert!(mask.get_pixel(150, 50)[0] < 255);
    assert!(mask.get_pixel(150, 50)[0] > mask.get_pixel(199, 50)[0]);
}

#[test]
fn test_vignette_darkens_edges_only() -> anyhow::Result<()> {
    let size = BannerSize::new(200, 100);
    let mut canvas = solid(size, Color::new(200, 200, 200));

    apply_vignette(&mut canvas, 0.5, 0.0)?;

    assert_eq!(canvas.pixel(100, 50).0, [200, 200, 200]);
    let corner = canvas.pixel(0, 0)[0];
    assert!(corner < 110 && corner > 90, "corner {}", corner);
    Ok(())
}

#[test]
fn test_blurred_vignette_keeps_bright_centre() -> anyhow::Result<()> {
    let size = BannerSize::new(120, 60);
    let mut canvas = solid(size, Color::new(180, 180, 180));

    apply_vignette(&mut canvas, 0.5, 10.0)?;

    assert_eq!(canvas.size(), size);
    let centre = canvas.pixel(60, 30)[0];
    let corner = canvas.pixel(0, 0)[0];
    assert!(centre > corner, "centre {} corner {}", centre, corner);
    assert!(centre <= 180);
    Ok(())
}

#[test]
fn test_unit_factors_are_identity() {
    let original = muted_swatches();

    let mut saturated = original.clone();
    adjust_saturation(&mut saturated, 1.0);
    assert_eq!(saturated, original);

    let mut contrasted = original.clone();
    adjust_contrast(&mut contrasted, 1.0);
    assert_eq!(contrasted, original);
}

#[test]
fn test_saturation_is_monotonic() {
    let base = muted_swatches();
    let mut previous = mean_saturation(&base);

    for factor in [1.1, 1.2, 1.5, 1.8] {
        let mut canvas = base.clone();
        adjust_saturation(&mut canvas, factor);
        let measured = mean_saturation(&canvas);
        assert!(
            measured > previous,
            "saturation {} at factor {} is not above {}",
            measured,
            factor,
            previous
        );
        previous = measured;
    }
}

#[test]
fn test_desaturation_goes_grey() {
    let mut canvas = muted_swatches();
    adjust_saturation(&mut canvas, 0.0);

    for pixel in canvas.image().pixels() {
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
    }
}

#[test]
fn test_contrast_is_monotonic() {
    let base = muted_swatches();
    let mut previous = luma_contrast(&base);

    for factor in [1.1, 1.3, 1.6, 2.0] {
        let mut canvas = base.clone();
        adjust_contrast(&mut canvas, factor);
        let measured = luma_contrast(&canvas);
        assert!(
            measured > previous,
            "contrast {} at factor {} is not above {}",
            measured,
            factor,
            previous
        );
        previous = measured;
    }
}
