//! Integration tests for seeded scatter placement.
//!
//! Tests cover:
//! - Plant shapes depending only on their x position
//! - Texture dots reproducible from their seed
//! - Value ranges of the scattered shapes

mod common;

use rand::SeedableRng;
use rand::rngs::StdRng;
use storefront_banners::render::scatter::{DOT_SEED, Plant, scatter_dots, scatter_plants};

use common::*;

#[test]
fn test_plants_are_reproducible() {
    let first = scatter_plants(PREVIEW_HERO, 80);
    let second = scatter_plants(PREVIEW_HERO, 80);

    assert_eq!(first, second);
    assert_eq!(first.len(), 8); // 0, 80, ..., 560
}

#[test]
fn test_plant_depends_only_on_position() {
    // A wider banner adds plants but leaves the shared ones as they were
    let narrow = scatter_plants(BannerSize::new(400, 400), 80);
    let wide = scatter_plants(BannerSize::new(1920, 400), 80);

    assert_eq!(wide.len(), 24);
    assert_eq!(&wide[..narrow.len()], narrow.as_slice());
}

#[test]
fn test_plant_ranges() {
    for plant in scatter_plants(BannerSize::new(1920, 800), 80) {
        assert!((40..=70).contains(&plant.height), "height {}", plant.height);
        assert!((20..=35).contains(&plant.width), "width {}", plant.width);
        assert_eq!(plant.base_y, 650);
    }
}

#[test]
fn test_plant_polygon_tip_is_above_base() {
    let mut rng = StdRng::seed_from_u64(160);
    let plant = Plant::grow(160, 650, &mut rng);
    let polygon = plant.polygon();

    assert_eq!(polygon[0], (160, 650));
    assert_eq!(polygon[3], (160, 650 - plant.height - 10));
}

#[test]
fn test_dots_are_reproducible() {
    let size = BannerSize::new(1920, 600);
    let mut first_rng = StdRng::seed_from_u64(DOT_SEED);
    let mut second_rng = StdRng::seed_from_u64(DOT_SEED);

    let first = scatter_dots(size, 50, &mut first_rng);
    let second = scatter_dots(size, 50, &mut second_rng);

    assert_eq!(first.len(), 50);
    assert_eq!(first, second);
}

#[test]
fn test_dots_differ_with_seed() {
    let size = BannerSize::new(1920, 600);
    let first = scatter_dots(size, 50, &mut StdRng::seed_from_u64(DOT_SEED));
    let second = scatter_dots(size, 50, &mut StdRng::seed_from_u64(DOT_SEED + 1));

    assert_ne!(first, second);
}

#[test]
fn test_dot_ranges() {
    let size = BannerSize::new(300, 100);
    for dot in scatter_dots(size, 200, &mut StdRng::seed_from_u64(7)) {
        assert!((0..=300).contains(&dot.center.0));
        assert!((0..=100).contains(&dot.center.1));
        assert!((20..=60).contains(&dot.radius));
        assert!((5..=15).contains(&dot.alpha));
    }
}
