//! Flood-fill regression tests
//!
//! Completeness and isolation properties of the seed-fill engine, on
//! handcrafted masks and randomized ones.

use cellseg_core::{LabelRaster, PixelLabel};
use cellseg_region::{ConnectivityType, RegionError, floodfill};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Label raster with Edge pixels at the given coordinates
fn make_raster(w: u32, h: u32, edges: &[(u32, u32)]) -> LabelRaster {
    let mut raster = LabelRaster::new(w, h).unwrap();
    for &(x, y) in edges {
        raster.set_pixel(x, y, PixelLabel::Edge).unwrap();
    }
    raster
}

/// Random edge mask with the given edge probability
fn make_random_raster(w: u32, h: u32, p_edge: f64, seed: u64) -> LabelRaster {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut raster = LabelRaster::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            if rng.random_bool(p_edge) {
                raster.set_pixel_unchecked(x, y, PixelLabel::Edge);
            }
        }
    }
    raster
}

/// True if any 8-neighbor of (x, y) carries `label`
fn has_neighbor(raster: &LabelRaster, x: u32, y: u32, label: PixelLabel) -> bool {
    let (w, h) = raster.dimensions();
    let x0 = x.saturating_sub(1);
    let y0 = y.saturating_sub(1);
    let x1 = (x + 1).min(w - 1);
    let y1 = (y + 1).min(h - 1);
    for ny in y0..=y1 {
        for nx in x0..=x1 {
            if (nx, ny) != (x, y) && raster.get_pixel_unchecked(nx, ny) == label {
                return true;
            }
        }
    }
    false
}

// ============================================================================
// Completeness and isolation
// ============================================================================

#[test]
fn test_fill_stops_at_wall() {
    // Vertical wall splits the raster into two free halves
    let edges: Vec<(u32, u32)> = (0..8).map(|y| (3, y)).collect();
    let mut raster = make_raster(8, 8, &edges);

    let count = floodfill(
        &mut raster,
        0,
        0,
        PixelLabel::Background,
        PixelLabel::Free,
        ConnectivityType::EightWay,
    )
    .unwrap();

    // Left of the wall: 3 columns
    assert_eq!(count, 24);
    assert_eq!(raster.count(PixelLabel::Background), 24);
    // Right of the wall untouched
    for y in 0..8 {
        for x in 4..8 {
            assert_eq!(raster.get_pixel(x, y).unwrap(), PixelLabel::Free);
        }
    }
}

#[test]
fn test_fill_is_maximal_on_random_masks() {
    for seed in 0..8u64 {
        let mut raster = make_random_raster(24, 24, 0.35, seed);
        if raster.get_pixel(0, 0).unwrap() != PixelLabel::Free {
            continue;
        }

        let edges_before = raster.count(PixelLabel::Edge);
        let count = floodfill(
            &mut raster,
            0,
            0,
            PixelLabel::Background,
            PixelLabel::Free,
            ConnectivityType::EightWay,
        )
        .unwrap();

        // Returned count matches the pixels actually relabeled
        assert_eq!(count, raster.count(PixelLabel::Background));
        // Edges are never consumed
        assert_eq!(raster.count(PixelLabel::Edge), edges_before);

        // Maximality: no free pixel borders the filled component
        let (w, h) = raster.dimensions();
        for y in 0..h {
            for x in 0..w {
                if raster.get_pixel_unchecked(x, y) == PixelLabel::Free {
                    assert!(
                        !has_neighbor(&raster, x, y, PixelLabel::Background),
                        "free pixel ({x}, {y}) borders the fill (seed {seed})"
                    );
                }
            }
        }
    }
}

// ============================================================================
// No-op and error cases
// ============================================================================

#[test]
fn test_refill_from_same_seed_is_noop() {
    let mut raster = make_raster(6, 6, &[(2, 2), (3, 3)]);
    let first = floodfill(
        &mut raster,
        0,
        0,
        PixelLabel::Background,
        PixelLabel::Free,
        ConnectivityType::EightWay,
    )
    .unwrap();
    assert!(first > 0);

    let snapshot = raster.clone();
    let second = floodfill(
        &mut raster,
        0,
        0,
        PixelLabel::Background,
        PixelLabel::Free,
        ConnectivityType::EightWay,
    )
    .unwrap();

    assert_eq!(second, 0);
    assert_eq!(raster, snapshot);
}

#[test]
fn test_seed_on_edge_pixel_fills_nothing() {
    let mut raster = make_raster(6, 6, &[(4, 4)]);
    let snapshot = raster.clone();

    let count = floodfill(
        &mut raster,
        4,
        4,
        PixelLabel::Region(0),
        PixelLabel::Free,
        ConnectivityType::EightWay,
    )
    .unwrap();

    assert_eq!(count, 0);
    assert_eq!(raster, snapshot);
}

#[test]
fn test_out_of_bounds_seed_is_error() {
    let mut raster = LabelRaster::new(6, 6).unwrap();

    assert!(matches!(
        floodfill(
            &mut raster,
            6,
            0,
            PixelLabel::Background,
            PixelLabel::Free,
            ConnectivityType::EightWay,
        ),
        Err(RegionError::InvalidSeed { x: 6, y: 0 })
    ));
    assert!(matches!(
        floodfill(
            &mut raster,
            0,
            100,
            PixelLabel::Background,
            PixelLabel::Free,
            ConnectivityType::EightWay,
        ),
        Err(RegionError::InvalidSeed { x: 0, y: 100 })
    ));
}
