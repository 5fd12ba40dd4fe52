//! Seed fill operations
//!
//! This module provides the flood-fill engine used for region labeling: a
//! queue-based fill that relabels one maximal connected component of a
//! [`LabelRaster`] in place. The labeler drives it once for the exterior
//! background and once per enclosed region.

use crate::error::{RegionError, RegionResult};
use cellseg_core::{LabelRaster, PixelLabel};
use std::collections::VecDeque;

/// Connectivity type for fills and region analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

/// Flood fill starting from a seed point
///
/// Relabels the maximal connected component of `background`-labeled pixels
/// containing the seed with `fill`, and returns the number of pixels
/// changed. Pixels outside that component, and pixels carrying any other
/// label, are untouched.
///
/// The frontier is a queue of coordinates paired with a per-pixel queued
/// flag, so each pixel enters the frontier at most once and membership
/// checks are O(1). Pop order is an implementation detail; the result does
/// not depend on it.
///
/// If the seed pixel does not carry `background`, nothing is filled and 0
/// is returned. A call with `fill == background` is also a no-op: such a
/// fill would re-enqueue its own output forever.
///
/// # Arguments
///
/// * `raster` - Mutable label raster
/// * `seed_x` - X coordinate of the seed point
/// * `seed_y` - Y coordinate of the seed point
/// * `fill` - Label to write
/// * `background` - Label to match and replace
/// * `connectivity` - Connectivity type
///
/// # Returns
///
/// The number of pixels that were filled.
///
/// # Errors
///
/// Returns `RegionError::InvalidSeed` if the seed position is outside the
/// raster. An out-of-bounds seed is a programming error, never clamped.
///
/// # Examples
///
/// ```
/// use cellseg_core::{LabelRaster, PixelLabel};
/// use cellseg_region::{ConnectivityType, floodfill};
///
/// let mut raster = LabelRaster::new(10, 10).unwrap();
/// let count = floodfill(
///     &mut raster,
///     5,
///     5,
///     PixelLabel::Background,
///     PixelLabel::Free,
///     ConnectivityType::EightWay,
/// )
/// .unwrap();
/// assert_eq!(count, 100); // all 100 pixels filled
/// ```
pub fn floodfill(
    raster: &mut LabelRaster,
    seed_x: u32,
    seed_y: u32,
    fill: PixelLabel,
    background: PixelLabel,
    connectivity: ConnectivityType,
) -> RegionResult<u32> {
    let width = raster.width();
    let height = raster.height();

    if seed_x >= width || seed_y >= height {
        return Err(RegionError::InvalidSeed {
            x: seed_x,
            y: seed_y,
        });
    }

    if fill == background {
        return Ok(0);
    }

    if raster.get_pixel_unchecked(seed_x, seed_y) != background {
        return Ok(0);
    }

    let mut filled_count = 0u32;
    let mut frontier = VecDeque::new();
    // One flag per pixel, set when a coordinate enters the frontier. Flags
    // are never cleared: a queued pixel carried `background` when enqueued
    // and is consumed by this fill exactly once.
    let mut queued = vec![false; (width as usize) * (height as usize)];

    queued[(seed_y as usize) * (width as usize) + (seed_x as usize)] = true;
    frontier.push_back((seed_x, seed_y));

    while let Some((x, y)) = frontier.pop_front() {
        if raster.get_pixel_unchecked(x, y) != background {
            continue;
        }

        raster.set_pixel_unchecked(x, y, fill);
        filled_count += 1;

        // Neighbor window clipped to the raster bounds
        let x0 = x.saturating_sub(1);
        let y0 = y.saturating_sub(1);
        let x1 = (x + 1).min(width - 1);
        let y1 = (y + 1).min(height - 1);

        for ny in y0..=y1 {
            for nx in x0..=x1 {
                if connectivity == ConnectivityType::FourWay && nx != x && ny != y {
                    continue;
                }

                let idx = (ny as usize) * (width as usize) + (nx as usize);
                if !queued[idx] && raster.get_pixel_unchecked(nx, ny) == background {
                    queued[idx] = true;
                    frontier.push_back((nx, ny));
                }
            }
        }
    }

    Ok(filled_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Label raster with Edge pixels at the given coordinates
    fn create_test_raster(width: u32, height: u32, edges: &[(u32, u32)]) -> LabelRaster {
        let mut raster = LabelRaster::new(width, height).unwrap();
        for &(x, y) in edges {
            raster.set_pixel(x, y, PixelLabel::Edge).unwrap();
        }
        raster
    }

    #[test]
    fn test_floodfill_open_raster() {
        let mut raster = LabelRaster::new(5, 5).unwrap();

        let count = floodfill(
            &mut raster,
            2,
            2,
            PixelLabel::Background,
            PixelLabel::Free,
            ConnectivityType::EightWay,
        )
        .unwrap();

        assert_eq!(count, 25);
        assert_eq!(raster.count(PixelLabel::Background), 25);
    }

    #[test]
    fn test_floodfill_bounded_by_edges() {
        // Closed ring of edges around (2,2)
        let mut edges = Vec::new();
        for x in 1..4 {
            edges.push((x, 1));
            edges.push((x, 3));
        }
        edges.push((1, 2));
        edges.push((3, 2));

        let mut raster = create_test_raster(5, 5, &edges);
        let count = floodfill(
            &mut raster,
            0,
            0,
            PixelLabel::Background,
            PixelLabel::Free,
            ConnectivityType::FourWay,
        )
        .unwrap();

        // 25 pixels - 8 edges - 1 enclosed interior pixel
        assert_eq!(count, 16);
        assert_eq!(raster.get_pixel(2, 2).unwrap(), PixelLabel::Free);
        assert_eq!(raster.get_pixel(1, 1).unwrap(), PixelLabel::Edge);
    }

    #[test]
    fn test_floodfill_eight_way_crosses_diagonal_gap() {
        // Edge diagonal from bottom-left to top-right splits the raster
        // for 4-way fills but not for 8-way fills
        let edges: Vec<(u32, u32)> = (0..5).map(|i| (i, 4 - i)).collect();

        let mut four = create_test_raster(5, 5, &edges);
        let four_count = floodfill(
            &mut four,
            0,
            0,
            PixelLabel::Background,
            PixelLabel::Free,
            ConnectivityType::FourWay,
        )
        .unwrap();
        assert_eq!(four_count, 10);
        assert_eq!(four.get_pixel(4, 4).unwrap(), PixelLabel::Free);

        let mut eight = create_test_raster(5, 5, &edges);
        let eight_count = floodfill(
            &mut eight,
            0,
            0,
            PixelLabel::Background,
            PixelLabel::Free,
            ConnectivityType::EightWay,
        )
        .unwrap();
        assert_eq!(eight_count, 20);
        assert_eq!(eight.get_pixel(4, 4).unwrap(), PixelLabel::Background);
    }

    #[test]
    fn test_floodfill_noop_on_nonmatching_seed() {
        let mut raster = create_test_raster(5, 5, &[(2, 2)]);
        let before = raster.clone();

        let count = floodfill(
            &mut raster,
            2,
            2,
            PixelLabel::Background,
            PixelLabel::Free,
            ConnectivityType::EightWay,
        )
        .unwrap();

        assert_eq!(count, 0);
        assert_eq!(raster, before);
    }

    #[test]
    fn test_floodfill_fill_equals_background_is_noop() {
        let mut raster = LabelRaster::new(5, 5).unwrap();
        let count = floodfill(
            &mut raster,
            0,
            0,
            PixelLabel::Free,
            PixelLabel::Free,
            ConnectivityType::EightWay,
        )
        .unwrap();

        assert_eq!(count, 0);
        assert_eq!(raster.count(PixelLabel::Free), 25);
    }

    #[test]
    fn test_floodfill_invalid_seed() {
        let mut raster = LabelRaster::new(5, 5).unwrap();
        let result = floodfill(
            &mut raster,
            10,
            10,
            PixelLabel::Background,
            PixelLabel::Free,
            ConnectivityType::EightWay,
        );
        assert!(matches!(
            result,
            Err(RegionError::InvalidSeed { x: 10, y: 10 })
        ));
    }

    #[test]
    fn test_floodfill_count_matches_changed_pixels() {
        // Free area split in two by a full-height wall
        let mut edges = Vec::new();
        for y in 0..4 {
            edges.push((2, y));
        }
        let mut raster = create_test_raster(4, 4, &edges);

        let count = floodfill(
            &mut raster,
            0,
            0,
            PixelLabel::Region(0),
            PixelLabel::Free,
            ConnectivityType::FourWay,
        )
        .unwrap();

        assert_eq!(count, raster.count(PixelLabel::Region(0)));
        // The wall spans the full height, so the right column stays free
        assert_eq!(raster.count(PixelLabel::Free), 4);
    }
}
