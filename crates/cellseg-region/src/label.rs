//! Region labeling
//!
//! Drives the flood-fill engine over a whole edge mask: the exterior
//! background is flooded first from the top-left corner, then a row-major
//! scan seeds one fill per enclosed region, minting integer region ids in
//! discovery order. The output partitions every pixel into exactly one of
//! [`PixelLabel::Edge`], [`PixelLabel::Background`], or one
//! [`PixelLabel::Region`].

use crate::error::RegionResult;
use crate::seedfill::{ConnectivityType, floodfill};
use cellseg_core::{LabelRaster, PixelLabel};

/// Label all enclosed regions of an edge mask
///
/// The input raster holds [`PixelLabel::Edge`] on boundaries and
/// [`PixelLabel::Free`] everywhere else (see
/// [`LabelRaster::from_edge_mask`]). The top-left corner is assumed to lie
/// in the exterior background; this is a seed-selection assumption and is
/// not validated. If the corner is an edge pixel the background flood is a
/// no-op and the whole exterior is discovered as ordinary regions instead.
///
/// Region ids are minted `0, 1, 2, ...` in row-major discovery order, so
/// the id assigned to each physical region is deterministic for a given
/// input. Edge pixels are never touched by any fill.
///
/// # Returns
///
/// A new raster in which every pixel is `Edge`, `Background`, or
/// `Region(id)`.
///
/// # Examples
///
/// ```
/// use cellseg_core::{GrayRaster, LabelRaster, PixelLabel};
/// use cellseg_region::label_regions;
///
/// // 5x5 mask with a closed 3x3 ring: one enclosed pixel
/// let mut mask = GrayRaster::new(5, 5).unwrap();
/// for i in 1..4 {
///     mask.set_pixel(i, 1, 1.0).unwrap();
///     mask.set_pixel(i, 3, 1.0).unwrap();
///     mask.set_pixel(1, i, 1.0).unwrap();
///     mask.set_pixel(3, i, 1.0).unwrap();
/// }
///
/// let labeled = label_regions(&LabelRaster::from_edge_mask(&mask)).unwrap();
/// assert_eq!(labeled.get_pixel(2, 2).unwrap(), PixelLabel::Region(0));
/// assert_eq!(labeled.get_pixel(0, 0).unwrap(), PixelLabel::Background);
/// ```
pub fn label_regions(mask: &LabelRaster) -> RegionResult<LabelRaster> {
    let mut labeled = mask.clone();
    let (width, height) = labeled.dimensions();

    // Exterior background first, from the corner seed
    floodfill(
        &mut labeled,
        0,
        0,
        PixelLabel::Background,
        PixelLabel::Free,
        ConnectivityType::EightWay,
    )?;

    // Every pixel still free when the scan reaches it starts a new region.
    // Filled pixels leave the Free state, so no pixel seeds twice.
    let mut next_region = 0u32;
    for y in 0..height {
        for x in 0..width {
            if labeled.get_pixel_unchecked(x, y) == PixelLabel::Free {
                floodfill(
                    &mut labeled,
                    x,
                    y,
                    PixelLabel::Region(next_region),
                    PixelLabel::Free,
                    ConnectivityType::EightWay,
                )?;
                next_region += 1;
            }
        }
    }

    Ok(labeled)
}

/// Count the number of distinct region labels in a labeled raster
///
/// Scans for the maximum region id. For output of [`label_regions`] the
/// ids are contiguous from 0, so the count is `max id + 1`.
pub fn region_count(labeled: &LabelRaster) -> u32 {
    let mut count = 0u32;
    for &label in labeled.data() {
        if let PixelLabel::Region(id) = label {
            count = count.max(id + 1);
        }
    }
    count
}
