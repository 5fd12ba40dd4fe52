//! Edge-mask binarization and cleaning
//!
//! Turns a gradient-magnitude raster into the binary edge mask consumed by
//! the region labeler: fixed-threshold binarization followed by suppression
//! of edge responses that come from dark structures inside cells rather
//! than from cell boundaries. A mask left uncleaned would carve infected
//! cells into fragments along their own parasite inclusions.

use crate::error::{EdgeError, EdgeResult};
use crate::gradient::sobel_gradient;
use cellseg_core::GrayRaster;

/// Options for edge-mask preparation
#[derive(Debug, Clone)]
pub struct EdgeDetectOptions {
    /// Minimum gradient magnitude for a pixel to count as an edge
    pub gradient_threshold: f32,
    /// Edge pixels whose 3x3 intensity neighborhood dips below this value
    /// are suppressed
    pub min_local_brightness: f32,
}

impl Default for EdgeDetectOptions {
    fn default() -> Self {
        Self {
            gradient_threshold: 0.05,
            min_local_brightness: 0.5,
        }
    }
}

impl EdgeDetectOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gradient threshold
    pub fn with_gradient_threshold(mut self, threshold: f32) -> Self {
        self.gradient_threshold = threshold;
        self
    }

    /// Set the local brightness floor for edge suppression
    pub fn with_min_local_brightness(mut self, brightness: f32) -> Self {
        self.min_local_brightness = brightness;
        self
    }
}

/// Binarize a raster at a fixed threshold
///
/// Samples `>= threshold` become 1.0, everything else 0.0.
///
/// # Errors
///
/// Returns `EdgeError::InvalidThreshold` if `threshold` is outside `[0, 1]`.
pub fn threshold_mask(src: &GrayRaster, threshold: f32) -> EdgeResult<GrayRaster> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(EdgeError::InvalidThreshold(format!(
            "threshold {threshold} outside [0, 1]"
        )));
    }

    let (width, height) = src.dimensions();
    let mut mask = GrayRaster::new(width, height)?;

    for y in 0..height {
        for x in 0..width {
            if src.get_pixel_unchecked(x, y) >= threshold {
                mask.set_pixel_unchecked(x, y, 1.0);
            }
        }
    }

    Ok(mask)
}

/// Suppress edge pixels adjacent to dark structures
///
/// Clears every mask pixel whose 3x3 intensity neighborhood (clipped at
/// the raster borders) contains a sample below `min_local_brightness`.
/// Gradient responses next to dark inclusions are edges of the inclusion,
/// not of the surrounding cell; removing them keeps each cell a single
/// closed region.
///
/// # Arguments
///
/// * `mask` - Binary edge mask (nonzero = edge)
/// * `intensity` - Grayscale raster the mask was derived from
/// * `min_local_brightness` - Brightness floor for the 3x3 neighborhood
///
/// # Errors
///
/// Returns `EdgeError::DimensionMismatch` if the rasters differ in shape,
/// `EdgeError::InvalidThreshold` if the floor is outside `[0, 1]`.
pub fn suppress_dark_edges(
    mask: &GrayRaster,
    intensity: &GrayRaster,
    min_local_brightness: f32,
) -> EdgeResult<GrayRaster> {
    if mask.dimensions() != intensity.dimensions() {
        return Err(EdgeError::DimensionMismatch {
            expected: mask.dimensions(),
            actual: intensity.dimensions(),
        });
    }
    if !(0.0..=1.0).contains(&min_local_brightness) {
        return Err(EdgeError::InvalidThreshold(format!(
            "brightness floor {min_local_brightness} outside [0, 1]"
        )));
    }

    let (width, height) = mask.dimensions();
    let mut cleaned = mask.clone();

    for y in 0..height {
        for x in 0..width {
            if mask.get_pixel_unchecked(x, y) == 0.0 {
                continue;
            }

            let x0 = x.saturating_sub(1);
            let y0 = y.saturating_sub(1);
            let x1 = (x + 1).min(width - 1);
            let y1 = (y + 1).min(height - 1);

            let mut local_min = f32::INFINITY;
            for ny in y0..=y1 {
                for nx in x0..=x1 {
                    local_min = local_min.min(intensity.get_pixel_unchecked(nx, ny));
                }
            }

            if local_min < min_local_brightness {
                cleaned.set_pixel_unchecked(x, y, 0.0);
            }
        }
    }

    Ok(cleaned)
}

/// Prepare a binary edge mask from a grayscale raster
///
/// Composes [`sobel_gradient`], [`threshold_mask`] and
/// [`suppress_dark_edges`]. The output has nonzero samples on cell
/// boundaries and zero everywhere else, ready for region labeling.
pub fn detect_edges(gray: &GrayRaster, options: &EdgeDetectOptions) -> EdgeResult<GrayRaster> {
    let grad = sobel_gradient(gray)?;
    let mask = threshold_mask(&grad, options.gradient_threshold)?;
    suppress_dark_edges(&mask, gray, options.min_local_brightness)
}
