//! Region classification
//!
//! Decides, per labeled region, whether it is a valid cell (pixel count
//! inside a size window) and whether that cell is infected (fraction of
//! dark intensity pixels at or above a floor). Region statistics are
//! gathered in a single pass over both rasters with a per-label
//! accumulator map.

use crate::error::{RegionError, RegionResult};
use crate::label::label_regions;
use cellseg_core::{GrayRaster, LabelRaster, PixelLabel};
use std::collections::HashMap;

/// Options for cell classification
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Minimum pixel count for a region to be a valid cell (inclusive)
    pub min_size: u32,
    /// Maximum pixel count for a region to be a valid cell (inclusive)
    pub max_size: u32,
    /// Maximum intensity for a pixel to count as dark (inclusive)
    pub infected_threshold: f64,
    /// Minimum dark-pixel fraction for a cell to count as infected
    /// (inclusive)
    pub min_infected_fraction: f64,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            min_size: 1000,
            max_size: 5000,
            infected_threshold: 0.5,
            min_infected_fraction: 0.02,
        }
    }
}

impl ClassifyOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size window
    pub fn with_size_window(mut self, min_size: u32, max_size: u32) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    /// Set the dark-pixel intensity threshold
    pub fn with_infected_threshold(mut self, threshold: f64) -> Self {
        self.infected_threshold = threshold;
        self
    }

    /// Set the minimum infected fraction
    pub fn with_min_infected_fraction(mut self, fraction: f64) -> Self {
        self.min_infected_fraction = fraction;
        self
    }

    fn validate(&self) -> RegionResult<()> {
        if self.min_size > self.max_size {
            return Err(RegionError::InvalidThreshold(format!(
                "size window is empty: min {} > max {}",
                self.min_size, self.max_size
            )));
        }
        if !(0.0..=1.0).contains(&self.infected_threshold) {
            return Err(RegionError::InvalidThreshold(format!(
                "infected threshold {} outside [0, 1]",
                self.infected_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.min_infected_fraction) {
            return Err(RegionError::InvalidThreshold(format!(
                "infected fraction {} outside [0, 1]",
                self.min_infected_fraction
            )));
        }
        Ok(())
    }
}

/// Pixel statistics for one labeled region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStats {
    /// Region id
    pub label: u32,
    /// Number of pixels carrying this label
    pub pixel_count: u32,
    /// Number of those pixels whose intensity is at or below the dark
    /// threshold
    pub dark_count: u32,
}

impl RegionStats {
    /// Fraction of this region's pixels that are dark
    ///
    /// `pixel_count` is at least 1 for any region that appears in a stats
    /// vector, so the division is well defined.
    pub fn dark_fraction(&self) -> f64 {
        self.dark_count as f64 / self.pixel_count as f64
    }
}

/// Gather per-region pixel statistics
///
/// Scans the labeled raster once, accumulating for every region id the
/// total pixel count and the count of pixels whose intensity is at or
/// below `dark_threshold`. Background and edge pixels contribute to no
/// region.
///
/// # Returns
///
/// One [`RegionStats`] per region id present, sorted by id.
///
/// # Errors
///
/// Returns `RegionError::DimensionMismatch` if the rasters differ in
/// shape.
pub fn region_stats(
    intensity: &GrayRaster,
    labeled: &LabelRaster,
    dark_threshold: f64,
) -> RegionResult<Vec<RegionStats>> {
    if intensity.dimensions() != labeled.dimensions() {
        return Err(RegionError::DimensionMismatch {
            expected: labeled.dimensions(),
            actual: intensity.dimensions(),
        });
    }

    #[derive(Default)]
    struct Accum {
        pixel_count: u32,
        dark_count: u32,
    }

    let (width, height) = labeled.dimensions();
    let mut stats: HashMap<u32, Accum> = HashMap::new();

    for y in 0..height {
        for x in 0..width {
            if let PixelLabel::Region(id) = labeled.get_pixel_unchecked(x, y) {
                let acc = stats.entry(id).or_default();
                acc.pixel_count += 1;
                if (intensity.get_pixel_unchecked(x, y) as f64) <= dark_threshold {
                    acc.dark_count += 1;
                }
            }
        }
    }

    let mut result: Vec<RegionStats> = stats
        .into_iter()
        .map(|(label, acc)| RegionStats {
            label,
            pixel_count: acc.pixel_count,
            dark_count: acc.dark_count,
        })
        .collect();

    result.sort_by_key(|s| s.label);

    Ok(result)
}

/// Count the infected cells in a labeled raster
///
/// A region is a valid cell if its pixel count lies inside the options'
/// size window (inclusive on both ends); a valid cell is infected if its
/// dark-pixel fraction is at least `min_infected_fraction`. Both
/// comparisons are inclusive.
///
/// # Errors
///
/// Returns `RegionError::InvalidThreshold` for an empty size window or
/// out-of-range thresholds, `RegionError::DimensionMismatch` if the
/// rasters differ in shape.
pub fn classify_cells(
    intensity: &GrayRaster,
    labeled: &LabelRaster,
    options: &ClassifyOptions,
) -> RegionResult<u32> {
    options.validate()?;

    let stats = region_stats(intensity, labeled, options.infected_threshold)?;

    let infected = stats
        .iter()
        .filter(|s| {
            s.pixel_count >= options.min_size
                && s.pixel_count <= options.max_size
                && s.dark_fraction() >= options.min_infected_fraction
        })
        .count();

    Ok(infected as u32)
}

/// Count infected cells from an edge mask and intensity raster
///
/// The full pipeline entry point: builds the label raster from the mask,
/// labels regions, and classifies them against the intensity raster.
///
/// # Arguments
///
/// * `edge_mask` - Binary raster, nonzero = edge, zero = background
/// * `intensity` - Grayscale raster aligned with the mask, values in `[0, 1]`
/// * `options` - Classification thresholds
///
/// # Errors
///
/// Returns `RegionError::DimensionMismatch` if mask and intensity raster
/// differ in shape, `RegionError::InvalidThreshold` for invalid options.
///
/// # Examples
///
/// ```
/// use cellseg_core::GrayRaster;
/// use cellseg_region::{ClassifyOptions, count_infected_cells};
///
/// // Edgeless mask: no regions, nothing to classify
/// let mask = GrayRaster::new(20, 20).unwrap();
/// let gray = GrayRaster::new_with_value(20, 20, 0.8).unwrap();
///
/// let options = ClassifyOptions::default();
/// assert_eq!(count_infected_cells(&mask, &gray, &options).unwrap(), 0);
/// ```
pub fn count_infected_cells(
    edge_mask: &GrayRaster,
    intensity: &GrayRaster,
    options: &ClassifyOptions,
) -> RegionResult<u32> {
    if edge_mask.dimensions() != intensity.dimensions() {
        return Err(RegionError::DimensionMismatch {
            expected: edge_mask.dimensions(),
            actual: intensity.dimensions(),
        });
    }

    let mask = LabelRaster::from_edge_mask(edge_mask);
    let labeled = label_regions(&mask)?;
    classify_cells(intensity, &labeled, options)
}
