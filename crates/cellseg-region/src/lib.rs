//! cellseg-region - Region labeling and classification
//!
//! This crate is the segmentation core of the cellseg library:
//!
//! - **Seed fill** - queue-based flood fill relabeling one connected
//!   component of a label raster in place
//! - **Region labeling** - partitioning an edge mask into exterior
//!   background and enclosed regions with integer ids
//! - **Classification** - per-region size and dark-fraction tests that
//!   count infected cells
//!
//! The crate operates purely on in-memory rasters from `cellseg-core`;
//! producing the edge mask and the grayscale intensity raster is the
//! caller's concern (see `cellseg-edge` for one way to do it).
//!
//! # Examples
//!
//! ## Labeling an edge mask
//!
//! ```
//! use cellseg_core::{GrayRaster, LabelRaster, PixelLabel};
//! use cellseg_region::{label_regions, region_count};
//!
//! // Closed 4x4 outline on a 8x8 mask
//! let mut mask = GrayRaster::new(8, 8).unwrap();
//! for i in 2..6 {
//!     mask.set_pixel(i, 2, 1.0).unwrap();
//!     mask.set_pixel(i, 5, 1.0).unwrap();
//!     mask.set_pixel(2, i, 1.0).unwrap();
//!     mask.set_pixel(5, i, 1.0).unwrap();
//! }
//!
//! let labeled = label_regions(&LabelRaster::from_edge_mask(&mask)).unwrap();
//! assert_eq!(region_count(&labeled), 1);
//! assert_eq!(labeled.get_pixel(3, 3).unwrap(), PixelLabel::Region(0));
//! ```
//!
//! ## Counting infected cells
//!
//! ```
//! use cellseg_core::GrayRaster;
//! use cellseg_region::{ClassifyOptions, count_infected_cells};
//!
//! let mask = GrayRaster::new(32, 32).unwrap();
//! let gray = GrayRaster::new_with_value(32, 32, 0.8).unwrap();
//!
//! let options = ClassifyOptions::default();
//! let infected = count_infected_cells(&mask, &gray, &options).unwrap();
//! assert_eq!(infected, 0);
//! ```

pub mod classify;
pub mod error;
pub mod label;
pub mod seedfill;

// Re-export core types
pub use cellseg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export seedfill types and functions
pub use seedfill::{ConnectivityType, floodfill};

// Re-export labeling functions
pub use label::{label_regions, region_count};

// Re-export classification types and functions
pub use classify::{
    ClassifyOptions, RegionStats, classify_cells, count_infected_cells, region_stats,
};
