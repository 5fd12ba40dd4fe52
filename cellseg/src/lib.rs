//! Cellseg - Microscopy cell segmentation for Rust
//!
//! Cellseg identifies closed cell-like regions in a grayscale microscopy
//! image and counts how many of them are infected, judging each region by
//! the fraction of dark pixels it contains.
//!
//! # Overview
//!
//! The pipeline has three stages:
//!
//! - Edge-mask preparation (`edge`): Sobel gradient, binarization, and
//!   suppression of edge responses from dark inclusions
//! - Region labeling (`region`): flood-fill partitioning of the mask into
//!   exterior background and enclosed regions
//! - Classification (`region`): per-region size window and dark-fraction
//!   tests
//!
//! Callers that already have an edge mask can skip the `edge` crate and
//! hand the mask straight to `region::count_infected_cells`.
//!
//! # Example
//!
//! ```
//! use cellseg::GrayRaster;
//! use cellseg::region::{ClassifyOptions, count_infected_cells};
//!
//! // Build a 6x6 closed outline on a 10x10 mask
//! let mut mask = GrayRaster::new(10, 10).unwrap();
//! for i in 2..8 {
//!     mask.set_pixel(i, 2, 1.0).unwrap();
//!     mask.set_pixel(i, 7, 1.0).unwrap();
//!     mask.set_pixel(2, i, 1.0).unwrap();
//!     mask.set_pixel(7, i, 1.0).unwrap();
//! }
//!
//! // Dark interior on a bright field
//! let mut gray = GrayRaster::new_with_value(10, 10, 0.9).unwrap();
//! for y in 3..7 {
//!     for x in 3..7 {
//!         gray.set_pixel(x, y, 0.3).unwrap();
//!     }
//! }
//!
//! let options = ClassifyOptions::new().with_size_window(10, 20);
//! let infected = count_infected_cells(&mask, &gray, &options).unwrap();
//! assert_eq!(infected, 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use cellseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use cellseg_edge as edge;
pub use cellseg_region as region;
