//! cellseg-edge - Edge-mask preparation
//!
//! This crate turns a grayscale intensity raster into the binary edge mask
//! consumed by the region labeler in `cellseg-region`:
//!
//! - **Gradient computation** - 3x3 Sobel magnitude
//! - **Binarization** - fixed-threshold edge mask
//! - **Mask cleaning** - suppression of edge responses caused by dark
//!   structures inside cells
//!
//! The region core does not depend on this crate; it accepts any mask with
//! the same convention (nonzero = edge, zero = background).
//!
//! # Examples
//!
//! ```
//! use cellseg_core::GrayRaster;
//! use cellseg_edge::{EdgeDetectOptions, detect_edges};
//!
//! let gray = GrayRaster::new_with_value(32, 32, 0.8).unwrap();
//! let mask = detect_edges(&gray, &EdgeDetectOptions::default()).unwrap();
//!
//! // A flat field has no edges
//! assert!(mask.data().iter().all(|&v| v == 0.0));
//! ```

pub mod error;
pub mod gradient;
pub mod mask;

pub use error::{EdgeError, EdgeResult};
pub use gradient::sobel_gradient;
pub use mask::{EdgeDetectOptions, detect_edges, suppress_dark_edges, threshold_mask};
