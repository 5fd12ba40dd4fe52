//! Cellseg Core - Basic data structures for microscopy segmentation
//!
//! This crate provides the fundamental containers used throughout the
//! cellseg library:
//!
//! - [`GrayRaster`] - Floating-point grayscale raster (intensity images
//!   and binary edge masks)
//! - [`LabelRaster`] / [`PixelLabel`] - Region label raster built from an
//!   edge mask and relabeled by flood fills
//!
//! Both rasters are row-major, indexed by (x, y), and validate their
//! dimensions at construction. The algorithms that operate on them live in
//! the `cellseg-region` and `cellseg-edge` crates.

pub mod error;
pub mod gray;
pub mod label;

pub use error::{Error, Result};
pub use gray::GrayRaster;
pub use label::{LabelRaster, PixelLabel};
