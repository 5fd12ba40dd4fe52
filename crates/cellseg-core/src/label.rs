//! LabelRaster - Region label raster
//!
//! `LabelRaster` is a 2D array of [`PixelLabel`] tags. It starts life as a
//! copy of a binary edge mask (edge pixels marked [`PixelLabel::Edge`],
//! everything else [`PixelLabel::Free`]) and is progressively relabeled by
//! flood fills until every pixel carries its final partition membership:
//! unchanged edge, exterior background, or one enclosed region.
//!
//! Region identity is an explicit integer id ([`PixelLabel::Region`])
//! rather than a reserved band of sample values, so label comparisons are
//! exact and the id space cannot collide with edge or background markers.

use crate::error::{Error, Result};
use crate::gray::GrayRaster;

/// Classification of a single pixel in a label raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLabel {
    /// Edge pixel from the input mask; never touched by a fill
    Edge,
    /// Background-valued pixel not yet claimed by any fill
    Free,
    /// Exterior background, filled from the corner seed
    Background,
    /// Enclosed region, carrying its integer region id
    Region(u32),
}

/// Raster of pixel labels
///
/// Same indexing rules as [`GrayRaster`]: row-major, indexed by (x, y)
/// with `0 <= x < width` and `0 <= y < height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRaster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Label data (row-major, no padding)
    data: Vec<PixelLabel>,
}

impl LabelRaster {
    /// Create a new LabelRaster with all pixels marked [`PixelLabel::Free`]
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        let data = vec![PixelLabel::Free; size];

        Ok(LabelRaster {
            width,
            height,
            data,
        })
    }

    /// Build a label raster from a binary edge mask
    ///
    /// Nonzero mask samples become [`PixelLabel::Edge`], zero samples
    /// become [`PixelLabel::Free`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cellseg_core::{GrayRaster, LabelRaster, PixelLabel};
    ///
    /// let mut mask = GrayRaster::new(3, 3).unwrap();
    /// mask.set_pixel(1, 1, 1.0).unwrap();
    ///
    /// let labels = LabelRaster::from_edge_mask(&mask);
    /// assert_eq!(labels.get_pixel(1, 1).unwrap(), PixelLabel::Edge);
    /// assert_eq!(labels.get_pixel(0, 0).unwrap(), PixelLabel::Free);
    /// ```
    pub fn from_edge_mask(mask: &GrayRaster) -> Self {
        let data = mask
            .data()
            .iter()
            .map(|&v| {
                if v != 0.0 {
                    PixelLabel::Edge
                } else {
                    PixelLabel::Free
                }
            })
            .collect();

        LabelRaster {
            width: mask.width(),
            height: mask.height(),
            data,
        }
    }

    /// Get the raster width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the raster dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the label at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<PixelLabel> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }

        let idx = (y as usize) * (self.width as usize) + (x as usize);
        Ok(self.data[idx])
    }

    /// Set the label at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, label: PixelLabel) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }

        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = label;
        Ok(())
    }

    /// Get the label at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> PixelLabel {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx]
    }

    /// Set the label at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, label: PixelLabel) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = label;
    }

    /// Get raw access to the label data
    #[inline]
    pub fn data(&self) -> &[PixelLabel] {
        &self.data
    }

    /// Count the pixels carrying the given label
    pub fn count(&self, label: PixelLabel) -> u32 {
        self.data.iter().filter(|&&l| l == label).count() as u32
    }
}
