//! Gradient computation
//!
//! Sobel gradient magnitude over a grayscale raster. The magnitude is the
//! first stage of edge-mask preparation: strong gradients mark cell
//! boundaries, which are then binarized and cleaned in [`crate::mask`].

use crate::error::EdgeResult;
use cellseg_core::GrayRaster;

/// Normalization factor for the 3x3 Sobel magnitude.
///
/// |gx| and |gy| each reach 4.0 on a unit-range step, so the raw magnitude
/// peaks at 4*sqrt(2). Dividing keeps the output in [0, 1].
const SOBEL_MAX_MAGNITUDE: f32 = 4.0 * std::f32::consts::SQRT_2;

/// Compute the Sobel gradient magnitude of a grayscale raster
///
/// Applies the 3x3 horizontal and vertical Sobel kernels with replicated
/// borders and returns `sqrt(gx^2 + gy^2)` normalized to `[0, 1]` for
/// unit-range input.
///
/// # Arguments
///
/// * `gray` - Input grayscale raster with samples in `[0, 1]`
///
/// # Returns
///
/// A new raster of the same dimensions holding the gradient magnitude.
///
/// # Examples
///
/// ```
/// use cellseg_core::GrayRaster;
/// use cellseg_edge::sobel_gradient;
///
/// // A flat field has no gradient anywhere
/// let gray = GrayRaster::new_with_value(8, 8, 0.7).unwrap();
/// let grad = sobel_gradient(&gray).unwrap();
/// assert!(grad.data().iter().all(|&v| v == 0.0));
/// ```
pub fn sobel_gradient(gray: &GrayRaster) -> EdgeResult<GrayRaster> {
    let (width, height) = gray.dimensions();
    let mut grad = GrayRaster::new(width, height)?;

    for y in 0..height {
        for x in 0..width {
            // 3x3 window with replicated borders
            let sample = |dx: i64, dy: i64| -> f32 {
                let sx = (x as i64 + dx).clamp(0, width as i64 - 1) as u32;
                let sy = (y as i64 + dy).clamp(0, height as i64 - 1) as u32;
                gray.get_pixel_unchecked(sx, sy)
            };

            let gx = (sample(1, -1) + 2.0 * sample(1, 0) + sample(1, 1))
                - (sample(-1, -1) + 2.0 * sample(-1, 0) + sample(-1, 1));
            let gy = (sample(-1, 1) + 2.0 * sample(0, 1) + sample(1, 1))
                - (sample(-1, -1) + 2.0 * sample(0, -1) + sample(1, -1));

            let magnitude = (gx * gx + gy * gy).sqrt() / SOBEL_MAX_MAGNITUDE;
            grad.set_pixel_unchecked(x, y, magnitude.min(1.0));
        }
    }

    Ok(grad)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Left half dark, right half bright
    fn make_step(width: u32, height: u32, split: u32) -> GrayRaster {
        let mut gray = GrayRaster::new(width, height).unwrap();
        for y in 0..height {
            for x in split..width {
                gray.set_pixel_unchecked(x, y, 1.0);
            }
        }
        gray
    }

    #[test]
    fn test_flat_field_no_response() {
        let gray = GrayRaster::new_with_value(10, 10, 0.3).unwrap();
        let grad = sobel_gradient(&gray).unwrap();
        assert!(grad.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_vertical_step_response() {
        let gray = make_step(10, 10, 5);
        let grad = sobel_gradient(&gray).unwrap();

        // Columns adjacent to the step respond strongly
        assert!(grad.get_pixel_unchecked(4, 5) > 0.5);
        assert!(grad.get_pixel_unchecked(5, 5) > 0.5);
        // Far from the step there is no response
        assert_eq!(grad.get_pixel_unchecked(0, 5), 0.0);
        assert_eq!(grad.get_pixel_unchecked(9, 5), 0.0);
    }

    #[test]
    fn test_output_stays_in_unit_range() {
        // Checkerboard maximizes local contrast
        let mut gray = GrayRaster::new(8, 8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                if (x + y) % 2 == 0 {
                    gray.set_pixel_unchecked(x, y, 1.0);
                }
            }
        }

        let grad = sobel_gradient(&gray).unwrap();
        assert!(grad.data().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_dimensions_preserved() {
        let gray = GrayRaster::new(13, 7).unwrap();
        let grad = sobel_gradient(&gray).unwrap();
        assert_eq!(grad.dimensions(), (13, 7));
    }
}
