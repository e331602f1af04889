//! Edge detection: Canny.
//!
//! The RGB triplet is reduced to Rec.601 luma, run through Canny, and the
//! binary edge map (0 or 255) is broadcast back to three channels.
//!
//! imageproc pre-blurs with a sigma 1.4 Gaussian and thresholds the L2
//! gradient norm, so thresholds are not interchangeable with an L1 Canny.

use ndarray::{Array3, ArrayView3};

use super::core::{broadcast_gray, gray_image_to_plane, luma_plane, plane_to_gray_image};
use crate::error::Result;

/// Canny edge map of an RGB triplet.
///
/// # Arguments
/// * `input` - RGB triplet (height, width, 3)
/// * `low` / `high` - Hysteresis thresholds on gradient magnitude
///
/// # Returns
/// (height, width, 3) image, white on edges and black elsewhere
pub fn canny_rgb(input: ArrayView3<u8>, low: f32, high: f32) -> Result<Array3<u8>> {
    let luma = luma_plane(input);
    let gray = plane_to_gray_image(luma.view())?;
    let edges = imageproc::edges::canny(&gray, low, high);
    let plane = gray_image_to_plane(edges)?;
    Ok(broadcast_gray(plane.view()))
}
