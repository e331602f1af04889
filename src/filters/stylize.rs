//! Stylize filters: Emboss.
//!
//! The kernel is applied to each channel of the RGB triplet independently.
//! Its weights sum to one, so flat regions keep their color and only edges
//! pick up the raised look.

use ndarray::{Array3, ArrayView3};

use super::core::correlate_3x3;
use crate::error::Result;

/// Directional emboss kernel (light from the top-left).
pub const EMBOSS_KERNEL: [[f32; 3]; 3] = [
    [-2.0, -1.0, 0.0],
    [-1.0, 1.0, 1.0],
    [0.0, 1.0, 2.0],
];

/// Apply the emboss kernel, clamping results to 0-255.
///
/// # Arguments
/// * `input` - RGB triplet (height, width, 3)
///
/// # Returns
/// Embossed image with the same shape
pub fn emboss_rgb(input: ArrayView3<u8>) -> Result<Array3<u8>> {
    correlate_3x3(input, &EMBOSS_KERNEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emboss_flat_is_unchanged() {
        let img = Array3::<u8>::from_elem((4, 4, 3), 128);
        let result = emboss_rgb(img.view()).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_emboss_lights_bottom_right_of_step() {
        // Left half dark, right half bright
        let img = Array3::from_shape_fn((3, 4, 3), |(_, x, _)| if x < 2 { 50u8 } else { 150u8 });

        let result = emboss_rgb(img.view()).unwrap();

        // Kernel column sums are -3, 1, 3.
        // At (1, 1): 50 * -3 + 50 * 1 + 150 * 3 = 350 -> 255
        assert_eq!(result[[1, 1, 0]], 255);
        // At (1, 0): columns mirror to x = 1, 0, 1: 50 * -3 + 50 + 50 * 3 = 50
        assert_eq!(result[[1, 0, 0]], 50);
    }

    #[test]
    fn test_emboss_shadows_clamp_to_zero() {
        // Bright left, dark right
        let img = Array3::from_shape_fn((3, 4, 3), |(_, x, _)| if x < 2 { 200u8 } else { 0u8 });

        let result = emboss_rgb(img.view()).unwrap();

        // At (1, 1): 200 * -3 + 200 * 1 + 0 * 3 = -400 -> 0
        assert_eq!(result[[1, 1, 1]], 0);
    }
}
