//! Sharpen filter.
//!
//! 3×3 kernel with a strong positive center and negative ring:
//!
//! ```text
//! -1 -1 -1
//! -1  9 -1
//! -1 -1 -1
//! ```
//!
//! Weights sum to one, so flat regions are preserved.

use ndarray::{Array3, ArrayView3};

use super::core::correlate_3x3;
use crate::error::Result;

pub const SHARPEN_KERNEL: [[f32; 3]; 3] = [
    [-1.0, -1.0, -1.0],
    [-1.0, 9.0, -1.0],
    [-1.0, -1.0, -1.0],
];

/// Sharpen every channel of an RGB triplet, clamping to 0-255.
pub fn sharpen_rgb(input: ArrayView3<u8>) -> Result<Array3<u8>> {
    correlate_3x3(input, &SHARPEN_KERNEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharpen_flat_is_unchanged() {
        let img = Array3::<u8>::from_elem((5, 5, 3), 77);
        let result = sharpen_rgb(img.view()).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_sharpen_boosts_isolated_peak() {
        let mut img = Array3::<u8>::from_elem((3, 3, 3), 100);
        img[[1, 1, 0]] = 110;

        let result = sharpen_rgb(img.view()).unwrap();

        // 9 * 110 - 8 * 100 = 190
        assert_eq!(result[[1, 1, 0]], 190);
        // Other channels are flat
        assert_eq!(result[[1, 1, 1]], 100);
        // Top edge mirrors row 1, so the peak is counted twice: 900 - 6 * 100 - 2 * 110 = 80
        assert_eq!(result[[0, 1, 0]], 80);
    }

    #[test]
    fn test_sharpen_clamps() {
        let mut img = Array3::<u8>::zeros((3, 3, 3));
        img[[1, 1, 2]] = 200;

        let result = sharpen_rgb(img.view()).unwrap();

        assert_eq!(result[[1, 1, 2]], 255);
        assert_eq!(result[[0, 0, 2]], 0);
    }
}
