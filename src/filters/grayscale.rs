//! Grayscale conversion filter.
//!
//! Uses ITU-R BT.601 luma weights. The single luma plane is broadcast back to
//! three identical channels so the result can be displayed, recombined with
//! alpha, and filtered again like any other RGB buffer.

use ndarray::{Array3, ArrayView3};

use super::core::{broadcast_gray, luma_plane};

/// Convert an RGB triplet to grayscale with R = G = B = luma.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 3)
///
/// # Returns
/// New (height, width, 3) array with equal channels
pub fn grayscale_rgb(input: ArrayView3<u8>) -> Array3<u8> {
    let luma = luma_plane(input);
    broadcast_gray(luma.view())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_red() {
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img[[0, 0, 0]] = 255;

        let result = grayscale_rgb(img.view());

        // 0.299 * 255 = 76.2
        assert_eq!(result[[0, 0, 0]], 76);
        assert_eq!(result[[0, 0, 0]], result[[0, 0, 1]]);
        assert_eq!(result[[0, 0, 1]], result[[0, 0, 2]]);
    }

    #[test]
    fn test_grayscale_green() {
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img[[0, 0, 1]] = 255;

        let result = grayscale_rgb(img.view());

        // 0.587 * 255 = 149.7
        assert_eq!(result[[0, 0, 0]], 150);
    }

    #[test]
    fn test_grayscale_white_stays_white() {
        let img = Array3::<u8>::from_elem((2, 2, 3), 255);
        let result = grayscale_rgb(img.view());
        assert!(result.iter().all(|&v| v == 255));
    }

    #[test]
    fn test_grayscale_channels_equal_everywhere() {
        let img = Array3::from_shape_fn((5, 7, 3), |(y, x, c)| (y * 50 + x * 30 + c * 90) as u8);
        let result = grayscale_rgb(img.view());
        for y in 0..5 {
            for x in 0..7 {
                assert_eq!(result[[y, x, 0]], result[[y, x, 1]]);
                assert_eq!(result[[y, x, 1]], result[[y, x, 2]]);
            }
        }
    }
}
