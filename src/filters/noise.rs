//! Noise removal: Median.
//!
//! Replaces each sample by the median of its square neighbourhood, which
//! removes salt-and-pepper noise while keeping edges sharp.

use ndarray::{Array3, ArrayView3};

use super::core::{build_rows, clamp_index};
use crate::error::Result;

/// Apply a median filter to every channel of an RGB triplet.
///
/// # Arguments
/// * `input` - RGB triplet (height, width, 3)
/// * `radius` - Window radius (2 → 5×5), capped at 10
///
/// # Returns
/// Median-filtered image with the same shape
pub fn median_rgb(input: ArrayView3<u8>, radius: usize) -> Result<Array3<u8>> {
    let (height, width, channels) = input.dim();
    let radius = radius.min(10);
    let window_size = (radius * 2 + 1) * (radius * 2 + 1);

    build_rows(height, width, channels, |y, row| {
        let mut values: Vec<u8> = Vec::with_capacity(window_size);
        for x in 0..width {
            for c in 0..channels {
                values.clear();

                for dy in 0..=(radius * 2) {
                    let sy = clamp_index(y as isize + dy as isize - radius as isize, height);

                    for dx in 0..=(radius * 2) {
                        let sx = clamp_index(x as isize + dx as isize - radius as isize, width);
                        values.push(input[[sy, sx, c]]);
                    }
                }

                values.sort_unstable();
                row[x * channels + c] = values[values.len() / 2];
            }
        }
    })
}
