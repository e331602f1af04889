//! Blur filters: Gaussian blur and bilateral smoothing.
//!
//! Both work on an RGB triplet and use reflect-101 borders. The Gaussian is
//! separable (two 1D passes in f32); the bilateral weighs each neighbour by
//! spatial distance and by color similarity, so it smooths flat regions while
//! leaving strong edges alone.

use ndarray::{Array3, ArrayView3};

use super::core::{build_rows, gaussian_kernel_1d, reflect_101};
use crate::error::Result;

// ============================================================================
// Gaussian
// ============================================================================

/// Gaussian blur with a fixed odd kernel size; sigma is derived from the size.
///
/// # Arguments
/// * `input` - RGB triplet (height, width, 3)
/// * `kernel_size` - Taps per axis (11 → sigma 2.0)
///
/// # Returns
/// Blurred image with the same shape
pub fn gaussian_blur_rgb(input: ArrayView3<u8>, kernel_size: usize) -> Result<Array3<u8>> {
    let (height, width, channels) = input.dim();
    let kernel = gaussian_kernel_1d(kernel_size, 0.0);
    let half = kernel.len() / 2;
    let row_len = width * channels;

    // Horizontal pass into f32 rows
    let mut temp = vec![0.0f32; height * row_len];
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sx = reflect_101(x as isize + ki as isize - half as isize, width);
                    sum += input[[y, sx, c]] as f32 * kv;
                }
                temp[y * row_len + x * channels + c] = sum;
            }
        }
    }

    // Vertical pass
    build_rows(height, width, channels, |y, row| {
        for (i, out) in row.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let sy = reflect_101(y as isize + ki as isize - half as isize, height);
                sum += temp[sy * row_len + i] * kv;
            }
            *out = sum.round().clamp(0.0, 255.0) as u8;
        }
    })
}

// ============================================================================
// Bilateral
// ============================================================================

/// Edge-preserving bilateral smoothing.
///
/// Color distance is the L1 distance over the three channels. Only
/// neighbours inside the circle of radius `diameter / 2` contribute.
///
/// # Arguments
/// * `input` - RGB triplet (height, width, 3)
/// * `diameter` - Neighbourhood diameter in pixels
/// * `sigma_color` - Falloff over color distance
/// * `sigma_space` - Falloff over pixel distance
pub fn bilateral_rgb(
    input: ArrayView3<u8>,
    diameter: usize,
    sigma_color: f32,
    sigma_space: f32,
) -> Result<Array3<u8>> {
    let (height, width, channels) = input.dim();
    let radius = (diameter / 2).max(1) as isize;
    let sigma_color = sigma_color.max(0.01);
    let sigma_space = sigma_space.max(0.01);
    let color_coeff = -0.5 / (sigma_color * sigma_color);
    let space_coeff = -0.5 / (sigma_space * sigma_space);

    // Offsets and spatial weights of the circular window
    let mut window: Vec<(isize, isize, f32)> = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let r2 = (dy * dy + dx * dx) as f32;
            if r2 > (radius * radius) as f32 {
                continue;
            }
            window.push((dy, dx, (r2 * space_coeff).exp()));
        }
    }

    // Color weights by L1 distance
    let color_lut: Vec<f32> = (0..=255 * channels)
        .map(|d| ((d * d) as f32 * color_coeff).exp())
        .collect();

    build_rows(height, width, channels, |y, row| {
        let mut sum = vec![0.0f32; channels];
        for x in 0..width {
            sum.iter_mut().for_each(|s| *s = 0.0);
            let mut weight_sum = 0.0f32;

            for &(dy, dx, spatial_weight) in &window {
                let sy = reflect_101(y as isize + dy, height);
                let sx = reflect_101(x as isize + dx, width);

                let distance: usize = (0..channels)
                    .map(|c| (input[[y, x, c]] as i32 - input[[sy, sx, c]] as i32).unsigned_abs() as usize)
                    .sum();
                let weight = spatial_weight * color_lut[distance];

                for (c, s) in sum.iter_mut().enumerate() {
                    *s += input[[sy, sx, c]] as f32 * weight;
                }
                weight_sum += weight;
            }

            for c in 0..channels {
                row[x * channels + c] = if weight_sum > 0.0 {
                    (sum[c] / weight_sum).round().clamp(0.0, 255.0) as u8
                } else {
                    input[[y, x, c]]
                };
            }
        }
    })
}
