//! Core utilities shared by the filters.
//!
//! - Alpha split / recombination for RGBA buffers
//! - Gray plane broadcast back to RGB
//! - Gaussian kernel generation
//! - 3×3 correlation with reflect-101 borders
//! - Row-parallel buffer construction

use image::GrayImage;
use ndarray::{concatenate, s, Array2, Array3, ArrayView2, ArrayView3, Axis};
use rayon::prelude::*;

use crate::error::{EditorError, Result};

/// ITU-R BT.601 luma coefficients, as used by the desktop editor's collaborator.
pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// Split an RGB(A) buffer into its color triplet and optional alpha plane.
///
/// 3-channel input is returned as-is with no alpha.
pub fn split_alpha(image: ArrayView3<u8>) -> Result<(Array3<u8>, Option<Array2<u8>>)> {
    let (height, width, channels) = image.dim();
    if height == 0 || width == 0 {
        return Err(EditorError::EmptyImage);
    }
    match channels {
        3 => Ok((image.to_owned(), None)),
        4 => {
            let rgb = image.slice(s![.., .., 0..3]).to_owned();
            let alpha = image.index_axis(Axis(2), 3).to_owned();
            Ok((rgb, Some(alpha)))
        }
        channels => Err(EditorError::UnsupportedShape { channels }),
    }
}

/// Append an alpha plane to an RGB triplet.
pub fn merge_alpha<'a>(rgb: ArrayView3<'a, u8>, alpha: ArrayView2<'a, u8>) -> Result<Array3<u8>> {
    let alpha = alpha.insert_axis(Axis(2));
    Ok(concatenate(Axis(2), &[rgb, alpha])?)
}

/// Repeat a single gray plane into three identical channels.
pub fn broadcast_gray(gray: ArrayView2<u8>) -> Array3<u8> {
    let (height, width) = gray.dim();
    Array3::from_shape_fn((height, width, 3), |(y, x, _)| gray[[y, x]])
}

/// Rec.601 luma of an RGB triplet, rounded to 8 bits.
pub fn luma_plane(rgb: ArrayView3<u8>) -> Array2<u8> {
    let (height, width, _) = rgb.dim();
    Array2::from_shape_fn((height, width), |(y, x)| {
        let r = rgb[[y, x, 0]] as f32;
        let g = rgb[[y, x, 1]] as f32;
        let b = rgb[[y, x, 2]] as f32;
        (LUMA_R * r + LUMA_G * g + LUMA_B * b).round().clamp(0.0, 255.0) as u8
    })
}

/// Wrap a gray plane as an `image` buffer.
pub fn plane_to_gray_image(plane: ArrayView2<u8>) -> Result<GrayImage> {
    let (height, width) = plane.dim();
    let raw = plane.as_standard_layout().iter().copied().collect::<Vec<u8>>();
    GrayImage::from_raw(width as u32, height as u32, raw).ok_or(EditorError::ShapeMismatch {
        expected: (height, width, 1),
        actual: (0, 0, 1),
    })
}

/// Unwrap an `image` gray buffer into a plane.
pub fn gray_image_to_plane(image: GrayImage) -> Result<Array2<u8>> {
    let (width, height) = image.dimensions();
    Ok(Array2::from_shape_vec(
        (height as usize, width as usize),
        image.into_raw(),
    )?)
}

/// Sigma the desktop editor's Gaussian derives from a kernel size when none is given.
pub fn sigma_for_kernel_size(size: usize) -> f32 {
    0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Generate a normalized 1D Gaussian kernel of a fixed odd size.
///
/// `sigma <= 0` derives sigma from the size.
pub fn gaussian_kernel_1d(size: usize, sigma: f32) -> Vec<f32> {
    let size = size.max(1) | 1;
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        sigma_for_kernel_size(size)
    };
    let half = (size / 2) as f32;

    let mut kernel: Vec<f32> = (0..size)
        .map(|i| {
            let x = i as f32 - half;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    // Normalize
    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}

/// Mirror an out-of-range index without repeating the edge sample (`gfedcb|abcdefgh|gfedcba`).
#[inline]
pub fn reflect_101(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let n = len as isize;
    let mut i = index;
    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * n - 2 - i;
        } else {
            return i as usize;
        }
    }
}

/// Clamp an out-of-range index to the nearest edge sample.
#[inline]
pub fn clamp_index(index: isize, len: usize) -> usize {
    index.clamp(0, len as isize - 1) as usize
}

/// Build an image row by row in parallel.
///
/// `fill(y, row)` receives row `y` as a flat `width * channels` slice.
pub fn build_rows<F>(height: usize, width: usize, channels: usize, fill: F) -> Result<Array3<u8>>
where
    F: Fn(usize, &mut [u8]) + Sync + Send,
{
    let row_len = width * channels;
    let mut data = vec![0u8; height * row_len];
    if row_len > 0 {
        data.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| fill(y, row));
    }
    Ok(Array3::from_shape_vec((height, width, channels), data)?)
}

/// Correlate every channel with a 3×3 kernel (no flip), reflect-101 borders,
/// rounding and saturating to 8 bits.
pub fn correlate_3x3(input: ArrayView3<u8>, kernel: &[[f32; 3]; 3]) -> Result<Array3<u8>> {
    let (height, width, channels) = input.dim();

    build_rows(height, width, channels, |y, row| {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (ky, kernel_row) in kernel.iter().enumerate() {
                    let sy = reflect_101(y as isize + ky as isize - 1, height);
                    for (kx, &kv) in kernel_row.iter().enumerate() {
                        let sx = reflect_101(x as isize + kx as isize - 1, width);
                        sum += input[[sy, sx, c]] as f32 * kv;
                    }
                }
                row[x * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    })
}
