//! Per-pixel color filters: Invert, Sepia.
//!
//! Both operate on an RGB triplet of shape (height, width, 3) and need no
//! spatial context. Alpha never reaches these functions; the pipeline strips
//! it beforehand.

use ndarray::{Array3, ArrayView3};

// ============================================================================
// Invert
// ============================================================================

/// Complement every sample (`255 - v`).
///
/// Applying it twice returns the input exactly.
pub fn invert_rgb(input: ArrayView3<u8>) -> Array3<u8> {
    input.mapv(|v| 255 - v)
}

// ============================================================================
// Sepia
// ============================================================================

/// Sepia transform. Output channel `i` is row `i` dotted with (R, G, B).
pub const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.272, 0.534, 0.131],
    [0.349, 0.686, 0.168],
    [0.393, 0.769, 0.189],
];

/// Apply the fixed sepia matrix to every pixel, rounding and clamping to 0-255.
pub fn sepia_rgb(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 3));

    for y in 0..height {
        for x in 0..width {
            let rgb = [
                input[[y, x, 0]] as f32,
                input[[y, x, 1]] as f32,
                input[[y, x, 2]] as f32,
            ];
            for (c, row) in SEPIA_MATRIX.iter().enumerate() {
                let v = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
                output[[y, x, c]] = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    output
}
