//! Filter modules for the editor.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//! | RGBA8 | (H, W, 4) | u8 | RGB + alpha, 0-255 |
//!
//! Individual filters only ever see the RGB triplet (H, W, 3). The
//! [`pipeline`] strips alpha before filtering and restores it afterwards, so
//! alpha is preserved bit for bit.
//!
//! ## Filter Categories
//!
//! - **Pixel-wise**: invert, sepia, grayscale
//! - **Convolution**: sharpen, emboss (fixed 3×3 kernels)
//! - **Neighbourhood**: median (noise removal), Gaussian blur, bilateral smoothing
//! - **Edge detection**: Canny

pub mod core;
pub mod pipeline;

pub mod blur;
pub mod color_adjust;
pub mod edge;
pub mod grayscale;
pub mod noise;
pub mod sharpen;
pub mod stylize;

pub use pipeline::{apply_filter, filter_rgb, FilterKind};
