//! Tunable parameters for filters and the editor session.
//!
//! Defaults reproduce the fixed parameters of the desktop editor: a 5×5
//! median, Canny 100/200, a diameter-15 bilateral with sigmas of 75 and an
//! 11×11 Gaussian. Nothing here is persisted.

use crate::codec::CompressionLevel;

/// Parameters of the library-backed filters.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Median window radius (2 → 5×5).
    pub median_radius: usize,
    /// Canny hysteresis thresholds.
    pub canny_low: f32,
    pub canny_high: f32,
    /// Bilateral neighbourhood diameter in pixels.
    pub bilateral_diameter: usize,
    pub bilateral_sigma_color: f32,
    pub bilateral_sigma_space: f32,
    /// Gaussian kernel size, forced odd.
    pub gaussian_kernel_size: usize,
    /// Filter the processed image instead of the loaded original.
    pub chain_filters: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            median_radius: 2,
            canny_low: 100.0,
            canny_high: 200.0,
            bilateral_diameter: 15,
            bilateral_sigma_color: 75.0,
            bilateral_sigma_space: 75.0,
            gaussian_kernel_size: 11,
            chain_filters: false,
        }
    }
}

/// Session-level settings.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub filters: FilterConfig,
    /// Preview canvas size.
    pub display_width: u32,
    pub display_height: u32,
    /// JPEG quality used when saving to `.jpg` without a cached compression.
    pub fallback_jpeg_quality: u8,
    pub default_level: CompressionLevel,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            filters: FilterConfig::default(),
            display_width: 400,
            display_height: 300,
            fallback_jpeg_quality: 95,
            default_level: CompressionLevel::Medium,
        }
    }
}
