//! Channel-preserving filter pipeline.
//!
//! Every filter is defined over an RGB triplet. [`apply_filter`] makes them
//! usable on RGBA too: the alpha plane is split off, the triplet filtered, and
//! the untouched alpha appended again. The source is never mutated; a fresh
//! buffer of identical shape is returned.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array3, ArrayView3};

use super::blur::{bilateral_rgb, gaussian_blur_rgb};
use super::color_adjust::{invert_rgb, sepia_rgb};
use super::core::{merge_alpha, split_alpha};
use super::edge::canny_rgb;
use super::grayscale::grayscale_rgb;
use super::noise::median_rgb;
use super::sharpen::sharpen_rgb;
use super::stylize::emboss_rgb;
use crate::config::FilterConfig;
use crate::error::{EditorError, Result};

/// The fixed set of filters the editor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    RemoveNoise,
    DetectEdges,
    Smoothing,
    Blur,
    Grayscale,
    Sharpen,
    Invert,
    Sepia,
    Emboss,
}

impl FilterKind {
    pub const ALL: [FilterKind; 9] = [
        FilterKind::RemoveNoise,
        FilterKind::DetectEdges,
        FilterKind::Smoothing,
        FilterKind::Blur,
        FilterKind::Grayscale,
        FilterKind::Sharpen,
        FilterKind::Invert,
        FilterKind::Sepia,
        FilterKind::Emboss,
    ];

    /// Stable machine-readable name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RemoveNoise => "remove-noise",
            Self::DetectEdges => "detect-edges",
            Self::Smoothing => "smoothing",
            Self::Blur => "blur",
            Self::Grayscale => "grayscale",
            Self::Sharpen => "sharpen",
            Self::Invert => "invert",
            Self::Sepia => "sepia",
            Self::Emboss => "emboss",
        }
    }

    /// Button caption in the desktop editor.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::RemoveNoise => "Remove Noise",
            Self::DetectEdges => "Detect Objects",
            Self::Smoothing => "Smoothing",
            Self::Blur => "Blur",
            Self::Grayscale => "Grayscale",
            Self::Sharpen => "Sharpen",
            Self::Invert => "Invert Colors",
            Self::Sepia => "Sepia Tone",
            Self::Emboss => "Emboss",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FilterKind {
    type Err = EditorError;

    /// Accepts either the machine name or the display caption, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.as_str().eq_ignore_ascii_case(wanted)
                    || kind.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| EditorError::UnknownFilter(wanted.to_string()))
    }
}

/// Run one filter on an RGB triplet.
pub fn filter_rgb(rgb: ArrayView3<u8>, kind: FilterKind, config: &FilterConfig) -> Result<Array3<u8>> {
    let filtered = match kind {
        FilterKind::RemoveNoise => median_rgb(rgb, config.median_radius)?,
        FilterKind::DetectEdges => canny_rgb(rgb, config.canny_low, config.canny_high)?,
        FilterKind::Smoothing => bilateral_rgb(
            rgb,
            config.bilateral_diameter,
            config.bilateral_sigma_color,
            config.bilateral_sigma_space,
        )?,
        FilterKind::Blur => gaussian_blur_rgb(rgb, config.gaussian_kernel_size)?,
        FilterKind::Grayscale => grayscale_rgb(rgb),
        FilterKind::Sharpen => sharpen_rgb(rgb)?,
        FilterKind::Invert => invert_rgb(rgb),
        FilterKind::Sepia => sepia_rgb(rgb),
        FilterKind::Emboss => emboss_rgb(rgb)?,
    };

    let (height, width, _) = rgb.dim();
    if filtered.dim() != (height, width, 3) {
        return Err(EditorError::ShapeMismatch {
            expected: (height, width, 3),
            actual: filtered.dim(),
        });
    }
    Ok(filtered)
}

/// Apply a filter to a 3- or 4-channel image, leaving alpha untouched.
///
/// # Returns
/// A new buffer with the same height, width and channel count as `image`
pub fn apply_filter(image: ArrayView3<u8>, kind: FilterKind, config: &FilterConfig) -> Result<Array3<u8>> {
    let (rgb, alpha) = split_alpha(image)?;
    log::debug!(
        "applying {} to {}x{} image (alpha: {})",
        kind.as_str(),
        rgb.dim().1,
        rgb.dim().0,
        alpha.is_some()
    );

    let filtered = filter_rgb(rgb.view(), kind, config)?;

    match alpha {
        Some(alpha) => merge_alpha(filtered.view(), alpha.view()),
        None => Ok(filtered),
    }
}
