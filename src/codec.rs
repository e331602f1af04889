//! Codec boundary: decoding, color normalization, PNG/JPEG encoding.
//!
//! In memory every image is an `Array3<u8>` in RGB or RGBA order. Conversions
//! to and from the `image` crate happen only here.
//!
//! Normalization on load:
//! 1. Any color type carrying alpha → RGBA
//! 2. Grayscale without alpha → RGB with three equal channels
//! 3. Everything else → RGB
//!
//! 16-bit and float sources are reduced to 8 bits by the same conversions.

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::str::FromStr;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageFormat, ImageReader, RgbImage, RgbaImage};
use ndarray::{Array3, ArrayView3};

use crate::error::{EditorError, Result};

// ============================================================================
// Compression level
// ============================================================================

/// JPEG compression tier. Higher compression means lower quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompressionLevel {
    High = 0,
    #[default]
    Medium = 1,
    Low = 2,
}

impl CompressionLevel {
    pub const ALL: [CompressionLevel; 3] = [Self::High, Self::Medium, Self::Low];

    /// JPEG quality per tier, indexed by discriminant.
    pub const QUALITY: [u8; 3] = [30, 70, 95];

    pub fn quality(self) -> u8 {
        Self::QUALITY[self as usize]
    }

    /// Dropdown caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High Compression",
            Self::Medium => "Medium Compression",
            Self::Low => "Low Compression",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CompressionLevel {
    type Err = EditorError;

    /// Accepts `high` / `medium` / `low` or the dropdown caption.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| {
                level.short_name().eq_ignore_ascii_case(wanted)
                    || level.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| EditorError::UnknownLevel(wanted.to_string()))
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Read and decode an image file, normalized to RGB or RGBA.
pub fn load_image(path: &Path) -> Result<Array3<u8>> {
    let decoded = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(EditorError::Decode)?;
    normalize(decoded)
}

/// Decode an in-memory encoded image, normalized to RGB or RGBA.
pub fn decode_image(bytes: &[u8]) -> Result<Array3<u8>> {
    let decoded = image::load_from_memory(bytes).map_err(EditorError::Decode)?;
    normalize(decoded)
}

/// Convert a decoded image to the in-memory RGB(A) representation.
pub fn normalize(decoded: DynamicImage) -> Result<Array3<u8>> {
    let color = decoded.color();
    let (width, height) = (decoded.width() as usize, decoded.height() as usize);
    if width == 0 || height == 0 {
        return Err(EditorError::EmptyImage);
    }

    if color.has_alpha() {
        log::debug!("normalizing {:?} to RGBA", color);
        let rgba = decoded.into_rgba8();
        Ok(Array3::from_shape_vec((height, width, 4), rgba.into_raw())?)
    } else {
        log::debug!("normalizing {:?} to RGB", color);
        let rgb = decoded.into_rgb8();
        Ok(Array3::from_shape_vec((height, width, 3), rgb.into_raw())?)
    }
}

/// Wrap an RGB(A) buffer as an `image` value.
pub fn to_dynamic(image: ArrayView3<u8>) -> Result<DynamicImage> {
    let (height, width, channels) = image.dim();
    let raw: Vec<u8> = image.iter().copied().collect();
    let mismatch = EditorError::ShapeMismatch {
        expected: (height, width, channels),
        actual: (0, 0, channels),
    };

    match channels {
        3 => RgbImage::from_raw(width as u32, height as u32, raw)
            .map(DynamicImage::ImageRgb8)
            .ok_or(mismatch),
        4 => RgbaImage::from_raw(width as u32, height as u32, raw)
            .map(DynamicImage::ImageRgba8)
            .ok_or(mismatch),
        channels => Err(EditorError::UnsupportedShape { channels }),
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Lossless PNG bytes, alpha kept.
pub fn encode_png(image: ArrayView3<u8>) -> Result<Vec<u8>> {
    let dynamic = to_dynamic(image)?;
    let mut buffer = Cursor::new(Vec::new());
    dynamic
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(EditorError::Encode)?;
    Ok(buffer.into_inner())
}

/// Baseline JPEG bytes at `quality` (1-100). JPEG has no alpha channel, so
/// a 4-channel buffer is encoded from its RGB triplet.
pub fn encode_jpeg(image: ArrayView3<u8>, quality: u8) -> Result<Vec<u8>> {
    let rgb = to_dynamic(image)?.into_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    encoder
        .encode(&rgb, rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(EditorError::Encode)?;
    Ok(buffer.into_inner())
}

/// True for `.jpg` / `.jpeg` in any case.
pub fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

/// Encode as PNG and write to `path`.
pub fn write_png(path: &Path, image: ArrayView3<u8>) -> Result<()> {
    let bytes = encode_png(image)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Encode as JPEG and write to `path`.
pub fn write_jpeg(path: &Path, image: ArrayView3<u8>, quality: u8) -> Result<()> {
    let bytes = encode_jpeg(image, quality)?;
    fs::write(path, bytes)?;
    Ok(())
}

// ============================================================================
// Compression
// ============================================================================

/// Sizes measured when compressing an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionReport {
    pub level: CompressionLevel,
    pub quality: u8,
    /// Lossless (PNG) size in bytes.
    pub original_size: usize,
    /// JPEG size in bytes.
    pub compressed_size: usize,
}

impl CompressionReport {
    /// `original_size / compressed_size`, or 0 when nothing was produced.
    pub fn ratio(&self) -> f64 {
        if self.compressed_size == 0 {
            return 0.0;
        }
        self.original_size as f64 / self.compressed_size as f64
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Image compressed using JPEG ({}). Original size: {} KB, Compressed size: {} KB (Compression Ratio: {:.2}).",
            self.level,
            self.original_size / 1024,
            self.compressed_size / 1024,
            self.ratio()
        )
    }
}

/// JPEG bytes plus the report describing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedImage {
    pub bytes: Vec<u8>,
    pub report: CompressionReport,
}

/// Encode as JPEG at the tier's quality and measure against the PNG size.
pub fn compress(image: ArrayView3<u8>, level: CompressionLevel) -> Result<CompressedImage> {
    let quality = level.quality();
    let bytes = encode_jpeg(image, quality)?;
    let original_size = encode_png(image)?.len();
    let report = CompressionReport {
        level,
        quality,
        original_size,
        compressed_size: bytes.len(),
    };
    Ok(CompressedImage { bytes, report })
}

// ============================================================================
// Preview
// ============================================================================

/// Resize to the display canvas with Lanczos resampling.
pub fn preview(image: ArrayView3<u8>, width: u32, height: u32) -> Result<RgbaImage> {
    let rgba = to_dynamic(image)?.into_rgba8();
    Ok(image::imageops::resize(
        &rgba,
        width.max(1),
        height.max(1),
        FilterType::Lanczos3,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb};

    fn gradient(height: usize, width: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
            ((x * 255 / width.max(1)) as u8)
                .wrapping_add((y * 3) as u8)
                .wrapping_add((c * 40) as u8)
        })
    }

    /// Smooth base with per-sample noise, so PNG cannot shrink it much.
    fn textured(height: usize, width: usize) -> Array3<u8> {
        let mut state = 12_345u32;
        Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let noise = (state >> 16) % 48;
            let base = ((x + y) * 180 / (width + height)) as u32 + c as u32 * 10;
            (base + noise).min(255) as u8
        })
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("image_editor_codec_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_quality_table() {
        assert_eq!(CompressionLevel::High.quality(), 30);
        assert_eq!(CompressionLevel::Medium.quality(), 70);
        assert_eq!(CompressionLevel::Low.quality(), 95);
        assert_eq!(CompressionLevel::default(), CompressionLevel::Medium);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("high".parse::<CompressionLevel>().unwrap(), CompressionLevel::High);
        assert_eq!(
            "Low Compression".parse::<CompressionLevel>().unwrap(),
            CompressionLevel::Low
        );
        assert!(matches!(
            "extreme".parse::<CompressionLevel>(),
            Err(EditorError::UnknownLevel(_))
        ));
    }

    #[test]
    fn test_normalize_gray_expands_to_rgb() {
        let gray = GrayImage::from_fn(3, 2, |x, y| Luma([(x * 10 + y) as u8]));
        let array = normalize(DynamicImage::ImageLuma8(gray)).unwrap();
        assert_eq!(array.dim(), (2, 3, 3));
        assert_eq!(array[[1, 2, 0]], 21);
        assert_eq!(array[[1, 2, 1]], 21);
        assert_eq!(array[[1, 2, 2]], 21);
    }

    #[test]
    fn test_normalize_keeps_rgba() {
        let rgba = RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 4]));
        let array = normalize(DynamicImage::ImageRgba8(rgba)).unwrap();
        assert_eq!(array.dim(), (2, 2, 4));
        assert_eq!(array[[0, 1, 3]], 4);
    }

    #[test]
    fn test_normalize_rgb_keeps_channel_order() {
        let rgb = RgbImage::from_pixel(1, 1, Rgb([200, 100, 50]));
        let array = normalize(DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(array.dim(), (1, 1, 3));
        assert_eq!(array[[0, 0, 0]], 200);
        assert_eq!(array[[0, 0, 2]], 50);
    }

    #[test]
    fn test_png_is_lossless() {
        let img = gradient(7, 9);
        let bytes = encode_png(img.view()).unwrap();
        assert_eq!(decode_image(&bytes).unwrap(), img);
    }

    #[test]
    fn test_png_keeps_alpha() {
        let img = Array3::from_shape_fn((4, 4, 4), |(y, x, c)| (y * 60 + x * 5 + c) as u8);
        let bytes = encode_png(img.view()).unwrap();
        assert_eq!(decode_image(&bytes).unwrap(), img);
    }

    #[test]
    fn test_jpeg_drops_alpha() {
        let img = Array3::<u8>::from_elem((8, 8, 4), 128);
        let bytes = encode_jpeg(img.view(), 90).unwrap();
        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.dim(), (8, 8, 3));
    }

    #[test]
    fn test_compression_ratio_above_one() {
        let img = textured(96, 96);
        for level in [CompressionLevel::High, CompressionLevel::Medium] {
            let compressed = compress(img.view(), level).unwrap();
            let report = compressed.report;
            assert_eq!(report.compressed_size, compressed.bytes.len());
            assert_eq!(report.original_size, encode_png(img.view()).unwrap().len());
            let expected = report.original_size as f64 / report.compressed_size as f64;
            assert!((report.ratio() - expected).abs() < 1e-12);
            assert!(report.ratio() > 1.0, "{level}: {}", report.ratio());
        }
    }

    #[test]
    fn test_higher_compression_is_smaller() {
        let img = textured(96, 96);
        let high = compress(img.view(), CompressionLevel::High).unwrap();
        let low = compress(img.view(), CompressionLevel::Low).unwrap();
        assert!(high.bytes.len() < low.bytes.len());
    }

    #[test]
    fn test_report_message() {
        let report = CompressionReport {
            level: CompressionLevel::Medium,
            quality: 70,
            original_size: 4096,
            compressed_size: 2048,
        };
        assert_eq!(
            report.to_string(),
            "Image compressed using JPEG (Medium Compression). Original size: 4 KB, Compressed size: 2 KB (Compression Ratio: 2.00)."
        );
    }

    #[test]
    fn test_zero_size_ratio() {
        let report = CompressionReport {
            level: CompressionLevel::High,
            quality: 30,
            original_size: 10,
            compressed_size: 0,
        };
        assert_eq!(report.ratio(), 0.0);
    }

    #[test]
    fn test_is_jpeg_path() {
        assert!(is_jpeg_path(Path::new("out.jpg")));
        assert!(is_jpeg_path(Path::new("OUT.JPEG")));
        assert!(!is_jpeg_path(Path::new("out.png")));
        assert!(!is_jpeg_path(Path::new("out")));
    }

    #[test]
    fn test_load_from_disk() {
        let path = temp_path("load.png");
        let img = gradient(5, 6);
        write_png(&path, img.view()).unwrap();

        let loaded = load_image(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, img);
    }

    #[test]
    fn test_load_garbage_fails() {
        let path = temp_path("garbage.png");
        fs::write(&path, b"definitely not an image").unwrap();

        let result = load_image(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(EditorError::Decode(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_image(&temp_path("missing.png"));
        assert!(matches!(result, Err(EditorError::Io(_))));
    }

    #[test]
    fn test_preview_size() {
        let img = gradient(30, 40);
        let canvas = preview(img.view(), 400, 300).unwrap();
        assert_eq!(canvas.dimensions(), (400, 300));
    }
}
