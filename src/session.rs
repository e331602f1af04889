//! Headless editor session.
//!
//! Holds the loaded original, the current processed image and the cached
//! JPEG bytes, and exposes one method per user action. Every action runs to
//! completion synchronously. Failures never escape as panics: each method
//! records a user-facing message in the [`StatusLine`] and also returns the
//! underlying [`EditorError`] to the caller.

use std::fs;
use std::path::Path;

use image::RgbaImage;
use ndarray::Array3;

use crate::codec::{self, CompressedImage, CompressionLevel, CompressionReport};
use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::filters::{apply_filter, FilterKind};

/// One success slot and one error slot; setting either clears the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    message: Option<String>,
    error: Option<String>,
}

impl StatusLine {
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.error = None;
    }

    pub fn show_error(&mut self, error: impl AsRef<str>) {
        self.error = Some(format!("Error: {}", error.as_ref()));
        self.message = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Editor state for a single image.
#[derive(Debug, Default)]
pub struct EditorSession {
    config: EditorConfig,
    original: Option<Array3<u8>>,
    processed: Option<Array3<u8>>,
    compressed: Option<CompressedImage>,
    status: StatusLine,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn original(&self) -> Option<&Array3<u8>> {
        self.original.as_ref()
    }

    pub fn processed(&self) -> Option<&Array3<u8>> {
        self.processed.as_ref()
    }

    pub fn compressed(&self) -> Option<&CompressedImage> {
        self.compressed.as_ref()
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Saving is offered only once a compressed buffer exists.
    pub fn download_enabled(&self) -> bool {
        self.compressed.is_some()
    }

    /// Load an image file, replacing whatever was loaded before.
    ///
    /// On failure the session is left empty.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        self.compressed = None;
        match codec::load_image(path) {
            Ok(image) => {
                let (height, width, channels) = image.dim();
                log::info!(
                    "loaded {} ({}x{}, {} channels)",
                    path.display(),
                    width,
                    height,
                    channels
                );
                self.processed = Some(image.clone());
                self.original = Some(image);
                self.status.show_message("Image uploaded successfully.");
                Ok(())
            }
            Err(err) => {
                log::warn!("failed to load {}: {}", path.display(), err);
                self.original = None;
                self.processed = None;
                self.status.show_error(format!(
                    "Error loading image: {}. Please ensure it's a valid image file.",
                    err
                ));
                Err(err)
            }
        }
    }

    /// Apply a filter and replace the processed image with the result.
    ///
    /// The source is the loaded original unless `chain_filters` is set.
    /// On failure the processed image is left exactly as it was.
    pub fn apply_filter(&mut self, kind: FilterKind) -> Result<()> {
        let source = if self.config.filters.chain_filters {
            self.processed.as_ref()
        } else {
            self.original.as_ref()
        };
        let Some(source) = source else {
            self.status.show_error("Please upload an image first.");
            return Err(EditorError::NoImage);
        };

        match apply_filter(source.view(), kind, &self.config.filters) {
            Ok(filtered) => {
                log::info!("applied {}", kind.as_str());
                self.processed = Some(filtered);
                self.compressed = None;
                self.status.show_message("Filter applied successfully.");
                Ok(())
            }
            Err(err) => {
                log::warn!("filter {} failed: {}", kind.as_str(), err);
                self.status.show_error(format!("Error applying filter: {}", err));
                Err(err)
            }
        }
    }

    /// JPEG-compress the processed image and cache the bytes for saving.
    pub fn compress(&mut self, level: CompressionLevel) -> Result<CompressionReport> {
        let Some(processed) = self.processed.as_ref() else {
            self.compressed = None;
            self.status
                .show_error("Please upload and optionally edit an image before compressing.");
            return Err(EditorError::NoImage);
        };

        match codec::compress(processed.view(), level) {
            Ok(compressed) => {
                let report = compressed.report;
                log::info!(
                    "compressed at quality {}: {} -> {} bytes (ratio {:.2})",
                    report.quality,
                    report.original_size,
                    report.compressed_size,
                    report.ratio()
                );
                self.compressed = Some(compressed);
                self.status.show_message(report.to_string());
                Ok(report)
            }
            Err(err) => {
                log::warn!("compression failed: {}", err);
                self.compressed = None;
                self.status.show_error(format!("Error compressing image: {}", err));
                Err(err)
            }
        }
    }

    /// Compress at the configured default tier.
    pub fn compress_default(&mut self) -> Result<CompressionReport> {
        self.compress(self.config.default_level)
    }

    /// Write the processed image to disk.
    ///
    /// `.jpg` / `.jpeg` paths get the cached compressed bytes verbatim when
    /// present, otherwise a fresh encode at the fallback quality. Every
    /// other path is written as PNG.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        let Some(processed) = self.processed.as_ref() else {
            self.status.show_error("Please upload an image first.");
            return Err(EditorError::NoImage);
        };

        let jpeg = codec::is_jpeg_path(path);
        let result = if jpeg {
            match &self.compressed {
                Some(compressed) => fs::write(path, &compressed.bytes).map_err(EditorError::from),
                None => codec::write_jpeg(path, processed.view(), self.config.fallback_jpeg_quality),
            }
        } else {
            codec::write_png(path, processed.view())
        };

        match result {
            Ok(()) => {
                let format = if jpeg { "JPEG" } else { "PNG" };
                log::info!("saved {} as {}", path.display(), format);
                self.status
                    .show_message(format!("Image saved as {} to {}", format, path.display()));
                Ok(())
            }
            Err(err) => {
                log::warn!("failed to save {}: {}", path.display(), err);
                self.status.show_error(format!("Error saving image: {}", err));
                Err(err)
            }
        }
    }

    /// The processed image scaled to the display canvas.
    pub fn preview(&self) -> Result<RgbaImage> {
        let processed = self.processed.as_ref().ok_or(EditorError::NoImage)?;
        codec::preview(
            processed.view(),
            self.config.display_width,
            self.config.display_height,
        )
    }
}
