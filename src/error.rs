//! Error model for the editor.
//!
//! A single enum carries every failure of the load → filter → compress → save
//! chain so callers can match on the cause while the session turns it into a
//! user-facing message.

use thiserror::Error;

/// Unified editor error.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no image loaded")]
    NoImage,

    #[error("unsupported channel count {channels}, expected 3 or 4")]
    UnsupportedShape { channels: usize },

    #[error("image has zero width or height")]
    EmptyImage,

    #[error("filter output shape {actual:?} does not match {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    },

    #[error("decode failed: {0}")]
    Decode(#[source] image::ImageError),

    #[error("encode failed: {0}")]
    Encode(#[source] image::ImageError),

    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown filter '{0}'")]
    UnknownFilter(String),

    #[error("unknown compression level '{0}' (expected high / medium / low)")]
    UnknownLevel(String),

    #[error("buffer layout: {0}")]
    Buffer(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_message_names_channels() {
        let err = EditorError::UnsupportedShape { channels: 2 };
        assert_eq!(err.to_string(), "unsupported channel count 2, expected 3 or 4");
    }

    #[test]
    fn test_io_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EditorError = io.into();
        assert!(matches!(err, EditorError::Io(_)));
    }
}
