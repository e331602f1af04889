//! Image Editor core
//!
//! Load an image, apply one of a fixed set of filters, JPEG-compress it at a
//! chosen tier and save it, without any GUI attached. A front end drives an
//! [`EditorSession`] and renders its preview and status line.
//!
//! ## Image Format
//! Images are `ndarray::Array3<u8>` of shape (height, width, channels):
//! - **RGB**: (height, width, 3)
//! - **RGBA**: (height, width, 4) - filters never touch alpha
//!
//! Channel order is always RGB(A) in memory; the [`codec`] module is the only
//! place that talks to decoders and encoders.
//!
//! ## Python bindings
//! With the `python` feature the filter pipeline and JPEG compressor are
//! exported to numpy via PyO3.

pub mod codec;
pub mod config;
pub mod error;
pub mod filters;
pub mod session;

pub use codec::{CompressedImage, CompressionLevel, CompressionReport};
pub use config::{EditorConfig, FilterConfig};
pub use error::{EditorError, Result};
pub use filters::{apply_filter, FilterKind};
pub use session::{EditorSession, StatusLine};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;
    use pyo3::types::PyBytes;

    use crate::codec::{self, CompressionLevel};
    use crate::config::FilterConfig;
    use crate::error::EditorError;
    use crate::filters::{self, FilterKind};

    fn to_py_err(err: EditorError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    /// Apply a named filter to a (H, W, 3) or (H, W, 4) uint8 array.
    ///
    /// Alpha, if present, is returned unchanged.
    #[pyfunction]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        filter: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let kind: FilterKind = filter.parse().map_err(to_py_err)?;
        let result = filters::apply_filter(image.as_array(), kind, &FilterConfig::default())
            .map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    /// JPEG-encode a uint8 array at "high", "medium" or "low" compression.
    #[pyfunction]
    #[pyo3(signature = (image, level="medium"))]
    pub fn compress_jpeg<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        level: &str,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let level: CompressionLevel = level.parse().map_err(to_py_err)?;
        let compressed = codec::compress(image.as_array(), level).map_err(to_py_err)?;
        Ok(PyBytes::new(py, &compressed.bytes))
    }

    /// Machine names accepted by `apply_filter`.
    #[pyfunction]
    pub fn filter_names() -> Vec<&'static str> {
        FilterKind::ALL.iter().map(|kind| kind.as_str()).collect()
    }

    /// Image Editor Rust extension module
    #[pymodule]
    pub fn image_editor(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        m.add_function(wrap_pyfunction!(compress_jpeg, m)?)?;
        m.add_function(wrap_pyfunction!(filter_names, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::image_editor;
