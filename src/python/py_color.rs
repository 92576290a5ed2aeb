//! Color model bindings for Python.

use pyo3::prelude::*;

use crate::color::hex_to_luminance;

/// Relative luminance of a `#rrggbb` color, in [0, 1].
///
/// Raises ValueError on malformed input.
#[pyfunction]
#[pyo3(name = "hex_to_luminance")]
pub fn py_hex_to_luminance(hex: &str) -> PyResult<f64> {
    Ok(hex_to_luminance(hex)?)
}
