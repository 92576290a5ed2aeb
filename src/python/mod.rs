//! Python bindings for the color games.
//!
//! Lets a Python presentation layer drive the sessions.
//!
//! # Quick Start
//!
//! ```python
//! import chroma_games as cg
//!
//! game = cg.ReflexGame(seed=42)
//! game.tick(16)
//! gained = game.stop()
//! game.next()
//!
//! quick = cg.SimilarityGame(seed=7)
//! left, right = quick.pair
//! quick.answer(left == right)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameError;

mod py_color;
mod py_games;

pub use py_color::*;
pub use py_games::*;

impl From<GameError> for PyErr {
    fn from(err: GameError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// chroma_games: round generation and judging for casual color games.
///
/// This module provides:
/// - OrderingGame, ReflexGame, SimilarityGame sessions
/// - hex_to_luminance for color tooling
#[pymodule]
fn chroma_games(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Color model
    m.add_function(wrap_pyfunction!(py_hex_to_luminance, m)?)?;

    // Games
    m.add_class::<PyOrderingGame>()?;
    m.add_class::<PyReflexGame>()?;
    m.add_class::<PySimilarityGame>()?;

    Ok(())
}
