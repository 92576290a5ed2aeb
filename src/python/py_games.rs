//! Game session bindings for Python.

use pyo3::prelude::*;

use crate::core::{Phase, SwatchId};
use crate::games::ordering::{Nudge, OrderingConfig, OrderingSession};
use crate::games::reflex::{ReflexConfig, ReflexSession};
use crate::games::similarity::{SimilarityConfig, SimilaritySession};
use crate::rules::Session;

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Active => "active",
        Phase::Judged => "judged",
        Phase::Ended => "ended",
    }
}

/// Python wrapper for the luminance-ordering game.
#[pyclass(name = "OrderingGame")]
pub struct PyOrderingGame {
    session: OrderingSession,
}

#[pymethods]
impl PyOrderingGame {
    /// Create a new ordering game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic rounds
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> PyResult<Self> {
        let session = OrderingSession::new(OrderingConfig::default(), seed)?;
        Ok(Self { session })
    }

    /// Swatches in the current arrangement as (id, hex, luminance).
    #[getter]
    fn swatches(&self) -> Vec<(u32, String, f64)> {
        self.session
            .arrangement()
            .iter()
            .filter_map(|&id| self.session.round().swatch(id))
            .map(|s| (s.id.raw(), s.hex(), s.luminance))
            .collect()
    }

    /// Submit an id order and return its accuracy percentage.
    fn submit(&mut self, order: Vec<u32>) -> PyResult<u8> {
        let ids: Vec<SwatchId> = order.into_iter().map(SwatchId::new).collect();
        Ok(self.session.submit_order(&ids)?.accuracy)
    }

    /// Check the current arrangement and return its accuracy percentage.
    fn check(&mut self) -> u8 {
        self.session.check().accuracy
    }

    /// Move the swatch at `from` to `to`.
    fn move_swatch(&mut self, from: usize, to: usize) -> PyResult<()> {
        Ok(self.session.move_swatch(from, to)?)
    }

    /// Move the swatch at `index` one step up or down.
    #[pyo3(signature = (index, up = true))]
    fn nudge(&mut self, index: usize, up: bool) -> PyResult<()> {
        let direction = if up { Nudge::Up } else { Nudge::Down };
        Ok(self.session.nudge(index, direction)?)
    }

    /// Replace the round.
    fn new_round(&mut self) -> PyResult<()> {
        Ok(self.session.new_round()?)
    }

    /// Ids of the swatches that belong first and last.
    fn hint(&self) -> Option<(u32, u32)> {
        self.session.hint().map(|h| (h.first.raw(), h.last.raw()))
    }

    /// Verdict message of the latest check, if any.
    #[getter]
    fn message(&self) -> Option<String> {
        self.session
            .last_outcome()
            .map(|o| o.verdict.message(o.accuracy))
    }

    #[getter]
    fn score(&self) -> i64 {
        self.session.state().score
    }

    #[getter]
    fn round_index(&self) -> u32 {
        self.session.state().round_index
    }

    #[getter]
    fn phase(&self) -> &'static str {
        phase_name(self.session.state().phase)
    }

    fn __repr__(&self) -> String {
        format!(
            "OrderingGame(round={}, swatches={}, phase={})",
            self.session.state().round_index,
            self.session.round().len(),
            self.phase()
        )
    }
}

/// Python wrapper for the reflex stop game.
#[pyclass(name = "ReflexGame")]
pub struct PyReflexGame {
    session: ReflexSession,
}

#[pymethods]
impl PyReflexGame {
    /// Create a new reflex game.
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> Self {
        Self {
            session: ReflexSession::new(ReflexConfig::default(), seed),
        }
    }

    /// Advance the marker by `delta_ms`; returns the new position.
    fn tick(&mut self, delta_ms: u64) -> f64 {
        self.session.advance_tick(delta_ms)
    }

    /// Stop the marker; returns the points gained.
    fn stop(&mut self) -> PyResult<i64> {
        Ok(self.session.stop()?.gained)
    }

    /// Start the next round.
    fn next(&mut self) -> PyResult<()> {
        Ok(self.session.next()?)
    }

    /// Target as (start, end), in percent.
    #[getter]
    fn target(&self) -> (f64, f64) {
        let t = self.session.target();
        (t.start, t.end)
    }

    #[getter]
    fn position(&self) -> f64 {
        self.session.position()
    }

    #[getter]
    fn running(&self) -> bool {
        self.session.is_running()
    }

    #[getter]
    fn score(&self) -> i64 {
        self.session.state().score
    }

    #[getter]
    fn round_index(&self) -> u32 {
        self.session.state().round_index
    }

    fn __repr__(&self) -> String {
        let t = self.session.target();
        format!(
            "ReflexGame(position={:.1}, target=[{}, {}], score={})",
            self.session.position(),
            t.start,
            t.end,
            self.session.state().score
        )
    }
}

/// Python wrapper for the timed same-or-different game.
#[pyclass(name = "SimilarityGame")]
pub struct PySimilarityGame {
    session: SimilaritySession,
}

#[pymethods]
impl PySimilarityGame {
    /// Create a new similarity game.
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> PyResult<Self> {
        let session = SimilaritySession::new(SimilarityConfig::default(), seed)?;
        Ok(Self { session })
    }

    /// Run the countdown; returns seconds left.
    fn tick(&mut self, delta_ms: u64) -> u32 {
        self.session.advance_tick(delta_ms)
    }

    /// Answer "same" (True) or "different" (False); returns whether it was right.
    fn answer(&mut self, same: bool) -> PyResult<bool> {
        Ok(self.session.answer(same)?.correct)
    }

    /// Start over with a full countdown.
    fn restart(&mut self) -> PyResult<()> {
        Ok(self.session.restart()?)
    }

    /// Current pair as two hex strings.
    #[getter]
    fn pair(&self) -> (String, String) {
        let p = self.session.pair();
        (p.left.to_hex(), p.right.to_hex())
    }

    #[getter]
    fn time_left(&self) -> u32 {
        self.session.time_left()
    }

    #[getter]
    fn score(&self) -> i64 {
        self.session.state().score
    }

    #[getter]
    fn ended(&self) -> bool {
        self.session.is_terminal()
    }

    fn __repr__(&self) -> String {
        format!(
            "SimilarityGame(time_left={}, score={})",
            self.session.time_left(),
            self.session.state().score
        )
    }
}
