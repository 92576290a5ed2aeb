//! Score-driven difficulty curves.
//!
//! Every game narrows its tolerance as the score grows: the reflex target
//! gets thinner, the similarity perturbation gets subtler. Both follow the
//! same shape, a line falling with score and clamped to `[min, max]`.
//! Once the floor is reached the curve plateaus, so a long winning streak
//! settles at a constant, still-solvable difficulty.

use serde::{Deserialize, Serialize};

/// `clamp(base - per_point * score, min, max)`.
///
/// Non-increasing in score whenever `per_point >= 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearCurve {
    /// Value at score 0 (before clamping).
    pub base: f64,
    /// How much the value falls per point of score.
    pub per_point: f64,
    /// Floor. Rounds never go below this.
    pub min: f64,
    /// Ceiling, reached with negative scores.
    pub max: f64,
}

impl LinearCurve {
    /// Create a new curve.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or `per_point` is negative.
    #[must_use]
    pub fn new(base: f64, per_point: f64, min: f64, max: f64) -> Self {
        assert!(min <= max, "Curve floor must not exceed its ceiling");
        assert!(per_point >= 0.0, "Curve must not get easier as score rises");
        Self {
            base,
            per_point,
            min,
            max,
        }
    }

    /// Evaluate the curve at a score.
    #[must_use]
    pub fn at(&self, score: i64) -> f64 {
        (self.base - self.per_point * score as f64).clamp(self.min, self.max)
    }

    /// Evaluate, rounding before clamping.
    ///
    /// Used where the parameter is whole-numbered (reflex target width).
    #[must_use]
    pub fn at_rounded(&self, score: i64) -> f64 {
        (self.base - self.per_point * score as f64)
            .round()
            .clamp(self.min, self.max)
    }
}
