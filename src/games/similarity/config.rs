//! Similarity game configuration.

use serde::{Deserialize, Serialize};

use crate::core::LinearCurve;

/// Tunables for the same-or-different game.
///
/// A "different" pair perturbs each channel by
/// `(offset_min + U[0, offset_span)) * multiplier`, where the multiplier
/// falls from `max_multiplier` toward `min_multiplier` as the score rises.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Countdown length in seconds. Independent of score.
    pub duration_secs: u32,

    /// Chance that a pair is identical.
    pub same_probability: f64,

    /// Smallest per-channel offset before scaling.
    pub offset_min: f64,

    /// Random extra offset span before scaling.
    pub offset_span: f64,

    /// Multiplier lost per point of score.
    pub multiplier_per_point: f64,

    /// Hardest multiplier.
    pub min_multiplier: f64,

    /// Easiest multiplier (reached at score <= 0).
    pub max_multiplier: f64,

    /// A different pair must differ this much in at least one channel.
    pub min_channel_delta: u8,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            duration_secs: 30,
            same_probability: 0.5,
            offset_min: 20.0,
            offset_span: 60.0,
            multiplier_per_point: 0.03,
            min_multiplier: 0.2,
            max_multiplier: 1.0,
            min_channel_delta: 4,
        }
    }
}

impl SimilarityConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the countdown length.
    #[must_use]
    pub fn with_duration_secs(mut self, secs: u32) -> Self {
        assert!(secs > 0, "Countdown must be positive");
        self.duration_secs = secs;
        self
    }

    /// Set the chance of an identical pair.
    #[must_use]
    pub fn with_same_probability(mut self, p: f64) -> Self {
        assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");
        self.same_probability = p;
        self
    }

    /// Set the offset range and difficulty curve.
    ///
    /// # Panics
    ///
    /// Panics if the hardest possible offset could round below
    /// `min_channel_delta`.
    #[must_use]
    pub fn with_perturbation(
        mut self,
        offset_min: f64,
        offset_span: f64,
        per_point: f64,
        min_multiplier: f64,
        max_multiplier: f64,
    ) -> Self {
        assert!(offset_span >= 0.0, "Offset span must not be negative");
        assert!(per_point >= 0.0, "Pairs must not get easier as score rises");
        assert!(
            min_multiplier > 0.0 && min_multiplier <= max_multiplier,
            "Multiplier range is empty"
        );
        assert!(
            (offset_min * min_multiplier).round() >= f64::from(self.min_channel_delta),
            "Smallest offset would fall below the channel delta floor"
        );
        self.offset_min = offset_min;
        self.offset_span = offset_span;
        self.multiplier_per_point = per_point;
        self.min_multiplier = min_multiplier;
        self.max_multiplier = max_multiplier;
        self
    }

    /// Multiplier curve over score.
    #[must_use]
    pub fn multiplier_curve(&self) -> LinearCurve {
        LinearCurve::new(
            self.max_multiplier,
            self.multiplier_per_point,
            self.min_multiplier,
            self.max_multiplier,
        )
    }

    /// Per-channel offset range for a round played at `score`.
    #[must_use]
    pub fn offset_range(&self, score: i64) -> std::ops::Range<f64> {
        let m = self.multiplier_curve().at(score);
        (self.offset_min * m)..((self.offset_min + self.offset_span) * m)
    }
}
