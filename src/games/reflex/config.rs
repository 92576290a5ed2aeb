//! Reflex game configuration.

use serde::{Deserialize, Serialize};

use crate::core::LinearCurve;

/// Tunables for the stop-in-the-target game.
///
/// The target width follows `clamp(round(base_width - width_per_point * score),
/// min_width, max_width)`, in percent of the track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReflexConfig {
    /// Target width at score 0.
    pub base_width: f64,

    /// Width lost per point of score.
    pub width_per_point: f64,

    /// Narrowest target. Must be positive.
    pub min_width: f64,

    /// Widest target (reached with negative scores).
    pub max_width: f64,

    /// Marker speed, percent of the track per millisecond.
    pub speed_per_ms: f64,

    /// Points for a dead-center stop.
    pub max_points: i64,

    /// Points for stopping outside the target.
    pub miss_penalty: i64,
}

impl Default for ReflexConfig {
    fn default() -> Self {
        Self {
            base_width: 20.0,
            width_per_point: 0.2,
            min_width: 6.0,
            max_width: 50.0,
            speed_per_ms: 0.10,
            max_points: 100,
            miss_penalty: -20,
        }
    }
}

impl ReflexConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width curve.
    #[must_use]
    pub fn with_width(mut self, base: f64, per_point: f64, min: f64, max: f64) -> Self {
        assert!(min > 0.0, "Target width floor must be positive");
        assert!(max < 100.0, "Target must fit inside the track");
        assert!(per_point >= 0.0, "Target must not widen as score rises");
        assert!(min <= max, "Width range is empty");
        self.base_width = base;
        self.width_per_point = per_point;
        self.min_width = min;
        self.max_width = max;
        self
    }

    /// Set the marker speed.
    #[must_use]
    pub fn with_speed(mut self, percent_per_ms: f64) -> Self {
        assert!(percent_per_ms > 0.0, "Marker must move");
        self.speed_per_ms = percent_per_ms;
        self
    }

    /// Set the miss penalty.
    #[must_use]
    pub fn with_miss_penalty(mut self, penalty: i64) -> Self {
        self.miss_penalty = penalty;
        self
    }

    /// Width curve over score.
    #[must_use]
    pub fn width_curve(&self) -> LinearCurve {
        LinearCurve::new(self.base_width, self.width_per_point, self.min_width, self.max_width)
    }

    /// Target width for the next round at `score`.
    #[must_use]
    pub fn width_for(&self, score: i64) -> f64 {
        self.width_curve().at_rounded(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_width_curve() {
        let config = ReflexConfig::default();
        assert_eq!(config.width_for(0), 20.0);
        assert_eq!(config.width_for(10), 18.0);
        assert_eq!(config.width_for(50), 10.0);
        // plateau
        assert_eq!(config.width_for(70), 6.0);
        assert_eq!(config.width_for(5_000), 6.0);
        // widening is capped
        assert_eq!(config.width_for(-1_000), 50.0);
    }

    #[test]
    #[should_panic(expected = "floor must be positive")]
    fn test_zero_floor_rejected() {
        let _ = ReflexConfig::new().with_width(20.0, 0.2, 0.0, 50.0);
    }

    #[test]
    #[should_panic(expected = "Marker must move")]
    fn test_zero_speed_rejected() {
        let _ = ReflexConfig::new().with_speed(0.0);
    }
}
