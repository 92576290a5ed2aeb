//! Target intervals on the 0-100 track.

use serde::{Deserialize, Serialize};

use super::config::ReflexConfig;
use crate::core::GameRng;

/// Track length in percent. Positions wrap modulo this.
pub const TRACK_LENGTH: f64 = 100.0;

/// Inclusive target `[start, end]` on the track.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetInterval {
    pub start: f64,
    pub end: f64,
}

impl TargetInterval {
    /// Create an interval.
    ///
    /// # Panics
    ///
    /// Panics if the interval is empty or leaves the track.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        assert!(start < end, "Target interval must have positive width");
        assert!(
            start >= 0.0 && end <= TRACK_LENGTH,
            "Target interval must lie on the track"
        );
        Self { start, end }
    }

    /// Generate the target for a round played at `score`.
    ///
    /// Width comes from the config's curve; the start is a whole percent
    /// drawn uniformly from `[0, 100 - width)`.
    pub fn generate(config: &ReflexConfig, score: i64, rng: &mut GameRng) -> Self {
        let width = config.width_for(score);
        let slots = (TRACK_LENGTH - width).max(1.0) as u32;
        let start = f64::from(rng.gen_range_u32(0..slots));

        tracing::debug!(score, width, start, "reflex target generated");
        Self::new(start, start + width)
    }

    /// `end - start`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Half of the width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width() / 2.0
    }

    /// Midpoint.
    #[must_use]
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Check if `position` is inside, boundaries included.
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.start && position <= self.end
    }
}

impl Default for TargetInterval {
    fn default() -> Self {
        Self::new(55.0, 70.0)
    }
}
