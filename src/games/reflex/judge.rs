//! Scoring a stop against the target.

use serde::{Deserialize, Serialize};

use super::config::ReflexConfig;
use super::round::TargetInterval;

/// Result of one stop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReflexOutcome {
    /// Where the marker froze.
    pub position: f64,
    /// The target it was judged against.
    pub target: TargetInterval,
    /// Distance from the target's center.
    pub distance: f64,
    /// Inside `[start, end]`?
    pub hit: bool,
    /// Points added to the score (negative on a miss).
    pub gained: i64,
}

/// Points for stopping at `position`.
///
/// Inside the target: `max(1, round(max_points * (1 - distance / half_width)))`,
/// so dead center earns `max_points` and either edge earns 1.
/// Outside: `miss_penalty`.
#[must_use]
pub fn judge_stop(position: f64, target: TargetInterval, config: &ReflexConfig) -> ReflexOutcome {
    let distance = (position - target.center()).abs();
    let hit = target.contains(position);

    let gained = if hit {
        let closeness = 1.0 - distance / target.half_width();
        ((config.max_points as f64 * closeness).round() as i64).max(1)
    } else {
        config.miss_penalty
    };

    ReflexOutcome {
        position,
        target,
        distance,
        hit,
        gained,
    }
}
