//! Color pairs: identical or subtly different.

use serde::{Deserialize, Serialize};

use super::config::SimilarityConfig;
use crate::color::{perturb_color, random_color, Rgb};
use crate::core::{GameError, GameRng, MAX_GENERATION_ATTEMPTS};

/// Two colors shown side by side, plus whether they are the same.
///
/// `same` is decided when the pair is drawn and is the judge's only
/// source of truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub left: Rgb,
    pub right: Rgb,
    pub same: bool,
}

impl ColorPair {
    /// An identical pair.
    #[must_use]
    pub fn identical(color: Rgb) -> Self {
        Self {
            left: color,
            right: color,
            same: true,
        }
    }

    /// A pair of two different colors.
    ///
    /// # Panics
    ///
    /// Panics if the colors are equal.
    #[must_use]
    pub fn different(left: Rgb, right: Rgb) -> Self {
        assert!(left != right, "Different pair needs two distinct colors");
        Self {
            left,
            right,
            same: false,
        }
    }

    /// Draw the pair for a round played at `score`.
    ///
    /// A different pair is redrawn until some channel moved by at least
    /// `min_channel_delta` (clamping at 0 or 255 can eat an offset).
    pub fn generate(config: &SimilarityConfig, score: i64, rng: &mut GameRng) -> Result<Self, GameError> {
        let left = random_color(rng);
        if rng.gen_bool(config.same_probability) {
            tracing::debug!(score, "similarity pair: same");
            return Ok(Self::identical(left));
        }

        let magnitude = config.offset_range(score);
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let right = perturb_color(left, magnitude.clone(), rng);
            if left.max_channel_delta(right) >= config.min_channel_delta {
                tracing::debug!(score, ?magnitude, "similarity pair: different");
                return Ok(Self::different(left, right));
            }
            tracing::trace!(attempt, "similarity perturbation swallowed by clamping");
        }

        tracing::warn!(attempts = MAX_GENERATION_ATTEMPTS, "similarity generation exhausted");
        Err(GameError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}
