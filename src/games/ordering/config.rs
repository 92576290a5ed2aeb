//! Ordering game configuration.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Tunables for the luminance-ordering game.
///
/// Defaults reproduce the classic game: 5 to 8 swatches per round, a
/// near-black and a near-white anchor, "good" from 70% accuracy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Smallest number of swatches requested per round.
    pub min_swatches: usize,

    /// Largest number of swatches requested per round.
    pub max_swatches: usize,

    /// Fewest unique swatches a round may have after deduplication.
    pub min_unique: usize,

    /// Dark anchor, always included.
    pub dark_anchor: Rgb,

    /// Light anchor, always included.
    pub light_anchor: Rgb,

    /// Accuracy (percent) at which a check counts as good.
    pub good_threshold: u8,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            min_swatches: 5,
            max_swatches: 8,
            min_unique: 3,
            dark_anchor: Rgb::new(0x11, 0x11, 0x11),
            light_anchor: Rgb::new(0xee, 0xee, 0xee),
            good_threshold: 70,
        }
    }
}

impl OrderingConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the range of swatches requested per round.
    #[must_use]
    pub fn with_swatch_range(mut self, min: usize, max: usize) -> Self {
        assert!(min >= 3, "Rounds need at least 3 swatches");
        assert!(min <= max, "Swatch range is empty");
        self.min_swatches = min;
        self.max_swatches = max;
        self.min_unique = self.min_unique.min(min);
        self
    }

    /// Set the deduplication floor.
    #[must_use]
    pub fn with_min_unique(mut self, min_unique: usize) -> Self {
        assert!(min_unique >= 3, "Rounds need at least 3 unique swatches");
        assert!(
            min_unique <= self.min_swatches,
            "Unique floor cannot exceed the smallest round"
        );
        self.min_unique = min_unique;
        self
    }

    /// Set the anchor colors.
    #[must_use]
    pub fn with_anchors(mut self, dark: Rgb, light: Rgb) -> Self {
        assert!(dark != light, "Anchors must differ");
        self.dark_anchor = dark;
        self.light_anchor = light;
        self
    }

    /// Set the "good" accuracy threshold.
    #[must_use]
    pub fn with_good_threshold(mut self, percent: u8) -> Self {
        assert!(percent <= 100, "Threshold is a percentage");
        self.good_threshold = percent;
        self
    }
}
