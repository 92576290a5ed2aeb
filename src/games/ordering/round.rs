//! Ordering rounds: swatches plus their luminance-sorted solution.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::OrderingConfig;
use crate::color::{random_color, Rgb};
use crate::core::{GameError, GameRng, SwatchId, SwatchIdAllocator, MAX_GENERATION_ATTEMPTS};

/// Swatch list. Rounds hold at most 8 swatches by default, kept inline.
pub type Swatches = SmallVec<[Swatch; 8]>;

/// Id sequence, in arrangement or solution order.
pub type IdSequence = SmallVec<[SwatchId; 8]>;

/// A colored tile the player arranges.
///
/// Immutable once created. The luminance is computed once, at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub id: SwatchId,
    pub color: Rgb,
    pub luminance: f64,
}

impl Swatch {
    /// Create a swatch, computing its luminance.
    #[must_use]
    pub fn new(id: SwatchId, color: Rgb) -> Self {
        Self {
            id,
            color,
            luminance: color.luminance(),
        }
    }

    /// Hex form of the color.
    #[must_use]
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }
}

/// One ordering challenge.
///
/// `solution` is the swatch ids sorted ascending by luminance, ties kept
/// in generation order. It is fixed when the round is built and never
/// derived from the player's arrangement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderingRound {
    swatches: Swatches,
    solution: IdSequence,
}

impl OrderingRound {
    /// Build a round from explicit swatches.
    ///
    /// Fails with `DuplicateSwatch` if two swatches share an id.
    pub fn from_swatches<I>(swatches: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = Swatch>,
    {
        let swatches: Swatches = swatches.into_iter().collect();

        let mut seen = FxHashSet::default();
        for swatch in &swatches {
            if !seen.insert(swatch.id) {
                return Err(GameError::DuplicateSwatch(swatch.id));
            }
        }

        // Vec::sort_by is stable: equal luminance keeps insertion order
        let mut by_luminance: Vec<&Swatch> = swatches.iter().collect();
        by_luminance.sort_by(|a, b| a.luminance.total_cmp(&b.luminance));
        let solution = by_luminance.iter().map(|s| s.id).collect();

        Ok(Self { swatches, solution })
    }

    /// Generate a fresh round.
    ///
    /// Draws N in `[min_swatches, max_swatches]`, takes both anchors plus
    /// N-2 random colors and drops exact duplicates. A draw left with fewer
    /// than `min_unique` swatches is discarded and redrawn, up to
    /// `MAX_GENERATION_ATTEMPTS` times.
    pub fn generate(
        config: &OrderingConfig,
        ids: &mut SwatchIdAllocator,
        rng: &mut GameRng,
    ) -> Result<Self, GameError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let count = rng.gen_range_usize(config.min_swatches..=config.max_swatches);
            let colors = draw_unique_colors(config, count, rng);

            if colors.len() < config.min_unique {
                tracing::trace!(attempt, unique = colors.len(), "ordering draw below floor");
                continue;
            }

            return Self::from_swatches(colors.into_iter().map(|c| Swatch::new(ids.next_id(), c)));
        }

        tracing::warn!(attempts = MAX_GENERATION_ATTEMPTS, "ordering generation exhausted");
        Err(GameError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    /// Swatches in generation order.
    #[must_use]
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Correct arrangement, darkest first.
    #[must_use]
    pub fn solution(&self) -> &[SwatchId] {
        &self.solution
    }

    /// Number of swatches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Check if the round has no swatches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Look up a swatch by id.
    #[must_use]
    pub fn swatch(&self, id: SwatchId) -> Option<&Swatch> {
        self.swatches.iter().find(|s| s.id == id)
    }

    /// Check that `arrangement` is a permutation of this round's ids.
    pub fn validate_arrangement(&self, arrangement: &[SwatchId]) -> Result<(), GameError> {
        if arrangement.len() != self.len() {
            return Err(GameError::InvalidArrangement {
                expected: self.len(),
                got: arrangement.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for &id in arrangement {
            if self.swatch(id).is_none() {
                return Err(GameError::UnknownSwatch(id));
            }
            if !seen.insert(id) {
                return Err(GameError::DuplicateSwatch(id));
            }
        }
        Ok(())
    }
}

/// Anchors plus `count - 2` random colors, exact duplicates dropped.
fn draw_unique_colors(config: &OrderingConfig, count: usize, rng: &mut GameRng) -> SmallVec<[Rgb; 8]> {
    let mut seen = FxHashSet::default();
    let mut colors = SmallVec::new();

    let anchors = [config.dark_anchor, config.light_anchor];
    let randoms = (0..count.saturating_sub(2)).map(|_| random_color(rng));

    for color in anchors.into_iter().chain(randoms) {
        if seen.insert(color) {
            colors.push(color);
        }
    }
    colors
}
