//! Position-by-position judging of an arrangement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::round::OrderingRound;
use crate::core::SwatchId;

/// How well an arrangement did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Every position correct.
    Perfect,
    /// At or above the good threshold.
    Good,
    /// Below the good threshold.
    NeedsPractice,
}

impl Verdict {
    /// Classify an accuracy percentage.
    #[must_use]
    pub fn from_accuracy(accuracy: u8, good_threshold: u8) -> Self {
        if accuracy >= 100 {
            Verdict::Perfect
        } else if accuracy >= good_threshold {
            Verdict::Good
        } else {
            Verdict::NeedsPractice
        }
    }

    /// Player-facing message.
    #[must_use]
    pub fn message(self, accuracy: u8) -> String {
        match self {
            Verdict::Perfect => "Perfect! Nailed the order.".to_string(),
            Verdict::Good => format!("Good job! Accuracy: {accuracy}%"),
            Verdict::NeedsPractice => format!("Keep practicing! Accuracy: {accuracy}%"),
        }
    }
}

/// Result of checking an arrangement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingOutcome {
    /// Percentage of positions holding the right swatch, rounded.
    pub accuracy: u8,
    /// Number of correct positions.
    pub correct: usize,
    /// Number of swatches in the round.
    pub total: usize,
    /// Per position: does it hold the right swatch.
    pub positions: SmallVec<[bool; 8]>,
    pub verdict: Verdict,
}

/// `round(100 * correct / total)`; 0 for an empty round.
#[must_use]
pub fn accuracy_percent(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (correct as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Compare `arrangement` with the round's solution position by position.
///
/// Pure: the round is only read, so judging the same arrangement twice
/// gives the same outcome.
#[must_use]
pub fn judge_order(round: &OrderingRound, arrangement: &[SwatchId], good_threshold: u8) -> OrderingOutcome {
    let solution = round.solution();
    let positions: SmallVec<[bool; 8]> = (0..solution.len())
        .map(|i| arrangement.get(i) == Some(&solution[i]))
        .collect();

    let correct = positions.iter().filter(|&&ok| ok).count();
    let total = round.len();
    let accuracy = accuracy_percent(correct, total);

    OrderingOutcome {
        accuracy,
        correct,
        total,
        positions,
        verdict: Verdict::from_accuracy(accuracy, good_threshold),
    }
}
