//! Judging a same/different answer.

use serde::{Deserialize, Serialize};

use super::round::ColorPair;

/// Result of one answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityOutcome {
    pub pair: ColorPair,
    /// The player's claim: "these are the same".
    pub said_same: bool,
    pub correct: bool,
    /// +1 when correct, -1 otherwise.
    pub gained: i64,
}

/// Compare the player's claim with the pair's label.
#[must_use]
pub fn judge_answer(pair: ColorPair, said_same: bool) -> SimilarityOutcome {
    let correct = pair.same == said_same;
    SimilarityOutcome {
        pair,
        said_same,
        correct,
        gained: if correct { 1 } else { -1 },
    }
}
