//! Session state shared by every game.
//!
//! `SessionState` is the small value the presentation layer renders next
//! to the current round: score, round counter and phase. Games mutate it
//! only in response to discrete events.

use serde::{Deserialize, Serialize};

/// Coarse lifecycle of a session.
///
/// Each game maps its own states onto these:
/// - Ordering: `Active` while arranging, `Judged` after a check
/// - Reflex: `Active` while running, `Judged` once stopped, `Ended` after teardown
/// - Similarity: `Active` while the countdown runs, `Ended` afterwards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The current round is accepting player input.
    #[default]
    Active,
    /// The current round has been judged.
    Judged,
    /// Terminal. No further input is accepted.
    Ended,
}

/// Score, round counter and phase of a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Running score. May be negative, no floor or ceiling.
    pub score: i64,

    /// Index of the current round (first round is 0).
    pub round_index: u32,

    /// Current phase.
    pub phase: Phase,
}

impl SessionState {
    /// Fresh state: score 0, first round, `Active`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to the running score.
    pub fn add_score(&mut self, points: i64) {
        self.score = self.score.saturating_add(points);
    }

    /// Move to the next round and reopen it for input.
    pub fn advance_round(&mut self) {
        self.round_index = self.round_index.wrapping_add(1);
        self.phase = Phase::Active;
    }

    /// Check whether the session is terminal.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == Phase::Ended
    }
}
