//! Session trait for game implementations.
//!
//! Games implement `Session` to define:
//! - Which events they accept
//! - How an event changes the session
//! - When the session is over

use crate::core::{GameError, Phase, SessionState};

/// Event-driven game session.
///
/// The presentation layer feeds discrete events (ticks, input, round
/// requests) and renders `state()` plus the game's current round.
///
/// ## Implementation Notes
///
/// - `handle`: Must be deterministic given the session's seed
/// - `handle`: Rejected events return an error and leave the session untouched
/// - `is_terminal`: Default reads `Phase::Ended` from the state
pub trait Session {
    /// Input the session reacts to.
    type Event;

    /// What a judged event reports back (accuracy, points gained, ...).
    type Outcome;

    /// Current score, round counter and phase.
    fn state(&self) -> &SessionState;

    /// Apply an event.
    ///
    /// Returns `Some(outcome)` when the event produced a judgement,
    /// `None` for events that only move the session along.
    fn handle(&mut self, event: Self::Event) -> Result<Option<Self::Outcome>, GameError>;

    /// Check if the session is over.
    fn is_terminal(&self) -> bool {
        self.state().phase == Phase::Ended
    }

    // === Convenience Methods ===

    /// Reducer form: `(session, event) -> session`.
    ///
    /// Leaves `self` untouched and returns the successor session.
    fn transition(&self, event: Self::Event) -> Result<(Self, Option<Self::Outcome>), GameError>
    where
        Self: Clone,
    {
        let mut next = self.clone();
        let outcome = next.handle(event)?;
        Ok((next, outcome))
    }

    /// Apply events in order, collecting every outcome.
    ///
    /// Stops at the first rejected event.
    fn replay<I>(&mut self, events: I) -> Result<Vec<Self::Outcome>, GameError>
    where
        I: IntoIterator<Item = Self::Event>,
    {
        let mut outcomes = Vec::new();
        for event in events {
            if let Some(outcome) = self.handle(event)? {
                outcomes.push(outcome);
            }
        }
        Ok(outcomes)
    }
}
