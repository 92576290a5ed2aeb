//! Ordering game session.
//!
//! ## State machine
//!
//! One playing state with a `checked` overlay:
//! - `start` -> Active (new round, shuffled arrangement)
//! - Active --check--> Judged (score = accuracy)
//! - Judged --move--> Active (the old check no longer describes the board)
//! - any --new round--> Active (fresh round, score cleared)
//!
//! The session never ends on its own.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::OrderingConfig;
use super::judge::{judge_order, OrderingOutcome};
use super::round::{IdSequence, OrderingRound};
use crate::core::{GameError, GameRng, Phase, SessionState, SwatchId, SwatchIdAllocator};
use crate::rules::Session;

/// Direction for a single-step keyboard move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nudge {
    /// Toward the front (index - 1).
    Up,
    /// Toward the back (index + 1).
    Down,
}

/// Events the ordering session accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderingEvent {
    /// Replace the arrangement with the player's id sequence, then check it.
    Submit(Vec<SwatchId>),
    /// Check the current arrangement.
    Check,
    /// Drag-and-drop: take the swatch at `from` and insert it at `to`.
    Move { from: usize, to: usize },
    /// Move the swatch at `index` one step.
    Nudge { index: usize, direction: Nudge },
    /// Replace the round.
    NewRound,
}

/// Ids that belong at either end of the solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    /// Darkest swatch, goes first.
    pub first: SwatchId,
    /// Lightest swatch, goes last.
    pub last: SwatchId,
}

/// One check, kept for the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    pub round_index: u32,
    pub accuracy: u8,
}

/// Luminance-ordering game.
#[derive(Clone, Debug)]
pub struct OrderingSession {
    config: OrderingConfig,
    rng: GameRng,
    ids: SwatchIdAllocator,
    round: OrderingRound,
    arrangement: IdSequence,
    state: SessionState,
    last_outcome: Option<OrderingOutcome>,
    history: Vector<CheckRecord>,
}

impl OrderingSession {
    /// Start a session with its first round.
    pub fn new(config: OrderingConfig, seed: u64) -> Result<Self, GameError> {
        let mut rng = GameRng::new(seed).for_context("ordering");
        let mut ids = SwatchIdAllocator::new();
        let round = OrderingRound::generate(&config, &mut ids, &mut rng)?;

        let mut session = Self {
            config,
            rng,
            ids,
            arrangement: IdSequence::new(),
            round,
            state: SessionState::new(),
            last_outcome: None,
            history: Vector::new(),
        };
        session.shuffle_arrangement();
        tracing::debug!(seed, swatches = session.round.len(), "ordering session started");
        Ok(session)
    }

    /// Start a session on a fixed round, presented in the given order.
    ///
    /// The arrangement must be a permutation of the round's ids.
    pub fn with_round(
        config: OrderingConfig,
        seed: u64,
        round: OrderingRound,
        arrangement: &[SwatchId],
    ) -> Result<Self, GameError> {
        round.validate_arrangement(arrangement)?;
        // Keep later generated ids clear of the fixed round's ids
        let ids = match round.swatches().iter().map(|s| s.id).max() {
            Some(max) => SwatchIdAllocator::after(max).ok_or(GameError::IdsExhausted)?,
            None => SwatchIdAllocator::new(),
        };

        Ok(Self {
            config,
            rng: GameRng::new(seed).for_context("ordering"),
            ids,
            arrangement: arrangement.iter().copied().collect(),
            round,
            state: SessionState::new(),
            last_outcome: None,
            history: Vector::new(),
        })
    }

    /// Current round.
    #[must_use]
    pub fn round(&self) -> &OrderingRound {
        &self.round
    }

    /// Current arrangement, as the player sees it.
    #[must_use]
    pub fn arrangement(&self) -> &[SwatchId] {
        &self.arrangement
    }

    /// Outcome of the latest check in this round.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&OrderingOutcome> {
        self.last_outcome.as_ref()
    }

    /// Has the current arrangement been checked?
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.state.phase == Phase::Judged
    }

    /// Every check made in this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<CheckRecord> {
        &self.history
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Judge the current arrangement.
    ///
    /// Checking again without moving anything returns the same outcome.
    pub fn check(&mut self) -> OrderingOutcome {
        let outcome = judge_order(&self.round, &self.arrangement, self.config.good_threshold);

        self.state.score = i64::from(outcome.accuracy);
        self.state.phase = Phase::Judged;
        self.history.push_back(CheckRecord {
            round_index: self.state.round_index,
            accuracy: outcome.accuracy,
        });
        self.last_outcome = Some(outcome.clone());

        tracing::debug!(
            round = self.state.round_index,
            accuracy = outcome.accuracy,
            verdict = ?outcome.verdict,
            "ordering checked"
        );
        outcome
    }

    /// Adopt the player's arrangement and judge it.
    pub fn submit_order(&mut self, arrangement: &[SwatchId]) -> Result<OrderingOutcome, GameError> {
        self.round.validate_arrangement(arrangement)?;
        self.arrangement = arrangement.iter().copied().collect();
        Ok(self.check())
    }

    /// Take the swatch at `from` and insert it at `to`.
    pub fn move_swatch(&mut self, from: usize, to: usize) -> Result<(), GameError> {
        let len = self.arrangement.len();
        if from >= len || to >= len {
            return Err(GameError::MoveOutOfRange { from, to, len });
        }
        if from == to {
            return Ok(());
        }

        let moved = self.arrangement.remove(from);
        self.arrangement.insert(to, moved);
        self.reopen();
        Ok(())
    }

    /// Move the swatch at `index` one step. No-op at either end.
    pub fn nudge(&mut self, index: usize, direction: Nudge) -> Result<(), GameError> {
        let len = self.arrangement.len();
        let to = match direction {
            Nudge::Up => index.checked_sub(1),
            Nudge::Down => index.checked_add(1),
        };

        if index >= len {
            return Err(GameError::MoveOutOfRange {
                from: index,
                to: to.unwrap_or(index),
                len,
            });
        }
        match to.filter(|&to| to < len) {
            Some(to) => self.move_swatch(index, to),
            None => Ok(()),
        }
    }

    /// Replace the round with a freshly generated one.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        let round = OrderingRound::generate(&self.config, &mut self.ids, &mut self.rng)?;
        self.round = round;
        self.shuffle_arrangement();

        self.last_outcome = None;
        self.state.score = 0;
        self.state.advance_round();

        tracing::debug!(
            round = self.state.round_index,
            swatches = self.round.len(),
            "ordering round generated"
        );
        Ok(())
    }

    /// Which swatches belong first and last.
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        let solution = self.round.solution();
        Some(Hint {
            first: *solution.first()?,
            last: *solution.last()?,
        })
    }

    fn shuffle_arrangement(&mut self) {
        self.arrangement = self.round.swatches().iter().map(|s| s.id).collect();
        self.rng.shuffle(&mut self.arrangement);
    }

    fn reopen(&mut self) {
        if self.state.phase == Phase::Judged {
            self.state.phase = Phase::Active;
        }
    }
}

impl Session for OrderingSession {
    type Event = OrderingEvent;
    type Outcome = OrderingOutcome;

    fn state(&self) -> &SessionState {
        &self.state
    }

    fn handle(&mut self, event: OrderingEvent) -> Result<Option<OrderingOutcome>, GameError> {
        match event {
            OrderingEvent::Submit(ids) => self.submit_order(&ids).map(Some),
            OrderingEvent::Check => Ok(Some(self.check())),
            OrderingEvent::Move { from, to } => self.move_swatch(from, to).map(|()| None),
            OrderingEvent::Nudge { index, direction } => self.nudge(index, direction).map(|()| None),
            OrderingEvent::NewRound => self.new_round().map(|()| None),
        }
    }

    fn is_terminal(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::games::ordering::judge::Verdict;
    use crate::games::ordering::round::Swatch;

    fn grays() -> OrderingRound {
        OrderingRound::from_swatches(
            [0u8, 80, 160, 220, 255]
                .iter()
                .enumerate()
                .map(|(i, &l)| Swatch::new(SwatchId(i as u32), Rgb::new(l, l, l))),
        )
        .unwrap()
    }

    fn ids(raw: &[u32]) -> Vec<SwatchId> {
        raw.iter().copied().map(SwatchId).collect()
    }

    fn fixed_session(arrangement: &[u32]) -> OrderingSession {
        OrderingSession::with_round(OrderingConfig::default(), 7, grays(), &ids(arrangement)).unwrap()
    }

    #[test]
    fn test_new_session_is_active() {
        let session = OrderingSession::new(OrderingConfig::default(), 42).unwrap();
        assert_eq!(session.state().phase, Phase::Active);
        assert_eq!(session.state().round_index, 0);
        assert!(!session.is_checked());
        assert!(session.round().validate_arrangement(session.arrangement()).is_ok());
    }

    #[test]
    fn test_check_sets_score_and_phase() {
        let mut session = fixed_session(&[0, 1, 2, 4, 3]);
        let outcome = session.check();

        assert_eq!(outcome.accuracy, 60);
        assert_eq!(session.state().score, 60);
        assert!(session.is_checked());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_check_is_idempotent() {
        let mut session = fixed_session(&[3, 1, 0, 4, 2]);
        let first = session.check();
        let second = session.check();
        assert_eq!(first, second);
        assert_eq!(session.round().solution(), ids(&[0, 1, 2, 3, 4]).as_slice());
    }

    #[test]
    fn test_move_reopens_checked_round() {
        let mut session = fixed_session(&[1, 0, 2, 3, 4]);
        assert_eq!(session.check().accuracy, 60);

        session.move_swatch(1, 0).unwrap();
        assert_eq!(session.arrangement(), ids(&[0, 1, 2, 3, 4]).as_slice());
        assert_eq!(session.state().phase, Phase::Active);
        assert_eq!(session.check().verdict, Verdict::Perfect);
    }

    #[test]
    fn test_move_out_of_range() {
        let mut session = fixed_session(&[0, 1, 2, 3, 4]);
        assert_eq!(
            session.move_swatch(0, 5),
            Err(GameError::MoveOutOfRange { from: 0, to: 5, len: 5 })
        );
    }

    #[test]
    fn test_nudge_edges_are_noops() {
        let mut session = fixed_session(&[0, 1, 2, 3, 4]);
        session.nudge(0, Nudge::Up).unwrap();
        session.nudge(4, Nudge::Down).unwrap();
        assert_eq!(session.arrangement(), ids(&[0, 1, 2, 3, 4]).as_slice());

        session.nudge(2, Nudge::Down).unwrap();
        assert_eq!(session.arrangement(), ids(&[0, 1, 3, 2, 4]).as_slice());
        session.nudge(3, Nudge::Up).unwrap();
        assert_eq!(session.arrangement(), ids(&[0, 1, 2, 3, 4]).as_slice());

        assert!(session.nudge(9, Nudge::Up).is_err());
    }

    #[test]
    fn test_nudge_huge_index_is_out_of_range() {
        let mut session = fixed_session(&[0, 1, 2, 3, 4]);
        assert_eq!(
            session.nudge(usize::MAX, Nudge::Down),
            Err(GameError::MoveOutOfRange {
                from: usize::MAX,
                to: usize::MAX,
                len: 5
            })
        );
        assert!(matches!(
            session.nudge(usize::MAX, Nudge::Up),
            Err(GameError::MoveOutOfRange { .. })
        ));
        assert_eq!(session.arrangement(), ids(&[0, 1, 2, 3, 4]).as_slice());
    }

    #[test]
    fn test_fixed_round_with_large_ids() {
        let round = OrderingRound::from_swatches([
            Swatch::new(SwatchId(u32::MAX - 2), Rgb::BLACK),
            Swatch::new(SwatchId(u32::MAX - 1), Rgb::WHITE),
        ])
        .unwrap();
        let arrangement = round.solution().to_vec();
        let session =
            OrderingSession::with_round(OrderingConfig::default(), 7, round, &arrangement).unwrap();
        assert_eq!(session.round().len(), 2);

        let top = OrderingRound::from_swatches([Swatch::new(SwatchId(u32::MAX), Rgb::BLACK)]).unwrap();
        assert_eq!(
            OrderingSession::with_round(OrderingConfig::default(), 7, top, &[SwatchId(u32::MAX)])
                .unwrap_err(),
            GameError::IdsExhausted
        );
    }

    #[test]
    fn test_submit_rejects_foreign_ids() {
        let mut session = fixed_session(&[0, 1, 2, 3, 4]);
        let err = session.submit_order(&ids(&[0, 1, 2, 3, 99])).unwrap_err();
        assert_eq!(err, GameError::UnknownSwatch(SwatchId(99)));
        // Rejected submissions leave the arrangement alone
        assert_eq!(session.arrangement(), ids(&[0, 1, 2, 3, 4]).as_slice());
    }

    #[test]
    fn test_new_round_resets_overlay() {
        let mut session = fixed_session(&[0, 1, 2, 3, 4]);
        session.check();
        session.new_round().unwrap();

        assert_eq!(session.state().round_index, 1);
        assert_eq!(session.state().score, 0);
        assert!(!session.is_checked());
        assert!(session.last_outcome().is_none());
        // Fresh ids never collide with the fixed round's ids
        assert!(session.round().swatches().iter().all(|s| s.id.raw() >= 5));
    }

    #[test]
    fn test_hint() {
        let session = fixed_session(&[4, 3, 2, 1, 0]);
        assert_eq!(
            session.hint(),
            Some(Hint {
                first: SwatchId(0),
                last: SwatchId(4)
            })
        );
    }

    #[test]
    fn test_never_terminal() {
        let mut session = fixed_session(&[0, 1, 2, 3, 4]);
        session.handle(OrderingEvent::Check).unwrap();
        assert!(!session.is_terminal());
    }
}
