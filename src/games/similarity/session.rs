//! Similarity game session.
//!
//! ## State machine
//!
//! - Playing (`Phase::Active`): a 1-second countdown task runs; every answer
//!   is judged, scored, and immediately replaced by a new pair
//! - Playing --time expires--> Ended: countdown task released, answers rejected
//! - Playing/Ended --restart--> Playing: score and countdown reset
//! - any --teardown--> Ended for good: countdown released, answers and
//!   restarts rejected with `SessionEnded`
//!
//! The countdown length never depends on the score.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::SimilarityConfig;
use super::judge::{judge_answer, SimilarityOutcome};
use super::round::ColorPair;
use crate::core::{Cadence, GameError, GameRng, Phase, Scheduler, SessionState, TaskHandle};
use crate::rules::Session;

/// Countdown resolution.
pub const COUNTDOWN_PERIOD_MS: u64 = 1000;

/// Events the similarity session accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimilarityEvent {
    /// Elapsed wall time in milliseconds.
    Tick(u64),
    /// The player's claim that the two colors are the same (`true`) or not.
    Answer(bool),
    /// Start over.
    Restart,
}

/// Timed same-or-different game.
#[derive(Clone, Debug)]
pub struct SimilaritySession {
    config: SimilarityConfig,
    rng: GameRng,
    scheduler: Scheduler,
    countdown: Option<TaskHandle>,
    pair: ColorPair,
    time_left: u32,
    torn_down: bool,
    state: SessionState,
    history: Vector<SimilarityOutcome>,
}

impl SimilaritySession {
    /// Start a session with a full countdown and a first pair.
    pub fn new(config: SimilarityConfig, seed: u64) -> Result<Self, GameError> {
        let mut rng = GameRng::new(seed).for_context("similarity");
        let pair = ColorPair::generate(&config, 0, &mut rng)?;

        let mut scheduler = Scheduler::new();
        let countdown = scheduler.schedule_repeating(Cadence::Interval {
            period_ms: COUNTDOWN_PERIOD_MS,
        });

        Ok(Self {
            time_left: config.duration_secs,
            config,
            rng,
            scheduler,
            countdown: Some(countdown),
            pair,
            torn_down: false,
            state: SessionState::new(),
            history: Vector::new(),
        })
    }

    /// Pair currently on screen.
    #[must_use]
    pub fn pair(&self) -> ColorPair {
        self.pair
    }

    /// Whole seconds left on the countdown.
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Every answer in this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<SimilarityOutcome> {
        &self.history
    }

    /// The session's task table.
    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Run the countdown for `delta_ms`. Returns the seconds left.
    ///
    /// Reaching zero ends the session; time after that is ignored.
    pub fn advance_tick(&mut self, delta_ms: u64) -> u32 {
        let Some(countdown) = &self.countdown else {
            return self.time_left;
        };

        let firings = self.scheduler.advance(countdown, delta_ms);
        self.time_left = self.time_left.saturating_sub(firings.count);
        if self.time_left == 0 {
            self.end();
        }
        self.time_left
    }

    /// Judge an answer and move to the next pair.
    ///
    /// The next pair's difficulty uses the score including this answer, so
    /// the curve runs one answer ahead of the classic game.
    pub fn answer(&mut self, said_same: bool) -> Result<SimilarityOutcome, GameError> {
        if self.state.is_ended() {
            return Err(GameError::SessionEnded);
        }

        let outcome = judge_answer(self.pair, said_same);
        let score = self.state.score.saturating_add(outcome.gained);
        let next = ColorPair::generate(&self.config, score, &mut self.rng)?;

        self.state.add_score(outcome.gained);
        self.state.advance_round();
        self.history.push_back(outcome);
        self.pair = next;

        tracing::debug!(
            round = self.state.round_index,
            correct = outcome.correct,
            score = self.state.score,
            "similarity answer judged"
        );
        Ok(outcome)
    }

    /// Reset score and countdown and draw a fresh pair.
    pub fn restart(&mut self) -> Result<(), GameError> {
        if self.torn_down {
            return Err(GameError::SessionEnded);
        }
        let pair = ColorPair::generate(&self.config, 0, &mut self.rng)?;

        self.release_countdown();
        self.countdown = Some(self.scheduler.schedule_repeating(Cadence::Interval {
            period_ms: COUNTDOWN_PERIOD_MS,
        }));
        self.pair = pair;
        self.time_left = self.config.duration_secs;
        self.state = SessionState::new();
        self.history = Vector::new();
        Ok(())
    }

    /// End the session for good: release the countdown and refuse further
    /// answers and restarts. The session stays readable but frozen.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        if self.state.is_ended() {
            self.release_countdown();
        } else {
            self.end();
        }
    }

    fn end(&mut self) {
        self.release_countdown();
        self.state.phase = Phase::Ended;
        tracing::info!(
            score = self.state.score,
            answers = self.history.len(),
            "similarity session ended"
        );
    }

    fn release_countdown(&mut self) {
        if let Some(countdown) = self.countdown.take() {
            self.scheduler.cancel(countdown);
        }
    }
}

impl Session for SimilaritySession {
    type Event = SimilarityEvent;
    type Outcome = SimilarityOutcome;

    fn state(&self) -> &SessionState {
        &self.state
    }

    fn handle(&mut self, event: SimilarityEvent) -> Result<Option<SimilarityOutcome>, GameError> {
        match event {
            SimilarityEvent::Tick(delta_ms) => {
                self.advance_tick(delta_ms);
                Ok(None)
            }
            SimilarityEvent::Answer(said_same) => self.answer(said_same).map(Some),
            SimilarityEvent::Restart => self.restart().map(|()| None),
        }
    }
}
