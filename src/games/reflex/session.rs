//! Reflex game session.
//!
//! ## State machine
//!
//! - Running (`Phase::Active`): every tick advances the marker through the
//!   session's frame task
//! - Running --stop--> Stopped (`Phase::Judged`): frame task released, stop judged
//! - Stopped --next--> Running: new target from the current score, marker at 0,
//!   frame task reacquired
//! - any --teardown--> Ended: frame task released for good, every later
//!   stop or next is rejected with `SessionEnded`
//!
//! Ticks while stopped or ended are no-ops: the frame handle is gone, so the
//! scheduler reports no firings.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::ReflexConfig;
use super::judge::{judge_stop, ReflexOutcome};
use super::round::{TargetInterval, TRACK_LENGTH};
use crate::core::{Cadence, GameError, GameRng, Phase, Scheduler, SessionState, TaskHandle};
use crate::rules::Session;

/// Events the reflex session accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReflexEvent {
    /// Animation frame with elapsed milliseconds.
    Tick(u64),
    /// Freeze the marker and judge.
    Stop,
    /// Start the next round.
    Next,
}

/// Stop-the-marker-in-the-target game.
#[derive(Clone, Debug)]
pub struct ReflexSession {
    config: ReflexConfig,
    rng: GameRng,
    scheduler: Scheduler,
    frame: Option<TaskHandle>,
    target: TargetInterval,
    position: f64,
    state: SessionState,
    last_outcome: Option<ReflexOutcome>,
    history: Vector<ReflexOutcome>,
}

impl ReflexSession {
    /// Start a session running on a generated target.
    pub fn new(config: ReflexConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed).for_context("reflex");
        let target = TargetInterval::generate(&config, 0, &mut rng);
        Self::start(config, rng, target)
    }

    /// Start a session running on a fixed first target.
    pub fn with_target(config: ReflexConfig, seed: u64, target: TargetInterval) -> Self {
        Self::start(config, GameRng::new(seed).for_context("reflex"), target)
    }

    fn start(config: ReflexConfig, rng: GameRng, target: TargetInterval) -> Self {
        let mut scheduler = Scheduler::new();
        let frame = scheduler.schedule_repeating(Cadence::EveryFrame);

        Self {
            config,
            rng,
            scheduler,
            frame: Some(frame),
            target,
            position: 0.0,
            state: SessionState::new(),
            last_outcome: None,
            history: Vector::new(),
        }
    }

    /// Current target.
    #[must_use]
    pub fn target(&self) -> TargetInterval {
        self.target
    }

    /// Marker position in `[0, 100)`.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Is the marker moving?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.phase == Phase::Active
    }

    /// Outcome of the latest stop.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&ReflexOutcome> {
        self.last_outcome.as_ref()
    }

    /// Every stop in this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ReflexOutcome> {
        &self.history
    }

    /// The session's task table.
    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &ReflexConfig {
        &self.config
    }

    /// Advance the marker by `delta_ms` of animation time.
    ///
    /// Returns the position after the tick. Does nothing once stopped.
    pub fn advance_tick(&mut self, delta_ms: u64) -> f64 {
        let Some(frame) = &self.frame else {
            return self.position;
        };

        let firings = self.scheduler.advance(frame, delta_ms);
        if firings.fired() {
            let travel = firings.elapsed_ms as f64 * self.config.speed_per_ms;
            self.position = (self.position + travel).rem_euclid(TRACK_LENGTH);
        }
        self.position
    }

    /// Freeze the marker and judge the stop.
    pub fn stop(&mut self) -> Result<ReflexOutcome, GameError> {
        self.expect_phase(Phase::Active)?;
        self.release_frame();

        let outcome = judge_stop(self.position, self.target, &self.config);
        self.state.add_score(outcome.gained);
        self.state.phase = Phase::Judged;
        self.last_outcome = Some(outcome);
        self.history.push_back(outcome);

        tracing::debug!(
            round = self.state.round_index,
            position = outcome.position,
            gained = outcome.gained,
            score = self.state.score,
            "reflex stop judged"
        );
        Ok(outcome)
    }

    /// Start the next round with a target sized from the current score.
    pub fn next(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Judged)?;

        self.target = TargetInterval::generate(&self.config, self.state.score, &mut self.rng);
        self.position = 0.0;
        self.last_outcome = None;
        self.state.advance_round();

        self.release_frame();
        self.frame = Some(self.scheduler.schedule_repeating(Cadence::EveryFrame));
        Ok(())
    }

    /// End the session: release the frame task and refuse further rounds.
    ///
    /// The session stays readable but frozen.
    pub fn teardown(&mut self) {
        self.release_frame();
        if !self.state.is_ended() {
            self.state.phase = Phase::Ended;
            tracing::info!(
                score = self.state.score,
                rounds = self.history.len(),
                "reflex session torn down"
            );
        }
    }

    fn release_frame(&mut self) {
        if let Some(frame) = self.frame.take() {
            self.scheduler.cancel(frame);
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.state.is_ended() {
            Err(GameError::SessionEnded)
        } else if self.state.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.state.phase,
            })
        }
    }
}

impl Session for ReflexSession {
    type Event = ReflexEvent;
    type Outcome = ReflexOutcome;

    fn state(&self) -> &SessionState {
        &self.state
    }

    fn handle(&mut self, event: ReflexEvent) -> Result<Option<ReflexOutcome>, GameError> {
        match event {
            ReflexEvent::Tick(delta_ms) => {
                self.advance_tick(delta_ms);
                Ok(None)
            }
            ReflexEvent::Stop => self.stop().map(Some),
            ReflexEvent::Next => self.next().map(|()| None),
        }
    }
}
