//! # chroma-games
//!
//! Round generation, judging and difficulty scaling for three casual
//! color games.
//!
//! ## Design Principles
//!
//! 1. **One Shape, Three Games**: every game runs
//!    round generator -> player action -> judge -> score/difficulty -> next round.
//!
//! 2. **Presentation-Agnostic**: sessions react to discrete events
//!    (ticks, answers, reorders) and expose `{round, SessionState}`.
//!    No rendering, input plumbing or real clocks live here.
//!
//! 3. **Fixed Ground Truth**: a round's answer is computed when the round
//!    is generated and never recomputed from player-mutated state.
//!
//! ## Architecture
//!
//! - **Deterministic**: each session owns a seeded `GameRng`; the same
//!   seed and the same events replay the same game.
//!
//! - **Revocable Scheduling**: continuous motion and countdowns run as
//!   tasks in a per-session `Scheduler`. Stopping, expiring or tearing
//!   down a session cancels its task, so late ticks cannot mutate it.
//!
//! - **Bounded Rejection Sampling**: generators redraw rounds that miss a
//!   floor (too few unique swatches, invisible perturbation) at most
//!   `MAX_GENERATION_ATTEMPTS` times.
//!
//! ## Modules
//!
//! - `core`: RNG, ids, session state, scheduler, difficulty curves, errors
//! - `color`: RGB, hex, luminance, perturbation
//! - `rules`: the `Session` trait
//! - `games`: ordering, reflex and similarity engines

pub mod color;
pub mod core;
pub mod games;
pub mod rules;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Cadence, GameError, GameRng, GameRngState, LinearCurve, Phase, Scheduler, SessionState,
    SwatchId, TaskHandle, MAX_GENERATION_ATTEMPTS,
};

pub use crate::color::{hex_to_luminance, perturb_color, random_color, relative_luminance, Rgb};

pub use crate::rules::Session;

pub use crate::games::ordering::{
    OrderingConfig, OrderingEvent, OrderingOutcome, OrderingRound, OrderingSession, Swatch, Verdict,
};
pub use crate::games::reflex::{ReflexConfig, ReflexEvent, ReflexOutcome, ReflexSession, TargetInterval};
pub use crate::games::similarity::{
    ColorPair, SimilarityConfig, SimilarityEvent, SimilarityOutcome, SimilaritySession,
};
