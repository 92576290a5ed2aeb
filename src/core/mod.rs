//! Core building blocks: RNG, ids, session state, scheduling, difficulty, errors.
//!
//! Nothing here knows about a particular game. Each game engine owns its
//! own `GameRng`, `Scheduler` and `SessionState`; no state is shared
//! between sessions.

pub mod difficulty;
pub mod error;
pub mod id;
pub mod rng;
pub mod scheduler;
pub mod state;

pub use difficulty::LinearCurve;
pub use error::GameError;
pub use id::{SwatchId, SwatchIdAllocator};
pub use rng::{GameRng, GameRngState};
pub use scheduler::{Cadence, Firings, Scheduler, TaskHandle, TaskId};
pub use state::{Phase, SessionState};

/// Upper bound on rejection-sampling attempts for a single round.
///
/// Domain floors make rejection rare, so hitting this bound indicates a
/// misconfigured generator rather than bad luck.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;
