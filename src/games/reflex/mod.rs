//! Reflex stop: halt a moving marker inside a target band.
//!
//! - The marker sweeps the 0-100 track at constant speed, wrapping at 100
//! - Stopping dead center earns 100 points, either edge 1, a miss -20
//! - The band narrows as the score grows, down to a fixed floor

mod config;
mod judge;
mod round;
mod session;

pub use config::ReflexConfig;
pub use judge::{judge_stop, ReflexOutcome};
pub use round::{TargetInterval, TRACK_LENGTH};
pub use session::{ReflexEvent, ReflexSession};
