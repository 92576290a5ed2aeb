//! Luminance ordering: arrange swatches from darkest to lightest.
//!
//! - Each round has 5-8 swatches: a near-black and a near-white anchor
//!   plus random colors, exact duplicates removed
//! - The solution is fixed at generation: swatches sorted by luminance
//! - A check scores the share of positions holding the right swatch

mod config;
mod judge;
mod round;
mod session;

pub use config::OrderingConfig;
pub use judge::{accuracy_percent, judge_order, OrderingOutcome, Verdict};
pub use round::{IdSequence, OrderingRound, Swatch, Swatches};
pub use session::{CheckRecord, Hint, Nudge, OrderingEvent, OrderingSession};
