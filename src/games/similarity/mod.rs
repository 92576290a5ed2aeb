//! Quick match: decide whether two colors are identical before time runs out.
//!
//! - Half the pairs are identical, half are perturbed per channel
//! - A correct answer is +1, a wrong one -1
//! - Perturbations shrink as the score grows, down to a visible floor
//! - The countdown is fixed at 30 seconds

mod config;
mod judge;
mod round;
mod session;

pub use config::SimilarityConfig;
pub use judge::{judge_answer, SimilarityOutcome};
pub use round::ColorPair;
pub use session::{SimilarityEvent, SimilaritySession, COUNTDOWN_PERIOD_MS};
