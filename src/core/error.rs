//! Error types for the game engines.

use thiserror::Error;

use super::id::SwatchId;
use super::state::Phase;

/// Errors produced at the session boundary.
///
/// Judges, luminance and difficulty curves are total and never fail.
/// These variants cover events the presentation layer sends that do not
/// fit the current session, plus exhausted rejection sampling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A color string could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A submitted ordering has the wrong number of swatches.
    #[error("arrangement has {got} swatches, round has {expected}")]
    InvalidArrangement { expected: usize, got: usize },

    /// A submitted ordering names a swatch that is not in the round.
    #[error("{0} is not part of the current round")]
    UnknownSwatch(SwatchId),

    /// A submitted ordering names the same swatch twice.
    #[error("{0} appears more than once in the arrangement")]
    DuplicateSwatch(SwatchId),

    /// A reorder index was outside the arrangement.
    #[error("cannot move swatch from {from} to {to} in an arrangement of {len}")]
    MoveOutOfRange { from: usize, to: usize, len: usize },

    /// No swatch IDs are left to allocate.
    #[error("swatch id space exhausted")]
    IdsExhausted,

    /// Round generation could not satisfy its floors.
    #[error("round generation failed after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// The session has ended and accepts no further answers.
    #[error("session has ended")]
    SessionEnded,

    /// The event is not accepted in the current phase.
    #[error("event requires phase {expected:?}, session is {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hex_includes_input() {
        let err = GameError::InvalidHex("#zzzzzz".into());
        let msg = format!("{err}");
        assert!(msg.contains("#zzzzzz"), "missing input in: {msg}");
    }

    #[test]
    fn unknown_swatch_names_the_swatch() {
        let msg = GameError::UnknownSwatch(SwatchId(9)).to_string();
        assert!(msg.contains("swatch-9"), "missing id in: {msg}");
    }

    #[test]
    fn move_out_of_range_includes_indices() {
        let msg = GameError::MoveOutOfRange { from: 1, to: 12, len: 5 }.to_string();
        assert!(msg.contains("12") && msg.contains('5'), "got: {msg}");
    }

    #[test]
    fn wrong_phase_names_both_phases() {
        let msg = GameError::WrongPhase {
            expected: Phase::Judged,
            actual: Phase::Active,
        }
        .to_string();
        assert!(msg.contains("Judged") && msg.contains("Active"), "got: {msg}");
    }

    #[test]
    fn game_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
        assert_send_sync::<GameError>();
    }
}
