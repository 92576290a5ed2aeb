//! Ordering game integration tests.
//!
//! These tests drive `OrderingSession` through its public API and the
//! `Session` trait, on both fixed and generated rounds.

use chroma_games::core::{GameError, Phase, SwatchId};
use chroma_games::games::ordering::{
    Nudge, OrderingConfig, OrderingEvent, OrderingRound, OrderingSession, Swatch, Verdict,
};
use chroma_games::{Rgb, Session};

/// Five grays, darkest first, ids 0..5.
fn five_grays() -> OrderingRound {
    let grays = ["#111111", "#444444", "#777777", "#aaaaaa", "#eeeeee"];
    OrderingRound::from_swatches(
        grays
            .iter()
            .enumerate()
            .map(|(i, hex)| Swatch::new(SwatchId::new(i as u32), Rgb::from_hex(hex).unwrap())),
    )
    .unwrap()
}

fn ids(raw: &[u32]) -> Vec<SwatchId> {
    raw.iter().copied().map(SwatchId::new).collect()
}

fn gray_session(arrangement: &[u32]) -> OrderingSession {
    OrderingSession::with_round(OrderingConfig::default(), 42, five_grays(), &ids(arrangement))
        .unwrap()
}

// =============================================================================
// Judging
// =============================================================================

/// Submitting the luminance order is a perfect score.
#[test]
fn test_perfect_order_scores_100() {
    let mut session = gray_session(&[3, 0, 4, 1, 2]);

    let outcome = session.submit_order(&ids(&[0, 1, 2, 3, 4])).unwrap();

    assert_eq!(outcome.accuracy, 100);
    assert_eq!(outcome.verdict, Verdict::Perfect);
    assert_eq!(session.state().score, 100);
    assert_eq!(session.state().phase, Phase::Judged);
}

/// A rotation has no swatch in its place.
#[test]
fn test_rotation_scores_zero() {
    let mut session = gray_session(&[1, 2, 3, 4, 0]);

    let outcome = session.check();

    assert_eq!(outcome.accuracy, 0);
    assert_eq!(outcome.correct, 0);
    assert!(outcome.positions.iter().all(|&p| !p));
    assert_eq!(outcome.verdict, Verdict::NeedsPractice);
}

/// Partial credit is the rounded share of correct positions.
#[test]
fn test_partial_credit() {
    // Positions 0, 1 and 2 correct: 3 of 5
    let mut session = gray_session(&[0, 1, 2, 4, 3]);

    let outcome = session.check();

    assert_eq!(outcome.correct, 3);
    assert_eq!(outcome.accuracy, 60);
    assert_eq!(outcome.verdict, Verdict::NeedsPractice);
    assert_eq!(
        outcome.verdict.message(outcome.accuracy),
        "Keep practicing! Accuracy: 60%"
    );
}

/// Checking twice without moving gives the same outcome.
#[test]
fn test_check_is_idempotent() {
    let mut session = gray_session(&[0, 2, 1, 3, 4]);

    let first = session.check();
    let second = session.check();

    assert_eq!(first, second);
    assert_eq!(session.history().len(), 2);
}

/// The ground truth is the generation-time solution, not the board.
#[test]
fn test_solution_survives_rearrangement() {
    let mut session = gray_session(&[4, 3, 2, 1, 0]);
    let before = session.round().solution().to_vec();

    session.move_swatch(4, 0).unwrap();
    session.nudge(2, Nudge::Up).unwrap();

    assert_eq!(session.round().solution(), before.as_slice());
}

// =============================================================================
// Rearranging
// =============================================================================

/// Drag-and-drop reproduces the solution from a scrambled board.
#[test]
fn test_moves_reach_solution() {
    let mut session = gray_session(&[4, 3, 2, 1, 0]);

    session.move_swatch(4, 0).unwrap(); // 0 4 3 2 1
    session.move_swatch(4, 1).unwrap(); // 0 1 4 3 2
    session.move_swatch(4, 2).unwrap(); // 0 1 2 4 3
    session.nudge(4, Nudge::Up).unwrap(); // 0 1 2 3 4

    assert_eq!(session.arrangement(), ids(&[0, 1, 2, 3, 4]).as_slice());
    assert_eq!(session.check().accuracy, 100);
}

/// Moving after a check reopens the round.
#[test]
fn test_move_after_check_reopens() {
    let mut session = gray_session(&[1, 0, 2, 3, 4]);
    session.check();
    assert!(session.is_checked());

    session.nudge(0, Nudge::Down).unwrap();

    assert!(!session.is_checked());
    assert_eq!(session.state().phase, Phase::Active);
}

/// Nudges at either end are no-ops.
#[test]
fn test_nudge_at_edges() {
    let mut session = gray_session(&[2, 0, 1, 3, 4]);
    let before = session.arrangement().to_vec();

    session.nudge(0, Nudge::Up).unwrap();
    session.nudge(4, Nudge::Down).unwrap();

    assert_eq!(session.arrangement(), before.as_slice());
}

/// Out-of-range moves are rejected and leave the board alone.
#[test]
fn test_move_out_of_range() {
    let mut session = gray_session(&[2, 0, 1, 3, 4]);
    let before = session.arrangement().to_vec();

    let err = session.move_swatch(1, 5).unwrap_err();

    assert_eq!(err, GameError::MoveOutOfRange { from: 1, to: 5, len: 5 });
    assert_eq!(session.arrangement(), before.as_slice());
}

/// Submissions must be permutations of the round's ids.
#[test]
fn test_submit_rejects_bad_arrangements() {
    let mut session = gray_session(&[0, 1, 2, 3, 4]);

    assert_eq!(
        session.submit_order(&ids(&[0, 1, 2])),
        Err(GameError::InvalidArrangement { expected: 5, got: 3 })
    );
    assert_eq!(
        session.submit_order(&ids(&[0, 1, 2, 3, 9])),
        Err(GameError::UnknownSwatch(SwatchId::new(9)))
    );
    assert_eq!(
        session.submit_order(&ids(&[0, 1, 2, 3, 3])),
        Err(GameError::DuplicateSwatch(SwatchId::new(3)))
    );
    assert!(session.history().is_empty());
}

/// The hint names the darkest and lightest swatches.
#[test]
fn test_hint_names_ends() {
    let session = gray_session(&[3, 1, 4, 0, 2]);

    let hint = session.hint().unwrap();

    assert_eq!(hint.first, SwatchId::new(0));
    assert_eq!(hint.last, SwatchId::new(4));
}

// =============================================================================
// Rounds
// =============================================================================

/// Generated rounds respect the swatch count and uniqueness floor.
#[test]
fn test_generated_rounds_in_bounds() {
    let config = OrderingConfig::default();
    let mut session = OrderingSession::new(config.clone(), 7).unwrap();

    for _ in 0..50 {
        let round = session.round();
        assert!(round.len() >= config.min_unique);
        assert!(round.len() <= config.max_swatches);

        let mut solution = round.solution().to_vec();
        let mut arrangement = session.arrangement().to_vec();
        solution.sort();
        arrangement.sort();
        assert_eq!(solution, arrangement);

        session.new_round().unwrap();
    }
}

/// The solution is ascending in luminance.
#[test]
fn test_solution_ascends() {
    let session = OrderingSession::new(OrderingConfig::default(), 11).unwrap();
    let round = session.round();

    let lums: Vec<f64> = round
        .solution()
        .iter()
        .map(|&id| round.swatch(id).unwrap().luminance)
        .collect();

    assert!(lums.windows(2).all(|w| w[0] <= w[1]));
}

/// A new round clears the score and never reuses ids.
#[test]
fn test_new_round_resets_score_and_ids() {
    let mut session = OrderingSession::new(OrderingConfig::default(), 3).unwrap();
    let solution = session.round().solution().to_vec();
    session.submit_order(&solution).unwrap();
    assert_eq!(session.state().score, 100);

    let old_ids = solution;
    session.new_round().unwrap();

    assert_eq!(session.state().score, 0);
    assert_eq!(session.state().round_index, 1);
    assert!(session.last_outcome().is_none());
    assert!(session
        .round()
        .solution()
        .iter()
        .all(|id| !old_ids.contains(id)));
}

/// Same seed, same rounds.
#[test]
fn test_seeded_sessions_match() {
    let mut a = OrderingSession::new(OrderingConfig::default(), 99).unwrap();
    let mut b = OrderingSession::new(OrderingConfig::default(), 99).unwrap();

    for _ in 0..5 {
        assert_eq!(a.round(), b.round());
        assert_eq!(a.arrangement(), b.arrangement());
        a.new_round().unwrap();
        b.new_round().unwrap();
    }
}

// =============================================================================
// Session trait
// =============================================================================

/// `transition` leaves the original session untouched.
#[test]
fn test_transition_is_pure() {
    let session = gray_session(&[1, 0, 2, 3, 4]);

    let (next, outcome) = session.transition(OrderingEvent::Check).unwrap();

    assert_eq!(outcome.unwrap().accuracy, 60);
    assert_eq!(next.state().phase, Phase::Judged);
    assert_eq!(session.state().phase, Phase::Active);
    assert!(session.history().is_empty());
}

/// Replaying a drag and a check collects one outcome.
#[test]
fn test_replay_events() {
    let mut session = gray_session(&[1, 0, 2, 3, 4]);

    let outcomes = session
        .replay([
            OrderingEvent::Move { from: 1, to: 0 },
            OrderingEvent::Check,
            OrderingEvent::NewRound,
        ])
        .unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].accuracy, 100);
    assert_eq!(session.state().round_index, 1);
    assert!(!session.is_terminal());
}

/// Outcomes serialize for a presentation layer.
#[test]
fn test_outcome_serializes() {
    let mut session = gray_session(&[0, 1, 2, 4, 3]);
    let outcome = session.check();

    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["accuracy"], 60);
    assert_eq!(json["verdict"], "NeedsPractice");
    assert_eq!(json["positions"], serde_json::json!([true, true, true, false, false]));

    let swatch = serde_json::to_value(&session.round().swatches()[0]).unwrap();
    assert_eq!(swatch["color"], "#111111");
}
