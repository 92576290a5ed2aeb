//! Session trait for game implementations.
//!
//! Every game exposes the same event-driven shape:
//! round generator, player action, judge, score/difficulty update, next round.
//! `Session` is the seam a presentation layer drives; it never interprets
//! game-specific concepts directly.

pub mod session;

pub use session::Session;
