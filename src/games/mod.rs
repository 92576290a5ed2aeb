//! The three color games.
//!
//! - `ordering`: arrange swatches by luminance
//! - `reflex`: stop a moving marker inside a target band
//! - `similarity`: same-or-different color pairs against the clock
//!
//! Each game is self-contained: its own config, round generator, judge
//! and session. Sessions share no state with one another.

pub mod ordering;
pub mod reflex;
pub mod similarity;
