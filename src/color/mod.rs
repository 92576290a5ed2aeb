//! Color model: 24-bit RGB, hex encoding, luminance, perturbation.
//!
//! `hex_to_luminance` is the one function offered to outside color-format
//! tooling. Everything else serves the round generators.

mod generate;
mod luminance;
mod rgb;

pub use generate::{perturb_color, random_color};
pub use luminance::{hex_to_luminance, relative_luminance, srgb_to_linear};
pub use rgb::Rgb;
