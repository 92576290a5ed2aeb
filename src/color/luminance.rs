//! Relative luminance (sRGB, Rec. 709 weights).
//!
//! Luminance is the ground-truth key of the ordering game, so the transfer
//! function and weights below must stay bit-for-bit stable.

use super::rgb::Rgb;
use crate::core::GameError;

const WEIGHT_R: f64 = 0.2126;
const WEIGHT_G: f64 = 0.7152;
const WEIGHT_B: f64 = 0.0722;

/// Inverse sRGB transfer for one channel normalized to [0, 1].
#[must_use]
pub fn srgb_to_linear(s: f64) -> f64 {
    if s <= 0.04045 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0, 1].
///
/// ```
/// use chroma_games::color::{relative_luminance, Rgb};
///
/// assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
/// assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let lin = |c: u8| srgb_to_linear(f64::from(c) / 255.0);
    WEIGHT_R * lin(color.r) + WEIGHT_G * lin(color.g) + WEIGHT_B * lin(color.b)
}

/// Luminance of a `"#rrggbb"` string.
///
/// Total over well-formed hex; anything else is an `InvalidHex` error.
pub fn hex_to_luminance(hex: &str) -> Result<f64, GameError> {
    Rgb::from_hex(hex).map(relative_luminance)
}

impl Rgb {
    /// Relative luminance of this color.
    #[must_use]
    pub fn luminance(self) -> f64 {
        relative_luminance(self)
    }
}
