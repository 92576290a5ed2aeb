//! Random colors and perturbations.

use std::ops::Range;

use super::rgb::Rgb;
use crate::core::GameRng;

/// Uniformly random color from `#000000` up to (excluding) `#ffffff`.
pub fn random_color(rng: &mut GameRng) -> Rgb {
    Rgb::from_u32(rng.gen_range_u32(0..0xFF_FFFF))
}

/// Nudge every channel by a signed random offset.
///
/// Each channel independently draws an offset magnitude uniformly from
/// `magnitude` and a random sign, then rounds and clamps to `[0, 255]`.
/// Clamping can swallow an offset at the channel extremes, so callers
/// that need a visible difference must check the result.
pub fn perturb_color(base: Rgb, magnitude: Range<f64>, rng: &mut GameRng) -> Rgb {
    let span = (magnitude.end - magnitude.start).max(0.0);
    let mut channel = |v: u8| {
        let offset = magnitude.start + rng.gen_unit() * span;
        let signed = if rng.gen_bool(0.5) { -offset } else { offset };
        (f64::from(v) + signed).round().clamp(0.0, 255.0) as u8
    };

    Rgb::new(channel(base.r), channel(base.g), channel(base.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_color_is_deterministic() {
        let mut a = GameRng::new(3);
        let mut b = GameRng::new(3);
        for _ in 0..20 {
            assert_eq!(random_color(&mut a), random_color(&mut b));
        }
    }

    #[test]
    fn zero_magnitude_is_identity() {
        let mut rng = GameRng::new(1);
        let base = Rgb::new(12, 130, 250);
        assert_eq!(perturb_color(base, 0.0..0.0, &mut rng), base);
    }

    #[test]
    fn offsets_stay_within_magnitude() {
        let mut rng = GameRng::new(99);
        let base = Rgb::new(128, 128, 128);
        for _ in 0..200 {
            let p = perturb_color(base, 4.0..16.0, &mut rng);
            for (a, b) in base.channels().iter().zip(p.channels().iter()) {
                let d = a.abs_diff(*b);
                assert!((4..=16).contains(&d), "delta {d} outside 4..=16");
            }
        }
    }

    #[test]
    fn clamps_at_extremes() {
        let mut rng = GameRng::new(5);
        for _ in 0..100 {
            // Any result is valid u8; the point is no overflow panic
            let p = perturb_color(Rgb::WHITE, 60.0..80.0, &mut rng);
            assert!(p.r == 255 || p.r <= 195);
        }
    }
}
