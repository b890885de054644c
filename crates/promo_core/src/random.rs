//! Resolution-limited uniform draws.
//!
//! Every random decision in the engine goes through a uniform draw over a
//! fixed number of distinguishable steps, scaled to `[0, 1]`. The default
//! resolution of one million steps is far larger than any realistic number of
//! plays, so quantization never shows up in draw histograms.

use rand::Rng;

/// Default number of distinguishable steps per uniform draw.
pub const DEFAULT_RESOLUTION: u32 = 1_000_000;

/// Draw a uniform value in `[0.0, 1.0]` with `resolution + 1` possible
/// outcomes.
pub fn uniform_unit<R: Rng + ?Sized>(rng: &mut R, resolution: u32) -> f64 {
    debug_assert!(resolution > 0, "resolution must be positive");
    f64::from(rng.gen_range(0..=resolution)) / f64::from(resolution)
}

/// Draw a uniform value in `[lo, hi]` at the given resolution.
pub fn uniform_between<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64, resolution: u32) -> f64 {
    lo + uniform_unit(rng, resolution) * (hi - lo)
}
