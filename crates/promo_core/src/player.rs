//! Single-play resolution.

use rand::Rng;

use crate::random::{uniform_unit, DEFAULT_RESOLUTION};
use crate::win::{PlayCounters, WinModel};
use crate::window::TimeWindow;

/// Resolves one play against a win model as a single Bernoulli trial.
///
/// The model's raw odds are clamped to `[0, 1]` here; this is the documented
/// boundary where out-of-range odds (ahead-of-schedule negatives, behind-
/// schedule overshoots) become a usable probability. One uniform draw decides
/// the play, with no retry.
#[derive(Debug, Clone)]
pub struct Player<M: WinModel> {
    model: M,
    resolution: u32,
}

impl<M: WinModel> Player<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Resolve one play at the window's current instant. Returns `true` on a
    /// win. The caller updates and persists the counters afterwards.
    pub fn play<R: Rng + ?Sized>(
        &self,
        window: &TimeWindow,
        counters: &PlayCounters,
        rng: &mut R,
    ) -> bool {
        let odds = self.model.odds(window, counters).clamp(0.0, 1.0);
        uniform_unit(rng, self.resolution) < odds
    }
}
