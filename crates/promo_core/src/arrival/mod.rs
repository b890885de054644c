//! Play-arrival distributions over a time window.
//!
//! A distribution produces random instants inside a [`TimeWindow`] according
//! to a density `f(t)`. Two sampling strategies are available: generic
//! acceptance-rejection (works for any bounded density, see
//! [`RejectionSampler`]) and closed-form CDF inversion (O(1) per draw, for
//! densities that implement [`InvertibleCdf`]).

mod flat;
mod power_law;
mod rejection;

pub use flat::FlatArrival;
pub use power_law::PowerLawArrival;
pub use rejection::RejectionSampler;

use rand::Rng;

use crate::error::EngineError;
use crate::random::uniform_unit;
use crate::window::TimeWindow;

/// A (possibly unnormalized) play-arrival density over a time window.
pub trait ArrivalDensity {
    /// Evaluate the density at instant `t`. Multiplied by a small time
    /// interval this gives the probability of a play landing in it.
    fn density(&self, window: &TimeWindow, t: f64) -> f64;

    /// An upper bound on the density over the window, if one is known.
    ///
    /// Rejection sampling needs this bound; densities that are monotone (like
    /// the power law) can derive it, others return `None` and require the
    /// sampler to be configured with an explicit bound.
    fn max_density(&self, _window: &TimeWindow) -> Option<f64> {
        None
    }
}

/// A density with a known, analytically invertible CDF.
///
/// Implementors get `draw_inversion` for free: draw a uniform CDF value and
/// map it back through the inverse. Faster than rejection sampling but
/// requires the closed form.
pub trait InvertibleCdf: ArrivalDensity {
    /// The CDF evaluated at the window's current instant; in `[0, 1]` while
    /// the current instant is inside the window.
    fn cumulative(&self, window: &TimeWindow) -> f64;

    /// The instant at which the CDF reaches `p`. Fails unless `0 <= p <= 1`.
    fn inverse_cumulative(&self, window: &TimeWindow, p: f64) -> Result<f64, EngineError>;

    /// Draw one instant via the inversion method.
    fn draw_inversion<R: Rng + ?Sized>(
        &self,
        window: &TimeWindow,
        rng: &mut R,
        resolution: u32,
    ) -> Result<f64, EngineError> {
        let p = uniform_unit(rng, resolution);
        self.inverse_cumulative(window, p)
    }
}
