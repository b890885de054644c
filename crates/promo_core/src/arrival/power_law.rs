use std::sync::OnceLock;

use crate::error::EngineError;
use crate::window::TimeWindow;

use super::{ArrivalDensity, InvertibleCdf};

/// Power-law arrivals: `f(t) = c * (t - start)^a`.
///
/// The slope `a` must be non-negative; `a = 0` degenerates to the flat
/// distribution. The normalization `c` makes the density integrate to 1 over
/// the window and is computed lazily on first use, then memoized. That ties a
/// `PowerLawArrival` to the first window it is evaluated against; build a
/// fresh one per window.
#[derive(Debug)]
pub struct PowerLawArrival {
    slope: f64,
    normalization: OnceLock<f64>,
}

impl PowerLawArrival {
    /// Create a power-law distribution with slope `a >= 0`. Negative slopes
    /// are unsupported and fail here, before any draw.
    pub fn new(slope: f64) -> Result<Self, EngineError> {
        if slope < 0.0 {
            return Err(EngineError::InvalidConfig {
                field: "slope",
                value: slope,
            });
        }
        Ok(Self {
            slope,
            normalization: OnceLock::new(),
        })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// `c = (a + 1) / (end - start)^(a + 1)`, memoized on first use.
    fn normalization(&self, window: &TimeWindow) -> f64 {
        *self.normalization.get_or_init(|| {
            (self.slope + 1.0) / window.duration().powf(self.slope + 1.0)
        })
    }
}

impl Clone for PowerLawArrival {
    fn clone(&self) -> Self {
        // The clone starts with a fresh memo so it can bind to its own window.
        Self {
            slope: self.slope,
            normalization: OnceLock::new(),
        }
    }
}

impl ArrivalDensity for PowerLawArrival {
    fn density(&self, window: &TimeWindow, t: f64) -> f64 {
        self.normalization(window) * (t - window.start()).powf(self.slope)
    }

    fn max_density(&self, window: &TimeWindow) -> Option<f64> {
        // Monotonically non-decreasing for a >= 0, so the maximum sits at the
        // end of the window.
        Some(self.density(window, window.end()))
    }
}

impl InvertibleCdf for PowerLawArrival {
    fn cumulative(&self, window: &TimeWindow) -> f64 {
        let c = self.normalization(window);
        c * (window.current() - window.start()).powf(self.slope + 1.0) / (self.slope + 1.0)
    }

    fn inverse_cumulative(&self, window: &TimeWindow, p: f64) -> Result<f64, EngineError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(EngineError::CdfValueOutOfBounds(p));
        }
        let c = self.normalization(window);
        let a = self.slope;
        Ok(window.start() + (p * (a + 1.0) / c).powf(1.0 / (a + 1.0)))
    }
}
