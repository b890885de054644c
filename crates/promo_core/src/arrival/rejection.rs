use rand::Rng;

use crate::error::EngineError;
use crate::random::{uniform_between, uniform_unit, DEFAULT_RESOLUTION};
use crate::window::TimeWindow;

use super::ArrivalDensity;

/// Acceptance threshold budget before the sampler gives up. A well-configured
/// density bound accepts within a handful of attempts; hitting this cap means
/// the bound is below the true density maximum.
const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Acceptance-rejection sampler for arbitrary bounded densities.
///
/// Draws a candidate instant uniformly over the window and a uniform
/// threshold in `[0, max_density]`, accepting the candidate when the
/// threshold falls under the density. Works for any [`ArrivalDensity`]; all
/// it needs is an upper bound on the density, either supplied explicitly via
/// [`with_max_density`](Self::with_max_density) or derived by the
/// distribution itself.
#[derive(Debug, Clone)]
pub struct RejectionSampler {
    max_density: Option<f64>,
    max_attempts: u32,
    resolution: u32,
}

impl RejectionSampler {
    pub fn new() -> Self {
        Self {
            max_density: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Override the density upper bound. Takes precedence over the bound the
    /// distribution derives for itself.
    pub fn with_max_density(mut self, bound: f64) -> Self {
        self.max_density = Some(bound);
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Draw one instant in `[start, end]` distributed according to `dist`.
    ///
    /// Fails fast when no density bound is available, and fails with a
    /// budget-exhausted error when the bound never accepts (a misconfigured
    /// bound, per the error's contract).
    pub fn draw<D, R>(
        &self,
        dist: &D,
        window: &TimeWindow,
        rng: &mut R,
    ) -> Result<f64, EngineError>
    where
        D: ArrivalDensity + ?Sized,
        R: Rng + ?Sized,
    {
        let bound = self
            .max_density
            .or_else(|| dist.max_density(window))
            .ok_or(EngineError::MissingConfig("max_density"))?;
        if bound <= 0.0 {
            return Err(EngineError::InvalidConfig {
                field: "max_density",
                value: bound,
            });
        }

        for _ in 0..self.max_attempts {
            let candidate = uniform_between(rng, window.start(), window.end(), self.resolution);
            let threshold = uniform_unit(rng, self.resolution) * bound;
            if threshold <= dist.density(window, candidate) {
                return Ok(candidate);
            }
        }
        Err(EngineError::RejectionBudgetExhausted {
            attempts: self.max_attempts,
        })
    }
}

impl Default for RejectionSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arrival::{FlatArrival, PowerLawArrival};

    /// Density with no derivable bound, for exercising the fail-fast path.
    struct Spike;

    impl ArrivalDensity for Spike {
        fn density(&self, window: &TimeWindow, t: f64) -> f64 {
            let mid = window.start() + window.duration() / 2.0;
            if (t - mid).abs() < window.duration() / 10.0 {
                1.0
            } else {
                0.0
            }
        }
    }

    #[test]
    fn fails_fast_without_a_density_bound() {
        let window = TimeWindow::new(0.0, 100.0).expect("valid window");
        let sampler = RejectionSampler::new();
        let mut rng = StdRng::seed_from_u64(1);
        let err = sampler
            .draw(&Spike, &window, &mut rng)
            .expect_err("no bound available");
        assert_eq!(err, EngineError::MissingConfig("max_density"));
    }

    #[test]
    fn explicit_bound_enables_arbitrary_densities() {
        let window = TimeWindow::new(0.0, 100.0).expect("valid window");
        let sampler = RejectionSampler::new().with_max_density(1.0);
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let t = sampler
                .draw(&Spike, &window, &mut rng)
                .expect("bounded draw");
            assert!((40.0..60.0).contains(&t), "spike density only accepts its support");
        }
    }

    #[test]
    fn uses_the_distributions_own_bound_when_present() {
        let window = TimeWindow::new(0.0, 1_000.0).expect("valid window");
        let sampler = RejectionSampler::new();
        let mut rng = StdRng::seed_from_u64(3);
        let dist = PowerLawArrival::new(2.0).expect("valid slope");
        for _ in 0..200 {
            let t = sampler.draw(&dist, &window, &mut rng).expect("draw");
            assert!((window.start()..=window.end()).contains(&t));
        }
    }

    #[test]
    fn never_accepting_density_exhausts_the_attempt_budget() {
        struct Nothing;
        impl ArrivalDensity for Nothing {
            fn density(&self, _window: &TimeWindow, _t: f64) -> f64 {
                -1.0
            }
        }

        let window = TimeWindow::new(0.0, 100.0).expect("valid window");
        let sampler = RejectionSampler::new()
            .with_max_density(1.0)
            .with_max_attempts(50);
        let mut rng = StdRng::seed_from_u64(4);
        let err = sampler
            .draw(&Nothing, &window, &mut rng)
            .expect_err("nothing ever accepts");
        assert_eq!(err, EngineError::RejectionBudgetExhausted { attempts: 50 });
    }

    #[test]
    fn flat_density_accepts_immediately() {
        let window = TimeWindow::new(0.0, 86_400.0).expect("valid window");
        let sampler = RejectionSampler::new();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1_000 {
            let t = sampler
                .draw(&FlatArrival, &window, &mut rng)
                .expect("flat draw");
            assert!((window.start()..=window.end()).contains(&t));
        }
    }
}
