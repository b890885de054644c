//! Parameter variation framework for promotion sweeps.
//!
//! Defines the per-run promotion configuration and tools for generating
//! batches of parameter sets, either as a grid (Cartesian product) or by
//! random sampling.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Which arrival density generates the play instants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum ArrivalKind {
    #[default]
    Flat,
    PowerLaw {
        slope: f64,
    },
}

/// How arrival instants are drawn from the density.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplingMethod {
    /// Closed-form CDF inversion; O(1) per draw.
    #[default]
    Inversion,
    /// Generic acceptance-rejection against the density's own bound.
    Rejection,
}

/// Default promotion length: 60 days.
const DEFAULT_WINDOW_DAYS: f64 = 60.0;

/// Parameters for one simulated promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionParams {
    /// Window length in days; the window runs over `[0, window_days * 86400]`
    /// seconds.
    pub window_days: f64,
    /// Prize pool size.
    pub max_win_count: u32,
    /// Number of plays arriving over the full window.
    pub num_plays: usize,
    /// Win-model sparsity factor.
    pub sparsity_factor: f64,
    /// Arrival density for play timing.
    pub arrival: ArrivalKind,
    /// Draw strategy for arrival instants.
    pub sampling: SamplingMethod,
    /// Random seed for reproducibility (optional; if None, uses entropy).
    pub seed: Option<u64>,
}

impl Default for PromotionParams {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            max_win_count: 40,
            num_plays: 1_000,
            sparsity_factor: 10.0,
            arrival: ArrivalKind::default(),
            sampling: SamplingMethod::default(),
            seed: None,
        }
    }
}

impl PromotionParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_window_days(mut self, days: f64) -> Self {
        self.window_days = days;
        self
    }

    pub fn with_max_win_count(mut self, count: u32) -> Self {
        self.max_win_count = count;
        self
    }

    pub fn with_num_plays(mut self, plays: usize) -> Self {
        self.num_plays = plays;
        self
    }

    pub fn with_sparsity_factor(mut self, factor: f64) -> Self {
        self.sparsity_factor = factor;
        self
    }

    pub fn with_arrival(mut self, arrival: ArrivalKind) -> Self {
        self.arrival = arrival;
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingMethod) -> Self {
        self.sampling = sampling;
        self
    }

    /// Window length in seconds.
    pub fn window_secs(&self) -> f64 {
        self.window_days * 86_400.0
    }
}

/// A single parameter configuration for a simulation run, with experiment
/// metadata for tracking and reproducibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSet {
    pub params: PromotionParams,
    /// Unique experiment ID for this parameter configuration.
    pub experiment_id: String,
    /// Run ID within the experiment (for multiple runs with same params).
    pub run_id: usize,
    /// Seed used for this run.
    pub seed: u64,
}

impl ParameterSet {
    pub fn new(params: PromotionParams, experiment_id: String, run_id: usize, seed: u64) -> Self {
        Self {
            params,
            experiment_id,
            run_id,
            seed,
        }
    }

    /// The promotion params with this run's seed applied.
    pub fn promotion_params(&self) -> PromotionParams {
        let mut params = self.params.clone();
        params.seed = Some(self.seed);
        params
    }
}

/// Defines a parameter space for exploration.
///
/// Unspecified dimensions fall back to the base configuration's value.
#[derive(Debug, Clone, Default)]
pub struct ParameterSpace {
    base: PromotionParams,
    max_win_counts: Vec<u32>,
    num_plays: Vec<usize>,
    sparsity_factors: Vec<f64>,
    arrivals: Vec<ArrivalKind>,
    window_days: Vec<f64>,
}

impl ParameterSpace {
    /// Create a new parameter space for grid search.
    pub fn grid() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: PromotionParams) -> Self {
        self.base = base;
        self
    }

    pub fn max_win_count(mut self, counts: Vec<u32>) -> Self {
        self.max_win_counts = counts;
        self
    }

    pub fn num_plays(mut self, plays: Vec<usize>) -> Self {
        self.num_plays = plays;
        self
    }

    pub fn sparsity_factor(mut self, factors: Vec<f64>) -> Self {
        self.sparsity_factors = factors;
        self
    }

    pub fn arrival(mut self, arrivals: Vec<ArrivalKind>) -> Self {
        self.arrivals = arrivals;
        self
    }

    pub fn window_days(mut self, days: Vec<f64>) -> Self {
        self.window_days = days;
        self
    }

    fn dimension_or_base<T: Clone>(values: &[T], base: T) -> Vec<T> {
        if values.is_empty() {
            vec![base]
        } else {
            values.to_vec()
        }
    }

    /// Generate all parameter sets using grid search (Cartesian product).
    pub fn generate(&self) -> Vec<ParameterSet> {
        let max_win_counts = Self::dimension_or_base(&self.max_win_counts, self.base.max_win_count);
        let num_plays = Self::dimension_or_base(&self.num_plays, self.base.num_plays);
        let sparsity_factors =
            Self::dimension_or_base(&self.sparsity_factors, self.base.sparsity_factor);
        let arrivals = Self::dimension_or_base(&self.arrivals, self.base.arrival);
        let window_days = Self::dimension_or_base(&self.window_days, self.base.window_days);

        let mut sets = Vec::new();
        for &max_win_count in &max_win_counts {
            for &plays in &num_plays {
                for &sparsity in &sparsity_factors {
                    for &arrival in &arrivals {
                        for &days in &window_days {
                            let mut params = self.base.clone();
                            params.max_win_count = max_win_count;
                            params.num_plays = plays;
                            params.sparsity_factor = sparsity;
                            params.arrival = arrival;
                            params.window_days = days;

                            let experiment_id = sets.len();
                            let seed = (experiment_id as u64).wrapping_mul(0x9e3779b9);
                            sets.push(ParameterSet::new(
                                params,
                                format!("exp_{experiment_id}"),
                                0,
                                seed,
                            ));
                        }
                    }
                }
            }
        }
        sets
    }

    /// Generate random parameter sets (Monte Carlo sampling).
    ///
    /// Samples `count` unique parameter sets from the defined space; stops
    /// early if the space is too small to yield that many unique sets.
    pub fn sample_random(&self, count: usize, seed: u64) -> Vec<ParameterSet> {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let max_win_counts = Self::dimension_or_base(&self.max_win_counts, self.base.max_win_count);
        let num_plays = Self::dimension_or_base(&self.num_plays, self.base.num_plays);
        let sparsity_factors =
            Self::dimension_or_base(&self.sparsity_factors, self.base.sparsity_factor);
        let arrivals = Self::dimension_or_base(&self.arrivals, self.base.arrival);
        let window_days = Self::dimension_or_base(&self.window_days, self.base.window_days);

        let mut rng = StdRng::seed_from_u64(seed);
        let mut sets = Vec::new();
        let mut seen = HashSet::new();
        let mut attempts = 0;
        const MAX_ATTEMPTS: usize = 10_000;

        while sets.len() < count && attempts < MAX_ATTEMPTS {
            attempts += 1;
            let mut params = self.base.clone();
            params.max_win_count = max_win_counts[rng.gen_range(0..max_win_counts.len())];
            params.num_plays = num_plays[rng.gen_range(0..num_plays.len())];
            params.sparsity_factor = sparsity_factors[rng.gen_range(0..sparsity_factors.len())];
            params.arrival = arrivals[rng.gen_range(0..arrivals.len())];
            params.window_days = window_days[rng.gen_range(0..window_days.len())];

            let param_hash = format!("{params:?}");
            if !seen.insert(param_hash) {
                continue;
            }

            let seed_value = seed
                .wrapping_add(sets.len() as u64)
                .wrapping_mul(0x9e3779b9);
            sets.push(ParameterSet::new(
                params,
                format!("random_{}", sets.len()),
                0,
                seed_value,
            ));
        }

        sets
    }
}
