//! Promotion simulation execution, single-run and parallel.
//!
//! A run draws play instants from the configured arrival density, sorts them
//! chronologically (the win model's odds trajectory depends on monotone
//! current instants), and resolves each play as one Bernoulli trial against
//! the adaptive odds. Parallel sweeps fan runs out over rayon.

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use promo_core::{
    EngineError, EvenOverTime, FlatArrival, InvertibleCdf, PlayCounters, Player, PowerLawArrival,
    RejectionSampler, TimeWindow, DEFAULT_RESOLUTION,
};

use crate::metrics::{extract_metrics, SimulationResult};
use crate::parameters::{ArrivalKind, ParameterSet, SamplingMethod};

fn draw_arrivals<R: Rng + ?Sized>(
    arrival: ArrivalKind,
    sampling: SamplingMethod,
    count: usize,
    window: &TimeWindow,
    rng: &mut R,
) -> Result<Vec<f64>, EngineError> {
    let sampler = RejectionSampler::new();
    let mut times = Vec::with_capacity(count);
    match arrival {
        ArrivalKind::Flat => {
            for _ in 0..count {
                times.push(match sampling {
                    SamplingMethod::Inversion => {
                        FlatArrival.draw_inversion(window, rng, DEFAULT_RESOLUTION)?
                    }
                    SamplingMethod::Rejection => sampler.draw(&FlatArrival, window, rng)?,
                });
            }
        }
        ArrivalKind::PowerLaw { slope } => {
            let dist = PowerLawArrival::new(slope)?;
            for _ in 0..count {
                times.push(match sampling {
                    SamplingMethod::Inversion => {
                        dist.draw_inversion(window, rng, DEFAULT_RESOLUTION)?
                    }
                    SamplingMethod::Rejection => sampler.draw(&dist, window, rng)?,
                });
            }
        }
    }
    Ok(times)
}

/// Run one parameter set to completion, propagating configuration errors.
pub fn try_run_single_simulation(param_set: &ParameterSet) -> Result<SimulationResult, EngineError> {
    let params = param_set.promotion_params();
    let mut window = TimeWindow::new(0.0, params.window_secs())?;
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut plays = draw_arrivals(
        params.arrival,
        params.sampling,
        params.num_plays,
        &window,
        &mut rng,
    )?;
    plays.sort_by(|a, b| a.partial_cmp(b).expect("finite instants"));

    let model = EvenOverTime::new(params.max_win_count)?
        .with_sparsity_factor(params.sparsity_factor)?;
    let player = Player::new(model);

    let mut counters = PlayCounters::default();
    let mut win_times = Vec::new();
    let mut plays_skipped = 0usize;

    for t in plays {
        // Instants past the window end are skipped rather than resolved,
        // mirroring what a live driver does when the clock outruns the
        // promotion.
        if window.set_current(t).is_err() {
            plays_skipped += 1;
            continue;
        }
        let won = player.play(&window, &counters, &mut rng);
        counters.record(won);
        if won {
            win_times.push(t);
        }
    }

    Ok(extract_metrics(
        &params,
        &win_times,
        counters.play_count as usize,
        plays_skipped,
    ))
}

/// Run a single simulation with the given parameter set.
pub fn run_single_simulation(param_set: &ParameterSet) -> SimulationResult {
    try_run_single_simulation(param_set).expect("parameter set should configure a valid promotion")
}

/// Run multiple simulations in parallel.
///
/// Uses rayon to execute runs concurrently across available CPU cores. Each
/// run is independent with no shared state.
pub fn run_parallel_experiments(
    parameter_sets: Vec<ParameterSet>,
    num_threads: Option<usize>,
) -> Vec<SimulationResult> {
    run_parallel_experiments_with_progress(parameter_sets, num_threads, true)
}

/// Run multiple simulations in parallel with optional progress bar.
///
/// Results come back in the same order as the input parameter sets.
pub fn run_parallel_experiments_with_progress(
    parameter_sets: Vec<ParameterSet>,
    num_threads: Option<usize>,
    show_progress: bool,
) -> Vec<SimulationResult> {
    let total = parameter_sets.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let pool = if let Some(threads) = num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("Failed to create thread pool")
    } else {
        rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Failed to create thread pool")
    };

    let pb_clone = pb.clone();
    let results = pool.install(|| {
        parameter_sets
            .par_iter()
            .map(|param_set| {
                let result = run_single_simulation(param_set);
                if let Some(ref progress_bar) = pb_clone {
                    progress_bar.inc(1);
                }
                result
            })
            .collect()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    results
}
