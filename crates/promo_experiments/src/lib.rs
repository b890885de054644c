//! Parallel experimentation framework for promotion parameter sweeps.
//!
//! This crate enables running many simulated promotions in parallel with
//! varying parameters, extracting pacing metrics, and exporting results to
//! study how pool size, traffic shape and sparsity affect win distribution.
//! It also ships the cron-style daily driver that resolves live plays one at
//! a time against a persistent counter store.
//!
//! # Quick Start
//!
//! ```no_run
//! use promo_experiments::{ParameterSpace, run_parallel_experiments};
//!
//! // Define parameter space (grid search)
//! let space = ParameterSpace::grid()
//!     .max_win_count(vec![10, 40, 100])
//!     .num_plays(vec![500, 1_000, 5_000])
//!     .sparsity_factor(vec![1.0, 5.0, 10.0]);
//!
//! // Generate parameter sets
//! let parameter_sets = space.generate();
//!
//! // Run experiments in parallel
//! let results = run_parallel_experiments(parameter_sets, None);
//!
//! for result in &results {
//!     println!("{} wins, pacing error {:.4}", result.wins_awarded, result.pacing_error);
//! }
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`parameters`]: Parameter variation framework (grid search, random sampling)
//! - [`runner`]: Parallel simulation execution using rayon
//! - [`metrics`]: Metrics extraction from simulation results
//! - [`export`]: Result export to CSV/JSON and timing histograms
//! - [`daily`]: One-play-per-invocation driver over a file-backed counter store

pub mod daily;
pub mod export;
pub mod metrics;
pub mod parameters;
pub mod runner;

pub use daily::{run_daily_play, DailyPlayConfig, DailyPlayError, DailyPlayOutcome, FileCounterStore};
pub use export::{export_to_csv, export_to_json, write_timing_histogram};
pub use metrics::SimulationResult;
pub use parameters::{ArrivalKind, ParameterSet, ParameterSpace, PromotionParams, SamplingMethod};
pub use runner::{run_parallel_experiments, run_single_simulation, try_run_single_simulation};
