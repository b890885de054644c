//! Core engine for instant-win promotions.
//!
//! A fixed pool of prizes is spread over a bounded time window against an
//! unknown stream of plays: each play gets a fair, time-aware win probability
//! such that the pool is exhausted roughly evenly over the window and never
//! exceeded. The pieces compose bottom-up:
//!
//! - [`window::TimeWindow`]: the promotion interval plus a current instant,
//!   deriving the elapsed fraction.
//! - [`arrival`]: random play-arrival instants, via generic rejection
//!   sampling or closed-form CDF inversion (flat and power-law densities).
//! - [`win`]: adaptive win-probability models ([`win::EvenOverTime`]).
//! - [`player::Player`]: one Bernoulli trial per play.
//! - [`counters`]: the storage boundary for persisted play/win counts.
//!
//! The engine is synchronous and single-threaded by design: a driver advances
//! the window, feeds the counters in, resolves one play, and persists the
//! updated counters before the next play. See `promo_experiments` for bulk
//! simulation and cron-style daily drivers.

pub mod arrival;
pub mod counters;
pub mod error;
pub mod player;
pub mod random;
pub mod win;
pub mod window;

pub use arrival::{ArrivalDensity, FlatArrival, InvertibleCdf, PowerLawArrival, RejectionSampler};
pub use counters::{CounterStore, InMemoryCounterStore};
pub use error::EngineError;
pub use player::Player;
pub use random::DEFAULT_RESOLUTION;
pub use win::{EvenOverTime, PlayCounters, WinModel, MIN_ODDS};
pub use window::TimeWindow;
