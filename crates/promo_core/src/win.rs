//! Win-probability models.
//!
//! A win model answers one question: given where we are in the window and how
//! many plays and wins have happened, what should the odds of the *next* play
//! winning be? The model never owns the counters; the driver reads them from
//! wherever they persist and passes them in per evaluation.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::window::TimeWindow;

/// Baseline chance floor: every play keeps at least this chance to win (or
/// `1 / play_count` once plays outnumber its reciprocal), as long as prizes
/// remain.
pub const MIN_ODDS: f64 = 0.001;

/// Running play/win counters, owned by the caller.
///
/// The engine only ever reads these; drivers persist them between plays
/// through a [`CounterStore`](crate::counters::CounterStore) or keep them in
/// memory for bulk simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayCounters {
    pub play_count: u64,
    pub win_count: u64,
}

impl PlayCounters {
    pub fn new(play_count: u64, win_count: u64) -> Self {
        Self {
            play_count,
            win_count,
        }
    }

    /// Record one resolved play.
    pub fn record(&mut self, won: bool) {
        self.play_count += 1;
        if won {
            self.win_count += 1;
        }
    }
}

/// Computes the probability that the next single play wins.
pub trait WinModel {
    /// The raw odds at this moment. Not clamped to `[0, 1]`: the value can go
    /// negative when wins are ahead of schedule and above 1 when far behind.
    /// Whoever consumes this as a Bernoulli parameter clamps it.
    fn odds(&self, window: &TimeWindow, counters: &PlayCounters) -> f64;
}

/// Adaptive odds that spread a fixed prize pool evenly over the window when
/// the total number of plays cannot be known up front.
///
/// On every play the model re-estimates the odds needed to exhaust the pool
/// exactly at the window end: it compares the time-proportional target win
/// count against actual wins, extrapolates remaining plays from the observed
/// play rate, and returns a proportional correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvenOverTime {
    max_win_count: u32,
    sparsity_factor: f64,
}

impl EvenOverTime {
    /// Amplitude of the correction term. Lower values cluster wins toward the
    /// end of the window; higher values spread them more evenly but make
    /// individual odds swing harder. Does not change the expected win total.
    pub const DEFAULT_SPARSITY_FACTOR: f64 = 5.0;

    /// Create a model for a pool of `max_win_count` prizes. The pool must be
    /// non-empty.
    pub fn new(max_win_count: u32) -> Result<Self, EngineError> {
        if max_win_count == 0 {
            return Err(EngineError::InvalidConfig {
                field: "max_win_count",
                value: 0.0,
            });
        }
        Ok(Self {
            max_win_count,
            sparsity_factor: Self::DEFAULT_SPARSITY_FACTOR,
        })
    }

    /// Override the sparsity factor; must be positive.
    pub fn with_sparsity_factor(mut self, factor: f64) -> Result<Self, EngineError> {
        if factor <= 0.0 {
            return Err(EngineError::InvalidConfig {
                field: "sparsity_factor",
                value: factor,
            });
        }
        self.sparsity_factor = factor;
        Ok(self)
    }

    pub fn max_win_count(&self) -> u32 {
        self.max_win_count
    }

    pub fn sparsity_factor(&self) -> f64 {
        self.sparsity_factor
    }
}

impl WinModel for EvenOverTime {
    fn odds(&self, window: &TimeWindow, counters: &PlayCounters) -> f64 {
        // Fraction of time elapsed; under even pacing this equals the
        // fraction of prizes that should already be gone.
        let time_fraction = window.completion();
        let desired_win_count = time_fraction * f64::from(self.max_win_count);

        // Extrapolate total plays from the observed rate, assuming arrivals
        // keep coming at the pace seen so far; floor at one remaining play so
        // the division below stays tame.
        let play_count = counters.play_count as f64;
        let estimated_remaining_plays = (play_count / time_fraction - play_count).max(1.0);

        // Proportional correction: positive when behind the time-proportional
        // target, negative when ahead of it.
        let mut odds = (desired_win_count - counters.win_count as f64)
            / estimated_remaining_plays
            * self.sparsity_factor;

        // Keep a vanishing baseline chance alive while prizes remain, scaled
        // down as plays accumulate. Skipped before the first play so the
        // reciprocal stays defined. This can lift odds that the proportional
        // term pushed negative; drivers rely on that exact numeric output.
        if counters.win_count < u64::from(self.max_win_count) && counters.play_count > 0 {
            odds = odds.max(MIN_ODDS.min(1.0 / play_count));
        }

        odds
    }
}
