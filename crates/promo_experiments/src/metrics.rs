//! Metrics extraction from simulation results.
//!
//! Summarizes a resolved promotion: how much of the pool went out, when the
//! wins landed, and how evenly they were paced across the window.

use serde::Serialize;

use crate::parameters::PromotionParams;

/// Aggregated metrics from a single promotion run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    /// Prize pool size the run was configured with.
    pub max_win_count: u32,
    /// Plays resolved inside the window.
    pub plays_resolved: usize,
    /// Plays skipped because their instant fell past the window end.
    pub plays_skipped: usize,
    /// Prizes actually awarded.
    pub wins_awarded: usize,
    /// Whether the full pool went out.
    pub pool_exhausted: bool,
    /// Win instants in days from the window start, ascending.
    pub win_times_days: Vec<f64>,
    /// Day of the first/last win (0.0 when no wins).
    pub first_win_day: f64,
    pub last_win_day: f64,
    /// Wins per fifth of the window, in order.
    pub wins_per_quintile: [usize; 5],
    /// Gap statistics between consecutive wins, in days.
    pub avg_win_gap_days: f64,
    pub median_win_gap_days: f64,
    pub p90_win_gap_days: f64,
    /// Mean |awarded fraction - elapsed fraction| over the win instants;
    /// 0 means perfectly even pacing.
    pub pacing_error: f64,
}

impl SimulationResult {
    /// Average, median and 90th percentile of a set of values.
    fn calculate_stats(values: &[f64]) -> (f64, f64, f64) {
        if values.is_empty() {
            return (0.0, 0.0, 0.0);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("finite values"));

        let avg = sorted.iter().sum::<f64>() / sorted.len() as f64;
        let median = if sorted.len() % 2 == 0 {
            (sorted[sorted.len() / 2 - 1] + sorted[sorted.len() / 2]) / 2.0
        } else {
            sorted[sorted.len() / 2]
        };
        let p90_idx = ((sorted.len() - 1) as f64 * 0.9) as usize;
        let p90 = sorted[p90_idx.min(sorted.len() - 1)];

        (avg, median, p90)
    }
}

/// Build a [`SimulationResult`] from the win instants of a resolved run.
///
/// `win_times_secs` must be ascending (the runner resolves plays in
/// chronological order, so it already is).
pub fn extract_metrics(
    params: &PromotionParams,
    win_times_secs: &[f64],
    plays_resolved: usize,
    plays_skipped: usize,
) -> SimulationResult {
    let window_secs = params.window_secs();
    let win_times_days: Vec<f64> = win_times_secs.iter().map(|t| t / 86_400.0).collect();

    let mut wins_per_quintile = [0usize; 5];
    for &t in win_times_secs {
        let idx = ((t / window_secs * 5.0) as usize).min(4);
        wins_per_quintile[idx] += 1;
    }

    let gaps: Vec<f64> = win_times_days.windows(2).map(|w| w[1] - w[0]).collect();
    let (avg_gap, median_gap, p90_gap) = SimulationResult::calculate_stats(&gaps);

    // Compare the awarded fraction against the elapsed fraction at each win.
    let wins = win_times_secs.len();
    let pacing_error = if wins == 0 {
        0.0
    } else {
        win_times_secs
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                let awarded_fraction = (i + 1) as f64 / f64::from(params.max_win_count);
                let time_fraction = t / window_secs;
                (awarded_fraction - time_fraction).abs()
            })
            .sum::<f64>()
            / wins as f64
    };

    SimulationResult {
        max_win_count: params.max_win_count,
        plays_resolved,
        plays_skipped,
        wins_awarded: wins,
        pool_exhausted: wins as u64 >= u64::from(params.max_win_count),
        first_win_day: win_times_days.first().copied().unwrap_or(0.0),
        last_win_day: win_times_days.last().copied().unwrap_or(0.0),
        win_times_days,
        wins_per_quintile,
        avg_win_gap_days: avg_gap,
        median_win_gap_days: median_gap,
        p90_win_gap_days: p90_gap,
        pacing_error,
    }
}
