//! Run a full 60-day promotion and print the win pacing.
//!
//! Run with: cargo run -p promo_experiments --example simulation_run

use std::path::Path;

use promo_experiments::{
    run_single_simulation, write_timing_histogram, ParameterSet, PromotionParams,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const WINDOW_DAYS: f64 = 60.0;
    const MAX_WIN_COUNT: u32 = 40;
    const NUM_PLAYS: usize = 1_000;
    const SPARSITY_FACTOR: f64 = 10.0;

    let params = PromotionParams::default()
        .with_window_days(WINDOW_DAYS)
        .with_max_win_count(MAX_WIN_COUNT)
        .with_num_plays(NUM_PLAYS)
        .with_sparsity_factor(SPARSITY_FACTOR);
    let set = ParameterSet::new(params, "simulation_run".to_string(), 0, 123);

    let result = run_single_simulation(&set);

    println!(
        "--- Promotion run ({} days, {} prizes, {} plays, sparsity {}, seed 123) ---",
        WINDOW_DAYS, MAX_WIN_COUNT, NUM_PLAYS, SPARSITY_FACTOR
    );
    println!("Plays resolved: {}", result.plays_resolved);
    println!(
        "Wins awarded: {} / {} (pool exhausted: {})",
        result.wins_awarded, result.max_win_count, result.pool_exhausted
    );
    println!(
        "First win: day {:.1}   Last win: day {:.1}",
        result.first_win_day, result.last_win_day
    );
    println!("Wins per fifth of the window: {:?}", result.wins_per_quintile);
    println!(
        "Win gaps (days): avg {:.2}  median {:.2}  p90 {:.2}",
        result.avg_win_gap_days, result.median_win_gap_days, result.p90_win_gap_days
    );
    println!("Pacing error: {:.4}", result.pacing_error);

    if !result.win_times_days.is_empty() {
        println!("\nWin instants (first 20):");
        for (i, day) in result.win_times_days.iter().take(20).enumerate() {
            println!("  {}  day {:.2}", i + 1, day);
        }
        if result.win_times_days.len() > 20 {
            println!("  ... and {} more", result.win_times_days.len() - 20);
        }
    }

    write_timing_histogram(Path::new("win_hist.txt"), &result.win_times_days)?;
    println!("\nWrote win instants to win_hist.txt");

    Ok(())
}
