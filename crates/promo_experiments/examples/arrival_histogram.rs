//! Draw play instants from a power-law density with both samplers and dump
//! them for histogram plotting.
//!
//! Run with: cargo run -p promo_experiments --example arrival_histogram

use std::path::Path;

use promo_core::{
    InvertibleCdf, PowerLawArrival, RejectionSampler, TimeWindow, DEFAULT_RESOLUTION,
};
use promo_experiments::write_timing_histogram;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const WINDOW_DAYS: f64 = 60.0;
    const NUM_DRAWS: usize = 10_000;
    const SLOPE: f64 = 2.0;

    let window = TimeWindow::new(0.0, WINDOW_DAYS * 86_400.0)?;
    let dist = PowerLawArrival::new(SLOPE)?;
    let mut rng = StdRng::seed_from_u64(42);

    println!(
        "Drawing {} instants from a power-law density (slope {}) over {} days...",
        NUM_DRAWS, SLOPE, WINDOW_DAYS
    );

    let mut inversion_days = Vec::with_capacity(NUM_DRAWS);
    for _ in 0..NUM_DRAWS {
        let t = dist.draw_inversion(&window, &mut rng, DEFAULT_RESOLUTION)?;
        inversion_days.push(t / 86_400.0);
    }

    let sampler = RejectionSampler::new();
    let mut rejection_days = Vec::with_capacity(NUM_DRAWS);
    for _ in 0..NUM_DRAWS {
        let t = sampler.draw(&dist, &window, &mut rng)?;
        rejection_days.push(t / 86_400.0);
    }

    for (label, days) in [("inversion", &inversion_days), ("rejection", &rejection_days)] {
        let last_fifth = days
            .iter()
            .filter(|&&d| d > WINDOW_DAYS * 0.8)
            .count();
        println!(
            "{label}: {:.1}% of draws land in the last fifth of the window",
            last_fifth as f64 / days.len() as f64 * 100.0
        );
    }

    write_timing_histogram(Path::new("play_hist_inversion.txt"), &inversion_days)?;
    write_timing_histogram(Path::new("play_hist_rejection.txt"), &rejection_days)?;
    println!("Wrote play_hist_inversion.txt and play_hist_rejection.txt");

    Ok(())
}
