//! Statistical integration tests for the arrival distributions.
//!
//! Seeded draws binned over the window, compared against the configured
//! density shape with generous tolerances so the tests stay deterministic
//! and robust.

use rand::rngs::StdRng;
use rand::SeedableRng;

use promo_core::{
    ArrivalDensity, FlatArrival, InvertibleCdf, PowerLawArrival, RejectionSampler, TimeWindow,
    DEFAULT_RESOLUTION,
};

const BINS: usize = 20;
const SAMPLES: usize = 100_000;

fn bin_counts(times: &[f64], window: &TimeWindow) -> [usize; BINS] {
    let mut counts = [0usize; BINS];
    for &t in times {
        let fraction = (t - window.start()) / window.duration();
        let idx = ((fraction * BINS as f64) as usize).min(BINS - 1);
        counts[idx] += 1;
    }
    counts
}

/// Chi-square statistic against per-bin expected counts.
fn chi_square(observed: &[usize; BINS], expected: &[f64; BINS]) -> f64 {
    observed
        .iter()
        .zip(expected.iter())
        .map(|(&obs, &exp)| {
            let diff = obs as f64 - exp;
            diff * diff / exp
        })
        .sum()
}

fn uniform_expectation() -> [f64; BINS] {
    [SAMPLES as f64 / BINS as f64; BINS]
}

/// Expected per-bin counts for a power law with the given slope.
fn power_law_expectation(slope: f64) -> [f64; BINS] {
    // CDF(x) = x^(a+1) on the unit interval; bin mass is the CDF increment.
    let mut expected = [0.0; BINS];
    for (i, slot) in expected.iter_mut().enumerate() {
        let lo = i as f64 / BINS as f64;
        let hi = (i + 1) as f64 / BINS as f64;
        *slot = SAMPLES as f64 * (hi.powf(slope + 1.0) - lo.powf(slope + 1.0));
    }
    expected
}

#[test]
fn flat_inversion_draws_are_uniform() {
    let window = TimeWindow::new(0.0, 5_184_000.0).expect("valid window");
    let mut rng = StdRng::seed_from_u64(1001);
    let times: Vec<f64> = (0..SAMPLES)
        .map(|_| {
            FlatArrival
                .draw_inversion(&window, &mut rng, DEFAULT_RESOLUTION)
                .expect("flat draw")
        })
        .collect();

    let stat = chi_square(&bin_counts(&times, &window), &uniform_expectation());
    // 19 degrees of freedom; anything this far out signals a real skew.
    assert!(stat < 60.0, "chi-square {stat} too high for a flat density");
}

#[test]
fn power_law_zero_slope_matches_flat_statistics() {
    let window = TimeWindow::new(0.0, 5_184_000.0).expect("valid window");
    let dist = PowerLawArrival::new(0.0).expect("valid slope");
    let mut rng = StdRng::seed_from_u64(1002);
    let times: Vec<f64> = (0..SAMPLES)
        .map(|_| {
            dist.draw_inversion(&window, &mut rng, DEFAULT_RESOLUTION)
                .expect("power-law draw")
        })
        .collect();

    let stat = chi_square(&bin_counts(&times, &window), &uniform_expectation());
    assert!(
        stat < 60.0,
        "a=0 power law must be statistically flat, chi-square was {stat}"
    );
}

#[test]
fn power_law_inversion_reproduces_the_density_shape() {
    let slope = 1.0;
    let window = TimeWindow::new(0.0, 864_000.0).expect("valid window");
    let dist = PowerLawArrival::new(slope).expect("valid slope");
    let mut rng = StdRng::seed_from_u64(1003);
    let times: Vec<f64> = (0..SAMPLES)
        .map(|_| {
            dist.draw_inversion(&window, &mut rng, DEFAULT_RESOLUTION)
                .expect("power-law draw")
        })
        .collect();

    let stat = chi_square(&bin_counts(&times, &window), &power_law_expectation(slope));
    assert!(stat < 60.0, "chi-square {stat} too high for slope {slope}");
}

#[test]
fn rejection_sampling_reproduces_the_density_shape() {
    let slope = 1.0;
    let window = TimeWindow::new(0.0, 864_000.0).expect("valid window");
    let dist = PowerLawArrival::new(slope).expect("valid slope");
    let sampler = RejectionSampler::new();
    let mut rng = StdRng::seed_from_u64(1004);
    let times: Vec<f64> = (0..SAMPLES)
        .map(|_| sampler.draw(&dist, &window, &mut rng).expect("rejection draw"))
        .collect();

    let stat = chi_square(&bin_counts(&times, &window), &power_law_expectation(slope));
    assert!(
        stat < 60.0,
        "rejection draws must match the density, chi-square was {stat}"
    );
}

#[test]
fn rejection_accepts_with_a_loose_explicit_bound() {
    // A bound above the true maximum only slows sampling down; the accepted
    // distribution must stay correct.
    let window = TimeWindow::new(0.0, 864_000.0).expect("valid window");
    let dist = FlatArrival;
    let true_bound = dist.max_density(&window).expect("flat bound");
    let sampler = RejectionSampler::new().with_max_density(true_bound * 3.0);
    let mut rng = StdRng::seed_from_u64(1005);
    let times: Vec<f64> = (0..SAMPLES)
        .map(|_| sampler.draw(&dist, &window, &mut rng).expect("draw"))
        .collect();

    let stat = chi_square(&bin_counts(&times, &window), &uniform_expectation());
    assert!(stat < 60.0, "chi-square {stat} too high under a loose bound");
}
