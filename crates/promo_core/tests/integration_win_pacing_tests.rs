//! End-to-end pacing tests: a full promotion resolved play by play.

use rand::rngs::StdRng;
use rand::SeedableRng;

use promo_core::{
    EvenOverTime, FlatArrival, InvertibleCdf, PlayCounters, Player, TimeWindow, WinModel,
    DEFAULT_RESOLUTION,
};

const WINDOW_SECS: f64 = 60.0 * 86_400.0;

/// Draw `num_plays` flat arrival instants, sort them, and resolve each play
/// in chronological order. Returns the win instants.
fn run_promotion(seed: u64, num_plays: usize, max_wins: u32, sparsity: f64) -> Vec<f64> {
    let mut window = TimeWindow::new(0.0, WINDOW_SECS).expect("valid window");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut plays: Vec<f64> = (0..num_plays)
        .map(|_| {
            FlatArrival
                .draw_inversion(&window, &mut rng, DEFAULT_RESOLUTION)
                .expect("flat draw")
        })
        .collect();
    plays.sort_by(|a, b| a.partial_cmp(b).expect("finite instants"));

    let model = EvenOverTime::new(max_wins)
        .expect("valid pool")
        .with_sparsity_factor(sparsity)
        .expect("valid factor");
    let player = Player::new(model);
    let mut counters = PlayCounters::default();
    let mut win_times = Vec::new();

    for t in plays {
        window.set_current(t).expect("draws land inside the window");
        let won = player.play(&window, &counters, &mut rng);
        counters.record(won);
        if won {
            win_times.push(t);
        }
    }
    win_times
}

#[test]
fn prize_pool_is_never_exceeded() {
    for seed in [1, 2, 3, 4, 5] {
        let wins = run_promotion(seed, 1_000, 40, 10.0);
        assert!(
            wins.len() <= 40,
            "seed {seed} awarded {} prizes from a pool of 40",
            wins.len()
        );
    }
}

#[test]
fn most_of_the_pool_is_awarded_by_the_window_end() {
    // The model is stochastic and approximate; it should land near the pool
    // size, not hit it exactly.
    let wins = run_promotion(7, 1_000, 40, 10.0);
    assert!(
        wins.len() >= 20,
        "only {} of 40 prizes awarded over the full window",
        wins.len()
    );
}

#[test]
fn wins_spread_across_the_window() {
    let wins = run_promotion(11, 2_000, 40, 10.0);
    let half = WINDOW_SECS / 2.0;
    let first_half = wins.iter().filter(|&&t| t < half).count();
    let second_half = wins.len() - first_half;
    assert!(
        first_half >= 5 && second_half >= 5,
        "wins clustered into one half: {first_half} / {second_half}"
    );
}

#[test]
fn no_further_wins_once_the_pool_is_exhausted() {
    let mut window = TimeWindow::new(0.0, 1_000.0).expect("valid window");
    window.set_current(500.0).expect("in bounds");
    let model = EvenOverTime::new(5).expect("valid pool");
    let player = Player::new(model);
    let counters = PlayCounters::new(300, 5);

    // Raw odds are non-positive with the pool gone, so the clamped Bernoulli
    // parameter is zero and no draw can win.
    assert!(player.model().odds(&window, &counters) <= 0.0);
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..10_000 {
        assert!(!player.play(&window, &counters, &mut rng));
    }
}

#[test]
fn behind_schedule_scenario_produces_the_expected_odds() {
    // Window [0, 100] at t=50 with 3 of 10 prizes gone over 40 plays and a
    // sparsity factor of 5: desired 5 wins, estimated 40 remaining plays,
    // odds (5-3)/40*5 = 0.25 with the floor not binding.
    let mut window = TimeWindow::new(0.0, 100.0).expect("valid window");
    window.set_current(50.0).expect("in bounds");
    let model = EvenOverTime::new(10)
        .expect("valid pool")
        .with_sparsity_factor(5.0)
        .expect("valid factor");
    let counters = PlayCounters::new(40, 3);
    assert!((model.odds(&window, &counters) - 0.25).abs() < 1e-12);
}
