//! Example: Parameter sweep over pool size, traffic shape and sparsity.
//!
//! This example demonstrates how to:
//! 1. Define a parameter space
//! 2. Run multiple simulations in parallel
//! 3. Pick the most evenly paced configuration
//! 4. Export results to CSV/JSON

use std::path::Path;

use promo_experiments::{
    export_to_csv,
    // export_to_json,
    run_parallel_experiments, ArrivalKind, ParameterSpace, PromotionParams,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Starting parameter sweep experiment...");

    let space = ParameterSpace::grid()
        .with_base(PromotionParams::default())
        .max_win_count(vec![10, 40, 100])
        .num_plays(vec![500, 1_000, 5_000])
        .sparsity_factor(vec![1.0, 5.0, 10.0])
        .arrival(vec![
            ArrivalKind::Flat,
            ArrivalKind::PowerLaw { slope: 1.0 },
            ArrivalKind::PowerLaw { slope: 3.0 },
        ]);

    println!("Generating parameter sets...");
    let parameter_sets = space.generate();
    println!("Generated {} parameter combinations", parameter_sets.len());

    // Run experiments in parallel (uses all available CPU cores by default)
    println!("Running simulations in parallel...");
    let results = run_parallel_experiments(parameter_sets.clone(), None);
    println!("Completed {} simulations", results.len());

    // The most evenly paced run among those that paid out the full pool.
    let best = results
        .iter()
        .enumerate()
        .filter(|(_, r)| r.pool_exhausted)
        .min_by(|(_, a), (_, b)| {
            a.pacing_error
                .partial_cmp(&b.pacing_error)
                .expect("finite pacing errors")
        });

    if let Some((best_idx, best_result)) = best {
        let best_params = &parameter_sets[best_idx].params;
        println!("\n=== Most Evenly Paced Configuration ===");
        println!("Pool size: {}", best_params.max_win_count);
        println!("Plays: {}", best_params.num_plays);
        println!("Sparsity factor: {}", best_params.sparsity_factor);
        println!("Arrival: {:?}", best_params.arrival);
        println!("Pacing error: {:.4}", best_result.pacing_error);
        println!(
            "First win: day {:.1}   Last win: day {:.1}",
            best_result.first_win_day, best_result.last_win_day
        );
        println!("Wins per fifth: {:?}", best_result.wins_per_quintile);
    } else {
        println!("\nNo run paid out its full pool.");
    }

    // Export results
    println!("\nExporting results...");
    // export_to_json(&results, &parameter_sets, Path::new("experiment_results.json"))?;
    // println!("Exported to experiment_results.json");

    export_to_csv(&results, &parameter_sets, Path::new("experiment_results.csv"))?;
    println!("Exported to experiment_results.csv");

    println!("\nExperiment complete!");

    Ok(())
}
