//! Result export: CSV and JSON summaries plus plain-text timing histograms.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde_json::json;

use crate::metrics::SimulationResult;
use crate::parameters::{ArrivalKind, ParameterSet, SamplingMethod};

fn check_lengths(
    results: &[SimulationResult],
    parameter_sets: &[ParameterSet],
) -> Result<(), Box<dyn std::error::Error>> {
    if results.len() != parameter_sets.len() {
        return Err(format!(
            "Results length ({}) doesn't match parameter_sets length ({})",
            results.len(),
            parameter_sets.len()
        )
        .into());
    }
    Ok(())
}

fn arrival_label(arrival: &ArrivalKind) -> String {
    match arrival {
        ArrivalKind::Flat => "Flat".to_string(),
        ArrivalKind::PowerLaw { slope } => format!("PowerLaw({slope})"),
    }
}

fn sampling_label(sampling: &SamplingMethod) -> &'static str {
    match sampling {
        SamplingMethod::Inversion => "Inversion",
        SamplingMethod::Rejection => "Rejection",
    }
}

/// Export results to CSV, one row per run joining parameters and metrics.
pub fn export_to_csv(
    results: &[SimulationResult],
    parameter_sets: &[ParameterSet],
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    check_lengths(results, parameter_sets)?;

    let mut wtr = csv::Writer::from_writer(File::create(path)?);

    wtr.write_record([
        "experiment_id",
        "run_id",
        "seed",
        "window_days",
        "max_win_count",
        "num_plays",
        "sparsity_factor",
        "arrival",
        "sampling",
        "plays_resolved",
        "plays_skipped",
        "wins_awarded",
        "pool_exhausted",
        "first_win_day",
        "last_win_day",
        "avg_win_gap_days",
        "median_win_gap_days",
        "p90_win_gap_days",
        "pacing_error",
    ])?;

    for (result, param_set) in results.iter().zip(parameter_sets.iter()) {
        let params = &param_set.params;
        wtr.write_record([
            param_set.experiment_id.clone(),
            param_set.run_id.to_string(),
            param_set.seed.to_string(),
            params.window_days.to_string(),
            params.max_win_count.to_string(),
            params.num_plays.to_string(),
            params.sparsity_factor.to_string(),
            arrival_label(&params.arrival),
            sampling_label(&params.sampling).to_string(),
            result.plays_resolved.to_string(),
            result.plays_skipped.to_string(),
            result.wins_awarded.to_string(),
            result.pool_exhausted.to_string(),
            result.first_win_day.to_string(),
            result.last_win_day.to_string(),
            result.avg_win_gap_days.to_string(),
            result.median_win_gap_days.to_string(),
            result.p90_win_gap_days.to_string(),
            result.pacing_error.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export results to pretty-printed JSON, pairing each parameter set with
/// its result (win instants included).
pub fn export_to_json(
    results: &[SimulationResult],
    parameter_sets: &[ParameterSet],
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    check_lengths(results, parameter_sets)?;

    let runs: Vec<_> = results
        .iter()
        .zip(parameter_sets.iter())
        .map(|(result, param_set)| {
            json!({
                "parameters": param_set,
                "result": result,
            })
        })
        .collect();

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &json!({ "runs": runs }))?;
    Ok(())
}

/// Write instants (in day units) one per line, the historical histogram-feed
/// format shared by play and win timing dumps.
pub fn write_timing_histogram(
    path: &Path,
    times_days: &[f64],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(path)?;
    for t in times_days {
        writeln!(file, "{t:12.4}")?;
    }
    Ok(())
}
