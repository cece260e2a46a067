//! Result export and analysis utilities.
//!
//! Exports averaged sweep results to CSV and JSON and finds the most
//! profitable scenario in a result set.

use std::fs::File;
use std::path::Path;

use crate::metrics::ScenarioResult;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/ranking.rs"]
mod ranking;

/// Export averaged results to CSV, one row per scenario.
///
/// The column order is fixed so downstream notebooks can chart files from
/// different runs interchangeably.
///
/// # Arguments
///
/// * `results` - Averaged scenario results to export
/// * `path` - Path to the output CSV file
///
/// # Errors
///
/// Returns an error if `results` is empty or if file creation or writing
/// fails.
pub fn export_to_csv(
    results: &[ScenarioResult],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_not_empty(results)?;
    let file = create_output_file(path)?;
    csv::export_to_csv_impl(results, file)
}

/// Export averaged results as a JSON array.
///
/// # Arguments
///
/// * `results` - Averaged scenario results to export
/// * `path` - Path to the output JSON file
///
/// # Errors
///
/// Returns an error if file creation or serialization fails.
pub fn export_to_json(
    results: &[ScenarioResult],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = create_output_file(path)?;
    json::export_to_json_impl(results, file)
}

/// Index of the scenario with the highest average net revenue.
///
/// Returns `None` for an empty result set.
pub fn find_most_profitable(results: &[ScenarioResult]) -> Option<usize> {
    ranking::find_most_profitable_impl(results)
}

fn ensure_not_empty(results: &[ScenarioResult]) -> Result<(), Box<dyn std::error::Error>> {
    if results.is_empty() {
        return Err("No scenario results to export".into());
    }

    Ok(())
}

fn create_output_file(path: impl AsRef<Path>) -> Result<File, Box<dyn std::error::Error>> {
    Ok(File::create(path)?)
}
