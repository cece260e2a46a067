//! Example: the full pricing study.
//!
//! This example demonstrates how to:
//! 1. Select a pre-defined scenario grid
//! 2. Run every scenario's trials in parallel
//! 3. Find the most profitable take and market size
//! 4. Export averaged results to CSV/JSON
//!
//! To sweep a different grid, change the function call in main().

use marketsim_experiments::{
    export_to_csv, export_to_json, find_most_profitable, run_sweep, scenario_spaces,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Starting revenue sweep...");

    // Select which scenario space to use:
    // - default_space(): The full pricing study
    // - minimal_space(): Quick testing
    let space = scenario_spaces::default_space();

    println!("Generating scenarios...");
    let specs = space.generate();
    let trials: usize = specs.iter().map(|spec| spec.trials).sum();
    println!("Generated {} scenarios ({} trials total)", specs.len(), trials);

    // Run trials in parallel (uses all available CPU cores by default)
    println!("Running simulations in parallel...");
    let results = run_sweep(&specs)?;
    println!("Completed {} scenarios", results.len());

    for result in &results {
        println!(
            "\n\tDrivers: {}\n\tRiders: {}\n\tTake: {}\n\t\tAverage net revenue: {:.2}",
            result.max_num_drivers, result.max_num_riders, result.lyft_take, result.net_revenue
        );
    }

    if let Some(best_idx) = find_most_profitable(&results) {
        let best = &results[best_idx];
        println!("\n=== Most Profitable Scenario ===");
        println!("Max drivers: {}", best.max_num_drivers);
        println!("Max riders: {}", best.max_num_riders);
        println!("Platform take: ${:.2}", best.lyft_take);
        println!("Average net revenue: ${:.2}", best.net_revenue);
        println!(
            "Average rides: {:.1} successful / {:.1} failed",
            best.num_successful_rides, best.num_failed_rides
        );
        println!(
            "Average churn: {:.1} riders / {:.1} drivers",
            best.num_churned_riders, best.num_churned_drivers
        );
    }

    export_to_csv(&results, "simulation_results.csv")?;
    println!("\nResults exported to simulation_results.csv");

    export_to_json(&results, "simulation_results.json")?;
    println!("Results exported to simulation_results.json");

    Ok(())
}
