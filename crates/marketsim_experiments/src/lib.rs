//! Scenario sweeps for the two-sided marketplace simulator.
//!
//! This crate runs many independent one-year market simulations in parallel,
//! averages each scenario's outcome over its trials, and exports one row per
//! scenario to analyze how the platform's per-ride take and the market's
//! size drive annual net revenue.
//!
//! # Quick Start
//!
//! ```no_run
//! use marketsim_experiments::{
//!     export_to_csv, find_most_profitable, run_sweep, ScenarioSpace,
//! };
//!
//! // Define the scenario grid
//! let space = ScenarioSpace::grid()
//!     .market_sizes(vec![(5, 100), (10, 200)])
//!     .platform_takes(vec![2.0, 6.0, 10.0]);
//!
//! // Generate scenario specs
//! let specs = space.generate();
//!
//! // Run all trials in parallel and average per scenario
//! let results = run_sweep(&specs).expect("sweep should run");
//!
//! // Find the take and market size that earn the most
//! let best_idx = find_most_profitable(&results).unwrap();
//! println!("best take: ${}", results[best_idx].lyft_take);
//!
//! export_to_csv(&results, "simulation_results.csv").expect("export");
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`parameters`]: Scenario grid generation (market sizes x platform takes)
//! - [`scenario_spaces`]: Pre-defined grids, including the full pricing study
//! - [`runner`]: Parallel trial execution using rayon
//! - [`metrics`]: Metric extraction from finished worlds and trial averaging
//! - [`export`]: Result export to CSV/JSON and scenario ranking

pub mod export;
pub mod metrics;
pub mod parameters;
pub mod runner;
pub mod scenario_spaces;

pub use export::{export_to_csv, export_to_json, find_most_profitable};
pub use metrics::{extract_metrics, ScenarioResult, YearResult};
pub use parameters::{ScenarioSpace, ScenarioSpec, DEFAULT_TRIALS};
pub use runner::{run_scenario, run_single_trial, run_sweep, run_sweep_with_progress};
