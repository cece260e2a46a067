//! Parallel trial execution using rayon.
//!
//! Every trial owns a fresh world seeded from its scenario, so a sweep's
//! output depends only on the scenario list, never on thread count or
//! completion order.

use bevy_ecs::prelude::World;
use indicatif::{ProgressBar, ProgressStyle};
use marketsim_core::runner::{month_schedule, run_year};
use marketsim_core::scenario::{build_scenario, ScenarioError};
use rayon::prelude::*;

use crate::metrics::{extract_metrics, ScenarioResult, YearResult};
use crate::parameters::ScenarioSpec;

/// Run one independent year trial of a scenario.
///
/// # Arguments
///
/// * `spec` - The scenario to simulate
/// * `trial` - Trial index within the scenario, which picks the seed
///
/// # Errors
///
/// Returns an error if the scenario configuration is invalid.
pub fn run_single_trial(spec: &ScenarioSpec, trial: usize) -> Result<YearResult, ScenarioError> {
    let mut world = World::new();
    build_scenario(&mut world, spec.scenario_params(trial))?;

    let mut schedule = month_schedule();
    run_year(&mut world, &mut schedule);

    Ok(extract_metrics(&world))
}

/// Run all of a scenario's trials sequentially and average them.
///
/// # Errors
///
/// Returns an error if the scenario configuration is invalid.
pub fn run_scenario(spec: &ScenarioSpec) -> Result<ScenarioResult, ScenarioError> {
    let mut trials = Vec::with_capacity(spec.trials);
    for trial in 0..spec.trials {
        trials.push(run_single_trial(spec, trial)?);
    }

    Ok(ScenarioResult::from_trials(spec, &trials))
}

/// Run a sweep in parallel with a progress bar over all trials.
///
/// # Arguments
///
/// * `specs` - Scenarios to run; one averaged result comes back per scenario
///
/// # Errors
///
/// Returns an error if any scenario configuration is invalid. Validation
/// happens up front, before any trial runs.
pub fn run_sweep(specs: &[ScenarioSpec]) -> Result<Vec<ScenarioResult>, ScenarioError> {
    run_sweep_with_progress(specs, None, true)
}

/// Run a sweep with explicit threading and progress options.
///
/// Scenarios and their trials are fanned out across a rayon pool; results
/// come back in scenario order regardless of thread count.
///
/// # Arguments
///
/// * `specs` - Scenarios to run
/// * `num_threads` - Optional thread count. If None, uses rayon's default.
/// * `show_progress` - Whether to display a progress bar
///
/// # Errors
///
/// Returns an error if any scenario configuration is invalid.
pub fn run_sweep_with_progress(
    specs: &[ScenarioSpec],
    num_threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<ScenarioResult>, ScenarioError> {
    for spec in specs {
        spec.scenario_params(0).validate()?;
    }

    let total_trials: usize = specs.iter().map(|spec| spec.trials).sum();
    let pb = if show_progress && total_trials > 0 {
        let bar = ProgressBar::new(total_trials as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let pool = if let Some(threads) = num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("Failed to create thread pool")
    } else {
        rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Failed to create thread pool")
    };

    let pb_clone = pb.clone();
    let results: Result<Vec<ScenarioResult>, ScenarioError> = pool.install(|| {
        specs
            .par_iter()
            .map(|spec| {
                let trials: Result<Vec<YearResult>, ScenarioError> = (0..spec.trials)
                    .into_par_iter()
                    .map(|trial| {
                        let result = run_single_trial(spec, trial);
                        if let Some(ref progress_bar) = pb_clone {
                            progress_bar.inc(1);
                        }
                        result
                    })
                    .collect();

                Ok(ScenarioResult::from_trials(spec, &trials?))
            })
            .collect()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    results
}
