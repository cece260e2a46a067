//! Metric extraction from finished worlds and averaging across trials.

use bevy_ecs::prelude::World;
use marketsim_core::ledger::MarketLedger;

use crate::parameters::ScenarioSpec;

/// The financial outcome of one completed year trial.
#[derive(Debug, Clone, PartialEq)]
pub struct YearResult {
    pub total_rider_payments: f64,
    pub total_driver_payouts: f64,
    pub rider_cac_total: f64,
    pub driver_cac_total: f64,
    pub num_churned_drivers: u64,
    pub num_churned_riders: u64,
    pub num_successful_rides: u64,
    pub num_failed_rides: u64,
    pub net_revenue: f64,
}

/// Reads the year's metrics out of a finished world.
pub fn extract_metrics(world: &World) -> YearResult {
    let ledger = world
        .get_resource::<MarketLedger>()
        .expect("MarketLedger resource not found");

    YearResult {
        total_rider_payments: ledger.total_rider_payments,
        total_driver_payouts: ledger.total_driver_payouts,
        rider_cac_total: ledger.rider_cac_total,
        driver_cac_total: ledger.driver_cac_total,
        num_churned_drivers: ledger.num_churned_drivers,
        num_churned_riders: ledger.num_churned_riders,
        num_successful_rides: ledger.num_successful_rides,
        num_failed_rides: ledger.num_failed_rides,
        net_revenue: ledger.net_revenue(),
    }
}

/// One scenario's trial-averaged metrics plus its configuration.
///
/// This is one row of the exported results table; counter averages are
/// fractional because they are means over trials.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScenarioResult {
    pub total_rider_payments: f64,
    pub total_driver_payouts: f64,
    pub rider_cac_total: f64,
    pub driver_cac_total: f64,
    pub num_churned_drivers: f64,
    pub num_churned_riders: f64,
    pub num_successful_rides: f64,
    pub num_failed_rides: f64,
    pub max_num_drivers: usize,
    pub max_num_riders: usize,
    pub lyft_take: f64,
    pub net_revenue: f64,
}

impl ScenarioResult {
    /// Arithmetic mean of every metric across the scenario's trials.
    pub fn from_trials(spec: &ScenarioSpec, trials: &[YearResult]) -> Self {
        assert!(!trials.is_empty(), "cannot average zero trials");

        let count = trials.len() as f64;
        let mean = |f: fn(&YearResult) -> f64| trials.iter().map(f).sum::<f64>() / count;

        Self {
            total_rider_payments: mean(|trial| trial.total_rider_payments),
            total_driver_payouts: mean(|trial| trial.total_driver_payouts),
            rider_cac_total: mean(|trial| trial.rider_cac_total),
            driver_cac_total: mean(|trial| trial.driver_cac_total),
            num_churned_drivers: mean(|trial| trial.num_churned_drivers as f64),
            num_churned_riders: mean(|trial| trial.num_churned_riders as f64),
            num_successful_rides: mean(|trial| trial.num_successful_rides as f64),
            num_failed_rides: mean(|trial| trial.num_failed_rides as f64),
            max_num_drivers: spec.max_drivers,
            max_num_riders: spec.max_riders,
            lyft_take: spec.platform_take,
            net_revenue: mean(|trial| trial.net_revenue),
        }
    }
}
