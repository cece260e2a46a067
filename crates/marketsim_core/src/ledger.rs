//! The running financial ledger for one simulated marketplace.

use bevy_ecs::prelude::Resource;

/// Cumulative money flows and population events for a single market.
///
/// Systems only ever add to the ledger; nothing in a simulated year
/// subtracts or resets.
#[derive(Debug, Clone, Default, PartialEq, Resource)]
pub struct MarketLedger {
    /// Fares collected from riders.
    pub total_rider_payments: f64,
    /// Pay handed to drivers.
    pub total_driver_payouts: f64,
    /// Marketing spend on rider acquisition.
    pub rider_cac_total: f64,
    /// Marketing spend on driver acquisition.
    pub driver_cac_total: f64,
    pub num_churned_drivers: u64,
    pub num_churned_riders: u64,
    pub num_successful_rides: u64,
    pub num_failed_rides: u64,
}

impl MarketLedger {
    /// Books one matched ride: the rider pays the fare, the driver gets paid.
    pub fn record_successful_ride(&mut self, fare: f64, driver_pay: f64) {
        self.total_rider_payments += fare;
        self.total_driver_payouts += driver_pay;
        self.num_successful_rides = self.num_successful_rides.saturating_add(1);
    }

    /// Books one unmatched ride attempt. No money moves.
    pub fn record_failed_ride(&mut self) {
        self.num_failed_rides = self.num_failed_rides.saturating_add(1);
    }

    pub fn record_rider_acquisition(&mut self, cost: f64) {
        self.rider_cac_total += cost;
    }

    pub fn record_driver_acquisition(&mut self, cost: f64) {
        self.driver_cac_total += cost;
    }

    pub fn record_rider_churn(&mut self) {
        self.num_churned_riders = self.num_churned_riders.saturating_add(1);
    }

    pub fn record_driver_churn(&mut self) {
        self.num_churned_drivers = self.num_churned_drivers.saturating_add(1);
    }

    /// Net revenue to date: fares in, minus driver pay and all marketing
    /// spend on both sides of the market.
    pub fn net_revenue(&self) -> f64 {
        self.total_rider_payments
            - self.total_driver_payouts
            - self.rider_cac_total
            - self.driver_cac_total
    }
}
