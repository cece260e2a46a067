//! Runs one simulated year for a single market and prints the ledger.
//!
//! Run with: cargo run -p marketsim_core --example single_year

use bevy_ecs::prelude::World;
use marketsim_core::ledger::MarketLedger;
use marketsim_core::runner::{month_schedule, run_year};
use marketsim_core::scenario::{build_scenario, ScenarioParams};

const MAX_DRIVERS: usize = 5;
const MAX_RIDERS: usize = 100;
const PLATFORM_TAKE: f64 = 6.0;
const SEED: u64 = 123;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut world = World::new();
    build_scenario(
        &mut world,
        ScenarioParams::default()
            .with_market_size(MAX_DRIVERS, MAX_RIDERS)
            .with_platform_take(PLATFORM_TAKE)
            .with_seed(SEED),
    )?;

    let mut schedule = month_schedule();
    run_year(&mut world, &mut schedule);

    let ledger = world.resource::<MarketLedger>();
    println!("--- One year simulated ---");
    println!("Max drivers:      {MAX_DRIVERS}");
    println!("Max riders:       {MAX_RIDERS}");
    println!("Platform take:    ${PLATFORM_TAKE:.2}");
    println!("Rider payments:   ${:.2}", ledger.total_rider_payments);
    println!("Driver payouts:   ${:.2}", ledger.total_driver_payouts);
    println!("Rider CAC spend:  ${:.2}", ledger.rider_cac_total);
    println!("Driver CAC spend: ${:.2}", ledger.driver_cac_total);
    println!("Successful rides: {}", ledger.num_successful_rides);
    println!("Failed rides:     {}", ledger.num_failed_rides);
    println!("Churned riders:   {}", ledger.num_churned_riders);
    println!("Churned drivers:  {}", ledger.num_churned_drivers);
    println!("Net revenue:      ${:.2}", ledger.net_revenue());

    Ok(())
}
