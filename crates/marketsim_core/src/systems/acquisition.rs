//! Monthly acquisition phase: marketing tops up both sides of the market
//! toward their population caps.

use bevy_ecs::prelude::{Commands, Query, Res, ResMut, With};

use crate::ecs::{Driver, Rider};
use crate::ledger::MarketLedger;
use crate::pricing::{driver_acquisition_cost, rider_acquisition_cost};
use crate::scenario::PopulationCaps;

/// Each month's spend brings in a tenth of the cap of each population.
const MONTHLY_ACQUISITION_DIVISOR: usize = 10;

/// Spawns this month's acquired drivers and riders and books their
/// acquisition costs.
///
/// Driver batches are floored at one, so small markets still attract a
/// driver per month. Rider batches are a plain tenth of the cap, so rider
/// caps below ten acquire nobody. Each new member's cost is evaluated at
/// the population count before that member joins, which makes later
/// members of a batch cost more. A batch is never truncated at the cap;
/// a population sitting just under its cap overshoots it.
pub fn acquisition_system(
    mut commands: Commands,
    caps: Res<PopulationCaps>,
    mut ledger: ResMut<MarketLedger>,
    drivers: Query<(), With<Driver>>,
    riders: Query<(), With<Rider>>,
) {
    let driver_count = drivers.iter().count();
    if driver_count < caps.max_drivers {
        let batch = (caps.max_drivers / MONTHLY_ACQUISITION_DIVISOR).max(1);
        for joined in 0..batch {
            let cost = driver_acquisition_cost(driver_count + joined, caps.max_drivers);
            ledger.record_driver_acquisition(cost);
            commands.spawn(Driver);
        }
    }

    let rider_count = riders.iter().count();
    if rider_count < caps.max_riders {
        let batch = caps.max_riders / MONTHLY_ACQUISITION_DIVISOR;
        for joined in 0..batch {
            let cost = rider_acquisition_cost(rider_count + joined, caps.max_riders);
            ledger.record_rider_acquisition(cost);
            commands.spawn(Rider::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::prelude::{Schedule, World};
    use bevy_ecs::schedule::{apply_deferred, IntoSystemConfigs};

    use super::*;
    use crate::scenario::ScenarioParams;
    use crate::test_helpers::{driver_count, rider_count, test_world};

    fn run_acquisition(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems((acquisition_system, apply_deferred).chain());
        schedule.run(world);
    }

    #[test]
    fn first_month_seeds_both_populations() {
        let mut world = test_world(ScenarioParams::default().with_market_size(5, 100));

        run_acquisition(&mut world);

        assert_eq!(driver_count(&mut world), 1);
        assert_eq!(rider_count(&mut world), 10);

        let ledger = world.resource::<MarketLedger>();
        assert!((ledger.driver_cac_total - 10.0).abs() < 1e-9);
        // 10 riders at costs 10.0, 10.1, ... 10.9
        assert!((ledger.rider_cac_total - 104.5).abs() < 1e-9);
    }

    #[test]
    fn rider_cap_below_ten_acquires_no_riders() {
        let mut world = test_world(ScenarioParams::default().with_market_size(5, 5));

        run_acquisition(&mut world);

        assert_eq!(driver_count(&mut world), 1);
        assert_eq!(rider_count(&mut world), 0);
        assert_eq!(world.resource::<MarketLedger>().rider_cac_total, 0.0);
    }

    #[test]
    fn populations_at_cap_acquire_nobody() {
        let mut world = test_world(ScenarioParams::default().with_market_size(2, 10));
        for _ in 0..2 {
            world.spawn(Driver);
        }
        for _ in 0..10 {
            world.spawn(Rider::default());
        }

        run_acquisition(&mut world);

        assert_eq!(driver_count(&mut world), 2);
        assert_eq!(rider_count(&mut world), 10);
        let ledger = world.resource::<MarketLedger>();
        assert_eq!(ledger.driver_cac_total, 0.0);
        assert_eq!(ledger.rider_cac_total, 0.0);
    }

    #[test]
    fn batch_overshoots_a_nearly_full_cap() {
        let mut world = test_world(ScenarioParams::default().with_market_size(20, 100));
        for _ in 0..19 {
            world.spawn(Driver);
        }

        run_acquisition(&mut world);

        // 19 of 20 means one more batch of two joins, landing at 21.
        assert_eq!(driver_count(&mut world), 21);
    }

    #[test]
    fn acquisition_cost_rises_within_a_batch() {
        let mut world = test_world(ScenarioParams::default().with_market_size(10, 100));

        run_acquisition(&mut world);

        // A driver batch of one at count 0, then rider costs 10.0 through 10.9.
        let ledger = world.resource::<MarketLedger>();
        assert!((ledger.driver_cac_total - 10.0).abs() < 1e-9);
        assert!((ledger.rider_cac_total - 104.5).abs() < 1e-9);

        run_acquisition(&mut world);

        // Second driver joins at count 1 and costs 30.
        let ledger = world.resource::<MarketLedger>();
        assert!((ledger.driver_cac_total - 40.0).abs() < 1e-9);
    }
}
