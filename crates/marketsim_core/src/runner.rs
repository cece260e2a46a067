//! Month and year runners.
//!
//! One schedule run is one month: acquisition, then matching with rider
//! churn, then driver churn. Deferred commands flush between phases, so
//! riders acquired this month attempt rides this month and riders churned
//! during matching are gone before driver churn runs.

use bevy_ecs::prelude::{Schedule, World};
use bevy_ecs::schedule::{apply_deferred, IntoSystemConfigs};

use crate::calendar::{MonthClock, MONTHS_PER_YEAR};
use crate::systems::acquisition::acquisition_system;
use crate::systems::driver_churn::driver_churn_system;
use crate::systems::matching::matching_system;

/// Builds the three-phase month schedule. Reusable across months and
/// across worlds.
pub fn month_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            acquisition_system,
            apply_deferred,
            matching_system,
            apply_deferred,
            driver_churn_system,
            apply_deferred,
        )
            .chain(),
    );
    schedule
}

/// Runs one month against the world and advances its month clock.
pub fn run_month(world: &mut World, schedule: &mut Schedule) {
    schedule.run(world);
    world.resource_mut::<MonthClock>().advance();
}

/// Runs twelve months.
pub fn run_year(world: &mut World, schedule: &mut Schedule) {
    for _ in 0..MONTHS_PER_YEAR {
        run_month(world, schedule);
    }
}
