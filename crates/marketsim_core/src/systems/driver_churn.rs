//! Monthly driver churn phase.

use bevy_ecs::prelude::{Commands, Entity, Query, ResMut};

use crate::ecs::Driver;
use crate::ledger::MarketLedger;
use crate::scenario::SimRng;

/// Draws each driver's churn decision and despawns the leavers.
pub fn driver_churn_system(
    mut commands: Commands,
    mut ledger: ResMut<MarketLedger>,
    mut rng: ResMut<SimRng>,
    drivers: Query<(Entity, &Driver)>,
) {
    for (entity, driver) in drivers.iter() {
        if driver.does_churn(&mut rng.0) {
            ledger.record_driver_churn();
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::prelude::{Schedule, World};
    use bevy_ecs::schedule::{apply_deferred, IntoSystemConfigs};

    use super::*;
    use crate::scenario::ScenarioParams;
    use crate::test_helpers::{driver_count, test_world};

    fn run_driver_churn(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems((driver_churn_system, apply_deferred).chain());
        schedule.run(world);
    }

    #[test]
    fn leavers_are_despawned_and_counted() {
        let mut world = test_world(ScenarioParams::default().with_seed(23));
        for _ in 0..1_000 {
            world.spawn(Driver);
        }

        run_driver_churn(&mut world);

        let churned = world.resource::<MarketLedger>().num_churned_drivers as usize;
        assert_eq!(driver_count(&mut world) + churned, 1_000);

        // At a 5% monthly rate, a thousand drivers lose roughly fifty.
        assert!(churned > 20, "only {churned} drivers churned");
        assert!(churned < 100, "{churned} drivers churned");
    }

    #[test]
    fn churn_is_reproducible_for_a_seed() {
        let run = |seed: u64| {
            let mut world = test_world(ScenarioParams::default().with_seed(seed));
            for _ in 0..200 {
                world.spawn(Driver);
            }
            run_driver_churn(&mut world);
            world.resource::<MarketLedger>().num_churned_drivers
        };

        assert_eq!(run(42), run(42));
    }
}
