//! World construction for a single market scenario.

use bevy_ecs::prelude::World;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::calendar::MonthClock;
use crate::ledger::MarketLedger;
use crate::scenario::params::{FarePolicy, PopulationCaps, ScenarioError, ScenarioParams, SimRng};

/// Inserts every resource a month schedule needs into an empty world.
///
/// Validation runs first; on error the world is left untouched. The market
/// starts with no drivers and no riders, the first acquisition phase
/// populates it.
pub fn build_scenario(world: &mut World, params: ScenarioParams) -> Result<(), ScenarioError> {
    params.validate()?;

    let seed = params.seed.unwrap_or(0);
    world.insert_resource(SimRng(StdRng::seed_from_u64(seed)));
    world.insert_resource(PopulationCaps {
        max_drivers: params.max_drivers,
        max_riders: params.max_riders,
    });
    world.insert_resource(FarePolicy::from_take(params.platform_take));
    world.insert_resource(MarketLedger::default());
    world.insert_resource(MonthClock::default());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_params_insert_all_resources() {
        let mut world = World::new();
        build_scenario(
            &mut world,
            ScenarioParams::default()
                .with_market_size(10, 200)
                .with_platform_take(4.0)
                .with_seed(9),
        )
        .expect("scenario should build");

        let caps = world.resource::<PopulationCaps>();
        assert_eq!(caps.max_drivers, 10);
        assert_eq!(caps.max_riders, 200);

        let policy = world.resource::<FarePolicy>();
        assert!((policy.driver_pay - 21.0).abs() < 1e-9);

        assert!(world.get_resource::<MarketLedger>().is_some());
        assert!(world.get_resource::<MonthClock>().is_some());
        assert!(world.get_resource::<SimRng>().is_some());
    }

    #[test]
    fn invalid_params_leave_the_world_empty() {
        let mut world = World::new();
        let result = build_scenario(&mut world, ScenarioParams::default().with_market_size(0, 0));

        assert_eq!(result, Err(ScenarioError::ZeroMaxDrivers));
        assert!(world.get_resource::<MarketLedger>().is_none());
        assert!(world.get_resource::<SimRng>().is_none());
    }
}
