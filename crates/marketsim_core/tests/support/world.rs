#![allow(dead_code)]

use bevy_ecs::prelude::World;
use marketsim_core::scenario::{build_scenario, ScenarioParams};

pub use marketsim_core::test_helpers::{driver_count, rider_count};

/// Builder for reproducible marketplace worlds.
#[derive(Debug, Clone, Copy)]
pub struct MarketWorldBuilder {
    params: ScenarioParams,
}

impl Default for MarketWorldBuilder {
    fn default() -> Self {
        Self {
            params: ScenarioParams::default().with_seed(42),
        }
    }
}

impl MarketWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.params = self.params.with_seed(seed);
        self
    }

    pub fn with_market_size(mut self, max_drivers: usize, max_riders: usize) -> Self {
        self.params = self.params.with_market_size(max_drivers, max_riders);
        self
    }

    pub fn with_platform_take(mut self, platform_take: f64) -> Self {
        self.params = self.params.with_platform_take(platform_take);
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new();
        build_scenario(&mut world, self.params).expect("test scenario should be valid");
        world
    }
}
