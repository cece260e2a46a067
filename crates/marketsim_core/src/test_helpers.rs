//! Helpers for building seeded test worlds.

use bevy_ecs::prelude::World;

use crate::ecs::{Driver, Rider};
use crate::scenario::{build_scenario, ScenarioParams};

/// Builds a world for the given params, panicking on invalid configuration.
pub fn test_world(params: ScenarioParams) -> World {
    let mut world = World::new();
    build_scenario(&mut world, params).expect("test scenario should be valid");
    world
}

/// Live riders in the world.
pub fn rider_count(world: &mut World) -> usize {
    world.query::<&Rider>().iter(world).count()
}

/// Live drivers in the world.
pub fn driver_count(world: &mut World) -> usize {
    world.query::<&Driver>().iter(world).count()
}
