#![allow(dead_code)]

use bevy_ecs::prelude::World;
use bevy_ecs::schedule::Schedule;
use marketsim_core::runner::{month_schedule, run_month, run_year};

/// Owns a reusable month schedule so tests can step months or whole years.
pub struct MonthRunner {
    schedule: Schedule,
}

impl Default for MonthRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MonthRunner {
    pub fn new() -> Self {
        Self {
            schedule: month_schedule(),
        }
    }

    /// Advances the world by one month.
    pub fn run_month(&mut self, world: &mut World) {
        run_month(world, &mut self.schedule);
    }

    /// Advances the world by a full year.
    pub fn run_year(&mut self, world: &mut World) {
        run_year(world, &mut self.schedule);
    }
}
