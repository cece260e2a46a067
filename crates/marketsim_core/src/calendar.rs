//! Month counter for a simulated year.

use bevy_ecs::prelude::Resource;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Tracks how many months the world has simulated.
#[derive(Debug, Default, Resource)]
pub struct MonthClock {
    month: u32,
}

impl MonthClock {
    /// Months completed so far, starting at zero.
    pub fn current_month(&self) -> u32 {
        self.month
    }

    pub fn advance(&mut self) {
        self.month = self.month.saturating_add(1);
    }

    pub fn year_complete(&self) -> bool {
        self.month >= MONTHS_PER_YEAR
    }
}
