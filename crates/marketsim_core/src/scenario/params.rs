//! Scenario configuration resources and validation.

use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;

use crate::pricing;

pub const DEFAULT_MAX_DRIVERS: usize = 5;
pub const DEFAULT_MAX_RIDERS: usize = 100;
pub const DEFAULT_PLATFORM_TAKE: f64 = 2.0;

/// Population caps the acquisition phase steers toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub struct PopulationCaps {
    pub max_drivers: usize,
    pub max_riders: usize,
}

/// The fare split in force for every ride this scenario.
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct FarePolicy {
    pub ride_fare: f64,
    pub platform_take: f64,
    pub driver_pay: f64,
}

impl FarePolicy {
    /// Splits the standard fare at the given platform take.
    pub fn from_take(platform_take: f64) -> Self {
        Self {
            ride_fare: pricing::RIDE_FARE,
            platform_take,
            driver_pay: pricing::driver_pay(platform_take),
        }
    }
}

/// The single random stream every draw in a world goes through.
#[derive(Debug, Resource)]
pub struct SimRng(pub StdRng);

/// Rejected scenario configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScenarioError {
    ZeroMaxDrivers,
    ZeroMaxRiders,
    NonFinitePlatformTake(f64),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::ZeroMaxDrivers => write!(f, "max_drivers must be at least 1"),
            ScenarioError::ZeroMaxRiders => write!(f, "max_riders must be at least 1"),
            ScenarioError::NonFinitePlatformTake(take) => {
                write!(f, "platform take must be finite, got {take}")
            }
        }
    }
}

impl std::error::Error for ScenarioError {}

/// Everything needed to build one simulated market.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioParams {
    pub max_drivers: usize,
    pub max_riders: usize,
    pub platform_take: f64,
    /// Seed for the world's random stream. `None` seeds with zero.
    pub seed: Option<u64>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            max_drivers: DEFAULT_MAX_DRIVERS,
            max_riders: DEFAULT_MAX_RIDERS,
            platform_take: DEFAULT_PLATFORM_TAKE,
            seed: None,
        }
    }
}

impl ScenarioParams {
    pub fn with_market_size(mut self, max_drivers: usize, max_riders: usize) -> Self {
        self.max_drivers = max_drivers;
        self.max_riders = max_riders;
        self
    }

    pub fn with_platform_take(mut self, platform_take: f64) -> Self {
        self.platform_take = platform_take;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the configuration before any world state is touched.
    ///
    /// A negative or fare-exceeding take is allowed; it lands in the
    /// zero-match band of the supply curve rather than being an error.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.max_drivers == 0 {
            return Err(ScenarioError::ZeroMaxDrivers);
        }
        if self.max_riders == 0 {
            return Err(ScenarioError::ZeroMaxRiders);
        }
        if !self.platform_take.is_finite() {
            return Err(ScenarioError::NonFinitePlatformTake(self.platform_take));
        }
        Ok(())
    }
}
