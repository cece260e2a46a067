//! Scenario configuration and world construction.

mod build;
mod params;

pub use build::build_scenario;
pub use params::{
    FarePolicy, PopulationCaps, ScenarioError, ScenarioParams, SimRng, DEFAULT_MAX_DRIVERS,
    DEFAULT_MAX_RIDERS, DEFAULT_PLATFORM_TAKE,
};
