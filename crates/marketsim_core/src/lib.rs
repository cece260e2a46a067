pub mod calendar;
pub mod ecs;
pub mod ledger;
pub mod matching;
pub mod pricing;
pub mod runner;
pub mod scenario;
pub mod systems;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
