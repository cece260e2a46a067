//! Marketplace entities: the driver and rider components and their
//! monthly churn behaviour.

use bevy_ecs::prelude::Component;
use rand::Rng;

/// Monthly probability that an active driver leaves the platform.
pub const DRIVER_CHURN_RATE: f64 = 0.05;
/// Monthly churn probability for a rider who has never failed to find a ride.
pub const RIDER_CHURN_RATE_SATISFIED: f64 = 0.33;
/// Monthly churn probability for a rider who has failed at least once.
pub const RIDER_CHURN_RATE_FAILED: f64 = 0.10;

/// A driver active on the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct Driver;

impl Driver {
    /// Draws this month's churn decision.
    pub fn does_churn<R: Rng>(&self, rng: &mut R) -> bool {
        rng.gen::<f64>() < DRIVER_CHURN_RATE
    }
}

/// A rider active on the platform.
///
/// Riders who have failed to find a driver churn at 10% per month; riders
/// who have never failed churn at 33%.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct Rider {
    /// Whether any ride attempt has ever gone unmatched.
    pub has_failed_ride: bool,
}

impl Rider {
    /// Records an unmatched ride attempt. The flag never resets.
    pub fn fail_ride(&mut self) {
        self.has_failed_ride = true;
    }

    /// Draws this month's churn decision at the rate for this rider's
    /// ride history.
    pub fn does_churn<R: Rng>(&self, rng: &mut R) -> bool {
        let rate = if self.has_failed_ride {
            RIDER_CHURN_RATE_FAILED
        } else {
            RIDER_CHURN_RATE_SATISFIED
        };
        rng.gen::<f64>() < rate
    }
}
