//! Monthly matching phase: every active rider attempts one ride, then
//! immediately faces a churn draw.

use bevy_ecs::prelude::{Commands, Entity, Query, Res, ResMut};

use crate::ecs::Rider;
use crate::ledger::MarketLedger;
use crate::matching::rider_finds_driver;
use crate::scenario::{FarePolicy, SimRng};

/// Runs one ride attempt and one churn draw for each rider present when
/// the phase starts.
///
/// A matched ride books the fare and the driver pay. An unmatched one
/// marks the rider as having failed, which lowers their churn rate for
/// the rest of their life. Churned riders are despawned after the phase;
/// riders acquired this month participate because acquisition flushes
/// before matching runs.
pub fn matching_system(
    mut commands: Commands,
    fares: Res<FarePolicy>,
    mut ledger: ResMut<MarketLedger>,
    mut rng: ResMut<SimRng>,
    mut riders: Query<(Entity, &mut Rider)>,
) {
    for (entity, mut rider) in riders.iter_mut() {
        if rider_finds_driver(fares.driver_pay, &mut rng.0) {
            ledger.record_successful_ride(fares.ride_fare, fares.driver_pay);
        } else {
            rider.fail_ride();
            ledger.record_failed_ride();
        }

        if rider.does_churn(&mut rng.0) {
            ledger.record_rider_churn();
            commands.entity(entity).despawn();
        }
    }
}
