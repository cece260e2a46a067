//! Fare split and acquisition-cost curves.

/// What a rider pays for one ride.
pub const RIDE_FARE: f64 = 25.0;

/// What a driver earns per ride after the platform keeps its take.
pub fn driver_pay(platform_take: f64) -> f64 {
    RIDE_FARE - platform_take
}

/// Marketing cost of acquiring one rider at the current market depth.
///
/// Rises linearly from $10 for the first rider to $20 at the rider cap.
pub fn rider_acquisition_cost(current_riders: usize, max_riders: usize) -> f64 {
    let slope = (20.0 - 10.0) / max_riders as f64;
    slope * current_riders as f64 + 10.0
}

/// Marketing cost of acquiring one driver at the current market depth.
///
/// Starts at $10 for the first driver and rises by $200 over the span of
/// the driver cap.
pub fn driver_acquisition_cost(current_drivers: usize, max_drivers: usize) -> f64 {
    let slope = (600.0 - 400.0) / max_drivers as f64;
    slope * current_drivers as f64 + 10.0
}
