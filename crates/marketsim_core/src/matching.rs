//! Driver-supply response: how likely a ride request is to be matched at a
//! given monthly driver pay.

use rand::Rng;

/// Below this per-ride driver pay no driver accepts requests at all.
pub const MIN_VIABLE_DRIVER_PAY: f64 = 15.0;

/// Probability that a single ride request finds a driver.
///
/// Piecewise-linear supply curve anchored at (15, 0.30), (19, 0.60),
/// (22, 0.93) and (24, 0.97). Match probability jumps from zero to 0.30 at
/// the $15 floor and flattens out above $22, where drivers are already
/// well paid.
pub fn match_probability(driver_pay: f64) -> f64 {
    if driver_pay < MIN_VIABLE_DRIVER_PAY {
        0.0
    } else if driver_pay < 19.0 {
        0.075 * driver_pay - 0.825
    } else if driver_pay <= 22.0 {
        0.11 * driver_pay - 1.49
    } else {
        0.02 * driver_pay + 0.49
    }
}

/// Draws one ride attempt at the given driver pay.
///
/// Below the viability floor this returns `false` without consuming a
/// random draw.
pub fn rider_finds_driver<R: Rng>(driver_pay: f64, rng: &mut R) -> bool {
    let probability = match_probability(driver_pay);
    if probability <= 0.0 {
        return false;
    }
    rng.gen::<f64>() < probability
}
