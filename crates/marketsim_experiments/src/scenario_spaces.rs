//! Pre-defined scenario grids.

use crate::parameters::ScenarioSpace;

/// The full pricing study: five market sizes crossed with seven platform
/// takes, a hundred trials each.
///
/// Takes above $10 are not in the grid; they push driver pay below the $15
/// viability floor where nothing matches.
pub fn default_space() -> ScenarioSpace {
    ScenarioSpace::grid()
        .market_sizes(vec![(5, 100), (2, 200), (5, 200), (10, 200), (10, 1000)])
        .platform_takes(vec![0.5, 2.0, 4.0, 6.0, 8.0, 9.0, 10.0])
}

/// One small market at two takes with few trials, for smoke runs.
pub fn minimal_space() -> ScenarioSpace {
    ScenarioSpace::grid()
        .market_sizes(vec![(5, 100)])
        .platform_takes(vec![2.0, 6.0])
        .trials(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_space_grid() {
        let specs = default_space().generate();
        assert_eq!(specs.len(), 35);
        assert_eq!(specs[0].platform_take, 0.5);
        assert_eq!((specs[0].max_drivers, specs[0].max_riders), (5, 100));
        assert_eq!((specs[7].max_drivers, specs[7].max_riders), (2, 200));
        assert!(specs.iter().all(|spec| spec.trials == 100));
    }

    #[test]
    fn test_minimal_space() {
        let specs = minimal_space().generate();
        assert_eq!(specs.len(), 2);
        assert!(specs.iter().all(|spec| spec.trials == 10));
    }
}
