//! Scenario grid generation for pricing sweeps.
//!
//! A sweep explores every combination of market size and platform take.
//! Each combination becomes one `ScenarioSpec` carrying its own base seed,
//! so any scenario can be re-run in isolation with identical results.

use marketsim_core::scenario::ScenarioParams;

/// Independent year trials averaged per scenario unless overridden.
pub const DEFAULT_TRIALS: usize = 100;

/// One sweep scenario: a market size, a platform take, and a trial plan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSpec {
    pub max_drivers: usize,
    pub max_riders: usize,
    pub platform_take: f64,
    /// Independent year trials to run and average.
    pub trials: usize,
    /// Base seed for this scenario; trial seeds derive from it.
    pub seed: u64,
}

impl ScenarioSpec {
    /// Seed for one trial within this scenario.
    ///
    /// Distinct trials get distinct random streams; the same spec and
    /// trial index always map to the same stream.
    pub fn trial_seed(&self, trial: usize) -> u64 {
        self.seed
            .wrapping_add(trial as u64)
            .wrapping_mul(0x9e3779b9)
    }

    /// Core scenario parameters for one trial of this scenario.
    pub fn scenario_params(&self, trial: usize) -> ScenarioParams {
        ScenarioParams::default()
            .with_market_size(self.max_drivers, self.max_riders)
            .with_platform_take(self.platform_take)
            .with_seed(self.trial_seed(trial))
    }
}

/// Builder for the cartesian grid of market sizes and platform takes.
#[derive(Debug, Clone)]
pub struct ScenarioSpace {
    market_sizes: Vec<(usize, usize)>,
    platform_takes: Vec<f64>,
    trials: usize,
    base_seed: u64,
}

impl Default for ScenarioSpace {
    fn default() -> Self {
        Self::grid()
    }
}

impl ScenarioSpace {
    /// An empty grid with the default trial count and a zero base seed.
    pub fn grid() -> Self {
        Self {
            market_sizes: Vec::new(),
            platform_takes: Vec::new(),
            trials: DEFAULT_TRIALS,
            base_seed: 0,
        }
    }

    /// Sets the (max_drivers, max_riders) pairs to explore.
    pub fn market_sizes(mut self, sizes: Vec<(usize, usize)>) -> Self {
        self.market_sizes = sizes;
        self
    }

    /// Sets the platform takes to explore.
    pub fn platform_takes(mut self, takes: Vec<f64>) -> Self {
        self.platform_takes = takes;
        self
    }

    /// Sets the trial count per scenario.
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the base seed scenario seeds derive from.
    pub fn base_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = base_seed;
        self
    }

    /// Generates one spec per grid point, market sizes outermost.
    ///
    /// The order here is the row order of every exported results table.
    pub fn generate(&self) -> Vec<ScenarioSpec> {
        self.market_sizes
            .iter()
            .flat_map(|&(max_drivers, max_riders)| {
                self.platform_takes
                    .iter()
                    .map(move |&platform_take| (max_drivers, max_riders, platform_take))
            })
            .enumerate()
            .map(|(index, (max_drivers, max_riders, platform_take))| ScenarioSpec {
                max_drivers,
                max_riders,
                platform_take,
                trials: self.trials,
                seed: self
                    .base_seed
                    .wrapping_add(index as u64)
                    .wrapping_mul(0x9e3779b9),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_three() -> Vec<ScenarioSpec> {
        ScenarioSpace::grid()
            .market_sizes(vec![(5, 100), (10, 200)])
            .platform_takes(vec![2.0, 6.0, 10.0])
            .trials(4)
            .generate()
    }

    #[test]
    fn test_grid_cross_product() {
        let specs = two_by_three();
        assert_eq!(specs.len(), 6);

        // Sizes are the outer loop.
        assert_eq!((specs[0].max_drivers, specs[0].platform_take), (5, 2.0));
        assert_eq!((specs[1].max_drivers, specs[1].platform_take), (5, 6.0));
        assert_eq!((specs[2].max_drivers, specs[2].platform_take), (5, 10.0));
        assert_eq!((specs[3].max_drivers, specs[3].platform_take), (10, 2.0));
    }

    #[test]
    fn test_distinct_scenario_seeds() {
        let specs = two_by_three();
        for (i, a) in specs.iter().enumerate() {
            for b in specs.iter().skip(i + 1) {
                assert_ne!(a.seed, b.seed);
            }
        }
    }

    #[test]
    fn test_trial_seeds_distinct_and_stable() {
        let spec = &two_by_three()[1];

        assert_eq!(spec.trial_seed(3), spec.trial_seed(3));
        let mut seeds: Vec<u64> = (0..spec.trials).map(|t| spec.trial_seed(t)).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), spec.trials);
    }

    #[test]
    fn test_scenario_params_carry_grid_point() {
        let spec = &two_by_three()[4];
        let params = spec.scenario_params(0);

        assert_eq!(params.max_drivers, 10);
        assert_eq!(params.max_riders, 200);
        assert_eq!(params.platform_take, 6.0);
        assert_eq!(params.seed, Some(spec.trial_seed(0)));
    }

    #[test]
    fn test_trial_count_override() {
        assert!(two_by_three().iter().all(|spec| spec.trials == 4));
        let defaults = ScenarioSpace::grid()
            .market_sizes(vec![(5, 100)])
            .platform_takes(vec![2.0])
            .generate();
        assert_eq!(defaults[0].trials, DEFAULT_TRIALS);
    }
}
