//! Experiment configuration.

use crate::error::{Result, TspError};
use crate::hill::HillClimbingConfig;
use crate::problem::InstanceConfig;
use crate::tabu::TabuConfig;

/// Configuration for a repeated hill climbing vs. Tabu Search comparison.
///
/// # Examples
///
/// ```
/// use tsp_search::experiment::ExperimentConfig;
/// use tsp_search::tabu::TabuConfig;
///
/// let config = ExperimentConfig::default()
///     .with_runs(10)
///     .with_tabu(TabuConfig::default().with_iterations(100))
///     .with_seed(7);
/// assert_eq!(config.runs, 10);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Instance to generate.
    pub instance: InstanceConfig,
    /// Number of independent runs per engine.
    pub runs: usize,
    /// Hill climbing parameters.
    pub hill: HillClimbingConfig,
    /// Tabu Search parameters.
    pub tabu: TabuConfig,
    /// Random seed. `None` uses a random seed.
    pub seed: Option<u64>,
    /// Whether to execute runs in parallel using rayon. Ignored unless the
    /// `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            instance: InstanceConfig::default(),
            runs: 30,
            hill: HillClimbingConfig::default(),
            tabu: TabuConfig::default(),
            seed: None,
            parallel: true,
        }
    }
}

impl ExperimentConfig {
    /// Sets the instance parameters.
    pub fn with_instance(mut self, instance: InstanceConfig) -> Self {
        self.instance = instance;
        self
    }

    /// Sets the number of runs.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Sets the hill climbing parameters.
    pub fn with_hill(mut self, hill: HillClimbingConfig) -> Self {
        self.hill = hill;
        self
    }

    /// Sets the Tabu Search parameters.
    pub fn with_tabu(mut self, tabu: TabuConfig) -> Self {
        self.tabu = tabu;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel runs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(TspError::InvalidConfiguration(
                "runs must be positive".into(),
            ));
        }
        self.instance.validate()?;
        self.tabu.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_experiment() {
        let config = ExperimentConfig::default();
        assert_eq!(config.instance.num_cities, 20);
        assert_eq!(config.runs, 30);
        assert_eq!(config.tabu.iterations, 500);
        assert_eq!(config.tabu.tabu_capacity, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_runs_rejected() {
        let config = ExperimentConfig::default().with_runs(0);
        assert!(matches!(
            config.validate(),
            Err(TspError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_nested_validation() {
        let config =
            ExperimentConfig::default().with_tabu(TabuConfig::default().with_iterations(0));
        assert!(matches!(
            config.validate(),
            Err(TspError::InvalidConfiguration(_))
        ));

        let config =
            ExperimentConfig::default().with_instance(InstanceConfig::default().with_num_cities(0));
        assert!(matches!(
            config.validate(),
            Err(TspError::InvalidDimension(_))
        ));
    }
}
