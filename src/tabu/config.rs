//! Tabu Search configuration.

use crate::error::{Result, TspError};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tsp_search::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_iterations(1000)
///     .with_tabu_capacity(7);
/// assert_eq!(config.iterations, 1000);
/// assert_eq!(config.tabu_capacity, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of iterations to run. The search never stops early.
    pub iterations: usize,
    /// How many recent moves stay forbidden. 0 forbids nothing.
    pub tabu_capacity: usize,
    /// Append the unchanged best cost to the history on iterations where
    /// every move was tabu. Off by default: such iterations leave no
    /// history entry, so the history can be shorter than `iterations + 1`.
    pub record_skipped: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            tabu_capacity: 20,
            record_skipped: false,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Records skipped iterations in the history.
    pub fn with_record_skipped(mut self, record: bool) -> Self {
        self.record_skipped = record;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(TspError::InvalidConfiguration(
                "iterations must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.iterations, 500);
        assert_eq!(config.tabu_capacity, 20);
        assert!(!config.record_skipped);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_iterations(10)
            .with_tabu_capacity(0)
            .with_record_skipped(true);
        assert_eq!(config.iterations, 10);
        assert_eq!(config.tabu_capacity, 0);
        assert!(config.record_skipped);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = TabuConfig::default().with_iterations(0);
        assert!(matches!(
            config.validate(),
            Err(TspError::InvalidConfiguration(_))
        ));
    }
}
