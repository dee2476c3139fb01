//! Hill climbing configuration.

/// Configuration parameters for hill climbing.
///
/// # Examples
///
/// ```
/// use tsp_search::hill::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default().with_max_iterations(50);
/// assert_eq!(config.max_iterations, 50);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Cap on accepted moves. 0 = climb until a local optimum.
    pub max_iterations: usize,
}

impl HillClimbingConfig {
    /// Sets the cap on accepted moves (0 disables the cap).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        assert_eq!(HillClimbingConfig::default().max_iterations, 0);
    }
}
