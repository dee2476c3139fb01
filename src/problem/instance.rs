//! Random problem instances.

use rand::Rng;

use super::city::City;
use crate::error::{Result, TspError};

/// Parameters for sampling a random instance.
///
/// # Examples
///
/// ```
/// use tsp_search::problem::InstanceConfig;
///
/// let config = InstanceConfig::default()
///     .with_num_cities(12)
///     .with_bounds(50.0, 80.0);
/// assert_eq!(config.num_cities, 12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceConfig {
    /// Number of cities to sample.
    pub num_cities: usize,
    /// Width of the sampling rectangle.
    pub width: f64,
    /// Height of the sampling rectangle.
    pub height: f64,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            num_cities: 20,
            width: 100.0,
            height: 100.0,
        }
    }
}

impl InstanceConfig {
    /// Sets the number of cities.
    pub fn with_num_cities(mut self, n: usize) -> Self {
        self.num_cities = n;
        self
    }

    /// Sets the sampling rectangle `[0, width) × [0, height)`.
    pub fn with_bounds(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_cities < 1 {
            return Err(TspError::InvalidDimension(
                "at least one city is required".into(),
            ));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(TspError::InvalidConfiguration(format!(
                "width must be positive and finite, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(TspError::InvalidConfiguration(format!(
                "height must be positive and finite, got {}",
                self.height
            )));
        }
        Ok(())
    }
}

/// Samples cities uniformly inside the configured rectangle.
pub fn random_cities<R: Rng>(config: &InstanceConfig, rng: &mut R) -> Result<Vec<City>> {
    config.validate()?;
    Ok((0..config.num_cities)
        .map(|_| {
            City::new(
                rng.random_range(0.0..config.width),
                rng.random_range(0.0..config.height),
            )
        })
        .collect())
}
