//! Experiment outcomes and summary statistics.

use crate::problem::City;

/// Final distances of one run of each engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOutcome {
    /// Zero-based run index.
    pub run: usize,
    /// Final distance reached by hill climbing.
    pub hill_cost: f64,
    /// Best distance found by Tabu Search.
    pub tabu_cost: f64,
}

/// Summary statistics over a set of final distances.
///
/// `std_dev` is the population standard deviation.
///
/// # Examples
///
/// ```
/// use tsp_search::experiment::RunSummary;
///
/// let s = RunSummary::from_costs(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert_eq!(s.count, 8);
/// assert!((s.mean - 5.0).abs() < 1e-12);
/// assert!((s.std_dev - 2.0).abs() < 1e-12);
/// assert_eq!(s.min, 2.0);
/// assert_eq!(s.max, 9.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Number of runs summarized.
    pub count: usize,
    /// Mean final distance.
    pub mean: f64,
    /// Population standard deviation of the final distances.
    pub std_dev: f64,
    /// Shortest final distance.
    pub min: f64,
    /// Longest final distance.
    pub max: f64,
}

impl RunSummary {
    /// Summarizes `costs`. All statistics are NaN when `costs` is empty.
    pub fn from_costs(costs: &[f64]) -> Self {
        if costs.is_empty() {
            return Self {
                count: 0,
                mean: f64::NAN,
                std_dev: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let n = costs.len() as f64;
        let mean = costs.iter().sum::<f64>() / n;
        let variance = costs.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / n;

        Self {
            count: costs.len(),
            mean,
            std_dev: variance.sqrt(),
            min: costs.iter().copied().fold(f64::INFINITY, f64::min),
            max: costs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Result of an experiment.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentReport {
    /// The generated instance shared by every run.
    pub cities: Vec<City>,
    /// Per-run outcomes, ordered by run index.
    pub runs: Vec<RunOutcome>,
    /// Hill climbing statistics.
    pub hill: RunSummary,
    /// Tabu Search statistics.
    pub tabu: RunSummary,
}
