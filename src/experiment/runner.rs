//! Repeated-run comparison of hill climbing and Tabu Search.
//!
//! One instance is generated and shared read-only by every run. Run `i`
//! gets its own generator seeded with `seed + i + 1` (the instance itself
//! uses `seed`), so results do not depend on whether runs execute in
//! parallel.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::config::ExperimentConfig;
use super::types::{ExperimentReport, RunOutcome, RunSummary};
use crate::error::Result;
use crate::hill::HillClimbingRunner;
use crate::problem::{random_cities, City, DistanceMatrix};
use crate::tabu::TabuRunner;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Experiment runner.
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Generates an instance and runs both engines `config.runs` times.
    ///
    /// When `config.seed` is `None` the base seed is drawn from the thread
    /// generator; the drawn value is logged with the start event.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_search::experiment::{ExperimentConfig, ExperimentRunner};
    /// use tsp_search::problem::InstanceConfig;
    /// use tsp_search::tabu::TabuConfig;
    ///
    /// let config = ExperimentConfig::default()
    ///     .with_instance(InstanceConfig::default().with_num_cities(10))
    ///     .with_runs(4)
    ///     .with_tabu(TabuConfig::default().with_iterations(50).with_tabu_capacity(5))
    ///     .with_seed(42);
    /// let report = ExperimentRunner::run(&config).unwrap();
    /// assert_eq!(report.runs.len(), 4);
    /// assert!(report.tabu.min <= report.tabu.mean);
    /// ```
    pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let cities = random_cities(&config.instance, &mut rng)?;

        Self::run_on(cities, config, seed)
    }

    /// Runs both engines on the given cities.
    ///
    /// `seed` is the base from which each run's generator is derived.
    pub fn run_on(
        cities: Vec<City>,
        config: &ExperimentConfig,
        seed: u64,
    ) -> Result<ExperimentReport> {
        config.validate()?;
        let matrix = DistanceMatrix::from_cities(&cities)?;

        info!(
            event = "experiment_start",
            cities = matrix.len(),
            runs = config.runs,
            seed
        );

        let runs = execute_runs(&matrix, config, seed)?;

        let hill_costs: Vec<f64> = runs.iter().map(|r| r.hill_cost).collect();
        let tabu_costs: Vec<f64> = runs.iter().map(|r| r.tabu_cost).collect();
        let hill = RunSummary::from_costs(&hill_costs);
        let tabu = RunSummary::from_costs(&tabu_costs);

        info!(
            event = "experiment_end",
            hill_mean = hill.mean,
            hill_min = hill.min,
            tabu_mean = tabu.mean,
            tabu_min = tabu.min
        );

        Ok(ExperimentReport {
            cities,
            runs,
            hill,
            tabu,
        })
    }
}

fn single_run(
    matrix: &DistanceMatrix,
    config: &ExperimentConfig,
    seed: u64,
    run: usize,
) -> Result<RunOutcome> {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(run as u64 + 1));

    let hill = HillClimbingRunner::run(matrix, &config.hill, &mut rng);
    let tabu = TabuRunner::run(matrix, &config.tabu, &mut rng)?;

    debug!(run, hill = hill.best_cost, tabu = tabu.best_cost, "run complete");

    Ok(RunOutcome {
        run,
        hill_cost: hill.best_cost,
        tabu_cost: tabu.best_cost,
    })
}

#[cfg(feature = "parallel")]
fn execute_runs(
    matrix: &DistanceMatrix,
    config: &ExperimentConfig,
    seed: u64,
) -> Result<Vec<RunOutcome>> {
    if config.parallel {
        (0..config.runs)
            .into_par_iter()
            .map(|run| single_run(matrix, config, seed, run))
            .collect()
    } else {
        (0..config.runs)
            .map(|run| single_run(matrix, config, seed, run))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn execute_runs(
    matrix: &DistanceMatrix,
    config: &ExperimentConfig,
    seed: u64,
) -> Result<Vec<RunOutcome>> {
    (0..config.runs)
        .map(|run| single_run(matrix, config, seed, run))
        .collect()
}
