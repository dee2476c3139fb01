//! Steepest-descent hill climbing over the swap neighborhood.
//!
//! # Algorithm
//!
//! 1. Start from a uniformly random route (or a supplied one)
//! 2. Score every swap-neighbor of the current route
//! 3. If the shortest one is strictly shorter than the current route, move
//!    to it and record its length; otherwise stop at a local optimum
//!
//! Ties go to the neighbor generated first. Each accepted move strictly
//! shortens the route, so the climb always terminates.

use rand::Rng;
use tracing::{info, trace};

use super::config::HillClimbingConfig;
use crate::error::Result;
use crate::neighborhood::swap_neighbors;
use crate::problem::{random_route, validate_route, DistanceMatrix, Route};

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingResult {
    /// Final route.
    pub best: Route,
    /// Length of the final route.
    pub best_cost: f64,
    /// Number of accepted moves.
    pub iterations: usize,
    /// Route length at the start and after every accepted move.
    pub cost_history: Vec<f64>,
    /// `false` if the run stopped on the iteration cap instead.
    pub local_optimum: bool,
}

/// Hill climbing runner.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Climbs from a uniformly random route drawn from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use tsp_search::hill::{HillClimbingConfig, HillClimbingRunner};
    /// use tsp_search::problem::{City, DistanceMatrix};
    ///
    /// let cities: Vec<City> = (0..8)
    ///     .map(|i| City::new((i * 7 % 5) as f64, (i * 3 % 8) as f64))
    ///     .collect();
    /// let matrix = DistanceMatrix::from_cities(&cities).unwrap();
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let result = HillClimbingRunner::run(&matrix, &HillClimbingConfig::default(), &mut rng);
    /// assert!(result.local_optimum);
    /// assert!(result.best_cost <= result.cost_history[0]);
    /// ```
    pub fn run<R: Rng>(
        matrix: &DistanceMatrix,
        config: &HillClimbingConfig,
        rng: &mut R,
    ) -> HillClimbingResult {
        let initial = random_route(matrix.len(), rng);
        climb(matrix, config, initial)
    }

    /// Climbs from the given route.
    ///
    /// # Errors
    ///
    /// [`TspError::DimensionMismatch`](crate::error::TspError::DimensionMismatch)
    /// if `initial` is not a permutation of the matrix's cities.
    pub fn run_from(
        matrix: &DistanceMatrix,
        config: &HillClimbingConfig,
        initial: Route,
    ) -> Result<HillClimbingResult> {
        validate_route(&initial, matrix.len())?;
        Ok(climb(matrix, config, initial))
    }
}

fn climb(
    matrix: &DistanceMatrix,
    config: &HillClimbingConfig,
    initial: Route,
) -> HillClimbingResult {
    let mut current = initial;
    let mut current_cost = matrix.tour_cost(&current);
    let mut cost_history = vec![current_cost];
    let mut iterations = 0;
    let mut local_optimum = false;

    info!(
        event = "search_start",
        engine = "hill_climbing",
        cities = matrix.len(),
        cost = current_cost
    );

    loop {
        if config.max_iterations > 0 && iterations >= config.max_iterations {
            break;
        }

        let mut best_neighbor = None;
        let mut best_neighbor_cost = current_cost;
        for (neighbor, _) in swap_neighbors(&current) {
            let cost = matrix.tour_cost(&neighbor);
            if cost < best_neighbor_cost {
                best_neighbor_cost = cost;
                best_neighbor = Some(neighbor);
            }
        }

        let Some(next) = best_neighbor else {
            local_optimum = true;
            break;
        };

        current = next;
        current_cost = best_neighbor_cost;
        cost_history.push(current_cost);
        iterations += 1;
        trace!(iteration = iterations, cost = current_cost, "accepted move");
    }

    info!(
        event = "search_end",
        engine = "hill_climbing",
        cost = current_cost,
        iterations,
        local_optimum
    );

    HillClimbingResult {
        best: current,
        best_cost: current_cost,
        iterations,
        cost_history,
        local_optimum,
    }
}
