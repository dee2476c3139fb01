//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a uniformly random route (or a supplied one)
//! 2. At each of a fixed number of iterations:
//!    a. Generate the swap neighborhood of the current route
//!    b. Select the shortest neighbor whose move is not tabu (first wins ties)
//!    c. If every move is tabu, skip the iteration entirely
//!    d. Otherwise move there unconditionally, even if it is longer
//!    e. Push the move onto the tabu list, evicting the oldest if full
//!    f. Update the best route if strictly improved; record the best cost
//! 3. Return the best route seen
//!
//! There is no aspiration criterion and no early stop: a tabu move is never
//! taken, even when it would produce a new best.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::TabuConfig;
use super::types::TabuList;
use crate::error::Result;
use crate::neighborhood::{swap_neighbors, SwapMove};
use crate::problem::{random_route, validate_route, DistanceMatrix, Route};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best route found.
    pub best: Route,
    /// Length of the best route.
    pub best_cost: f64,
    /// Total iterations executed, always the configured count.
    pub iterations: usize,
    /// Iterations on which every move was tabu.
    pub skipped_iterations: usize,
    /// Iteration (1-based) at which the best route was found; 0 if the
    /// starting route was never beaten.
    pub best_iteration: usize,
    /// Best cost at the start and after every non-skipped iteration.
    pub cost_history: Vec<f64>,
    /// Length of the current route at the start and after every move.
    pub current_history: Vec<f64>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs Tabu Search from a uniformly random route drawn from `rng`.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidConfiguration`](crate::error::TspError::InvalidConfiguration)
    /// if the configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use tsp_search::problem::{City, DistanceMatrix};
    /// use tsp_search::tabu::{TabuConfig, TabuRunner};
    ///
    /// let cities: Vec<City> = (0..10)
    ///     .map(|i| City::new((i * 37 % 11) as f64, (i * 13 % 7) as f64))
    ///     .collect();
    /// let matrix = DistanceMatrix::from_cities(&cities).unwrap();
    /// let config = TabuConfig::default().with_iterations(100).with_tabu_capacity(5);
    /// let mut rng = StdRng::seed_from_u64(42);
    ///
    /// let result = TabuRunner::run(&matrix, &config, &mut rng).unwrap();
    /// assert_eq!(result.iterations, 100);
    /// assert!(result.best_cost <= result.cost_history[0]);
    /// ```
    pub fn run<R: Rng>(
        matrix: &DistanceMatrix,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<TabuResult> {
        config.validate()?;
        let initial = random_route(matrix.len(), rng);
        Ok(search(matrix, config, initial))
    }

    /// Runs Tabu Search from the given route.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidConfiguration`](crate::error::TspError::InvalidConfiguration)
    /// for an invalid configuration,
    /// [`TspError::DimensionMismatch`](crate::error::TspError::DimensionMismatch)
    /// if `initial` is not a permutation of the matrix's cities.
    pub fn run_from(
        matrix: &DistanceMatrix,
        config: &TabuConfig,
        initial: Route,
    ) -> Result<TabuResult> {
        config.validate()?;
        validate_route(&initial, matrix.len())?;
        Ok(search(matrix, config, initial))
    }
}

/// Shortest neighbor whose move is not tabu, first one on ties.
fn best_admissible(
    matrix: &DistanceMatrix,
    current: &[usize],
    tabu: &TabuList,
) -> Option<(Route, f64, SwapMove)> {
    let mut best: Option<(Route, f64, SwapMove)> = None;
    let mut best_cost = f64::INFINITY;

    for (neighbor, mv) in swap_neighbors(current) {
        if tabu.contains(&mv) {
            continue;
        }
        let cost = matrix.tour_cost(&neighbor);
        if cost < best_cost {
            best_cost = cost;
            best = Some((neighbor, cost, mv));
        }
    }

    best
}

fn search(matrix: &DistanceMatrix, config: &TabuConfig, initial: Route) -> TabuResult {
    let mut current = initial;
    let mut best = current.clone();
    let mut best_cost = matrix.tour_cost(&best);
    let mut best_iteration = 0;

    let mut tabu = TabuList::new(config.tabu_capacity);
    let mut cost_history = Vec::with_capacity(config.iterations + 1);
    cost_history.push(best_cost);
    let mut current_history = cost_history.clone();
    let mut skipped_iterations = 0;

    info!(
        event = "search_start",
        engine = "tabu",
        cities = matrix.len(),
        iterations = config.iterations,
        tabu_capacity = config.tabu_capacity,
        cost = best_cost
    );

    for iteration in 1..=config.iterations {
        let Some((neighbor, cost, mv)) = best_admissible(matrix, &current, &tabu) else {
            skipped_iterations += 1;
            debug!(iteration, tabu = tabu.len(), "every move is tabu, skipping");
            if config.record_skipped {
                cost_history.push(best_cost);
            }
            continue;
        };

        current = neighbor;
        current_history.push(cost);
        if let Some(evicted) = tabu.push(mv) {
            trace!(iteration, evicted = ?evicted.cities(), "tabu list full");
        }

        if cost < best_cost {
            best = current.clone();
            best_cost = cost;
            best_iteration = iteration;
            trace!(iteration, cost, "new best");
        }

        cost_history.push(best_cost);
    }

    info!(
        event = "search_end",
        engine = "tabu",
        cost = best_cost,
        best_iteration,
        skipped_iterations
    );

    TabuResult {
        best,
        best_cost,
        iterations: config.iterations,
        skipped_iterations,
        best_iteration,
        cost_history,
        current_history,
    }
}
