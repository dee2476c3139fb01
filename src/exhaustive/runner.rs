//! Breadth-first enumeration of complete tours.
//!
//! # Algorithm
//!
//! 1. Seed a FIFO queue with the single-city path `[0]`
//! 2. Pop a path; if it visits every city, record it as a complete tour,
//!    otherwise push one extension per unvisited city (ascending)
//! 3. Once the queue drains, score every complete tour and keep the first
//!    one with the minimum cyclic length
//!
//! Fixing city 0 at the front loses nothing: a tour's length does not
//! depend on where it starts.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::problem::{DistanceMatrix, Route};

/// Above this many cities enumeration becomes impractical.
const PRACTICAL_CITY_LIMIT: usize = 12;

/// Result of an exhaustive search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveResult {
    /// Globally shortest tour, starting at city 0.
    pub best: Route,
    /// Length of the best tour.
    pub best_cost: f64,
    /// Number of complete tours scored, `(n - 1)!`.
    pub tours_evaluated: usize,
}

/// Exhaustive search runner.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Enumerates every tour and returns the shortest.
    ///
    /// Time and memory grow factorially with the number of cities; the
    /// caller is responsible for keeping the instance small.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_search::exhaustive::ExhaustiveRunner;
    /// use tsp_search::problem::{City, DistanceMatrix};
    ///
    /// let cities = [
    ///     City::new(0.0, 0.0),
    ///     City::new(10.0, 10.0),
    ///     City::new(0.0, 10.0),
    ///     City::new(10.0, 0.0),
    /// ];
    /// let matrix = DistanceMatrix::from_cities(&cities).unwrap();
    /// let result = ExhaustiveRunner::run(&matrix);
    /// assert!((result.best_cost - 40.0).abs() < 1e-9);
    /// ```
    pub fn run(matrix: &DistanceMatrix) -> ExhaustiveResult {
        let n = matrix.len();
        if n > PRACTICAL_CITY_LIMIT {
            warn!(
                cities = n,
                limit = PRACTICAL_CITY_LIMIT,
                "exhaustive search on a large instance"
            );
        }
        info!(event = "search_start", engine = "exhaustive", cities = n);

        let mut tours = enumerate_tours(n);
        debug!(tours = tours.len(), "enumeration complete");

        // A matrix holds at least one city, so there is at least one tour.
        let mut best_index = 0;
        let mut best_cost = matrix.tour_cost(&tours[0]);
        for (index, tour) in tours.iter().enumerate().skip(1) {
            let cost = matrix.tour_cost(tour);
            if cost < best_cost {
                best_cost = cost;
                best_index = index;
            }
        }
        let tours_evaluated = tours.len();
        let best = tours.swap_remove(best_index);

        info!(
            event = "search_end",
            engine = "exhaustive",
            cost = best_cost,
            tours = tours_evaluated
        );

        ExhaustiveResult {
            best,
            best_cost,
            tours_evaluated,
        }
    }
}

/// Every permutation of `0..n` with city 0 first, in breadth-first
/// discovery order.
fn enumerate_tours(n: usize) -> Vec<Route> {
    let mut queue: VecDeque<Route> = VecDeque::from([vec![0]]);
    let mut complete = Vec::new();

    while let Some(path) = queue.pop_front() {
        if path.len() == n {
            complete.push(path);
            continue;
        }
        for next in 0..n {
            if !path.contains(&next) {
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(&path);
                extended.push(next);
                queue.push_back(extended);
            }
        }
    }

    complete
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::swap_neighbors;
    use crate::problem::{random_cities, total_distance, City, InstanceConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0.0, 0.0),
            City::new(0.0, 10.0),
            City::new(10.0, 10.0),
            City::new(10.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_square_perimeter() {
        let result = ExhaustiveRunner::run(&square());
        assert!((result.best_cost - 40.0).abs() < 1e-9);
        assert!(
            result.best == vec![0, 1, 2, 3] || result.best == vec![0, 3, 2, 1],
            "expected perimeter order, got {:?}",
            result.best
        );
        // BFS discovers [0, 1, 2, 3] before its reversal.
        assert_eq!(result.best, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_enumeration_count() {
        assert_eq!(enumerate_tours(1), vec![vec![0]]);
        assert_eq!(enumerate_tours(3), vec![vec![0, 1, 2], vec![0, 2, 1]]);
        assert_eq!(enumerate_tours(5).len(), 24);
        assert_eq!(enumerate_tours(6).len(), 120);
    }

    #[test]
    fn test_every_tour_starts_at_zero() {
        for tour in enumerate_tours(5) {
            assert_eq!(tour[0], 0);
            let mut sorted = tour.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..5).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_single_city() {
        let m = DistanceMatrix::from_cities(&[City::new(1.0, 1.0)]).unwrap();
        let result = ExhaustiveRunner::run(&m);
        assert_eq!(result.best, vec![0]);
        assert_eq!(result.best_cost, 0.0);
        assert_eq!(result.tours_evaluated, 1);
    }

    #[test]
    fn test_two_cities() {
        let m = DistanceMatrix::from_cities(&[City::new(0.0, 0.0), City::new(0.0, 3.0)]).unwrap();
        let result = ExhaustiveRunner::run(&m);
        assert_eq!(result.best, vec![0, 1]);
        assert!((result.best_cost - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_optimum_beats_every_swap_neighbor() {
        let config = InstanceConfig::default().with_num_cities(7);
        let cities = random_cities(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        let m = DistanceMatrix::from_cities(&cities).unwrap();
        let result = ExhaustiveRunner::run(&m);

        assert_eq!(result.tours_evaluated, 720);
        assert!(
            (total_distance(&result.best, &m).unwrap() - result.best_cost).abs() < 1e-9
        );
        for (neighbor, _) in swap_neighbors(&result.best) {
            let d = total_distance(&neighbor, &m).unwrap();
            assert!(
                result.best_cost <= d + 1e-9,
                "neighbor {neighbor:?} shorter than optimum: {d} < {}",
                result.best_cost
            );
        }
    }
}
