//! Routes and their evaluation.

use rand::seq::SliceRandom;
use rand::Rng;

use super::matrix::DistanceMatrix;
use crate::error::{Result, TspError};

/// A closed tour: a permutation of `0..n`, implicitly returning from the
/// last city to the first.
pub type Route = Vec<usize>;

/// Checks that `route` is a permutation of `0..n`.
///
/// # Errors
///
/// [`TspError::DimensionMismatch`] on a length mismatch, an out-of-range
/// index or a repeated city.
pub fn validate_route(route: &[usize], n: usize) -> Result<()> {
    if route.len() != n {
        return Err(TspError::DimensionMismatch(format!(
            "route has {} cities, matrix has {n}",
            route.len()
        )));
    }
    let mut seen = vec![false; n];
    for &city in route {
        if city >= n {
            return Err(TspError::DimensionMismatch(format!(
                "city {city} out of range for {n} cities"
            )));
        }
        if seen[city] {
            return Err(TspError::DimensionMismatch(format!(
                "city {city} appears more than once"
            )));
        }
        seen[city] = true;
    }
    Ok(())
}

/// Total cyclic distance of `route`, including the closing edge from the
/// last city back to the first.
///
/// # Errors
///
/// [`TspError::DimensionMismatch`] if `route` is not a permutation of the
/// matrix's cities.
///
/// # Examples
///
/// ```
/// use tsp_search::problem::{total_distance, City, DistanceMatrix};
///
/// let cities = [
///     City::new(0.0, 0.0),
///     City::new(0.0, 10.0),
///     City::new(10.0, 10.0),
///     City::new(10.0, 0.0),
/// ];
/// let matrix = DistanceMatrix::from_cities(&cities).unwrap();
/// let d = total_distance(&[0, 1, 2, 3], &matrix).unwrap();
/// assert!((d - 40.0).abs() < 1e-12);
/// ```
pub fn total_distance(route: &[usize], matrix: &DistanceMatrix) -> Result<f64> {
    validate_route(route, matrix.len())?;
    Ok(matrix.tour_cost(route))
}

/// Uniformly random permutation of `0..n`.
pub fn random_route<R: Rng>(n: usize, rng: &mut R) -> Route {
    let mut route: Route = (0..n).collect();
    route.shuffle(rng);
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::City;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square_matrix() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0.0, 0.0),
            City::new(0.0, 10.0),
            City::new(10.0, 10.0),
            City::new(10.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_total_distance_includes_closing_edge() {
        let m = square_matrix();
        // 0 -> 2 -> 1 -> 3 -> 0: two diagonals and two sides
        let expected = 2.0 * 200f64.sqrt() + 20.0;
        assert!((total_distance(&[0, 2, 1, 3], &m).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_total_distance_length_mismatch() {
        let m = square_matrix();
        let err = total_distance(&[0, 1, 2], &m).unwrap_err();
        assert!(matches!(err, TspError::DimensionMismatch(_)));
    }

    #[test]
    fn test_total_distance_duplicate_city() {
        let m = square_matrix();
        let err = total_distance(&[0, 1, 1, 3], &m).unwrap_err();
        assert!(matches!(err, TspError::DimensionMismatch(_)));
    }

    #[test]
    fn test_total_distance_out_of_range() {
        let m = square_matrix();
        let err = total_distance(&[0, 1, 2, 4], &m).unwrap_err();
        assert!(matches!(err, TspError::DimensionMismatch(_)));
    }

    #[test]
    fn test_random_route_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let route = random_route(25, &mut rng);
        assert!(validate_route(&route, 25).is_ok());
    }

    #[test]
    fn test_random_route_seeded_reproducible() {
        let a = random_route(15, &mut StdRng::seed_from_u64(99));
        let b = random_route(15, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    fn instance_strategy() -> impl Strategy<Value = (Vec<City>, u64, usize)> {
        prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), 2..15).prop_flat_map(|pts| {
            let n = pts.len();
            let cities: Vec<City> = pts.into_iter().map(City::from).collect();
            (Just(cities), any::<u64>(), 0..n)
        })
    }

    proptest! {
        #[test]
        fn prop_distance_invariant_under_rotation_and_reversal(
            (cities, seed, shift) in instance_strategy()
        ) {
            let m = DistanceMatrix::from_cities(&cities).unwrap();
            let route = random_route(m.len(), &mut StdRng::seed_from_u64(seed));
            let base = total_distance(&route, &m).unwrap();

            let mut rotated = route.clone();
            rotated.rotate_left(shift);
            let rotated_d = total_distance(&rotated, &m).unwrap();
            prop_assert!((rotated_d - base).abs() < 1e-9);

            let mut reversed = route.clone();
            reversed.reverse();
            let reversed_d = total_distance(&reversed, &m).unwrap();
            prop_assert!((reversed_d - base).abs() < 1e-9);
        }
    }
}
