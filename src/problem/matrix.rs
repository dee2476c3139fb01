//! Pairwise distance table.

use super::city::City;
use crate::error::{Result, TspError};

/// Symmetric N×N table of Euclidean distances between cities.
///
/// Built once per instance and read-only afterwards, so a single matrix can
/// be shared by any number of independent search runs.
///
/// # Examples
///
/// ```
/// use tsp_search::problem::{City, DistanceMatrix};
///
/// let cities = [City::new(0.0, 0.0), City::new(3.0, 4.0)];
/// let matrix = DistanceMatrix::from_cities(&cities).unwrap();
/// assert_eq!(matrix.len(), 2);
/// assert!((matrix.get(0, 1) - 5.0).abs() < 1e-12);
/// assert_eq!(matrix.get(1, 1), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    // Row-major, n * n entries.
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix from city coordinates.
    ///
    /// Each upper-triangle entry is computed once and mirrored into the
    /// lower triangle; the diagonal stays zero.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidDimension`] if `cities` is empty.
    pub fn from_cities(cities: &[City]) -> Result<Self> {
        let n = cities.len();
        if n < 1 {
            return Err(TspError::InvalidDimension(
                "at least one city is required".into(),
            ));
        }

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        Ok(Self { n, data })
    }

    /// Builds the matrix from explicit rows.
    ///
    /// Entries are taken as given; no symmetry check is performed.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidDimension`] if `rows` is empty or not square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n < 1 {
            return Err(TspError::InvalidDimension(
                "distance matrix must have at least one row".into(),
            ));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(TspError::InvalidDimension(format!(
                "distance matrix is not square: row {i} has {} entries, expected {n}",
                row.len()
            )));
        }

        Ok(Self {
            n,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`; a matrix holds at least one city.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "city index out of range");
        self.data[i * self.n + j]
    }

    /// Row `i` of the table.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Cyclic tour length without validating the route.
    ///
    /// Edges are summed from position 0 onwards with the closing edge last;
    /// rotations of a tour may differ in the final bit, and the engines'
    /// tie-breaking depends on this order.
    ///
    /// Callers must guarantee `route` is a permutation of `0..len()`.
    #[inline]
    pub(crate) fn tour_cost(&self, route: &[usize]) -> f64 {
        let n = route.len();
        let mut total = 0.0;
        for (i, &city) in route.iter().enumerate() {
            total += self.data[city * self.n + route[(i + 1) % n]];
        }
        total
    }
}
