//! Pairwise-swap neighborhood.
//!
//! Every neighbor of a route is produced by exchanging the cities at two
//! positions `i < j`. Neighbors are yielded with `i` ascending, then `j`
//! ascending; both local-search engines break ties by this order.

use crate::problem::Route;

/// The unordered pair of cities exchanged to produce a neighbor.
///
/// A move is identified by city identities, not positions: swapping
/// cities 3 and 7 is the same move wherever they currently sit in the route.
///
/// # Examples
///
/// ```
/// use tsp_search::neighborhood::SwapMove;
///
/// assert_eq!(SwapMove::new(7, 3), SwapMove::new(3, 7));
/// assert_eq!(SwapMove::new(7, 3).cities(), (3, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapMove {
    low: usize,
    high: usize,
}

impl SwapMove {
    /// Creates the move exchanging cities `a` and `b`, in either order.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The two cities, smaller identity first.
    pub fn cities(&self) -> (usize, usize) {
        (self.low, self.high)
    }
}

/// Lazy iterator over every swap-neighbor of a route.
///
/// Yields exactly `n * (n - 1) / 2` items. The source route is borrowed
/// immutably; each neighbor is a fresh copy.
#[derive(Debug, Clone)]
pub struct SwapNeighbors<'a> {
    route: &'a [usize],
    i: usize,
    j: usize,
}

impl<'a> SwapNeighbors<'a> {
    pub fn new(route: &'a [usize]) -> Self {
        Self { route, i: 0, j: 1 }
    }

    fn remaining(&self) -> usize {
        let n = self.route.len();
        if self.i + 1 >= n {
            return 0;
        }
        // Rest of row i, plus every later row.
        let rest_of_row = n - self.j;
        let later_rows = n - self.i - 1;
        rest_of_row + later_rows * (later_rows - 1) / 2
    }
}

impl Iterator for SwapNeighbors<'_> {
    type Item = (Route, SwapMove);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.route.len();
        if self.j >= n {
            self.i += 1;
            self.j = self.i + 1;
        }
        if self.i + 1 >= n {
            return None;
        }

        let (i, j) = (self.i, self.j);
        self.j += 1;

        let mv = SwapMove::new(self.route[i], self.route[j]);
        let mut neighbor = self.route.to_vec();
        neighbor.swap(i, j);
        Some((neighbor, mv))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let r = self.remaining();
        (r, Some(r))
    }
}

impl ExactSizeIterator for SwapNeighbors<'_> {}

/// Enumerates all swap-neighbors of `route` together with their moves.
///
/// # Examples
///
/// ```
/// use tsp_search::neighborhood::{swap_neighbors, SwapMove};
///
/// let route = vec![2, 0, 1];
/// let all: Vec<_> = swap_neighbors(&route).collect();
/// assert_eq!(all.len(), 3);
/// assert_eq!(all[0], (vec![0, 2, 1], SwapMove::new(0, 2)));
/// ```
pub fn swap_neighbors(route: &[usize]) -> SwapNeighbors<'_> {
    SwapNeighbors::new(route)
}
