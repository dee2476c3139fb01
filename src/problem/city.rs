//! City coordinates.

/// A point in the plane.
///
/// # Examples
///
/// ```
/// use tsp_search::problem::City;
///
/// let a = City::new(0.0, 0.0);
/// let b = City::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let a = City::new(1.5, -2.0);
        let b = City::new(-4.0, 7.25);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = City::new(12.0, 34.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_from_tuple() {
        let c: City = (2.0, 3.0).into();
        assert_eq!(c, City::new(2.0, 3.0));
    }
}
