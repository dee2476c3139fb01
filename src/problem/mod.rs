//! Problem representation.
//!
//! Cities, the pairwise distance table built from them, routes over the
//! cities and the evaluation of a route's cyclic length. Everything in this
//! module is immutable once built and safe to share between search runs.

mod city;
mod instance;
mod matrix;
mod route;

pub use city::City;
pub use instance::{random_cities, InstanceConfig};
pub use matrix::DistanceMatrix;
pub use route::{random_route, total_distance, validate_route, Route};
