//! Exhaustive (enumerative) search.
//!
//! Materializes every tour that starts at city 0 and scores them all,
//! guaranteeing a global optimum at factorial cost. Only usable for small
//! instances, roughly a dozen cities at most.

mod runner;

pub use runner::{ExhaustiveResult, ExhaustiveRunner};
