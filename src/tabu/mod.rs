//! Tabu Search (TS).
//!
//! Hill climbing with short-term memory: the search always moves to the
//! best neighbor whose move is not tabu, even when that neighbor is longer,
//! and remembers the last few moves in a bounded FIFO so it does not
//! immediately undo them. Moves are identified by the pair of cities
//! exchanged, not by their positions.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuRunner};
pub use types::TabuList;
