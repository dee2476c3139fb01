//! Hill climbing (steepest descent).
//!
//! Repeatedly moves to the best strictly improving swap-neighbor and stops
//! at the first route with none, a local optimum under pairwise swap. No
//! memory and no worsening moves, so the result depends entirely on the
//! starting route.

mod config;
mod runner;

pub use config::HillClimbingConfig;
pub use runner::{HillClimbingResult, HillClimbingRunner};
