//! Repeated-run experiments.
//!
//! Generates a random instance, runs hill climbing and Tabu Search on it
//! many times with independent generators, and summarizes the final
//! distances of each engine.

mod config;
mod runner;
mod types;

pub use config::ExperimentConfig;
pub use runner::ExperimentRunner;
pub use types::{ExperimentReport, RunOutcome, RunSummary};
