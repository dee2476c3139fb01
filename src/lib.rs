//! Search engines for the Euclidean Traveling Salesman Problem.
//!
//! Three strategies over the same route machinery:
//!
//! - **Exhaustive search**: Enumerates every tour from a fixed starting
//!   city and returns the global optimum. Factorial cost; small instances only.
//! - **Hill climbing**: Steepest descent over the pairwise-swap neighborhood,
//!   stopping at the first local optimum.
//! - **Tabu Search (TS)**: Swap-neighborhood search that accepts worsening
//!   moves and forbids recently used ones via a bounded FIFO tabu list.
//!
//! Supporting modules build the distance table ([`problem`]), enumerate
//! swap-neighbors ([`neighborhood`]) and compare the local-search engines
//! over repeated runs ([`experiment`]).
//!
//! # Randomness
//!
//! The search engines never read ambient random state. Every engine that
//! needs a random starting route takes a caller-supplied [`rand::Rng`], so
//! a seeded generator makes every run reproducible. The one exception is
//! [`experiment::ExperimentRunner::run`], which draws a base seed from the
//! thread generator when its configuration carries none.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tsp_search::exhaustive::ExhaustiveRunner;
//! use tsp_search::hill::{HillClimbingConfig, HillClimbingRunner};
//! use tsp_search::problem::{random_cities, DistanceMatrix, InstanceConfig};
//! use tsp_search::tabu::{TabuConfig, TabuRunner};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let cities = random_cities(&InstanceConfig::default().with_num_cities(8), &mut rng).unwrap();
//! let matrix = DistanceMatrix::from_cities(&cities).unwrap();
//!
//! let optimum = ExhaustiveRunner::run(&matrix);
//! let climbed = HillClimbingRunner::run(&matrix, &HillClimbingConfig::default(), &mut rng);
//! let tabu = TabuRunner::run(&matrix, &TabuConfig::default().with_iterations(200), &mut rng).unwrap();
//!
//! assert!(optimum.best_cost <= climbed.best_cost + 1e-9);
//! assert!(optimum.best_cost <= tabu.best_cost + 1e-9);
//! ```

pub mod error;
pub mod exhaustive;
pub mod experiment;
pub mod hill;
pub mod neighborhood;
pub mod problem;
pub mod tabu;

pub use error::{Result, TspError};
