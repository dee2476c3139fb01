//! Error types for TSP search.

use thiserror::Error;

/// Errors surfaced at the boundary of every entry point.
///
/// Search engines never fail once their inputs have been validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TspError {
    /// City count below one, or a distance table that is not square.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A route whose length disagrees with the matrix, or which is not a
    /// permutation of `0..n`.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A configuration value outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type alias for TSP search operations.
pub type Result<T> = std::result::Result<T, TspError>;
