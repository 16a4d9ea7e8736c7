//! Error types for distance computations.

use thiserror::Error;

/// Errors returned by the distance functions.
///
/// None of these are fatal for batch work: each failing pair yields its own
/// `Err` and the remaining pairs are still computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// Input is neither text nor an ordered sequence of tokens
    #[error("input is not comparable: expected text or a list of strings, got {0}")]
    TypeMismatch(String),

    /// Hamming distance requires sequences of equal length
    #[error("sequences must have equal length for Hamming distance: {len_a} != {len_b}")]
    LengthMismatch { len_a: usize, len_b: usize },

    /// A parameter value (metric name, weight, ...) was rejected
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DistanceError>;

/// Raised (as data, not as an `Err`) when a caller-supplied alphabet size is
/// smaller than the number of distinct symbols actually present.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("alphabet size {requested} is smaller than the {observed} distinct symbols observed; using {observed}")]
pub struct AlphabetSizeWarning {
    /// Size the caller asked for
    pub requested: usize,
    /// Distinct symbols found across both inputs
    pub observed: usize,
}
