//! Hamming distance implementation
//!
//! Counts positions where symbols differ.
//! Only defined for sequences of equal length.
//!
//! # Length Mismatch Behavior
//!
//! Sequences of different lengths produce [`DistanceError::LengthMismatch`]
//! rather than a panic, so batch callers can skip the row and continue.
//! When used via the `Similarity` trait, unequal lengths score `0.0`.
//!
//! # Complexity
//! - Time: O(n) where n is the sequence length
//! - Space: O(n) for character vectors (string entry points only)

use super::{DistanceMode, FallibleEditDistance, Sequence, Similarity};
use crate::error::{DistanceError, Result};
use crate::metric::Score;
use smallvec::SmallVec;

/// Hamming distance calculator
///
/// Implements `FallibleEditDistance` because Hamming distance is only
/// defined for sequences of equal length.
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Distance in the requested mode.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::LengthMismatch`] for unequal lengths.
    pub fn score(&self, a: &Sequence<'_>, b: &Sequence<'_>, mode: DistanceMode) -> Result<Score> {
        match mode {
            DistanceMode::Absolute => FallibleEditDistance::distance(self, a, b).map(Score::Count),
            DistanceMode::Relative => {
                FallibleEditDistance::relative_distance(self, a, b).map(Score::Ratio)
            }
        }
    }
}

impl FallibleEditDistance for Hamming {
    fn distance(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> Result<usize> {
        hamming_distance_seq(a.symbols(), b.symbols())
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Unequal-length sequences return `0.0` (no similarity) since Hamming
/// distance is undefined for them. Use `FallibleEditDistance` to tell the
/// two cases apart.
impl Similarity for Hamming {
    fn similarity(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> f64 {
        FallibleEditDistance::relative_distance(self, a, b)
            .map(|d| 1.0 - d)
            .unwrap_or(0.0)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Hamming distance between two symbol slices.
///
/// # Errors
///
/// Returns [`DistanceError::LengthMismatch`] if the slices differ in length.
pub fn hamming_distance_seq<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize> {
    if a.len() != b.len() {
        return Err(DistanceError::LengthMismatch {
            len_a: a.len(),
            len_b: b.len(),
        });
    }

    Ok(a.iter().zip(b.iter()).filter(|(x, y)| x != y).count())
}

/// Calculate Hamming distance between two strings, character by character.
///
/// # Errors
///
/// Returns [`DistanceError::LengthMismatch`] if the strings have different
/// character counts.
pub fn hamming_distance(a: &str, b: &str) -> Result<usize> {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    hamming_distance_seq(&a_chars, &b_chars)
}

/// Hamming distance divided by the string length.
///
/// Two empty strings have a relative distance of `0.0`.
///
/// # Errors
///
/// Returns [`DistanceError::LengthMismatch`] for unequal lengths.
pub fn relative_hamming_distance(a: &str, b: &str) -> Result<f64> {
    let dist = hamming_distance(a, b)?;
    Ok(super::relative_distance(dist, a.chars().count()))
}
