//! Core distance and similarity algorithms
//!
//! Each algorithm is implemented as a generic function over symbol slices for
//! composability, with `&str` convenience wrappers, plus a trait-based
//! interface over normalized [`Sequence`]s for dispatch.

pub mod damerau;
pub mod hamming;
pub mod jaro;
pub mod lcs;
pub mod levenshtein;
pub mod normalize;

pub use damerau::*;
pub use hamming::*;
pub use jaro::*;
pub use lcs::*;
pub use levenshtein::*;
pub use normalize::{Input, Segmentation, Sequence};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Whether a distance is reported as a raw count or normalized to [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMode {
    /// Raw number of edits
    #[default]
    Absolute,
    /// Edits divided by the sequence length
    Relative,
}

/// Divide an edit count by a length, treating an empty denominator as no distance.
#[inline]
#[must_use]
pub fn relative_distance(distance: usize, len: usize) -> f64 {
    if len == 0 {
        0.0
    } else {
        distance as f64 / len as f64
    }
}

/// Trait for all similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> f64;

    /// Convenience method for distance (1.0 - similarity)
    fn distance(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms that return integer distances
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> usize;

    /// Distance divided by the longer sequence length
    fn relative_distance(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> f64 {
        relative_distance(self.distance(a, b), a.len().max(b.len()))
    }

    /// Convert to normalized similarity score (0.0 to 1.0)
    fn similarity(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> f64 {
        1.0 - EditDistance::relative_distance(self, a, b)
    }

    fn name(&self) -> &'static str;
}

/// Blanket implementation: any EditDistance is also a Similarity
impl<T: EditDistance> Similarity for T {
    fn similarity(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}

/// Trait for edit distance algorithms that may fail.
///
/// Some algorithms have constraints (e.g., Hamming requires equal-length sequences).
///
/// Note: Types implementing this trait should also manually implement `Similarity`
/// to integrate with the rest of the crate.
pub trait FallibleEditDistance: Send + Sync {
    /// Compute distance, failing if the operation is undefined for the inputs
    ///
    /// # Errors
    ///
    /// Implementation specific; see the implementing type.
    fn distance(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> Result<usize>;

    /// Distance divided by the length of `a`
    ///
    /// # Errors
    ///
    /// Same as [`FallibleEditDistance::distance`].
    fn relative_distance(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> Result<f64> {
        self.distance(a, b).map(|d| relative_distance(d, a.len()))
    }

    fn name(&self) -> &'static str;
}
