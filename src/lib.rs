//! seqdist - edit-distance and similarity metrics for sequences
//!
//! Classical string-similarity algorithms over characters or arbitrary tokens
//! (gene names, exon ids, k-mers, ...).
//!
//! # Features
//! - Hamming, Jaro, Jaro-Winkler, Optimal String Alignment, Levenshtein,
//!   Damerau-Levenshtein and longest-common-substring distances
//! - Absolute or relative (length-normalized) distances
//! - Text and token inputs compared symbol by symbol
//! - Serializable metric selection and parallel batch processing
//!
//! # Example
//! ```
//! use seqdist::{damerau_levenshtein, jaro_winkler_similarity, levenshtein};
//!
//! assert_eq!(levenshtein("sitting", "kitten"), 3);
//! assert_eq!(damerau_levenshtein("rcik", "rick"), 1);
//! assert!(jaro_winkler_similarity("MARTHA", "MARHTA") > 0.96);
//! ```

pub mod algorithms;
pub mod batch;
pub mod error;
pub mod metric;

pub use algorithms::{
    damerau_levenshtein, hamming_distance, jaro_similarity, jaro_winkler_similarity, lcs_distance,
    levenshtein, longest_common_subsequences, optimal_string_alignment, DistanceMode,
    EditDistance, FallibleEditDistance, Input, Segmentation, Sequence, Similarity,
};
pub use batch::{compare_one_to_many, compare_pairs, compare_value_pairs, BatchConfig};
pub use error::{AlphabetSizeWarning, DistanceError, Result};
pub use metric::{Metric, Score};
