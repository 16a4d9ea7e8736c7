//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for names and short identifiers.
//! Jaro-Winkler gives extra weight to common prefixes once the plain Jaro
//! score clears a boost threshold.
//!
//! # Empty inputs
//!
//! Two empty sequences are identical and score `1.0`. Any other pair without
//! a single matching symbol scores `0.0`.
//!
//! # Performance
//!
//! For ASCII strings the `&str` entry points compare bytes directly instead
//! of collecting `char` arrays.

use super::{Sequence, Similarity};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*w) where w is the match window
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Jaro {
    fn similarity(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> f64 {
        jaro_similarity_seq(a.symbols(), b.symbols())
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Configuration for Jaro-Winkler similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroWinklerConfig {
    /// Prefix weight `p` (typically 0.1)
    pub prefix_weight: f64,
    /// Prefix bonus is only applied when the Jaro score is at least this
    pub boost_threshold: f64,
    /// Maximum prefix length to consider (typically 4)
    pub max_prefix_length: usize,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            prefix_weight: 0.1,
            boost_threshold: 0.7,
            max_prefix_length: 4,
        }
    }
}

impl JaroWinklerConfig {
    /// Whether `prefix_weight * max_prefix_length` keeps every score within [0, 1]
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.prefix_weight >= 0.0 && self.prefix_weight * self.max_prefix_length as f64 <= 1.0
    }
}

/// Jaro-Winkler similarity calculator
///
/// Extends Jaro similarity by giving extra weight to common prefixes.
///
/// The prefix weight is not clamped. Keeping
/// `prefix_weight * max_prefix_length <= 1` is the caller's job; a warning is
/// logged when a calculator is built outside that range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JaroWinkler {
    config: JaroWinklerConfig,
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from configuration
    #[must_use]
    pub fn from_config(config: JaroWinklerConfig) -> Self {
        if !config.is_bounded() {
            log::warn!(
                "jaro_winkler prefix_weight {} with max_prefix_length {} can produce scores above 1.0",
                config.prefix_weight,
                config.max_prefix_length
            );
        }
        Self { config }
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> JaroWinklerConfig {
        self.config
    }

    #[must_use]
    pub fn with_prefix_weight(self, weight: f64) -> Self {
        Self::from_config(JaroWinklerConfig {
            prefix_weight: weight,
            ..self.config
        })
    }

    #[must_use]
    pub fn with_boost_threshold(mut self, threshold: f64) -> Self {
        self.config.boost_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_max_prefix_length(self, length: usize) -> Self {
        Self::from_config(JaroWinklerConfig {
            max_prefix_length: length,
            ..self.config
        })
    }
}

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> f64 {
        jaro_winkler_similarity_seq(a.symbols(), b.symbols(), &self.config)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

/// Jaro similarity for any comparable slice type.
#[must_use]
pub fn jaro_similarity_seq<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let a_len = a.len();
    let b_len = b.len();

    if a_len == 0 && b_len == 0 {
        return 1.0;
    }
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    // Match window
    let match_distance = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];

    let mut matches = 0usize;

    // Earliest unmatched position of b inside the window
    for i in 0..a_len {
        let start = i.saturating_sub(match_distance);
        let end = (i + match_distance + 1).min(b_len);

        for j in start..end {
            if b_matched[j] || a[i] != b[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both matched subsequences in order; every differing position is
    // half a transposition
    let mut half_transpositions = 0usize;
    let mut k = 0usize;
    for i in 0..a_len {
        if !a_matched[i] {
            continue;
        }
        while k < b_len && !b_matched[k] {
            k += 1;
        }
        if k >= b_len {
            break;
        }
        if a[i] != b[k] {
            half_transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = half_transpositions as f64 / 2.0;
    (m / a_len as f64 + m / b_len as f64 + (m - t) / m) / 3.0
}

/// Jaro-Winkler similarity for any comparable slice type.
#[must_use]
pub fn jaro_winkler_similarity_seq<T: PartialEq>(
    a: &[T],
    b: &[T],
    config: &JaroWinklerConfig,
) -> f64 {
    let jaro_sim = jaro_similarity_seq(a, b);

    if jaro_sim < config.boost_threshold {
        return jaro_sim;
    }

    let prefix_len = a
        .iter()
        .zip(b.iter())
        .take(config.max_prefix_length)
        .take_while(|(x, y)| x == y)
        .count();

    jaro_sim + (prefix_len as f64 * config.prefix_weight * (1.0 - jaro_sim))
}

/// Calculate Jaro similarity between two strings.
/// Returns a value between 0.0 and 1.0.
#[inline]
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    if a.is_ascii() && b.is_ascii() {
        return jaro_similarity_seq(a.as_bytes(), b.as_bytes());
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    jaro_similarity_seq(&a_chars, &b_chars)
}

/// Calculate Jaro-Winkler similarity with custom parameters.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity_params(a: &str, b: &str, config: &JaroWinklerConfig) -> f64 {
    if a.is_ascii() && b.is_ascii() {
        return jaro_winkler_similarity_seq(a.as_bytes(), b.as_bytes(), config);
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    jaro_winkler_similarity_seq(&a_chars, &b_chars, config)
}

/// Calculate Jaro-Winkler similarity with default parameters
/// (`p = 0.1`, boost threshold `0.7`, prefix capped at 4).
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    jaro_winkler_similarity_params(a, b, &JaroWinklerConfig::default())
}

/// Distance version (1.0 - similarity)
#[inline]
#[must_use]
pub fn jaro_distance(a: &str, b: &str) -> f64 {
    1.0 - jaro_similarity(a, b)
}

#[inline]
#[must_use]
pub fn jaro_winkler_distance(a: &str, b: &str) -> f64 {
    1.0 - jaro_winkler_similarity(a, b)
}
