//! Longest common substrings and the LCS distance
//!
//! Despite the historical "LCS" name these functions work on **contiguous**
//! runs (substrings), not on the classical non-contiguous subsequence.
//!
//! # Complexity
//! - Time: O(m*n) for the maximal length, plus O(m+n) window hashing
//! - Space: O(n) for the length pass, O(n) windows for extraction

use super::{Sequence, Similarity};
use ahash::AHashSet;
use smallvec::SmallVec;
use std::hash::Hash;

/// LCS-distance calculator
///
/// Similarity is `1 - lcs_distance`.
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lcs;

impl Lcs {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Lcs {
    fn similarity(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> f64 {
        1.0 - lcs_distance_seq(a.symbols(), b.symbols())
    }

    fn name(&self) -> &'static str {
        "lcs"
    }
}

/// Length of the longest common contiguous run of `a` and `b`.
#[must_use]
pub fn longest_common_substring_length_seq<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let n = b.len();
    if a.is_empty() || n == 0 {
        return 0;
    }

    let mut prev: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut max_len = 0;

    for x in a {
        curr[0] = 0;
        for j in 1..=n {
            if *x == b[j - 1] {
                curr[j] = prev[j - 1] + 1;
                max_len = max_len.max(curr[j]);
            } else {
                curr[j] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    max_len
}

/// All distinct common substrings of maximal length.
///
/// Candidates are taken from the shorter input (the first one on ties) in
/// order of first occurrence. When nothing is shared the result is a single
/// empty substring.
#[must_use]
pub fn longest_common_subsequences_seq<'t, T: Eq + Hash>(a: &'t [T], b: &'t [T]) -> Vec<&'t [T]> {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let len = longest_common_substring_length_seq(shorter, longer);
    if len == 0 {
        return vec![&shorter[..0]];
    }

    let in_longer: AHashSet<&[T]> = longer.windows(len).collect();
    let mut seen: AHashSet<&[T]> = AHashSet::new();

    shorter
        .windows(len)
        .filter(|w| in_longer.contains(w) && seen.insert(*w))
        .collect()
}

/// `1 - |LCS| / min(|a|, |b|)`, or `1.0` when nothing is shared.
#[must_use]
pub fn lcs_distance_seq<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let min_len = a.len().min(b.len());
    let len = longest_common_substring_length_seq(a, b);
    if len == 0 || min_len == 0 {
        return 1.0;
    }
    1.0 - len as f64 / min_len as f64
}

/// All longest common substrings of two strings, character by character.
///
/// Returns `vec![String::new()]` when the strings share no character.
#[must_use]
pub fn longest_common_subsequences(a: &str, b: &str) -> Vec<String> {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    longest_common_subsequences_seq(&a_chars, &b_chars)
        .into_iter()
        .map(|run| run.iter().collect())
        .collect()
}

/// LCS distance between two strings, character by character.
#[must_use]
pub fn lcs_distance(a: &str, b: &str) -> f64 {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    lcs_distance_seq(&a_chars, &b_chars)
}
