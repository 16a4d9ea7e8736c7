//! Damerau-Levenshtein and Optimal String Alignment distances
//!
//! Both extend Levenshtein with adjacent transpositions:
//!
//! - **Optimal String Alignment** (OSA, "restricted" Damerau-Levenshtein) never
//!   edits a substring more than once, so a transposed pair cannot be edited
//!   again.
//! - **Damerau-Levenshtein** ("true" variant) allows unrestricted
//!   transpositions using a last-occurrence table over the shared alphabet.
//!
//! Example where they differ: "CA" -> "ABC" is 3 under OSA (sub, sub, ins) and
//! 2 under Damerau-Levenshtein (transpose CA->AC, insert B).

use super::normalize::symbol_ids;
use super::{relative_distance, EditDistance, Sequence};
use crate::error::AlphabetSizeWarning;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::hash::Hash;

// ============================================================================
// Optimal String Alignment
// ============================================================================

/// Optimal String Alignment calculator
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(n), three rolling rows
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimalStringAlignment;

impl OptimalStringAlignment {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for OptimalStringAlignment {
    fn distance(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> usize {
        osa_distance_seq(a.symbols(), b.symbols())
    }

    fn name(&self) -> &'static str {
        "osa"
    }
}

/// OSA distance between two symbol slices.
#[must_use]
pub fn osa_distance_seq<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Row i-2 is needed for the transposition term
    let mut prev2_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                curr_row[j] = curr_row[j].min(prev2_row[j - 2] + cost); // transposition
            }
        }

        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// OSA distance between two strings, character by character.
#[inline]
#[must_use]
pub fn optimal_string_alignment(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    osa_distance_seq(&a_chars, &b_chars)
}

/// OSA distance divided by the longer string length.
#[must_use]
pub fn relative_optimal_string_alignment(a: &str, b: &str) -> f64 {
    relative_distance(
        optimal_string_alignment(a, b),
        a.chars().count().max(b.chars().count()),
    )
}

// ============================================================================
// Damerau-Levenshtein
// ============================================================================

/// Configuration for Damerau-Levenshtein
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamerauConfig {
    /// Expected alphabet size. A warning is reported when it is smaller than
    /// the number of distinct symbols actually present.
    pub alphabet_size: Option<usize>,
}

/// Result of a Damerau-Levenshtein computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamerauOutcome {
    pub distance: usize,
    /// Set when the requested alphabet size had to be corrected
    pub warning: Option<AlphabetSizeWarning>,
}

/// Damerau-Levenshtein distance calculator (unrestricted transpositions)
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(m*n) for the full matrix plus O(k) for the last-occurrence table,
///   k being the number of distinct symbols
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein {
    pub config: DamerauConfig,
}

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_alphabet_size(alphabet_size: usize) -> Self {
        Self {
            config: DamerauConfig {
                alphabet_size: Some(alphabet_size),
            },
        }
    }

    /// Distance plus any alphabet-size correction that was applied.
    #[must_use]
    pub fn compute(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> DamerauOutcome {
        damerau_levenshtein_with_alphabet(a.symbols(), b.symbols(), self.config.alphabet_size)
    }
}

impl EditDistance for DamerauLevenshtein {
    fn distance(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> usize {
        self.compute(a, b).distance
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}

/// Check a requested alphabet size against the distinct symbols observed.
///
/// An undersized request is logged and reported; larger requests are accepted
/// as they are.
#[must_use]
pub fn check_alphabet_size(
    requested: Option<usize>,
    observed: usize,
) -> Option<AlphabetSizeWarning> {
    match requested {
        Some(requested) if requested < observed => {
            let warning = AlphabetSizeWarning { requested, observed };
            log::warn!("{warning}");
            Some(warning)
        }
        _ => None,
    }
}

/// Damerau-Levenshtein distance between two symbol slices.
#[must_use]
pub fn damerau_levenshtein_seq<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    damerau_levenshtein_with_alphabet(a, b, None).distance
}

/// Damerau-Levenshtein distance with an optional caller-supplied alphabet size.
///
/// The last-occurrence table holds one slot per distinct symbol in `a` and
/// `b`, whatever size was requested. A requested size below that count is
/// logged and reported in [`DamerauOutcome::warning`].
#[must_use]
pub fn damerau_levenshtein_with_alphabet<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    alphabet_size: Option<usize>,
) -> DamerauOutcome {
    let ids = symbol_ids(a, b);
    let warning = check_alphabet_size(alphabet_size, ids.len());

    let m = a.len();
    let n = b.len();

    if m == 0 || n == 0 {
        return DamerauOutcome {
            distance: m.max(n),
            warning,
        };
    }

    let max_dist = m + n;

    // Last row (1-based) where each symbol occurred in a; 0 means never
    let mut last_row: Vec<usize> = vec![0; ids.len()];

    // DP matrix with a sentinel row and column
    let mut d: Vec<Vec<usize>> = vec![vec![0; n + 2]; m + 2];

    d[0][0] = max_dist;
    for i in 0..=m {
        d[i + 1][0] = max_dist;
        d[i + 1][1] = i;
    }
    for j in 0..=n {
        d[0][j + 1] = max_dist;
        d[1][j + 1] = j;
    }

    for i in 1..=m {
        // Last column in this row where a[i-1] matched b
        let mut db = 0usize;

        for j in 1..=n {
            let i1 = last_row[ids[&b[j - 1]]];
            let j1 = db;

            let cost = if a[i - 1] == b[j - 1] {
                db = j;
                0
            } else {
                1
            };

            d[i + 1][j + 1] = (d[i][j] + cost) // substitution
                .min(d[i + 1][j] + 1) // insertion
                .min(d[i][j + 1] + 1) // deletion
                .min(d[i1][j1] + (i - i1 - 1) + 1 + (j - j1 - 1)); // transposition
        }

        last_row[ids[&a[i - 1]]] = i;
    }

    DamerauOutcome {
        distance: d[m + 1][n + 1],
        warning,
    }
}

/// Damerau-Levenshtein distance between two strings, character by character.
#[inline]
#[must_use]
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    damerau_levenshtein_seq(&a_chars, &b_chars)
}

/// Damerau-Levenshtein distance divided by the longer string length.
#[must_use]
pub fn relative_damerau_levenshtein(a: &str, b: &str) -> f64 {
    relative_distance(
        damerau_levenshtein(a, b),
        a.chars().count().max(b.chars().count()),
    )
}

/// Normalized similarity (0.0 to 1.0) using Damerau-Levenshtein.
#[inline]
#[must_use]
pub fn damerau_levenshtein_similarity(a: &str, b: &str) -> f64 {
    1.0 - relative_damerau_levenshtein(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damerau_basic() {
        assert_eq!(damerau_levenshtein("", ""), 0);
        assert_eq!(damerau_levenshtein("abc", ""), 3);
        assert_eq!(damerau_levenshtein("abc", "abc"), 0);
        assert_eq!(damerau_levenshtein("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein("abc", "acb"), 1);
    }

    #[test]
    fn test_damerau_literal_scenarios() {
        assert_eq!(damerau_levenshtein("rcik", "rick"), 1);
        assert_eq!(damerau_levenshtein("rick", "irkc"), 2);
        assert_eq!(optimal_string_alignment("rcik", "rick"), 1);
    }

    #[test]
    fn test_true_vs_osa() {
        assert_eq!(damerau_levenshtein("00210000", "001020000"), 2);
        assert_eq!(optimal_string_alignment("00210000", "001020000"), 3);
        assert_eq!(damerau_levenshtein("CA", "ABC"), 2);
        assert_eq!(optimal_string_alignment("CA", "ABC"), 3);
    }

    #[test]
    fn test_osa_basic() {
        assert_eq!(optimal_string_alignment("", ""), 0);
        assert_eq!(optimal_string_alignment("", "ab"), 2);
        assert_eq!(optimal_string_alignment("ab", "ba"), 1);
        assert_eq!(optimal_string_alignment("rick", "irkc"), 2);
    }

    #[test]
    fn test_relative() {
        assert!((relative_damerau_levenshtein("rcik", "rick") - 0.25).abs() < 1e-12);
        assert!((relative_optimal_string_alignment("CA", "ABC") - 1.0).abs() < 1e-12);
        assert_eq!(relative_damerau_levenshtein("", ""), 0.0);
        assert!((damerau_levenshtein_similarity("rcik", "rick") - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_osa_struct() {
        let osa = OptimalStringAlignment::new();
        let x = Sequence::from("abc");
        let y = Sequence::from("xyz");
        assert_eq!(EditDistance::distance(&osa, &x, &y), 3);
        assert!((EditDistance::relative_distance(&osa, &x, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_alphabet_size_correction() {
        let a: Vec<char> = "rick".chars().collect();
        let b: Vec<char> = "irkc".chars().collect();

        let outcome = damerau_levenshtein_with_alphabet(&a, &b, Some(2));
        assert_eq!(outcome.distance, 2);
        assert_eq!(
            outcome.warning,
            Some(AlphabetSizeWarning {
                requested: 2,
                observed: 4
            })
        );

        let outcome = damerau_levenshtein_with_alphabet(&a, &b, Some(26));
        assert_eq!(outcome.distance, 2);
        assert_eq!(outcome.warning, None);
    }

    #[test]
    fn test_oversized_alphabet() {
        let a: Vec<char> = "rick".chars().collect();
        let b: Vec<char> = "irkc".chars().collect();
        let outcome = damerau_levenshtein_with_alphabet(&a, &b, Some(usize::MAX));
        assert_eq!(outcome, DamerauOutcome { distance: 2, warning: None });
    }

    #[test]
    fn test_check_alphabet_size() {
        assert_eq!(check_alphabet_size(None, 5), None);
        assert_eq!(check_alphabet_size(Some(8), 5), None);
        assert_eq!(
            check_alphabet_size(Some(3), 5),
            Some(AlphabetSizeWarning {
                requested: 3,
                observed: 5
            })
        );
    }

    #[test]
    fn test_damerau_tokens() {
        let a = ["TP53", "BRCA1", "EGFR"];
        let b = ["BRCA1", "TP53", "EGFR"];
        assert_eq!(damerau_levenshtein_seq(&a, &b), 1);
    }

    #[test]
    fn test_damerau_struct() {
        let dl = DamerauLevenshtein::with_alphabet_size(1);
        let a = Sequence::from("ca");
        let b = Sequence::from("abc");
        let outcome = dl.compute(&a, &b);
        assert_eq!(outcome.distance, 2);
        assert!(outcome.warning.is_some());
        assert_eq!(EditDistance::distance(&dl, &a, &b), 2);
    }
}
