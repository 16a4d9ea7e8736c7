//! Levenshtein (edit) distance implementation
//!
//! Insertions, deletions and substitutions each cost 1.
//!
//! - Single-row DP keeps the table at O(min(m,n)) memory
//! - Works on characters or on arbitrary tokens

use super::{relative_distance, EditDistance, Sequence};
use smallvec::SmallVec;

/// Levenshtein distance calculator
///
/// # Complexity
/// - Time: O(m*n) where m and n are sequence lengths
/// - Space: O(min(m,n)) using single-row DP optimization
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &Sequence<'_>, b: &Sequence<'_>) -> usize {
        levenshtein_distance_seq(a.symbols(), b.symbols())
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Levenshtein distance between two symbol slices.
#[must_use]
pub fn levenshtein_distance_seq<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Shorter sequence on the column axis
    let (target, source) = if m < n { (a, b) } else { (b, a) };
    let n_target = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n_target).collect();

    for (i, sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;

        for j in 0..n_target {
            let cost = usize::from(*sc != target[j]);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = prev + cost;

            prev = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[n_target]
}

/// Levenshtein distance between two strings, character by character.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    levenshtein_distance_seq(&a_chars, &b_chars)
}

/// Levenshtein distance divided by the longer string length.
#[must_use]
pub fn relative_levenshtein(a: &str, b: &str) -> f64 {
    relative_distance(levenshtein(a, b), a.chars().count().max(b.chars().count()))
}

/// Normalized similarity (0.0 to 1.0)
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    1.0 - relative_levenshtein(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Similarity;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("sitting", "kitten"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
    }

    #[test]
    fn test_levenshtein_no_transposition() {
        assert_eq!(levenshtein("ab", "ba"), 2);
        assert_eq!(levenshtein("rcik", "rick"), 2);
    }

    #[test]
    fn test_levenshtein_relative() {
        assert!((relative_levenshtein("sitting", "kitten") - 3.0 / 7.0).abs() < 1e-12);
        assert_eq!(relative_levenshtein("", ""), 0.0);
        assert_eq!(levenshtein_similarity("abc", "abc"), 1.0);
    }

    #[test]
    fn test_levenshtein_unicode() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本語", "日本"), 1);
    }

    #[test]
    fn test_levenshtein_tokens() {
        let a = ["exon1", "exon2", "exon3"];
        let b = ["exon1", "exon3"];
        assert_eq!(levenshtein_distance_seq(&a, &b), 1);
    }

    #[test]
    fn test_levenshtein_struct() {
        let a = Sequence::from("kitten");
        let b = Sequence::from("sitting");
        let lev = Levenshtein::new();
        assert_eq!(EditDistance::distance(&lev, &a, &b), 3);
        assert!((EditDistance::relative_distance(&lev, &a, &b) - 3.0 / 7.0).abs() < 1e-12);
        assert!((Similarity::similarity(&lev, &a, &b) - 4.0 / 7.0).abs() < 1e-12);
    }
}
