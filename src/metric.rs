//! Metric selection and dispatch
//!
//! [`Metric`] names one algorithm together with its configuration, so a
//! comparison can be described as data (for example in a serialized job
//! description) and executed later.

use crate::algorithms::{
    jaro_winkler_similarity_seq, DamerauConfig, DamerauLevenshtein, DistanceMode, EditDistance,
    Hamming, Input, Jaro, JaroWinklerConfig, Lcs, Levenshtein, OptimalStringAlignment,
    Segmentation, Sequence, Similarity,
};
use crate::error::{DistanceError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Distance and similarity algorithms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Metric {
    /// Positional mismatches, equal lengths only
    Hamming,
    /// Jaro similarity
    Jaro,
    /// Jaro similarity with a prefix bonus
    JaroWinkler(JaroWinklerConfig),
    /// Restricted Damerau-Levenshtein
    Osa,
    /// Insertions, deletions, substitutions
    Levenshtein,
    /// Unrestricted Damerau-Levenshtein
    Damerau(DamerauConfig),
    /// Longest-common-substring distance
    Lcs,
}

impl Metric {
    pub const NAMES: [&'static str; 7] = [
        "hamming",
        "jaro",
        "jaro_winkler",
        "osa",
        "levenshtein",
        "damerau",
        "lcs",
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Hamming => "hamming",
            Metric::Jaro => "jaro",
            Metric::JaroWinkler(_) => "jaro_winkler",
            Metric::Osa => "osa",
            Metric::Levenshtein => "levenshtein",
            Metric::Damerau(_) => "damerau",
            Metric::Lcs => "lcs",
        }
    }

    /// Whether the metric reports a similarity (1.0 = identical) rather than a distance
    #[must_use]
    pub fn is_similarity(&self) -> bool {
        matches!(self, Metric::Jaro | Metric::JaroWinkler(_))
    }

    /// Compare two normalized sequences.
    ///
    /// `mode` only affects the edit-count metrics (Hamming, OSA, Levenshtein,
    /// Damerau). Jaro, Jaro-Winkler and LCS always produce a [`Score::Ratio`].
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::LengthMismatch`] for Hamming on unequal lengths.
    pub fn compute(&self, a: &Sequence<'_>, b: &Sequence<'_>, mode: DistanceMode) -> Result<Score> {
        match self {
            Metric::Hamming => Hamming::new().score(a, b, mode),
            Metric::Jaro => Ok(Score::Ratio(Jaro::new().similarity(a, b))),
            Metric::JaroWinkler(config) => Ok(Score::Ratio(jaro_winkler_similarity_seq(
                a.symbols(),
                b.symbols(),
                config,
            ))),
            Metric::Osa => Ok(edit_score(&OptimalStringAlignment::new(), a, b, mode)),
            Metric::Levenshtein => Ok(edit_score(&Levenshtein::new(), a, b, mode)),
            Metric::Damerau(config) => Ok(edit_score(
                &DamerauLevenshtein { config: *config },
                a,
                b,
                mode,
            )),
            Metric::Lcs => Ok(Score::Ratio(Similarity::distance(&Lcs::new(), a, b))),
        }
    }

    /// Normalize two inputs and compare them.
    ///
    /// # Errors
    ///
    /// Same as [`Metric::compute`].
    pub fn compare<'a, 'b>(
        &self,
        a: impl Into<Input<'a>>,
        b: impl Into<Input<'b>>,
        mode: DistanceMode,
        segmentation: Segmentation,
    ) -> Result<Score> {
        let a = a.into().normalize(segmentation);
        let b = b.into().normalize(segmentation);
        self.compute(&a, &b, mode)
    }

    /// Compare two dynamically typed values.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::TypeMismatch`] if either value is neither a
    /// string nor an array of strings, otherwise as [`Metric::compute`].
    pub fn compare_values(
        &self,
        a: &Value,
        b: &Value,
        mode: DistanceMode,
        segmentation: Segmentation,
    ) -> Result<Score> {
        let a = Input::from_value(a)?;
        let b = Input::from_value(b)?;
        self.compare(a, b, mode, segmentation)
    }
}

fn edit_score<D: EditDistance>(
    metric: &D,
    a: &Sequence<'_>,
    b: &Sequence<'_>,
    mode: DistanceMode,
) -> Score {
    match mode {
        DistanceMode::Absolute => Score::Count(EditDistance::distance(metric, a, b)),
        DistanceMode::Relative => Score::Ratio(EditDistance::relative_distance(metric, a, b)),
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = DistanceError;

    /// Parse a metric name with default configuration.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hamming" => Ok(Metric::Hamming),
            "jaro" => Ok(Metric::Jaro),
            "jaro_winkler" | "winkler" => Ok(Metric::JaroWinkler(JaroWinklerConfig::default())),
            "osa" | "optimal_string_alignment" => Ok(Metric::Osa),
            "levenshtein" => Ok(Metric::Levenshtein),
            "damerau" | "damerau_levenshtein" => Ok(Metric::Damerau(DamerauConfig::default())),
            "lcs" => Ok(Metric::Lcs),
            _ => Err(DistanceError::InvalidParameter {
                name: "metric".to_string(),
                reason: format!("unknown metric '{}'. Valid: {}", s, Self::NAMES.join(", ")),
            }),
        }
    }
}

/// Result of a dispatched comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    /// Raw edit count
    Count(usize),
    /// Relative distance or similarity in [0, 1]
    Ratio(f64),
}

impl Score {
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Score::Count(n) => n as f64,
            Score::Ratio(r) => r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_names() {
        for name in Metric::NAMES {
            let metric: Metric = name.parse().unwrap();
            assert_eq!(metric.name(), name);
        }
        assert_eq!("Damerau_Levenshtein".parse::<Metric>().unwrap().name(), "damerau");
        assert!(matches!(
            "soundex".parse::<Metric>(),
            Err(DistanceError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_is_similarity() {
        let similarities: Vec<&str> = Metric::NAMES
            .iter()
            .filter(|name| name.parse::<Metric>().unwrap().is_similarity())
            .copied()
            .collect();
        assert_eq!(similarities, vec!["jaro", "jaro_winkler"]);
    }

    #[test]
    fn test_compare_modes() {
        let lev = Metric::Levenshtein;
        assert_eq!(
            lev.compare("sitting", "kitten", DistanceMode::Absolute, Segmentation::Chars),
            Ok(Score::Count(3))
        );
        let rel = lev
            .compare("sitting", "kitten", DistanceMode::Relative, Segmentation::Chars)
            .unwrap();
        assert!((rel.as_f64() - 3.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_compare_each_metric() {
        let mode = DistanceMode::Absolute;
        let seg = Segmentation::Chars;
        assert_eq!(
            Metric::Hamming.compare("karolin", "kathrin", mode, seg),
            Ok(Score::Count(3))
        );
        assert_eq!(Metric::Osa.compare("rcik", "rick", mode, seg), Ok(Score::Count(1)));
        assert_eq!(
            Metric::Damerau(DamerauConfig::default()).compare("rick", "irkc", mode, seg),
            Ok(Score::Count(2))
        );
        let jw = Metric::JaroWinkler(JaroWinklerConfig::default())
            .compare("MARTHA", "MARHTA", mode, seg)
            .unwrap();
        assert!((jw.as_f64() - (17.0 / 18.0 + 1.0 / 60.0)).abs() < 1e-9);
        assert_eq!(Metric::Lcs.compare("abc", "abc", mode, seg), Ok(Score::Ratio(0.0)));
    }

    #[test]
    fn test_text_against_tokens() {
        let tokens = ["r", "i", "c", "k"];
        let score = Metric::Levenshtein
            .compare("rcik", &tokens[..], DistanceMode::Absolute, Segmentation::Chars)
            .unwrap();
        assert_eq!(score, Score::Count(2));
    }

    #[test]
    fn test_compare_values() {
        let metric = Metric::Hamming;
        let mode = DistanceMode::Absolute;
        let seg = Segmentation::Chars;
        assert_eq!(
            metric.compare_values(&json!("abc"), &json!(["a", "x", "c"]), mode, seg),
            Ok(Score::Count(1))
        );
        assert!(matches!(
            metric.compare_values(&json!("abc"), &json!(3), mode, seg),
            Err(DistanceError::TypeMismatch(_))
        ));
        assert!(matches!(
            metric.compare_values(&json!("abc"), &json!("ab"), mode, seg),
            Err(DistanceError::LengthMismatch { len_a: 3, len_b: 2 })
        ));
    }

    #[test]
    fn test_metric_serde() {
        let metric: Metric = serde_json::from_value(json!({
            "algorithm": "jaro_winkler",
            "prefix_weight": 0.2
        }))
        .unwrap();
        match metric {
            Metric::JaroWinkler(config) => {
                assert_eq!(config.prefix_weight, 0.2);
                assert_eq!(config.boost_threshold, 0.7);
                assert_eq!(config.max_prefix_length, 4);
            }
            other => panic!("unexpected metric {other}"),
        }

        let metric: Metric = serde_json::from_value(json!({"algorithm": "levenshtein"})).unwrap();
        assert_eq!(metric, Metric::Levenshtein);

        let value = serde_json::to_value(Metric::Damerau(DamerauConfig {
            alphabet_size: Some(4),
        }))
        .unwrap();
        assert_eq!(value, json!({"algorithm": "damerau", "alphabet_size": 4}));
    }
}
