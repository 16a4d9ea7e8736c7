//! Batch comparison
//!
//! Applies one [`Metric`] to many input pairs. Every row yields its own
//! `Result`, so a row with a bad input (unequal Hamming lengths, a value that
//! is not text) is reported in place while the rest of the batch completes.

use crate::algorithms::{DistanceMode, Input, Segmentation};
use crate::error::Result;
use crate::metric::{Metric, Score};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Minimum input size for parallel processing.
///
/// Below this, sequential processing is faster than coordinating the thread
/// pool for comparisons this cheap.
pub const PARALLEL_THRESHOLD: usize = 100;

/// What to compute for each row of a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub metric: Metric,
    pub mode: DistanceMode,
    pub segmentation: Segmentation,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Levenshtein,
            mode: DistanceMode::Absolute,
            segmentation: Segmentation::Chars,
        }
    }
}

impl BatchConfig {
    #[must_use]
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: DistanceMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_segmentation(mut self, segmentation: Segmentation) -> Self {
        self.segmentation = segmentation;
        self
    }
}

/// Map every item, in parallel for large inputs, and log the rows that failed.
fn run_rows<T, F>(items: &[T], config: &BatchConfig, score: F) -> Vec<Result<Score>>
where
    T: Sync,
    F: Fn(&T) -> Result<Score> + Send + Sync,
{
    let results: Vec<Result<Score>> = if items.len() >= PARALLEL_THRESHOLD {
        items.par_iter().map(&score).collect()
    } else {
        items.iter().map(&score).collect()
    };

    for (row, result) in results.iter().enumerate() {
        if let Err(e) = result {
            log::debug!("{} skipped row {}: {}", config.metric, row, e);
        }
    }

    results
}

/// Compare each `(a, b)` pair of texts.
#[must_use]
pub fn compare_pairs<A, B>(pairs: &[(A, B)], config: &BatchConfig) -> Vec<Result<Score>>
where
    A: AsRef<str> + Sync,
    B: AsRef<str> + Sync,
{
    run_rows(pairs, config, |(a, b)| {
        config
            .metric
            .compare(a.as_ref(), b.as_ref(), config.mode, config.segmentation)
    })
}

/// Compare one query text against every choice.
///
/// The query is normalized once and shared across rows.
#[must_use]
pub fn compare_one_to_many<S>(query: &str, choices: &[S], config: &BatchConfig) -> Vec<Result<Score>>
where
    S: AsRef<str> + Sync,
{
    let query = Input::Text(query).normalize(config.segmentation);
    run_rows(choices, config, |choice| {
        let choice = Input::Text(choice.as_ref()).normalize(config.segmentation);
        config.metric.compute(&query, &choice, config.mode)
    })
}

/// Compare each pair of dynamically typed values.
///
/// Values that are neither strings nor arrays of strings yield
/// [`DistanceError::TypeMismatch`](crate::DistanceError::TypeMismatch) for their row.
#[must_use]
pub fn compare_value_pairs(pairs: &[(Value, Value)], config: &BatchConfig) -> Vec<Result<Score>> {
    run_rows(pairs, config, |(a, b)| {
        config
            .metric
            .compare_values(a, b, config.mode, config.segmentation)
    })
}
