//! Defines the gain-ratio splitting criterion.
use rayon::prelude::*;

use serde::{Serialize, Deserialize};
use tracing::trace;

use std::fmt;

use crate::{Dataset, ValueOrder};
use crate::error::Result;
use super::entropy::entropy;


/// Split information used in place of `0`.
/// Zero split information only arises for a feature
/// that takes a single value on the dataset.
const DEGENERATE_SPLIT_INFO: f64 = 1f64;


/// The quantities that rank a feature as a splitting candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureScore {
    /// Column index of the feature.
    pub index: usize,
    /// Information gain `H(D) - H(D | feature)`.
    pub gain: f64,
    /// Entropy of the partition induced by the feature.
    /// `1.0` if the feature takes a single value.
    pub split_info: f64,
    /// `gain / split_info`.
    pub gain_ratio: f64,
}


impl fmt::Display for FeatureScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "feature {idx}: gain {gain:.4}, split info {si:.4}, ratio {gr:.4}",
            idx = self.index,
            gain = self.gain,
            si = self.split_info,
            gr = self.gain_ratio,
        )
    }
}


/// Returns the score of every feature of `dataset` in column order.
pub fn feature_scores(dataset: &Dataset) -> Result<Vec<FeatureScore>> {
    let base_entropy = entropy(dataset);

    (0..dataset.n_features())
        .into_par_iter()
        .map(|index| score_feature(dataset, index, base_entropy))
        .collect::<Result<Vec<_>>>()
}


/// Returns the index of the feature with the largest gain ratio.
/// A feature replaces the current best only if its ratio is strictly larger,
/// so ties keep the leftmost feature.
///
/// Returns `None` if no feature has a positive gain ratio.
/// In that case the caller should resolve a leaf by majority vote.
///
/// ```
/// use c45::{Dataset, choose_best_feature};
///
/// let dataset = Dataset::new(vec![
///     vec!["a", "hot",  "play"],
///     vec!["a", "cool", "ntpl"],
///     vec!["b", "hot",  "play"],
///     vec!["b", "cool", "ntpl"],
/// ]).unwrap();
/// assert_eq!(choose_best_feature(&dataset).unwrap(), Some(1));
/// ```
pub fn choose_best_feature(dataset: &Dataset) -> Result<Option<usize>> {
    let best = best_feature_score(dataset)?;
    Ok(best.map(|score| score.index))
}


/// Returns the score of the feature chosen by [`choose_best_feature`],
/// or `None` if no feature has a positive gain ratio.
pub fn best_feature_score(dataset: &Dataset)
    -> Result<Option<FeatureScore>>
{
    let scores = feature_scores(dataset)?;

    let mut best_ratio = 0f64;
    let mut best = None;
    for score in scores {
        trace!(%score, "evaluated a split candidate");
        if score.gain_ratio > best_ratio {
            best_ratio = score.gain_ratio;
            best = Some(score);
        }
    }
    Ok(best)
}


fn score_feature(dataset: &Dataset, index: usize, base_entropy: f64)
    -> Result<FeatureScore>
{
    let n_records = dataset.len() as f64;

    let mut conditional_entropy = 0f64;
    let mut split_info = 0f64;
    for value in dataset.distinct_values(index, ValueOrder::FirstSeen)? {
        let subset = dataset.partition(index, value)?;
        let p = subset.len() as f64 / n_records;

        conditional_entropy += p * entropy(&subset);
        split_info -= p * p.log2();
    }

    let gain = base_entropy - conditional_entropy;
    if split_info == 0f64 {
        split_info = DEGENERATE_SPLIT_INFO;
    }

    let score = FeatureScore {
        index,
        gain,
        split_info,
        gain_ratio: gain / split_info,
    };
    Ok(score)
}
