use tracing::debug;

use crate::{Dataset, ValueOrder};
use crate::sample::check_feature_labels;
use crate::error::Result;
use super::{
    node::*,
    criterion::best_feature_score,
    majority::majority,
    classifier::DecisionTreeClassifier,
};

use std::fmt;


/// The C4.5 decision tree algorithm for categorical features.
/// Given a [`Dataset`] and the names of its feature columns,
/// [`DecisionTree`] grows a [`Tree`] by repeatedly splitting
/// on the feature with the largest information gain ratio.
///
/// The recursion stops at a node when
/// - all the records share one label (the label becomes a leaf), or
/// - no feature remains, or no feature has a positive gain ratio
///   (the majority label becomes a leaf).
///
/// The tree is not pruned.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```
/// use c45::prelude::*;
///
/// let dataset = Dataset::new(vec![
///     vec!["sunny", "hot",  "play"],
///     vec!["sunny", "hot",  "ntpl"],
///     vec!["rainy", "cool", "play"],
///     vec!["rainy", "cool", "play"],
/// ]).unwrap();
///
/// let tree = DecisionTreeBuilder::new()
///     .build()
///     .build_tree(&dataset, &["weather", "temp"])
///     .unwrap();
///
/// let Tree::Branch(root) = &tree else { panic!("expected a split") };
/// assert_eq!(root.feature(), "weather");
/// assert_eq!(root.child("rainy"), Some(&Tree::leaf("play")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionTree {
    value_order: ValueOrder,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(value_order: ValueOrder) -> Self {
        Self { value_order }
    }


    /// Grows a tree on `dataset`.
    /// `feature_labels[i]` names the feature column `i`.
    ///
    /// Returns [`TreeError::InvalidInput`](crate::TreeError::InvalidInput)
    /// if the number of labels differs from the number of feature columns
    /// or if a label is repeated.
    /// No tree is returned on error.
    pub fn build_tree<S>(&self, dataset: &Dataset, feature_labels: &[S])
        -> Result<Tree>
        where S: AsRef<str>
    {
        check_feature_labels(dataset, feature_labels)?;

        let feature_labels = feature_labels.iter()
            .map(|label| label.as_ref().to_string())
            .collect::<Vec<_>>();

        self.grow(dataset, feature_labels, 0)
    }


    /// Grows a tree on `dataset` and wraps it
    /// into a [`DecisionTreeClassifier`].
    pub fn fit<S>(&self, dataset: &Dataset, feature_labels: &[S])
        -> Result<DecisionTreeClassifier>
        where S: AsRef<str>
    {
        let root = self.build_tree(dataset, feature_labels)?;
        let feature_labels = feature_labels.iter()
            .map(|label| label.as_ref().to_string())
            .collect();

        Ok(DecisionTreeClassifier::from_components(root, feature_labels))
    }


    /// `feature_labels` is owned by this level of the recursion.
    /// Each child receives its own copy without the consumed feature.
    fn grow(
        &self,
        dataset: &Dataset,
        mut feature_labels: Vec<String>,
        depth: usize,
    ) -> Result<Tree>
    {
        if dataset.is_pure() {
            let label = dataset.labels()[0];
            debug!(depth, label, n_records = dataset.len(), "pure leaf");
            return Ok(Tree::leaf(label));
        }

        if dataset.n_features() == 0 {
            return majority_leaf(dataset, depth, "features exhausted");
        }

        let score = match best_feature_score(dataset)? {
            Some(score) => score,
            None => {
                return majority_leaf(dataset, depth, "no informative feature");
            },
        };
        let best = score.index;

        let feature = feature_labels.remove(best);
        let values = dataset.distinct_values(best, self.value_order)?;
        debug!(
            depth,
            feature = feature.as_str(),
            gain_ratio = score.gain_ratio,
            n_branches = values.len(),
            n_records = dataset.len(),
            "split"
        );

        let children = values.into_iter()
            .map(|value| {
                let subset = dataset.partition(best, value)?;
                let child = self.grow(
                    &subset, feature_labels.clone(), depth + 1
                )?;
                Ok((value.to_string(), child))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Tree::Branch(BranchNode::from_raw(feature, children)))
    }
}


fn majority_leaf(dataset: &Dataset, depth: usize, reason: &str)
    -> Result<Tree>
{
    let labels = dataset.labels();
    let label = majority(&labels)?;
    debug!(depth, label, reason, n_records = dataset.len(), "majority leaf");
    Ok(Tree::leaf(label))
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # C4.5 Decision Tree\n\n\
            - Splitting criterion: Information gain ratio\n\
            - Value order: {}\
            ",
            self.value_order,
        )?;

        write!(f, "----------")
    }
}
