//! Exports the dataset, the tree learner and the tree types.
//!
pub use crate::sample::{
    Dataset,
    DatasetReader,
    ValueOrder,
};


pub use crate::decision_tree::{
    // Learner
    DecisionTree,
    DecisionTreeBuilder,


    // Output
    DecisionTreeClassifier,
    Tree,
    BranchNode,


    // Building blocks
    entropy,
    entropy_of,
    feature_scores,
    choose_best_feature,
    best_feature_score,
    majority,
    FeatureScore,
};


pub use crate::error::{TreeError, Result};
