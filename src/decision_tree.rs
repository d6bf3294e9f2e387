//! The C4.5 induction engine:
//! entropy, gain-ratio split selection, majority vote and tree growing.

/// Defines the C4.5 tree builder.
pub mod c45_algorithm;
/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the classifier produced by `DecisionTree`.
pub mod classifier;
/// Defines the tree representation.
pub mod node;

mod entropy;
mod criterion;
mod majority;


pub use c45_algorithm::DecisionTree;
pub use builder::DecisionTreeBuilder;
pub use classifier::DecisionTreeClassifier;
pub use node::{Tree, BranchNode};

pub use entropy::{entropy, entropy_of};
pub use criterion::{
    FeatureScore,
    feature_scores,
    choose_best_feature,
    best_feature_score,
};
pub use majority::majority;
