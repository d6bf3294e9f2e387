#![warn(missing_docs)]

//!
//! A crate that grows C4.5 decision trees on categorical data.
//!
//! The tree is grown top-down.
//! At each node, the feature with the largest
//! *information gain ratio* is chosen and the records are partitioned
//! by its values. The chosen feature is consumed,
//! so a path of the tree never tests the same feature twice.
//! A node becomes a leaf when
//!
//! - all of its records share one label, or
//! - no feature remains or no feature has a positive gain ratio;
//!     the most frequent label is used in that case.
//!
//! Only categorical features are supported.
//! There is no pruning and no handling of missing values.
//!
//! ```
//! use c45::prelude::*;
//!
//! let dataset = Dataset::new(vec![
//!     vec!["sunny", "hot",  "play"],
//!     vec!["sunny", "hot",  "ntpl"],
//!     vec!["rainy", "cool", "play"],
//!     vec!["rainy", "cool", "play"],
//! ])?;
//!
//! let f = DecisionTreeBuilder::new()
//!     .build()
//!     .fit(&dataset, &["weather", "temp"])?;
//!
//! assert_eq!(f.predict(&["rainy", "cool"])?, Some("play"));
//! # Ok::<(), c45::TreeError>(())
//! ```

pub mod error;
pub mod sample;
pub mod decision_tree;
pub mod prelude;


pub use error::{TreeError, Result};

pub use sample::{Dataset, DatasetReader, ValueOrder};

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Tree,
    BranchNode,
    FeatureScore,
    entropy,
    entropy_of,
    feature_scores,
    choose_best_feature,
    best_feature_score,
    majority,
};
