//! Defines the categorical dataset and the ways to read one.

/// Defines `Dataset` and the dataset partitioner.
pub mod dataset;

/// Reads a `Dataset` from a CSV file or a `polars::DataFrame`.
pub mod reader;


pub use self::dataset::{Dataset, ValueOrder};
pub use self::reader::DatasetReader;

pub(crate) use self::dataset::check_feature_labels;
