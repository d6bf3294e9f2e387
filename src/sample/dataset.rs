use serde::{Serialize, Deserialize};

use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, TreeError};


/// The order in which the distinct values of a feature column are visited.
/// Both orders are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueOrder {
    /// Order of the first occurrence in the dataset rows.
    #[default]
    FirstSeen,
    /// Lexicographic order.
    Sorted,
}


impl fmt::Display for ValueOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstSeen => "First seen",
            Self::Sorted => "Sorted",
        };

        write!(f, "{name}")
    }
}


/// A batch of categorical records.
/// Each record is a sequence of feature values
/// followed by the class label, so the label is always the last column.
///
/// A [`Dataset`] is never empty and all of its records have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Vec<String>>,
    n_columns: usize,
}


impl Dataset {
    /// Construct a new [`Dataset`] from the given records.
    ///
    /// Returns [`TreeError::InvalidInput`] if there is no record,
    /// if a record has no label column,
    /// or if the records differ in length.
    ///
    /// ```
    /// use c45::Dataset;
    ///
    /// let dataset = Dataset::new(vec![
    ///     vec!["sunny", "hot", "play"],
    ///     vec!["rainy", "cool", "ntpl"],
    /// ]).unwrap();
    /// assert_eq!(dataset.n_features(), 2);
    /// ```
    pub fn new<R, T, S>(records: R) -> Result<Self>
        where R: IntoIterator<Item = T>,
              T: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let records = records.into_iter()
            .map(|record| record.into_iter().map(Into::into).collect())
            .collect::<Vec<Vec<String>>>();

        Self::from_records(records)
    }


    pub(crate) fn from_records(records: Vec<Vec<String>>) -> Result<Self> {
        let n_columns = match records.first() {
            Some(record) => record.len(),
            None => {
                return Err(TreeError::invalid("the dataset has no record"));
            },
        };

        if n_columns == 0 {
            return Err(TreeError::invalid(
                "a record must end with a class label"
            ));
        }

        let ragged = records.iter()
            .enumerate()
            .find(|(_, record)| record.len() != n_columns);
        if let Some((row, record)) = ragged {
            return Err(TreeError::invalid(format!(
                "record {row} has {} columns, expected {n_columns}",
                record.len()
            )));
        }

        Ok(Self { records, n_columns })
    }


    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }


    /// Always `false`, a [`Dataset`] holds at least one record.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }


    /// Returns the number of feature columns (the label column excluded).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_columns - 1
    }


    /// Returns the records.
    #[inline]
    pub fn records(&self) -> &[Vec<String>] {
        &self.records[..]
    }


    /// Returns the class labels, i.e., the last column.
    pub fn labels(&self) -> Vec<&str> {
        self.records.iter()
            .map(|record| record[self.n_columns - 1].as_str())
            .collect()
    }


    /// Returns the values of the feature column at `index`.
    ///
    /// Returns [`TreeError::InvalidInput`] if `index` is not a feature column.
    pub fn column(&self, index: usize) -> Result<Vec<&str>> {
        self.check_feature_index(index)?;
        let column = self.records.iter()
            .map(|record| record[index].as_str())
            .collect();
        Ok(column)
    }


    /// Returns `true` if every record has the same label.
    pub fn is_pure(&self) -> bool {
        let last = self.n_columns - 1;
        let first = &self.records[0][last];
        self.records.iter().all(|record| &record[last] == first)
    }


    /// Returns the distinct values of the feature column at `index`
    /// in the given `order`.
    ///
    /// Returns [`TreeError::InvalidInput`] if `index` is not a feature column.
    pub fn distinct_values(&self, index: usize, order: ValueOrder)
        -> Result<Vec<&str>>
    {
        let mut seen = HashSet::new();
        let mut values = self.column(index)?
            .into_iter()
            .filter(|value| seen.insert(*value))
            .collect::<Vec<_>>();

        if order == ValueOrder::Sorted {
            values.sort_unstable();
        }
        Ok(values)
    }


    /// Returns the records whose value at `index` equals `value`,
    /// with the column `index` removed.
    /// The row order and the order of the remaining columns are kept.
    ///
    /// Returns [`TreeError::InvalidInput`] if `index` is not a feature column
    /// or if no record takes `value` at `index`.
    ///
    /// ```
    /// use c45::Dataset;
    ///
    /// let dataset = Dataset::new(vec![
    ///     vec!["sunny", "hot", "play"],
    ///     vec!["rainy", "cool", "play"],
    ///     vec!["sunny", "cool", "ntpl"],
    /// ]).unwrap();
    /// let sunny = dataset.partition(0, "sunny").unwrap();
    /// assert_eq!(sunny.records(), &[
    ///     vec!["hot".to_string(), "play".to_string()],
    ///     vec!["cool".to_string(), "ntpl".to_string()],
    /// ]);
    /// ```
    pub fn partition(&self, index: usize, value: &str) -> Result<Self> {
        self.check_feature_index(index)?;

        let records = self.records.iter()
            .filter(|record| record[index] == value)
            .map(|record| {
                let mut projected = Vec::with_capacity(self.n_columns - 1);
                projected.extend_from_slice(&record[..index]);
                projected.extend_from_slice(&record[index + 1..]);
                projected
            })
            .collect::<Vec<_>>();

        if records.is_empty() {
            return Err(TreeError::invalid(format!(
                "no record takes the value `{value}` at feature {index}"
            )));
        }

        Ok(Self { records, n_columns: self.n_columns - 1 })
    }


    fn check_feature_index(&self, index: usize) -> Result<()> {
        if index >= self.n_features() {
            return Err(TreeError::invalid(format!(
                "feature index {index} is out of range (# of features: {})",
                self.n_features()
            )));
        }
        Ok(())
    }
}


/// Check that `feature_labels` names the feature columns of `dataset`,
/// one distinct name per column.
pub(crate) fn check_feature_labels<S>(dataset: &Dataset, feature_labels: &[S])
    -> Result<()>
    where S: AsRef<str>
{
    if feature_labels.len() != dataset.n_features() {
        return Err(TreeError::invalid(format!(
            "got {} feature labels for {} feature columns",
            feature_labels.len(),
            dataset.n_features()
        )));
    }

    let mut seen = HashSet::new();
    for label in feature_labels {
        let label = label.as_ref();
        if !seen.insert(label) {
            return Err(TreeError::invalid(format!(
                "the feature label `{label}` appears more than once"
            )));
        }
    }
    Ok(())
}
