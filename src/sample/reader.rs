use polars::prelude::*;

use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};

use super::dataset::Dataset;
use crate::error::{Result, TreeError};


/// A struct that reads a CSV file into a [`Dataset`]
/// and its feature labels.
/// Every cell is read as a categorical value.
///
/// # Example
/// ```no_run
/// use c45::DatasetReader;
///
/// let (dataset, feature_labels) = DatasetReader::new()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .label_column("class")
///     .read()?;
/// # Ok::<(), c45::TreeError>(())
/// ```
pub struct DatasetReader<P, S> {
    file: Option<P>,
    has_header: bool,
    label: Option<S>,
}


impl<P, S> DatasetReader<P, S> {
    /// Construct a new instance of [`DatasetReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            label: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false`.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> Default for DatasetReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> DatasetReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> DatasetReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that holds the class label.
    /// By default, the last column is the class label.
    /// Without a header row, the columns are named `Feat. [1]`, `Feat. [2]`, ...
    pub fn label_column(mut self, column: S) -> Self {
        self.label = Some(column);
        self
    }
}


impl<P, S> DatasetReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns the dataset with its feature labels.
    /// The label column is moved to the last position.
    /// This method consumes `self`.
    pub fn read(self) -> Result<(Dataset, Vec<String>)> {
        let file = self.file
            .ok_or_else(|| TreeError::invalid("the CSV file name is not set"))?;
        let file = File::open(file.as_ref())?;
        let mut lines = BufReader::new(file).lines();

        let mut names = Vec::new();
        if self.has_header {
            if let Some(line) = lines.next() {
                names = split_line(&line?);
            }
        }

        let mut records = Vec::new();
        for line in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let record = split_line(&line);
            if names.is_empty() {
                names = (1..=record.len())
                    .map(|i| format!("Feat. [{i}]"))
                    .collect();
            }
            if record.len() != names.len() {
                return Err(TreeError::invalid(format!(
                    "row {} has {} cells, expected {}",
                    records.len() + 1,
                    record.len(),
                    names.len()
                )));
            }
            records.push(record);
        }

        let label_index = match self.label {
            Some(label) => {
                let label = label.as_ref();
                names.iter()
                    .position(|name| name == label)
                    .ok_or_else(|| TreeError::invalid(format!(
                        "the label column `{label}` does not exist"
                    )))?
            },
            None => names.len().saturating_sub(1),
        };

        if !names.is_empty() {
            names.remove(label_index);
        }
        for record in records.iter_mut() {
            let label = record.remove(label_index);
            record.push(label);
        }

        let dataset = Dataset::from_records(records)?;
        Ok((dataset, names))
    }
}


fn split_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(|cell| cell.trim().to_string())
        .collect()
}


impl Dataset {
    /// Convert `polars::DataFrame` into a [`Dataset`] and its feature labels.
    /// Every column is cast to string.
    /// The column named `label` becomes the class label,
    /// the other column names become the feature labels.
    ///
    /// Returns [`TreeError::InvalidInput`] if the frame contains a null.
    pub fn from_dataframe(data: &DataFrame, label: &str)
        -> Result<(Self, Vec<String>)>
    {
        let target = column_to_strings(data.column(label)?)?;

        let mut names = Vec::new();
        let mut columns = Vec::new();
        for series in data.get_columns() {
            if series.name() == label { continue; }
            names.push(series.name().to_string());
            columns.push(column_to_strings(series)?);
        }

        let records = target.into_iter()
            .enumerate()
            .map(|(row, y)| {
                let mut record = columns.iter()
                    .map(|column| column[row].clone())
                    .collect::<Vec<_>>();
                record.push(y);
                record
            })
            .collect::<Vec<_>>();

        let dataset = Self::from_records(records)?;
        Ok((dataset, names))
    }
}


fn column_to_strings(series: &Series) -> Result<Vec<String>> {
    let series = series.cast(&DataType::Utf8)?;
    series.utf8()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| TreeError::invalid(format!(
            "the column `{}` has a missing value",
            series.name()
        )))
}
