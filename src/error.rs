//! Defines the error type returned by this crate.
use polars::error::PolarsError;
use thiserror::Error;

use std::io;


/// Error type for dataset handling and tree induction.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The dataset or the feature labels are malformed.
    /// Raised before any computation starts.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error while reading a dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error raised while converting a `polars::DataFrame`.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}


impl TreeError {
    #[inline]
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }


    /// Returns `true` if this error reports malformed input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}


/// Result type for this crate.
pub type Result<T> = std::result::Result<T, TreeError>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message() {
        let err = TreeError::invalid("empty dataset");
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Invalid input: empty dataset");
    }


    #[test]
    fn io_error_is_not_invalid_input() {
        let err = TreeError::from(io::Error::new(io::ErrorKind::NotFound, "x"));
        assert!(!err.is_invalid_input());
    }
}
