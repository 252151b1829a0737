//! Error handling for the table module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    /// A column the caller needs is not part of the table.
    #[error("column '{0}' not found")]
    MissingColumn(String),

    /// A cell could not be read as a number.
    #[error("non-numeric value '{value}' in column '{column}' at row {row}")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    /// Every row of a non-empty table failed timestamp conversion.
    #[error("none of the {0} rows holds a valid epoch timestamp")]
    NoValidTimestamps(usize),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON input must be an array of row objects.
    #[error("expected a JSON array of objects, found {0}")]
    NotRowArray(String),
}
