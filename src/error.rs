use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row}: non-numeric value '{value}' in column {column}")]
    NumericField {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Row {row}: unknown sales channel '{value}'")]
    UnknownChannel { row: usize, value: String },

    #[error("Row {row}: unknown region '{value}'")]
    UnknownRegion { row: usize, value: String },

    #[error("Invalid filter value: {0}")]
    InvalidFilter(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
