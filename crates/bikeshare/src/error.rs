//! Error types for the bikeshare library.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for bikeshare operations.
#[derive(Debug, Error)]
pub enum BikeshareError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is not present in the header row.
    #[error("Missing required column '{column}' (found: {available})")]
    MissingColumn { column: String, available: String },

    /// A cell could not be parsed into its expected type.
    #[error("Parse error at row {row}, column '{column}': {message}")]
    Parse {
        row: usize,
        column: String,
        message: String,
    },

    /// Two records share the same date.
    #[error("Duplicate record for date {date} (rows {first_row} and {second_row})")]
    DuplicateDate {
        date: NaiveDate,
        first_row: usize,
        second_row: usize,
    },

    /// A record's total does not equal casual + registered.
    #[error("Inconsistent total at row {row}: casual {casual} + registered {registered} != total {total}")]
    InconsistentTotal {
        row: usize,
        casual: u64,
        registered: u64,
        total: u64,
    },

    /// Empty file or no rows to read.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// The dataset has no records.
    #[error("Dataset contains no records")]
    EmptyDataset,

    /// A weekday code outside 0-6.
    #[error("Invalid weekday {value} for {date} (expected 0-6)")]
    InvalidWeekday { date: NaiveDate, value: u8 },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML configuration could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BikeshareError {
    /// Whether this error came from reading or decoding the data source.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            BikeshareError::Io { .. }
                | BikeshareError::Csv(_)
                | BikeshareError::MissingColumn { .. }
                | BikeshareError::Parse { .. }
                | BikeshareError::DuplicateDate { .. }
                | BikeshareError::InconsistentTotal { .. }
                | BikeshareError::EmptyData(_)
        )
    }
}

/// Result type alias for bikeshare operations.
pub type Result<T> = std::result::Result<T, BikeshareError>;
