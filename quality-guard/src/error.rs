//! Error types for the quality-guard library.
//!
//! All fallible operations return [`QualityError`] through the crate-wide
//! [`Result`] alias. Parameter and column errors are raised before a check
//! computes anything, so a failing check never leaves a partial result behind.

use thiserror::Error;

/// The main error type for quality-guard.
#[derive(Error, Debug)]
pub enum QualityError {
    /// A check parameter is outside its allowed range or cannot be parsed.
    #[error("Invalid parameter '{parameter}' = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: String,
        /// The rejected value, rendered as text
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A referenced column does not exist in the dataset.
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Error from Arrow kernels (cast, concat, row encoding).
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Error from a data source while loading a dataset.
    #[error("Data source error: {message}")]
    DataSource {
        /// Type of data source (e.g., "CSV")
        source_type: String,
        /// Detailed error message
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error from I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration document.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error from serialization operations.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A type alias for `Result<T, QualityError>`.
pub type Result<T> = std::result::Result<T, QualityError>;

impl QualityError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(
        parameter: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a column-not-found error.
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Creates a new data source error with a source error.
    pub fn data_source_with_source(
        source_type: impl Into<String>,
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::DataSource {
            source_type: source_type.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Returns true for errors caused by caller input rather than the data.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::ColumnNotFound { .. }
        )
    }
}
