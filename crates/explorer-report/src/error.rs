//! Error types for survival aggregation and chart assembly.

use thiserror::Error;

/// Errors raised while summarising a prepared table.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    MissingColumn { column: String },

    /// Column cannot be read as Float64.
    #[error("column '{column}' of type {dtype} is not numeric")]
    NonNumericColumn { column: String, dtype: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ReportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
