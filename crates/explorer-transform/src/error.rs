//! Error types for the preparation pipeline.

use thiserror::Error;

/// Errors raised while preparing a passenger table.
///
/// Bad data never produces an error: unparseable numbers become nulls and
/// missing values are filled or propagated. Only a table that lacks a column
/// some stage depends on is rejected.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A stage's input column is absent.
    #[error("stage '{stage}' requires column '{column}', which is missing")]
    MissingColumn { stage: &'static str, column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for preparation stages.
pub type Result<T> = std::result::Result<T, TransformError>;
