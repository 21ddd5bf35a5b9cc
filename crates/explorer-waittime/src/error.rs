//! Error types for the wait-time model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaitTimeError {
    /// At least one member of staff is needed to serve anyone.
    #[error("number of bar staff must be at least 1")]
    NoStaff,

    /// The computed parameters do not describe a lognormal distribution.
    #[error("invalid lognormal parameters (mu = {mu}, sigma = {sigma}): {message}")]
    InvalidDistribution { mu: f64, sigma: f64, message: String },
}

/// Result type for wait-time operations.
pub type Result<T> = std::result::Result<T, WaitTimeError>;
