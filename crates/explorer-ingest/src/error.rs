//! Error types for passenger file loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a passenger file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content could not be parsed as CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

impl IngestError {
    /// Maps an I/O error on `path`, keeping "not found" distinct.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    pub(crate) fn csv_parse(path: &std::path::Path, err: &polars::prelude::PolarsError) -> Self {
        Self::CsvParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/titanic.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/titanic.csv");
    }

    #[test]
    fn test_from_io_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::from_io(Path::new("a.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_from_io_other() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = IngestError::from_io(Path::new("a.csv"), io);
        assert!(matches!(err, IngestError::FileRead { .. }));
    }

    #[test]
    fn test_csv_parse_keeps_message() {
        let polars_err = polars::prelude::PolarsError::NoData("empty CSV".into());
        let err = IngestError::csv_parse(Path::new("a.csv"), &polars_err);
        assert!(err.to_string().contains("empty CSV"));
    }
}
