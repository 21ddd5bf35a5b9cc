//! Passenger file ingestion.
//!
//! Loads the raw passenger CSV into a Polars `DataFrame` of string columns,
//! optionally after a simulated delay, and reports header drift.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use explorer_ingest::{DEFAULT_LOAD_DELAY, load_passengers};
//!
//! let raw = load_passengers(Path::new("data/input/titanic_passengers.csv"), DEFAULT_LOAD_DELAY)?;
//! ```

mod error;
mod header;
mod loader;

pub use error::{IngestError, Result};
pub use header::{ColumnDrift, read_header};
pub use loader::{DEFAULT_LOAD_DELAY, load_passengers};
