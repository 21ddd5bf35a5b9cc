//! Stage implementations, grouped by concern.
//!
//! Every stage is a pure `DataFrame -> Result<DataFrame>` function that
//! preserves the row count and only replaces or appends columns.

pub mod cleaning;
pub mod encoding;
pub mod features;
pub mod imputation;
