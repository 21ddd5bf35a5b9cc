//! Summaries of prepared passenger tables.
//!
//! - [`survival`]: survival counts and rates, overall or per category
//! - [`chart`]: the data behind a survival-coloured strip plot with box overlays
//!
//! Both read a prepared table and never modify it.

pub mod chart;
mod error;
pub mod survival;
pub mod values;

pub use chart::{assemble_chart, box_summary, tick_label};
pub use error::{ReportError, Result};
pub use survival::{SURVIVAL_FRAME_COLUMNS, calculate_survival_rate, survival_frame};
