//! Shared data model for the passenger explorer.
//!
//! This crate holds the pieces every other crate agrees on:
//!
//! - [`columns`]: raw and derived column names, plus the column sets each
//!   table shape is expected to carry
//! - [`lookup`]: fixed, read-only lookup tables (port names, axis titles,
//!   survival labels and colours)
//! - [`category`]: [`CategoryValue`], the ordered key used for grouping
//! - [`survival`]: [`SurvivalStat`] aggregation results
//! - [`chart`]: the declarative [`ChartSpec`] handed to a rendering surface

pub mod category;
pub mod chart;
pub mod columns;
pub mod lookup;
pub mod survival;

pub use category::CategoryValue;
pub use chart::{
    BoxSummary, ChartPoint, ChartSpec, ChartStyle, ChartTopic, EXPLORATION_TOPICS, HoverInfo,
};
pub use survival::SurvivalStat;
