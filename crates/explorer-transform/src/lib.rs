//! Passenger table preparation.
//!
//! Turns the raw, all-string passenger table into an analysis-ready one:
//!
//! - **stages**: sixteen pure `DataFrame -> DataFrame` functions, grouped
//!   into cleaning, feature derivation, age imputation and final encoding
//! - **pipeline**: [`PreparationStage`], [`PreparationPipeline`] and [`prepare`],
//!   which run the stages in their fixed order
//!
//! Data problems are absorbed (nulls, sentinels); only a missing input
//! column is an error.

mod error;
pub mod pipeline;
pub mod stages;

pub use error::{Result, TransformError};
pub use pipeline::{PreparationPipeline, PreparationStage, prepare};
pub use stages::cleaning::{
    coerce_numeric_columns, fill_missing_cabin, fill_missing_embarked, fill_missing_fare,
};
pub use stages::encoding::{cast_to_integers, encode_survived, expand_embarked};
pub use stages::features::{
    add_age_in_decades, add_cabin_occupancy, add_fare_log10, add_ticket_share_count,
    consolidate_titles, extract_cabin_level, extract_title, resolve_level_t, title_from_name,
};
pub use stages::imputation::impute_age_by_title;
