//! Age imputation.

use explorer_model::columns::{AGE, TITLE};
use polars::prelude::*;

use crate::error::Result;
use crate::pipeline::PreparationStage;

/// Fills null ages with the mean age of the passenger's title, truncated to
/// a whole number of years.
///
/// Means ignore nulls and null titles form a group of their own. When every
/// age in a title group is null the truncated mean over the whole table is
/// used instead; when the table holds no ages at all, ages stay null.
pub fn impute_age_by_title(df: DataFrame) -> Result<DataFrame> {
    PreparationStage::ImputeAge.check_columns(&df)?;

    let age = col(AGE).cast(DataType::Float64);
    let title_mean = age.clone().mean().over([col(TITLE)]);
    let fallback = title_mean
        .fill_null(age.clone().mean())
        .cast(DataType::Int64)
        .cast(DataType::Float64);

    let imputed = df
        .lazy()
        .with_column(age.fill_null(fallback).alias(AGE))
        .collect()?;
    Ok(imputed)
}
