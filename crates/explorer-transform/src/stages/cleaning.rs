//! Type coercion and null filling.

use explorer_model::columns::{CABIN, CABIN_SENTINEL, DEFAULT_EMBARKED, EMBARKED, FARE, NUMERIC_COLUMNS};
use polars::prelude::*;

use crate::error::Result;
use crate::pipeline::PreparationStage;

/// Casts the numeric passenger columns to Float64.
///
/// The cast is non-strict: values that do not parse become null and no
/// row is dropped.
pub fn coerce_numeric_columns(mut df: DataFrame) -> Result<DataFrame> {
    PreparationStage::CoerceNumeric.check_columns(&df)?;

    for name in NUMERIC_COLUMNS {
        let coerced = df.column(name)?.cast(&DataType::Float64)?;
        df.with_column(coerced)?;
    }
    Ok(df)
}

/// Replaces null cabins with the `"None"` sentinel.
pub fn fill_missing_cabin(df: DataFrame) -> Result<DataFrame> {
    PreparationStage::FillMissingCabin.check_columns(&df)?;
    fill_string(df, CABIN, CABIN_SENTINEL)
}

/// Replaces null fares with `0.0`.
pub fn fill_missing_fare(df: DataFrame) -> Result<DataFrame> {
    PreparationStage::FillMissingFare.check_columns(&df)?;

    let filled = df
        .lazy()
        .with_column(
            col(FARE)
                .cast(DataType::Float64)
                .fill_null(lit(0.0))
                .alias(FARE),
        )
        .collect()?;
    Ok(filled)
}

/// Replaces null embarkation codes with the majority port, Southampton.
pub fn fill_missing_embarked(df: DataFrame) -> Result<DataFrame> {
    PreparationStage::FillMissingEmbarked.check_columns(&df)?;
    fill_string(df, EMBARKED, DEFAULT_EMBARKED)
}

fn fill_string(df: DataFrame, column: &str, value: &str) -> Result<DataFrame> {
    let filled = df
        .lazy()
        .with_column(
            col(column)
                .cast(DataType::String)
                .fill_null(lit(value))
                .alias(column),
        )
        .collect()?;
    Ok(filled)
}
