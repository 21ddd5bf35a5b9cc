//! Row-wise extraction of column values.

use explorer_model::CategoryValue;
use polars::prelude::*;

use crate::error::{ReportError, Result};

/// Looks up a column, reporting a [`ReportError::MissingColumn`] when absent.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| ReportError::MissingColumn {
        column: name.to_string(),
    })
}

/// Reads a grouping column as category keys, keeping integers and floats native.
pub fn category_values(column: &Column) -> Result<Vec<CategoryValue>> {
    let dtype = column.dtype();
    let values = if dtype.is_integer() {
        let ints = column.cast(&DataType::Int64)?;
        ints.i64()?
            .into_iter()
            .map(|v| v.map_or(CategoryValue::Missing, CategoryValue::Int))
            .collect()
    } else if dtype.is_float() {
        let floats = column.cast(&DataType::Float64)?;
        floats
            .f64()?
            .into_iter()
            .map(|v| v.map_or(CategoryValue::Missing, CategoryValue::Float))
            .collect()
    } else {
        string_values(column)?
            .into_iter()
            .map(|v| v.map_or(CategoryValue::Missing, CategoryValue::Text))
            .collect()
    };
    Ok(values)
}

/// Reads a column as Float64, failing if any value cannot be converted.
pub fn numeric_values(column: &Column) -> Result<Vec<Option<f64>>> {
    let floats = column
        .strict_cast(&DataType::Float64)
        .map_err(|_| ReportError::NonNumericColumn {
            column: column.name().to_string(),
            dtype: column.dtype().to_string(),
        })?;
    Ok(floats.f64()?.into_iter().collect())
}

/// Reads a column as text.
pub fn string_values(column: &Column) -> Result<Vec<Option<String>>> {
    let strings = column.cast(&DataType::String)?;
    Ok(strings
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

/// Reads an optional column as text; a missing column reads as all nulls.
pub(crate) fn optional_strings(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    match df.column(name) {
        Ok(column) => string_values(column),
        Err(_) => Ok(vec![None; df.height()]),
    }
}

/// Reads an optional column as Float64 (non-strict); a missing column reads as all nulls.
pub(crate) fn optional_floats(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    match df.column(name) {
        Ok(column) => {
            let floats = column.cast(&DataType::Float64)?;
            Ok(floats.f64()?.into_iter().collect())
        }
        Err(_) => Ok(vec![None; df.height()]),
    }
}

/// Reads an optional column as Int64 (non-strict); a missing column reads as all nulls.
pub(crate) fn optional_ints(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    match df.column(name) {
        Ok(column) => {
            let ints = column.cast(&DataType::Int64)?;
            Ok(ints.i64()?.into_iter().collect())
        }
        Err(_) => Ok(vec![None; df.height()]),
    }
}
