//! Derived feature columns.
//!
//! Dataset-wide counts (title frequency, cabin occupancy, ticket sharing)
//! are window expressions: an aggregate per key broadcast back onto every
//! row, which keeps row order and count intact.

use std::sync::LazyLock;

use explorer_model::columns::{
    AGE, AGE_IN_DECADES, CABIN, CABIN_OCCUPANCY, CABIN_SENTINEL, FARE, FARE_LOG10, LEVEL, NAME,
    OTHER_TITLE, RARE_TITLE_THRESHOLD, TICKET, TICKET_SHARE_COUNT, TITLE,
};
use polars::prelude::*;
use regex::Regex;

use crate::error::Result;
use crate::pipeline::PreparationStage;

/// `"Surname, Title. Given names"`: the title is the last token before a
/// period that follows the comma.
static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^,]*,.* (.*?)\..*$").expect("Invalid title regex"));

/// Deck `T` had a single cabin; it is grouped with the nearest deck.
const LEVEL_T: &str = "T";
const LEVEL_T_REPLACEMENT: &str = "A";

/// Extracts the honorific from a passenger name, if the name has the expected shape.
pub fn title_from_name(name: &str) -> Option<&str> {
    TITLE_REGEX
        .captures(name)
        .and_then(|captures| captures.get(1))
        .map(|title| title.as_str())
}

/// Adds `Title`, extracted from `Name`. Names that do not match give null.
pub fn extract_title(mut df: DataFrame) -> Result<DataFrame> {
    PreparationStage::ExtractTitle.check_columns(&df)?;

    let names = df.column(NAME)?.cast(&DataType::String)?;
    let titles: Vec<Option<&str>> = names
        .str()?
        .into_iter()
        .map(|name| name.and_then(title_from_name))
        .collect();
    let titles = Column::new(TITLE.into(), titles);

    df.with_column(titles)?;
    Ok(df)
}

/// Replaces titles seen fewer than five times across the table with `"Other"`.
///
/// Null titles stay null and are never consolidated.
pub fn consolidate_titles(df: DataFrame) -> Result<DataFrame> {
    PreparationStage::ConsolidateTitles.check_columns(&df)?;

    let frequency = col(TITLE)
        .len()
        .over([col(TITLE)])
        .cast(DataType::Int64);
    let is_rare = col(TITLE)
        .is_not_null()
        .and(frequency.lt(lit(i64::from(RARE_TITLE_THRESHOLD))));

    let consolidated = df
        .lazy()
        .with_column(
            when(is_rare)
                .then(lit(OTHER_TITLE))
                .otherwise(col(TITLE))
                .alias(TITLE),
        )
        .collect()?;
    Ok(consolidated)
}

/// Adds `CabinOccupancy`: passengers sharing each cabin, 0 for the `"None"` sentinel.
pub fn add_cabin_occupancy(df: DataFrame) -> Result<DataFrame> {
    PreparationStage::CabinOccupancy.check_columns(&df)?;

    let occupancy = when(col(CABIN).eq(lit(CABIN_SENTINEL)))
        .then(lit(0i64))
        .otherwise(col(CABIN).len().over([col(CABIN)]).cast(DataType::Int64))
        .alias(CABIN_OCCUPANCY);

    Ok(df.lazy().with_column(occupancy).collect()?)
}

/// Adds `TicketShareCount`: passengers travelling on each ticket.
pub fn add_ticket_share_count(df: DataFrame) -> Result<DataFrame> {
    PreparationStage::TicketShareCount.check_columns(&df)?;

    let share_count = col(TICKET)
        .len()
        .over([col(TICKET)])
        .cast(DataType::Int64)
        .alias(TICKET_SHARE_COUNT);

    Ok(df.lazy().with_column(share_count).collect()?)
}

/// Adds `Level`, the deck letter: the first character of `Cabin`.
pub fn extract_cabin_level(mut df: DataFrame) -> Result<DataFrame> {
    PreparationStage::CabinLevel.check_columns(&df)?;

    let cabins = df.column(CABIN)?.cast(&DataType::String)?;
    let levels: Vec<Option<String>> = cabins
        .str()?
        .into_iter()
        .map(|cabin| cabin.and_then(|c| c.chars().next()).map(String::from))
        .collect();

    df.with_column(Column::new(LEVEL.into(), levels))?;
    Ok(df)
}

/// Adds `FareLog10`; fares that are null, zero or negative map to `0.0`.
pub fn add_fare_log10(mut df: DataFrame) -> Result<DataFrame> {
    PreparationStage::FareLog10.check_columns(&df)?;

    let fares = df.column(FARE)?.cast(&DataType::Float64)?;
    let logs: Vec<f64> = fares
        .f64()?
        .into_iter()
        .map(|fare| match fare {
            Some(fare) if fare > 0.0 => fare.log10(),
            _ => 0.0,
        })
        .collect();

    df.with_column(Column::new(FARE_LOG10.into(), logs))?;
    Ok(df)
}

/// Adds `AgeInDecades` as `floor(Age / 10)`. Null ages stay null.
pub fn add_age_in_decades(mut df: DataFrame) -> Result<DataFrame> {
    PreparationStage::AgeInDecades.check_columns(&df)?;

    let ages = df.column(AGE)?.cast(&DataType::Float64)?;
    let decades: Vec<Option<f64>> = ages
        .f64()?
        .into_iter()
        .map(|age| age.map(|age| (age / 10.0).floor()))
        .collect();

    df.with_column(Column::new(AGE_IN_DECADES.into(), decades))?;
    Ok(df)
}

/// Remaps deck `"T"` to `"A"`.
pub fn resolve_level_t(df: DataFrame) -> Result<DataFrame> {
    PreparationStage::ResolveLevelT.check_columns(&df)?;

    let resolved = when(col(LEVEL).eq(lit(LEVEL_T)))
        .then(lit(LEVEL_T_REPLACEMENT))
        .otherwise(col(LEVEL))
        .alias(LEVEL);

    Ok(df.lazy().with_column(resolved).collect()?)
}
