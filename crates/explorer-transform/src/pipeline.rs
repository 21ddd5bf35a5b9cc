//! The ordered preparation pipeline.
//!
//! Stages run in a fixed order because later stages read columns that
//! earlier ones create or fill: titles are extracted before they are
//! consolidated and before ages are imputed from them, and `Cabin` is
//! filled before occupancy and level are derived from it.
//!
//! # Example
//!
//! ```ignore
//! use explorer_transform::prepare;
//!
//! let prepared = prepare(raw)?;
//! assert_eq!(prepared.width(), 18);
//! ```

use std::time::Instant;

use explorer_model::columns::{
    AGE, AGE_IN_DECADES, CABIN, EMBARKED, FARE, LEVEL, NAME, NUMERIC_COLUMNS, PCLASS, SURVIVED,
    TICKET, TITLE,
};
use polars::prelude::DataFrame;
use tracing::{debug, info};

use crate::error::{Result, TransformError};
use crate::stages::{cleaning, encoding, features, imputation};

/// One step of the preparation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreparationStage {
    /// Parse numeric columns as Float64; unparseable values become null.
    CoerceNumeric,
    FillMissingCabin,
    FillMissingFare,
    FillMissingEmbarked,
    ExtractTitle,
    /// Fold rare titles into "Other".
    ConsolidateTitles,
    CabinOccupancy,
    TicketShareCount,
    CabinLevel,
    FareLog10,
    /// Fill null ages with the truncated mean age of the passenger's title.
    ImputeAge,
    AgeInDecades,
    ResolveLevelT,
    CastToIntegers,
    EncodeSurvived,
    ExpandEmbarked,
}

impl PreparationStage {
    /// Every stage, in execution order.
    pub const ALL: [Self; 16] = [
        Self::CoerceNumeric,
        Self::FillMissingCabin,
        Self::FillMissingFare,
        Self::FillMissingEmbarked,
        Self::ExtractTitle,
        Self::ConsolidateTitles,
        Self::CabinOccupancy,
        Self::TicketShareCount,
        Self::CabinLevel,
        Self::FareLog10,
        Self::ImputeAge,
        Self::AgeInDecades,
        Self::ResolveLevelT,
        Self::CastToIntegers,
        Self::EncodeSurvived,
        Self::ExpandEmbarked,
    ];

    /// Returns a human-readable display name for the stage.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CoerceNumeric => "Coerce Numeric",
            Self::FillMissingCabin => "Fill Cabin",
            Self::FillMissingFare => "Fill Fare",
            Self::FillMissingEmbarked => "Fill Embarked",
            Self::ExtractTitle => "Extract Title",
            Self::ConsolidateTitles => "Consolidate Titles",
            Self::CabinOccupancy => "Cabin Occupancy",
            Self::TicketShareCount => "Ticket Sharing",
            Self::CabinLevel => "Cabin Level",
            Self::FareLog10 => "Fare Log10",
            Self::ImputeAge => "Impute Age",
            Self::AgeInDecades => "Age In Decades",
            Self::ResolveLevelT => "Resolve Level T",
            Self::CastToIntegers => "Cast Integers",
            Self::EncodeSurvived => "Encode Survived",
            Self::ExpandEmbarked => "Expand Embarked",
        }
    }

    /// Columns that must exist before the stage can run.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Self::CoerceNumeric => &NUMERIC_COLUMNS,
            Self::FillMissingCabin | Self::CabinOccupancy | Self::CabinLevel => &[CABIN],
            Self::FillMissingFare | Self::FareLog10 => &[FARE],
            Self::FillMissingEmbarked | Self::ExpandEmbarked => &[EMBARKED],
            Self::ExtractTitle => &[NAME],
            Self::ConsolidateTitles => &[TITLE],
            Self::TicketShareCount => &[TICKET],
            Self::ImputeAge => &[AGE, TITLE],
            Self::AgeInDecades => &[AGE],
            Self::ResolveLevelT => &[LEVEL],
            Self::CastToIntegers => &[AGE_IN_DECADES, PCLASS],
            Self::EncodeSurvived => &[SURVIVED],
        }
    }

    /// Runs the stage on `df`.
    pub fn apply(self, df: DataFrame) -> Result<DataFrame> {
        match self {
            Self::CoerceNumeric => cleaning::coerce_numeric_columns(df),
            Self::FillMissingCabin => cleaning::fill_missing_cabin(df),
            Self::FillMissingFare => cleaning::fill_missing_fare(df),
            Self::FillMissingEmbarked => cleaning::fill_missing_embarked(df),
            Self::ExtractTitle => features::extract_title(df),
            Self::ConsolidateTitles => features::consolidate_titles(df),
            Self::CabinOccupancy => features::add_cabin_occupancy(df),
            Self::TicketShareCount => features::add_ticket_share_count(df),
            Self::CabinLevel => features::extract_cabin_level(df),
            Self::FareLog10 => features::add_fare_log10(df),
            Self::ImputeAge => imputation::impute_age_by_title(df),
            Self::AgeInDecades => features::add_age_in_decades(df),
            Self::ResolveLevelT => features::resolve_level_t(df),
            Self::CastToIntegers => encoding::cast_to_integers(df),
            Self::EncodeSurvived => encoding::encode_survived(df),
            Self::ExpandEmbarked => encoding::expand_embarked(df),
        }
    }

    /// Fails with [`TransformError::MissingColumn`] for the first required column `df` lacks.
    pub(crate) fn check_columns(self, df: &DataFrame) -> Result<()> {
        match self
            .required_columns()
            .iter()
            .find(|column| df.get_column_index(column).is_none())
        {
            Some(column) => Err(TransformError::MissingColumn {
                stage: self.display_name(),
                column: (*column).to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl std::fmt::Display for PreparationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An ordered list of stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparationPipeline {
    stages: Vec<PreparationStage>,
}

impl PreparationPipeline {
    /// The full sixteen-stage pipeline.
    pub fn standard() -> Self {
        Self {
            stages: PreparationStage::ALL.to_vec(),
        }
    }

    /// A pipeline running only `stages`, in the given order.
    pub fn with_stages(stages: impl IntoIterator<Item = PreparationStage>) -> Self {
        Self {
            stages: stages.into_iter().collect(),
        }
    }

    pub fn stages(&self) -> &[PreparationStage] {
        &self.stages
    }

    /// Runs every stage in order, stopping at the first error.
    pub fn execute(&self, df: DataFrame) -> Result<DataFrame> {
        let started = Instant::now();
        let rows = df.height();
        let mut current = df;

        for stage in &self.stages {
            let stage_started = Instant::now();
            current = stage.apply(current)?;
            debug!(
                stage = stage.display_name(),
                columns = current.width(),
                elapsed_us = stage_started.elapsed().as_micros() as u64,
                "stage complete"
            );
        }

        debug_assert_eq!(current.height(), rows);
        info!(
            stages = self.stages.len(),
            rows,
            columns = current.width(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "prepared passenger table"
        );
        Ok(current)
    }
}

impl Default for PreparationPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Runs the standard pipeline over a raw passenger table.
pub fn prepare(raw: DataFrame) -> Result<DataFrame> {
    PreparationPipeline::standard().execute(raw)
}
