//! Survival-rate aggregation.
//!
//! Only the exact label `"Survived"` counts as a survivor. Rows with a null
//! survival label still count toward the total.

use std::collections::BTreeMap;

use explorer_model::columns::SURVIVED;
use explorer_model::lookup::SURVIVED_LABEL;
use explorer_model::{CategoryValue, SurvivalStat};
use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::values::{category_values, require_column, string_values};

/// Column names of the table built by [`survival_frame`].
pub const SURVIVAL_FRAME_COLUMNS: [&str; 4] =
    ["Category", "TotalCount", "SurvivedCount", "SurvivalRate"];

/// Computes survival counts and rates, overall or per category.
///
/// With `group_by = None` the result is a single `"Overall"` row. Otherwise
/// there is one row per distinct value of the column, ascending, with
/// nulls collected into a [`CategoryValue::Missing`] row that sorts first.
pub fn calculate_survival_rate(df: &DataFrame, group_by: Option<&str>) -> Result<Vec<SurvivalStat>> {
    let survived = survivor_flags(df)?;

    let Some(column) = group_by else {
        let total = survived.len() as u64;
        let survivors = survived.iter().filter(|flag| **flag).count() as u64;
        return Ok(vec![SurvivalStat::new(
            CategoryValue::overall(),
            total,
            survivors,
        )]);
    };

    let categories = category_values(require_column(df, column)?)?;
    let mut counts: BTreeMap<CategoryValue, (u64, u64)> = BTreeMap::new();
    for (category, is_survivor) in categories.into_iter().zip(survived) {
        let entry = counts.entry(category).or_default();
        entry.0 += 1;
        if is_survivor {
            entry.1 += 1;
        }
    }

    debug!(column, categories = counts.len(), "grouped survival counts");
    Ok(counts
        .into_iter()
        .map(|(category, (total, survivors))| SurvivalStat::new(category, total, survivors))
        .collect())
}

fn survivor_flags(df: &DataFrame) -> Result<Vec<bool>> {
    let labels = string_values(require_column(df, SURVIVED)?)?;
    Ok(labels
        .iter()
        .map(|label| label.as_deref() == Some(SURVIVED_LABEL))
        .collect())
}

/// Renders survival stats as a `Category, TotalCount, SurvivedCount, SurvivalRate` table.
///
/// Categories are written as text; the missing category becomes null.
pub fn survival_frame(stats: &[SurvivalStat]) -> Result<DataFrame> {
    let categories: Vec<Option<String>> = stats
        .iter()
        .map(|stat| (!stat.category.is_missing()).then(|| stat.category.to_string()))
        .collect();
    let totals: Vec<u64> = stats.iter().map(|stat| stat.total_count).collect();
    let survivors: Vec<u64> = stats.iter().map(|stat| stat.survived_count).collect();
    let rates: Vec<f64> = stats.iter().map(|stat| stat.survival_rate).collect();

    let [category, total, survived, rate] = SURVIVAL_FRAME_COLUMNS;
    let df = DataFrame::new(vec![
        Column::new(category.into(), categories),
        Column::new(total.into(), totals),
        Column::new(survived.into(), survivors),
        Column::new(rate.into(), rates),
    ])?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_rate() {
        let df = DataFrame::new(vec![Column::new(
            "Survived".into(),
            vec!["Survived", "Died", "Survived", "Died", "Survived"],
        )])
        .unwrap();

        let stats = calculate_survival_rate(&df, None).unwrap();

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].category, CategoryValue::from("Overall"));
        assert_eq!(stats[0].total_count, 5);
        assert_eq!(stats[0].survived_count, 3);
        assert!((stats[0].survival_rate - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_null_survived_counts_toward_total() {
        let df = DataFrame::new(vec![Column::new(
            "Survived".into(),
            vec![Some("Survived"), None, Some("survived")],
        )])
        .unwrap();

        let stats = calculate_survival_rate(&df, None).unwrap();
        assert_eq!(stats[0].total_count, 3);
        assert_eq!(stats[0].survived_count, 1);
    }

    #[test]
    fn test_empty_table_rate_is_zero() {
        let df = DataFrame::new(vec![Column::new(
            "Survived".into(),
            Vec::<Option<&str>>::new(),
        )])
        .unwrap();

        let stats = calculate_survival_rate(&df, None).unwrap();
        assert_eq!(stats[0].total_count, 0);
        assert_eq!(stats[0].survival_rate, 0.0);

        let grouped = DataFrame::new(vec![
            Column::new("Survived".into(), Vec::<Option<&str>>::new()),
            Column::new("Sex".into(), Vec::<Option<&str>>::new()),
        ])
        .unwrap();
        assert!(calculate_survival_rate(&grouped, Some("Sex")).unwrap().is_empty());
    }

    #[test]
    fn test_null_category_sorts_first() {
        let df = DataFrame::new(vec![
            Column::new("Survived".into(), vec!["Survived", "Died", "Died"]),
            Column::new("Title".into(), vec![Some("Mr"), None, Some("Miss")]),
        ])
        .unwrap();

        let stats = calculate_survival_rate(&df, Some("Title")).unwrap();
        let categories: Vec<_> = stats.iter().map(|s| s.category.clone()).collect();
        assert_eq!(
            categories,
            vec![
                CategoryValue::Missing,
                CategoryValue::from("Miss"),
                CategoryValue::from("Mr"),
            ]
        );
    }

    #[test]
    fn test_survival_frame() {
        let stats = vec![
            SurvivalStat::new(CategoryValue::Missing, 1, 0),
            SurvivalStat::new(CategoryValue::Int(1), 4, 3),
        ];

        let df = survival_frame(&stats).unwrap();

        assert_eq!(df.height(), 2);
        let categories = df.column("Category").unwrap().str().unwrap();
        assert_eq!(categories.get(0), None);
        assert_eq!(categories.get(1), Some("1"));
        let rates = df.column("SurvivalRate").unwrap().f64().unwrap();
        assert_eq!(rates.get(1), Some(75.0));
        let totals = df.column("TotalCount").unwrap().u64().unwrap();
        assert_eq!(totals.get(1), Some(4));
    }
}
