//! Chart data assembly.
//!
//! Builds the [`ChartSpec`] behind a "value by category" strip plot: one
//! point per passenger coloured by survival, a box summary per category and
//! tick labels annotated with the category's size and survival rate.

use std::collections::BTreeMap;

use explorer_model::columns::{AGE, EMBARKED, NAME, PCLASS, SEX, SURVIVED};
use explorer_model::lookup::{axis_title, survival_color};
use explorer_model::{BoxSummary, CategoryValue, ChartPoint, ChartSpec, ChartStyle, HoverInfo, SurvivalStat};
use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::survival::calculate_survival_rate;
use crate::values::{
    category_values, numeric_values, optional_floats, optional_ints, optional_strings,
    require_column, string_values,
};

/// Tukey fence multiplier for whiskers.
const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Assembles chart data for `value_column` plotted against `category_column`.
///
/// Rows where the value, the category or `Survived` is null are dropped
/// first; every count and rate in the chart is computed over what remains.
pub fn assemble_chart(df: &DataFrame, category_column: &str, value_column: &str) -> Result<ChartSpec> {
    let values = numeric_values(require_column(df, value_column)?)?;
    let categories = category_values(require_column(df, category_column)?)?;
    let survival = string_values(require_column(df, SURVIVED)?)?;

    let keep: Vec<bool> = values
        .iter()
        .zip(&categories)
        .zip(&survival)
        .map(|((value, category), label)| {
            value.is_some() && !category.is_missing() && label.is_some()
        })
        .collect();
    let clean = df.filter(&BooleanChunked::from_slice("keep".into(), &keep))?;
    debug!(
        category = category_column,
        value = value_column,
        rows = df.height(),
        kept = clean.height(),
        "assembling chart"
    );

    let stats = calculate_survival_rate(&clean, Some(category_column))?;
    let points = chart_points(&clean, category_column, value_column)?;
    let boxes = box_summaries(&points);
    let tick_labels = stats.iter().map(tick_label).collect();
    let categories = stats.into_iter().map(|stat| stat.category).collect();

    let x_title = axis_title(category_column).to_string();
    let y_title = axis_title(value_column).to_string();
    Ok(ChartSpec {
        title: format!("{y_title} by {x_title}"),
        x_title,
        y_title,
        category_column: category_column.to_string(),
        value_column: value_column.to_string(),
        categories,
        tick_labels,
        points,
        boxes,
        style: ChartStyle::default(),
    })
}

/// `"<category><br>(n=<count>, s=<rate>%)"` with the rate to one decimal place.
pub fn tick_label(stat: &SurvivalStat) -> String {
    format!(
        "{}<br>(n={}, s={:.1}%)",
        stat.category, stat.total_count, stat.survival_rate
    )
}

fn chart_points(clean: &DataFrame, category_column: &str, value_column: &str) -> Result<Vec<ChartPoint>> {
    let categories = category_values(require_column(clean, category_column)?)?;
    let values = numeric_values(require_column(clean, value_column)?)?;
    let survival = string_values(require_column(clean, SURVIVED)?)?;

    let names = optional_strings(clean, NAME)?;
    let sexes = optional_strings(clean, SEX)?;
    let ages = optional_floats(clean, AGE)?;
    let classes = optional_ints(clean, PCLASS)?;
    let ports = optional_strings(clean, EMBARKED)?;

    let mut points = Vec::with_capacity(clean.height());
    for (idx, category) in categories.into_iter().enumerate() {
        let (Some(value), Some(label)) = (values[idx], survival[idx].clone()) else {
            continue;
        };
        points.push(ChartPoint {
            category,
            value,
            color: survival_color(&label),
            survival: label,
            hover: HoverInfo {
                name: names[idx].clone(),
                sex: sexes[idx].clone(),
                age: ages[idx],
                pclass: classes[idx],
                embarked: ports[idx].clone(),
            },
        });
    }
    Ok(points)
}

fn box_summaries(points: &[ChartPoint]) -> Vec<BoxSummary> {
    let mut grouped: BTreeMap<&CategoryValue, Vec<f64>> = BTreeMap::new();
    for point in points {
        grouped.entry(&point.category).or_default().push(point.value);
    }
    grouped
        .into_iter()
        .filter_map(|(category, values)| box_summary(category.clone(), values))
        .collect()
}

/// Summarises `values` with linearly interpolated quartiles and Tukey whiskers.
///
/// Returns `None` when `values` is empty.
pub fn box_summary(category: CategoryValue, mut values: Vec<f64>) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let q1 = quantile_linear(&values, 0.25);
    let median = quantile_linear(&values, 0.5);
    let q3 = quantile_linear(&values, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - WHISKER_IQR_FACTOR * iqr;
    let upper_fence = q3 + WHISKER_IQR_FACTOR * iqr;

    let min = values[0];
    let max = values[values.len() - 1];
    let lower_whisker = values
        .iter()
        .copied()
        .find(|v| *v >= lower_fence)
        .unwrap_or(min);
    let upper_whisker = values
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= upper_fence)
        .unwrap_or(max);

    Some(BoxSummary {
        category,
        count: values.len(),
        min,
        q1,
        median,
        q3,
        max,
        lower_whisker,
        upper_whisker,
    })
}

/// Quantile of sorted, non-empty data, interpolating between closest ranks.
fn quantile_linear(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_linear() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_linear(&sorted, 0.0), 1.0);
        assert_eq!(quantile_linear(&sorted, 0.25), 1.75);
        assert_eq!(quantile_linear(&sorted, 0.5), 2.5);
        assert_eq!(quantile_linear(&sorted, 1.0), 4.0);
        assert_eq!(quantile_linear(&[7.0], 0.75), 7.0);
    }

    #[test]
    fn test_box_summary_whiskers_exclude_outliers() {
        let summary =
            box_summary(CategoryValue::from("male"), vec![5.0, 1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();

        assert_eq!(summary.count, 6);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 100.0);
        assert_eq!(summary.median, 3.5);
        assert_eq!(summary.q1, 2.25);
        assert_eq!(summary.q3, 4.75);
        assert_eq!(summary.lower_whisker, 1.0);
        assert_eq!(summary.upper_whisker, 5.0);
    }

    #[test]
    fn test_box_summary_empty() {
        assert!(box_summary(CategoryValue::Int(1), Vec::new()).is_none());
    }

    #[test]
    fn test_tick_label() {
        let stat = SurvivalStat::new(CategoryValue::from("female"), 3, 2);
        assert_eq!(tick_label(&stat), "female<br>(n=3, s=66.7%)");
    }
}
