use serde::Serialize;

use crate::category::CategoryValue;

/// Survival counts for one category (or the whole table).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SurvivalStat {
    pub category: CategoryValue,
    pub total_count: u64,
    pub survived_count: u64,
    /// Percentage in `0.0..=100.0`.
    pub survival_rate: f64,
}

impl SurvivalStat {
    /// Builds a stat, deriving the rate from the two counts.
    pub fn new(category: CategoryValue, total_count: u64, survived_count: u64) -> Self {
        debug_assert!(survived_count <= total_count);
        Self {
            category,
            total_count,
            survived_count,
            survival_rate: survival_rate(survived_count, total_count),
        }
    }
}

/// `survived / total * 100`, or `0.0` when `total` is zero.
pub fn survival_rate(survived: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        survived as f64 / total as f64 * 100.0
    }
}
