//! Wait-time histogram data.

use serde::Serialize;

use crate::model::WaitTimeSample;

pub const HISTOGRAM_TITLE: &str = "Distribution of Beer Wait Times";
pub const WAIT_TIME_AXIS_LABEL: &str = "Wait Time (minutes)";
pub const COUNT_AXIS_LABEL: &str = "count";
pub const DEFAULT_BINS: usize = 30;

/// A single bin covering `[start, end)`; the last bin also includes `end`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

/// Declarative histogram handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub show_legend: bool,
    pub bins: Vec<HistogramBin>,
}

impl HistogramSpec {
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

/// Bins the wait times into `num_bins` equal-width bins spanning `[min, max]`.
///
/// No samples give no bins. When every wait is identical a single bin holds
/// them all. A `num_bins` of zero is treated as one.
pub fn wait_time_histogram(samples: &[WaitTimeSample], num_bins: usize) -> HistogramSpec {
    HistogramSpec {
        title: HISTOGRAM_TITLE.to_string(),
        x_label: WAIT_TIME_AXIS_LABEL.to_string(),
        y_label: COUNT_AXIS_LABEL.to_string(),
        show_legend: false,
        bins: equal_width_bins(samples.iter().map(|s| s.wait_time_minutes), num_bins),
    }
}

fn equal_width_bins(values: impl Iterator<Item = f64> + Clone, num_bins: usize) -> Vec<HistogramBin> {
    let Some((min, max)) = values.clone().fold(None, |range, v| match range {
        None => Some((v, v)),
        Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
    }) else {
        return Vec::new();
    };

    if min == max {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.count() as u64,
        }];
    }

    let num_bins = num_bins.max(1);
    let width = (max - min) / num_bins as f64;
    let mut bins: Vec<HistogramBin> = (0..num_bins)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: if i + 1 == num_bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for value in values {
        let idx = (((value - min) / width) as usize).min(num_bins - 1);
        bins[idx].count += 1;
    }
    bins
}
