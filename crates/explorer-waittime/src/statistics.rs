use serde::Serialize;

use crate::model::WaitTimeSample;

/// Summary of simulated wait times, in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaitTimeStatistics {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); `None` for a single sample.
    pub std: Option<f64>,
    pub median: f64,
    pub p25: f64,
    pub p75: f64,
    pub p90: f64,
    pub max: f64,
}

impl WaitTimeStatistics {
    /// Summarises the wait times of `samples`. Returns `None` when there are none.
    pub fn from_samples(samples: &[WaitTimeSample]) -> Option<Self> {
        Self::from_values(samples.iter().map(|s| s.wait_time_minutes))
    }

    /// Summarises raw wait times. Returns `None` for an empty input.
    ///
    /// The median interpolates between the two middle values; the other
    /// percentiles take the nearest rank, `sorted[round(q * (n - 1))]`.
    ///
    /// ```
    /// use explorer_waittime::WaitTimeStatistics;
    ///
    /// let stats = WaitTimeStatistics::from_values([4.0, 1.0, 3.0, 2.0]).unwrap();
    /// assert_eq!(stats.count, 4);
    /// assert_eq!(stats.mean, 2.5);
    /// assert_eq!(stats.median, 2.5);
    /// assert_eq!(stats.max, 4.0);
    /// ```
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let n = count as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let std = (count > 1).then(|| {
            let sum_sq = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (sum_sq / (n - 1.0)).sqrt()
        });

        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            count,
            mean,
            std,
            median,
            p25: nearest_rank(&sorted, 0.25),
            p75: nearest_rank(&sorted, 0.75),
            p90: nearest_rank(&sorted, 0.90),
            max: sorted[count - 1],
        })
    }
}

fn nearest_rank(sorted: &[f64], q: f64) -> f64 {
    let idx = (q * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_none() {
        assert!(WaitTimeStatistics::from_samples(&[]).is_none());
    }

    #[test]
    fn test_single_sample() {
        let stats = WaitTimeStatistics::from_values([3.5]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.std, None);
        assert_eq!(stats.median, 3.5);
        assert_eq!(stats.p90, 3.5);
    }

    #[test]
    fn test_sample_std() {
        let stats = WaitTimeStatistics::from_values([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.mean, 5.0);
        // Sum of squared deviations is 32 over 7 degrees of freedom.
        assert!((stats.std.unwrap() - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_rank_percentiles() {
        let values: Vec<f64> = (1..=11).map(f64::from).collect();
        let stats = WaitTimeStatistics::from_values(values).unwrap();
        // 0.25 * 10 = 2.5 rounds away from zero to index 3.
        assert_eq!(stats.p25, 4.0);
        assert_eq!(stats.p75, 9.0);
        assert_eq!(stats.p90, 10.0);
        assert_eq!(stats.median, 6.0);
        assert_eq!(stats.max, 11.0);
    }

    #[test]
    fn test_from_samples_reads_minutes() {
        let samples = [
            WaitTimeSample {
                attendee_id: 1,
                wait_time_minutes: 1.0,
            },
            WaitTimeSample {
                attendee_id: 2,
                wait_time_minutes: 3.0,
            },
        ];
        let stats = WaitTimeStatistics::from_samples(&samples).unwrap();
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.median, 2.0);
    }
}
