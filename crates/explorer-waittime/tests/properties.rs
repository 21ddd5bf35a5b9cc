//! Property tests for the wait-time model.

use explorer_waittime::{
    WaitTimeStatistics, calculate_parameters, generate_wait_times, wait_time_histogram,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parameters_are_pure(people in 0u32..10_000, staff in 1u32..50) {
        let first = calculate_parameters(people, staff).unwrap();
        let second = calculate_parameters(people, staff).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!(first.mu >= 1.0);
        prop_assert!(first.sigma >= 0.5);
    }

    #[test]
    fn seeded_samples_repeat(people in 0u32..300, staff in 1u32..10, seed in any::<u64>()) {
        let first = generate_wait_times(people, staff, Some(seed)).unwrap();
        let second = generate_wait_times(people, staff, Some(seed)).unwrap();
        prop_assert_eq!(first.len(), people as usize);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.iter().all(|s| s.wait_time_minutes > 0.0));
    }

    #[test]
    fn statistics_are_ordered(people in 1u32..300, staff in 1u32..10, seed in any::<u64>()) {
        let samples = generate_wait_times(people, staff, Some(seed)).unwrap();
        let stats = WaitTimeStatistics::from_samples(&samples).unwrap();

        prop_assert_eq!(stats.count, people as usize);
        prop_assert!(stats.p25 <= stats.median);
        prop_assert!(stats.median <= stats.p75);
        prop_assert!(stats.p75 <= stats.p90);
        prop_assert!(stats.p90 <= stats.max);
        prop_assert!(stats.mean <= stats.max);
    }

    #[test]
    fn histogram_counts_every_sample(people in 0u32..300, bins in 1usize..60, seed in any::<u64>()) {
        let samples = generate_wait_times(people, 2, Some(seed)).unwrap();
        let histogram = wait_time_histogram(&samples, bins);
        prop_assert_eq!(histogram.total_count(), u64::from(people));
        prop_assert!(histogram.bins.len() <= bins);
    }
}
