//! Beer wait-time simulation.
//!
//! A standalone model of how long attendees wait for a drink at an event:
//! lognormal parameters derived from crowd size and bar staff, seeded
//! sampling, summary statistics and histogram data.
//!
//! # Example
//!
//! ```
//! use explorer_waittime::{WaitTimeStatistics, generate_wait_times, wait_time_histogram};
//!
//! let samples = generate_wait_times(200, 3, Some(42)).unwrap();
//! let stats = WaitTimeStatistics::from_samples(&samples).unwrap();
//! assert_eq!(stats.count, 200);
//!
//! let histogram = wait_time_histogram(&samples, 30);
//! assert_eq!(histogram.total_count(), 200);
//! ```

mod error;
pub mod histogram;
pub mod model;
pub mod statistics;

pub use error::{Result, WaitTimeError};
pub use histogram::{DEFAULT_BINS, HistogramBin, HistogramSpec, wait_time_histogram};
pub use model::{
    LognormalParameters, WaitTimeSample, calculate_parameters, generate_wait_times,
    sample_wait_times,
};
pub use statistics::WaitTimeStatistics;
