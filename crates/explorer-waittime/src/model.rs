//! Lognormal wait-time model.
//!
//! Wait times grow with the size of the crowd and shrink with the number of
//! bar staff, both on a logarithmic scale:
//!
//! ```text
//! crowd = ln(1 + people / 50)
//! staff = 1 / ln(1 + bar_staff)
//! mu    = 1.0 + crowd * 0.8 * staff
//! sigma = 0.5 + crowd * 0.3 * staff
//! ```
//!
//! `mu = 1.0` on its own corresponds to a typical wait of about three minutes.

use rand::{Rng, SeedableRng as _};
use rand_distr::{Distribution, LogNormal};
use rand_pcg::Pcg64;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, WaitTimeError};

const BASE_MU: f64 = 1.0;
const BASE_SIGMA: f64 = 0.5;
/// Crowd size at which the crowd factor reaches `ln 2`.
const CROWD_SCALE: f64 = 50.0;
const MU_CROWD_WEIGHT: f64 = 0.8;
const SIGMA_CROWD_WEIGHT: f64 = 0.3;

/// Location and scale of the wait-time distribution, in log-minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LognormalParameters {
    pub mu: f64,
    pub sigma: f64,
}

impl LognormalParameters {
    fn distribution(self) -> Result<LogNormal<f64>> {
        LogNormal::new(self.mu, self.sigma).map_err(|e| WaitTimeError::InvalidDistribution {
            mu: self.mu,
            sigma: self.sigma,
            message: e.to_string(),
        })
    }
}

/// One attendee's simulated wait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaitTimeSample {
    /// 1-based.
    pub attendee_id: u32,
    pub wait_time_minutes: f64,
}

/// Computes the distribution parameters for an event.
///
/// # Errors
///
/// [`WaitTimeError::NoStaff`] when `num_staff` is zero.
///
/// ```
/// use explorer_waittime::calculate_parameters;
///
/// let params = calculate_parameters(50, 1).unwrap();
/// assert!((params.mu - 1.8).abs() < 1e-12);
/// assert!((params.sigma - 0.8).abs() < 1e-12);
/// ```
pub fn calculate_parameters(num_people: u32, num_staff: u32) -> Result<LognormalParameters> {
    if num_staff == 0 {
        return Err(WaitTimeError::NoStaff);
    }

    let crowd_factor = (1.0 + f64::from(num_people) / CROWD_SCALE).ln();
    let staff_factor = 1.0 / (1.0 + f64::from(num_staff)).ln();

    Ok(LognormalParameters {
        mu: BASE_MU + crowd_factor * MU_CROWD_WEIGHT * staff_factor,
        sigma: BASE_SIGMA + crowd_factor * SIGMA_CROWD_WEIGHT * staff_factor,
    })
}

/// Simulates one wait per attendee.
///
/// The same `seed` always yields the same samples; `None` draws a fresh seed.
pub fn generate_wait_times(
    num_people: u32,
    num_staff: u32,
    seed: Option<u64>,
) -> Result<Vec<WaitTimeSample>> {
    let params = calculate_parameters(num_people, num_staff)?;
    let mut rng = match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_rng(&mut rand::rng()),
    };
    debug!(
        num_people,
        num_staff,
        mu = params.mu,
        sigma = params.sigma,
        seeded = seed.is_some(),
        "generating wait times"
    );
    sample_wait_times(params, num_people, &mut rng)
}

/// Draws `num_people` waits from the distribution described by `params`.
pub fn sample_wait_times<R>(
    params: LognormalParameters,
    num_people: u32,
    rng: &mut R,
) -> Result<Vec<WaitTimeSample>>
where
    R: Rng + ?Sized,
{
    let distribution = params.distribution()?;
    Ok((1..=num_people)
        .map(|attendee_id| WaitTimeSample {
            attendee_id,
            wait_time_minutes: distribution.sample(rng),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_are_deterministic() {
        let a = calculate_parameters(200, 3).unwrap();
        let b = calculate_parameters(200, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parameters_formula() {
        let params = calculate_parameters(200, 3).unwrap();
        let crowd = 5.0_f64.ln();
        let staff = 1.0 / 4.0_f64.ln();
        assert!((params.mu - (1.0 + crowd * 0.8 * staff)).abs() < 1e-12);
        assert!((params.sigma - (0.5 + crowd * 0.3 * staff)).abs() < 1e-12);
    }

    #[test]
    fn test_empty_event_uses_base_parameters() {
        let params = calculate_parameters(0, 2).unwrap();
        assert_eq!(params.mu, 1.0);
        assert_eq!(params.sigma, 0.5);
    }

    #[test]
    fn test_no_staff_is_rejected() {
        assert!(matches!(
            calculate_parameters(100, 0),
            Err(WaitTimeError::NoStaff)
        ));
        assert!(generate_wait_times(100, 0, Some(1)).is_err());
    }

    #[test]
    fn test_more_staff_shorter_waits() {
        let one = calculate_parameters(500, 1).unwrap();
        let five = calculate_parameters(500, 5).unwrap();
        assert!(five.mu < one.mu);
        assert!(five.sigma < one.sigma);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_wait_times(25, 2, Some(42)).unwrap();
        let b = generate_wait_times(25, 2, Some(42)).unwrap();
        let c = generate_wait_times(25, 2, Some(43)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_attendee_ids_are_one_based() {
        let samples = generate_wait_times(3, 1, Some(7)).unwrap();
        let ids: Vec<u32> = samples.iter().map(|s| s.attendee_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(samples.iter().all(|s| s.wait_time_minutes > 0.0));
    }
}
