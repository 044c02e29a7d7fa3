//! Iterated greedy configuration.

use crate::error::{Result, ScheduleError};
use std::time::Duration;

/// Configuration for [`IteratedGreedy`](super::IteratedGreedy).
///
/// # Examples
///
/// ```
/// use u_rcmax::ig::IgConfig;
///
/// let config = IgConfig::default()
///     .with_destruction_size(3)
///     .with_temperature_lambda(0.4)
///     .with_max_iterations(10_000)
///     .with_seed(2024);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IgConfig {
    /// Jobs removed per iteration (`d`). Clamped to the job count.
    pub destruction_size: usize,

    /// Temperature scale (`T_lambda`). Higher accepts worse solutions more often.
    pub temperature_lambda: f64,

    /// CPU-time budget.
    pub time_limit: Duration,

    /// Optional iteration cap; the run stops at whichever limit comes first.
    pub max_iterations: Option<u64>,

    /// Seed of the solver's private random stream. Used as given.
    pub seed: u64,

    /// Record `(iteration, makespan)` of every accepted solution.
    pub record_trajectory: bool,
}

impl Default for IgConfig {
    fn default() -> Self {
        Self {
            destruction_size: 4,
            temperature_lambda: 0.5,
            time_limit: Duration::from_secs(1),
            max_iterations: None,
            seed: 42,
            record_trajectory: false,
        }
    }
}

impl IgConfig {
    pub fn with_destruction_size(mut self, d: usize) -> Self {
        self.destruction_size = d;
        self
    }

    pub fn with_temperature_lambda(mut self, lambda: f64) -> Self {
        self.temperature_lambda = lambda;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Sets the budget in (fractional) seconds. Negative or non-finite
    /// values give a zero budget.
    pub fn with_time_limit_secs(mut self, secs: f64) -> Self {
        self.time_limit = Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
        self
    }

    pub fn with_max_iterations(mut self, n: u64) -> Self {
        self.max_iterations = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_trajectory(mut self, record: bool) -> Self {
        self.record_trajectory = record;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.destruction_size == 0 {
            return Err(ScheduleError::InvalidConfig(
                "destruction_size must be at least 1".into(),
            ));
        }
        if !self.temperature_lambda.is_finite() || self.temperature_lambda < 0.0 {
            return Err(ScheduleError::InvalidConfig(format!(
                "temperature_lambda must be finite and non-negative, got {}",
                self.temperature_lambda
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IgConfig::default();
        assert_eq!(config.destruction_size, 4);
        assert!((config.temperature_lambda - 0.5).abs() < 1e-12);
        assert_eq!(config.time_limit, Duration::from_secs(1));
        assert_eq!(config.max_iterations, None);
        assert_eq!(config.seed, 42);
        assert!(!config.record_trajectory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = IgConfig::default()
            .with_destruction_size(2)
            .with_temperature_lambda(1.5)
            .with_time_limit_secs(0.5)
            .with_max_iterations(100)
            .with_seed(7)
            .with_trajectory(true);
        assert_eq!(config.destruction_size, 2);
        assert!((config.temperature_lambda - 1.5).abs() < 1e-12);
        assert_eq!(config.time_limit, Duration::from_millis(500));
        assert_eq!(config.max_iterations, Some(100));
        assert_eq!(config.seed, 7);
        assert!(config.record_trajectory);
    }

    #[test]
    fn test_validate_zero_destruction() {
        assert!(IgConfig::default().with_destruction_size(0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_lambda() {
        assert!(IgConfig::default().with_temperature_lambda(-0.1).validate().is_err());
        assert!(IgConfig::default().with_temperature_lambda(f64::NAN).validate().is_err());
        assert!(IgConfig::default().with_temperature_lambda(0.0).validate().is_ok());
    }
}
