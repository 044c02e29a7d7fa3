//! Branch-and-bound configuration.

use crate::error::{Result, ScheduleError};
use std::time::Duration;

/// Configuration for [`BranchAndBound`](super::BranchAndBound).
///
/// # Examples
///
/// ```
/// use u_rcmax::bnb::BnbConfig;
///
/// let config = BnbConfig::default().with_time_limit_secs(5.0);
/// assert_eq!(config.time_limit.as_secs(), 5);
/// assert_eq!(config.check_interval, 1000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbConfig {
    /// CPU-time budget for the whole search.
    pub time_limit: Duration,

    /// The clock is polled once every this many explored nodes.
    pub check_interval: u64,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            check_interval: 1000,
        }
    }
}

impl BnbConfig {
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

    pub fn with_check_interval(mut self, nodes: u64) -> Self {
        self.check_interval = nodes;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.check_interval == 0 {
            return Err(ScheduleError::InvalidConfig(
                "check_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
