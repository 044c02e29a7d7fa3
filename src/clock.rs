//! CPU-time budgets.
//!
//! Budgets are measured in CPU time consumed by the calling thread rather
//! than wall-clock time, so unrelated load on the machine (or other solver
//! runs on sibling threads) does not eat into a run's budget. The check is
//! polled by the solvers; nothing is preempted, so a run may overshoot by
//! the length of one polling interval.

use cpu_time::ThreadTime;
use std::time::Duration;

/// A time budget started at construction.
#[derive(Debug)]
pub struct CpuBudget {
    start: ThreadTime,
    limit: Duration,
}

impl CpuBudget {
    /// Starts the clock with the given limit.
    pub fn start(limit: Duration) -> Self {
        Self {
            start: ThreadTime::now(),
            limit,
        }
    }

    /// A budget that never runs out; used to time unbounded solvers.
    pub fn unlimited() -> Self {
        Self::start(Duration::MAX)
    }

    /// CPU time used since the budget was started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whether the CPU time used exceeds the limit.
    #[inline]
    pub fn exhausted(&self) -> bool {
        self.elapsed() > self.limit
    }

    /// The configured limit.
    pub fn limit(&self) -> Duration {
        self.limit
    }
}
