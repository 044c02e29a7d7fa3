//! Common solver interface.

use crate::instance::{Instance, Time};
use std::fmt;
use std::time::Duration;

/// How a solver run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SolveStatus {
    /// The search completed: the makespan is the true optimum.
    Optimal,
    /// The time budget ran out: the makespan is a valid upper bound.
    Timeout,
    /// Produced by a heuristic; no optimality claim.
    Heuristic,
}

impl SolveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolveStatus::Optimal => "OPTIMAL",
            SolveStatus::Timeout => "TIMEOUT",
            SolveStatus::Heuristic => "HEURISTIC",
        }
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result shape shared by every solver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Makespan of `assignment`.
    pub makespan: Time,

    /// Machine of every job, indexed by job id. Always complete.
    pub assignment: Vec<usize>,

    /// Search effort: nodes for the tree searches, iterations for
    /// iterated greedy, 1 for the constructor.
    pub explored: u64,

    pub status: SolveStatus,

    /// CPU time spent in the solver.
    pub elapsed: Duration,

    /// Best-known makespan at the start and after every improvement.
    /// Non-increasing.
    pub history: Vec<Time>,
}

impl Solution {
    /// Whether the assignment covers every job with a machine in range.
    pub fn is_feasible(&self, instance: &Instance) -> bool {
        self.assignment.len() == instance.num_jobs()
            && self
                .assignment
                .iter()
                .all(|&m| m < instance.num_machines())
    }
}

/// A strategy that solves an R||Cmax instance.
///
/// Implementations are independent of each other; the caller picks one and
/// calls [`solve`](Self::solve). `&mut self` lets stochastic solvers advance
/// the random stream they own.
pub trait Solver {
    /// Short identifier for logs and reports.
    fn name(&self) -> &str;

    /// Solves the instance.
    fn solve(&mut self, instance: &Instance) -> Solution;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(SolveStatus::Optimal.to_string(), "OPTIMAL");
        assert_eq!(SolveStatus::Timeout.to_string(), "TIMEOUT");
        assert_eq!(SolveStatus::Heuristic.to_string(), "HEURISTIC");
    }

    #[test]
    fn test_feasibility_check() {
        let inst = Instance::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let mut sol = Solution {
            makespan: 4,
            assignment: vec![0, 1],
            explored: 1,
            status: SolveStatus::Heuristic,
            elapsed: Duration::ZERO,
            history: vec![4],
        };
        assert!(sol.is_feasible(&inst));
        sol.assignment = vec![0, 2];
        assert!(!sol.is_feasible(&inst));
        sol.assignment = vec![0];
        assert!(!sol.is_feasible(&inst));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&SolveStatus::Timeout).unwrap();
        assert_eq!(json, "\"TIMEOUT\"");
    }
}
