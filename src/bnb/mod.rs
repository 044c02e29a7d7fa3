//! Exact branch-and-bound.
//!
//! Depth-first search over job placements with two pruning rules, warm
//! started from the LPT schedule:
//!
//! - **Global**: a node whose current maximum load already reaches the
//!   incumbent makespan is abandoned with its whole subtree.
//! - **Local**: placing a job on a machine is skipped when that machine's
//!   load would reach the incumbent makespan.
//!
//! Jobs are branched on in LPT order (heaviest first), which tightens the
//! incumbent early; machines are tried in ascending index order.
//!
//! The run is anytime: the incumbent is always a complete schedule, so when
//! the CPU budget expires the search unwinds and reports
//! [`SolveStatus::Timeout`](crate::solver::SolveStatus::Timeout) with the best
//! schedule found so far. A search that finishes reports
//! [`SolveStatus::Optimal`](crate::solver::SolveStatus::Optimal).

mod config;
mod runner;

pub use config::BnbConfig;
pub use runner::BranchAndBound;
