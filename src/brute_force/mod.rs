//! Exhaustive enumeration baseline.
//!
//! Visits all `M^N` complete assignments with no pruning at all. It exists
//! to certify the exact solver on tiny instances and to measure how much
//! of the tree branch-and-bound avoids; it is not meant for production use.
//! There is no time limit, so keep `N` small (roughly 12-15 at most).

mod runner;

pub use runner::BruteForce;
