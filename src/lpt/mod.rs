//! Longest Processing Time first (LPT) constructor.
//!
//! A deterministic single pass: jobs are taken heaviest first (by their
//! average time over all machines) and each one goes to the machine where
//! it would finish earliest. Used on its own, as the warm start of
//! branch-and-bound, and as the starting point of iterated greedy.
//!
//! # References
//!
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

mod constructor;

pub use constructor::{construct, job_order, Lpt};
