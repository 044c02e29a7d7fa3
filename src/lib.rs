//! Unrelated parallel machine scheduling (R||Cmax).
//!
//! Given N jobs and M machines where job `j` takes `p(i, j)` time units on
//! machine `i`, assign every job to exactly one machine so that the
//! makespan (the largest machine load) is as small as possible.
//!
//! Provides:
//!
//! - **LPT constructor**: deterministic greedy schedule, heaviest jobs first.
//! - **Branch-and-Bound**: exact depth-first search with incumbent pruning,
//!   warm-started from LPT and bounded by a CPU-time budget.
//! - **Brute force**: unpruned enumeration of all `M^N` assignments, for
//!   validating the exact solver on tiny instances.
//! - **Iterated Greedy**: destroy/rebuild metaheuristic with local search
//!   and annealing-style acceptance, driven by a private seeded stream.
//! - **Lower bound**: [`Instance::lower_bound`], the reference for gap
//!   reporting.
//!
//! All solvers implement [`Solver`] and return the same [`Solution`] shape.
//!
//! # Example
//!
//! ```
//! use u_rcmax::bnb::{BnbConfig, BranchAndBound};
//! use u_rcmax::ig::{IgConfig, IteratedGreedy};
//! use u_rcmax::{Instance, SolveStatus, Solver};
//!
//! let instance: Instance = "3 2\n10 20 30\n15 15 15\n".parse().unwrap();
//!
//! let exact = BranchAndBound::new(BnbConfig::default()).unwrap().solve(&instance);
//! assert_eq!(exact.status, SolveStatus::Optimal);
//!
//! let config = IgConfig::default().with_max_iterations(200).with_seed(7);
//! let heuristic = IteratedGreedy::new(config).unwrap().solve(&instance);
//! assert!(heuristic.makespan >= exact.makespan);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for instances, configs and solutions.
//! - `parallel`: [`batch::solve_all`] runs independent solvers on rayon.

pub mod bnb;
pub mod brute_force;
pub mod clock;
pub mod error;
pub mod ig;
pub mod instance;
pub mod lpt;
pub mod random;
pub mod report;
pub mod schedule;
pub mod solver;
pub mod state;

#[cfg(feature = "parallel")]
pub mod batch;

pub use error::{Result, ScheduleError};
pub use instance::{Instance, Time};
pub use schedule::Schedule;
pub use solver::{Solution, SolveStatus, Solver};
