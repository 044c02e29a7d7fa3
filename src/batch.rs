//! Independent solver runs over many instances, in parallel.
//!
//! Each instance gets its own solver built by `make_solver`, on whichever
//! rayon worker picks it up. Solvers, search states and random streams are
//! never shared between runs; only the instances are read concurrently.

use crate::instance::Instance;
use crate::solver::{Solution, Solver};
use rayon::prelude::*;

/// Solves every instance with a freshly built solver.
///
/// `make_solver` receives the instance index, so stochastic solvers can be
/// given a seed per instance. Results are returned in input order.
///
/// # Examples
///
/// ```
/// use u_rcmax::batch::solve_all;
/// use u_rcmax::ig::{IgConfig, IteratedGreedy};
/// use u_rcmax::instance::{generate, Distribution};
///
/// let instances: Vec<_> = (0..4)
///     .map(|seed| generate(12, 3, Distribution::Uniform, seed).unwrap())
///     .collect();
/// let solutions = solve_all(&instances, |i| {
///     let config = IgConfig::default().with_max_iterations(100).with_seed(i as u64);
///     IteratedGreedy::new(config).unwrap()
/// });
/// assert_eq!(solutions.len(), 4);
/// ```
pub fn solve_all<S, F>(instances: &[Instance], make_solver: F) -> Vec<Solution>
where
    S: Solver,
    F: Fn(usize) -> S + Sync,
{
    instances
        .par_iter()
        .enumerate()
        .map(|(i, instance)| make_solver(i).solve(instance))
        .collect()
}
