//! Iterated Greedy (IG).
//!
//! A destroy-and-rebuild metaheuristic started from the LPT schedule. Each
//! iteration removes `d` random jobs, reinserts them greedily, applies a
//! first-improvement local search on the critical machine, and accepts the
//! result with a simulated-annealing style criterion at a constant
//! temperature.
//!
//! All randomness comes from one generator owned by the solver and seeded
//! explicitly, so the same seed, instance and parameters always produce the
//! same trajectory.
//!
//! # References
//!
//! - Ruiz & Stützle (2007), "A simple and effective iterated greedy
//!   algorithm for the permutation flowshop scheduling problem"
//! - Fanjul-Peyro & Ruiz (2010), "Iterated greedy local search methods for
//!   unrelated parallel machine scheduling"

mod config;
mod local_search;
mod runner;

pub use config::IgConfig;
pub use local_search::improve_critical_machine;
pub use runner::{temperature, AcceptedSolution, IgResult, IteratedGreedy, TEMPERATURE_FLOOR};
