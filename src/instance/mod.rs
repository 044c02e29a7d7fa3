//! Problem data.
//!
//! An [`Instance`] is the `M x N` matrix of processing times of an R||Cmax
//! problem: job `j` takes `p(i, j)` time units when it runs on machine `i`.
//! Instances are validated on construction and never change afterwards.
//!
//! Besides the constructors, this module reads and writes the plain-text
//! instance format and generates synthetic benchmark instances.

mod format;
mod generator;
mod model;

pub use generator::{generate, Distribution};
pub use model::{Instance, Time};
