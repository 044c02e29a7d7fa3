//! Recursive enumeration.

use crate::clock::CpuBudget;
use crate::instance::{Instance, Time};
use crate::solver::{Solution, SolveStatus, Solver};
use crate::state::SearchState;
use tracing::{debug, trace};

/// Exhaustive solver. Always reports [`SolveStatus::Optimal`].
#[derive(Debug, Clone, Default)]
pub struct BruteForce {
    nodes: u64,
    best_makespan: Time,
    best_assignment: Vec<usize>,
    history: Vec<Time>,
}

impl BruteForce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs are placed in index order; every node of the tree, including
    /// the root and the leaves, is counted.
    fn search(&mut self, instance: &Instance, job: usize, state: &mut SearchState) {
        self.nodes += 1;

        if job == instance.num_jobs() {
            let makespan = state.max_load();
            if makespan < self.best_makespan {
                if let Some(assignment) = state.complete_assignment() {
                    trace!(makespan, nodes = self.nodes, "brute force improved");
                    self.best_makespan = makespan;
                    self.best_assignment = assignment;
                    self.history.push(makespan);
                }
            }
            return;
        }

        for machine in 0..instance.num_machines() {
            let p = instance.processing_time(machine, job);
            state.assign(job, machine, p);
            self.search(instance, job + 1, state);
            state.unassign(job, machine, p);
        }
    }
}

impl Solver for BruteForce {
    fn name(&self) -> &str {
        "BF"
    }

    fn solve(&mut self, instance: &Instance) -> Solution {
        let clock = CpuBudget::unlimited();
        self.nodes = 0;
        self.best_makespan = Time::MAX;
        self.best_assignment.clear();
        self.history.clear();

        let mut state = SearchState::new(instance);
        self.search(instance, 0, &mut state);

        debug!(
            jobs = instance.num_jobs(),
            machines = instance.num_machines(),
            makespan = self.best_makespan,
            nodes = self.nodes,
            "brute force finished"
        );

        Solution {
            makespan: self.best_makespan,
            assignment: std::mem::take(&mut self.best_assignment),
            explored: self.nodes,
            status: SolveStatus::Optimal,
            elapsed: clock.elapsed(),
            history: std::mem::take(&mut self.history),
        }
    }
}
