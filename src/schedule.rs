//! Complete job-to-machine assignments with cached machine loads.

use crate::instance::{Instance, Time};

/// A total assignment of jobs to machines together with the load of every
/// machine.
///
/// `assignment[j]` is the machine job `j` runs on; `loads[m]` is always the
/// sum of `p(m, j)` over the jobs on `m`. Every mutating method updates both
/// sides, so the cached loads can never drift from the assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    assignment: Vec<usize>,
    loads: Vec<Time>,
}

impl Schedule {
    /// Builds a schedule from an assignment, computing the loads.
    ///
    /// Returns `None` if the assignment has the wrong length or names a
    /// machine outside `0..M`.
    pub fn from_assignment(instance: &Instance, assignment: Vec<usize>) -> Option<Self> {
        if assignment.len() != instance.num_jobs() {
            return None;
        }
        let mut loads = vec![0; instance.num_machines()];
        for (job, &machine) in assignment.iter().enumerate() {
            if machine >= loads.len() {
                return None;
            }
            loads[machine] += instance.processing_time(machine, job);
        }
        Some(Self { assignment, loads })
    }

    /// Wraps parts that the caller has kept consistent.
    pub(crate) fn from_parts(assignment: Vec<usize>, loads: Vec<Time>) -> Self {
        Self { assignment, loads }
    }

    /// Machine of every job, indexed by job id.
    #[inline]
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// Load of every machine, indexed by machine id.
    #[inline]
    pub fn loads(&self) -> &[Time] {
        &self.loads
    }

    /// The largest machine load.
    #[inline]
    pub fn makespan(&self) -> Time {
        self.loads.iter().copied().max().unwrap_or(0)
    }

    /// First machine (lowest index) whose load equals the makespan.
    pub fn critical_machine(&self) -> usize {
        let makespan = self.makespan();
        self.loads
            .iter()
            .position(|&l| l == makespan)
            .unwrap_or(0)
    }

    /// Jobs currently on `machine`, in ascending job order.
    pub fn jobs_on(&self, machine: usize) -> Vec<usize> {
        self.assignment
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m == machine)
            .map(|(j, _)| j)
            .collect()
    }

    /// Moves `job` to machine `to`, updating both loads.
    pub fn move_job(&mut self, instance: &Instance, job: usize, to: usize) {
        let from = self.assignment[job];
        self.loads[from] -= instance.processing_time(from, job);
        self.loads[to] += instance.processing_time(to, job);
        self.assignment[job] = to;
    }

    /// Consumes the schedule, returning the assignment.
    pub fn into_assignment(self) -> Vec<usize> {
        self.assignment
    }

    /// Recomputes the loads from scratch and compares them with the cache.
    pub fn is_consistent(&self, instance: &Instance) -> bool {
        Schedule::from_assignment(instance, self.assignment.clone())
            .is_some_and(|fresh| fresh.loads == self.loads)
    }
}
