//! Mutable search state for the recursive solvers.

use crate::instance::{Instance, Time};

/// A partial assignment plus machine loads, mutated in place.
///
/// One buffer serves a whole depth-first search: each descent calls
/// [`assign`](Self::assign) and the matching backtrack calls
/// [`unassign`](Self::unassign), so sibling branches never copy state.
#[derive(Debug, Clone)]
pub struct SearchState {
    assignment: Vec<Option<usize>>,
    loads: Vec<Time>,
    assigned: usize,
}

impl SearchState {
    /// An empty state for the given instance: nothing placed, all loads zero.
    pub fn new(instance: &Instance) -> Self {
        Self {
            assignment: vec![None; instance.num_jobs()],
            loads: vec![0; instance.num_machines()],
            assigned: 0,
        }
    }

    /// Places `job` on `machine`, adding `p` to that machine's load.
    #[inline]
    pub fn assign(&mut self, job: usize, machine: usize, p: Time) {
        debug_assert!(self.assignment[job].is_none());
        self.assignment[job] = Some(machine);
        self.loads[machine] += p;
        self.assigned += 1;
    }

    /// Reverts a previous [`assign`](Self::assign) with the same arguments.
    #[inline]
    pub fn unassign(&mut self, job: usize, machine: usize, p: Time) {
        debug_assert_eq!(self.assignment[job], Some(machine));
        self.assignment[job] = None;
        self.loads[machine] -= p;
        self.assigned -= 1;
    }

    #[inline]
    pub fn load(&self, machine: usize) -> Time {
        self.loads[machine]
    }

    /// The largest current machine load.
    #[inline]
    pub fn max_load(&self) -> Time {
        self.loads.iter().copied().max().unwrap_or(0)
    }

    /// Number of jobs currently placed.
    #[inline]
    pub fn assigned(&self) -> usize {
        self.assigned
    }

    /// The assignment, if every job has been placed.
    pub fn complete_assignment(&self) -> Option<Vec<usize>> {
        self.assignment.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_and_undo() {
        let inst = Instance::new(vec![vec![3, 4], vec![5, 6]]).unwrap();
        let mut state = SearchState::new(&inst);
        assert_eq!(state.max_load(), 0);
        assert!(state.complete_assignment().is_none());

        state.assign(0, 1, 5);
        state.assign(1, 1, 6);
        assert_eq!(state.load(1), 11);
        assert_eq!(state.assigned(), 2);
        assert_eq!(state.complete_assignment(), Some(vec![1, 1]));

        state.unassign(1, 1, 6);
        state.assign(1, 0, 4);
        assert_eq!(state.max_load(), 5);
        assert_eq!(state.complete_assignment(), Some(vec![1, 0]));

        state.unassign(1, 0, 4);
        state.unassign(0, 1, 5);
        assert_eq!(state.assigned(), 0);
        assert_eq!(state.max_load(), 0);
    }
}
