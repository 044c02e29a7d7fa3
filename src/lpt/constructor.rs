//! LPT ordering and greedy placement.

use crate::clock::CpuBudget;
use crate::instance::{Instance, Time};
use crate::schedule::Schedule;
use crate::solver::{Solution, SolveStatus, Solver};
use tracing::debug;

/// Jobs sorted heaviest first.
///
/// The key is `(average time, job id)` in descending order, so equal
/// averages put the higher job id first. The order depends only on the
/// matrix, never on how the input was laid out.
///
/// Averages are compared through the per-job sums: every job is averaged
/// over the same M machines, so the order is the same and exact.
pub fn job_order(instance: &Instance) -> Vec<usize> {
    let totals: Vec<Time> = (0..instance.num_jobs())
        .map(|j| instance.total_time(j))
        .collect();
    let mut order: Vec<usize> = (0..instance.num_jobs()).collect();
    order.sort_by(|&a, &b| (totals[b], b).cmp(&(totals[a], a)));
    order
}

/// Builds the LPT schedule.
///
/// Each job, in [`job_order`], goes to the machine minimizing its load after
/// the placement; the lowest machine index wins ties.
pub fn construct(instance: &Instance) -> Schedule {
    let mut loads: Vec<Time> = vec![0; instance.num_machines()];
    let mut assignment = vec![0; instance.num_jobs()];

    for job in job_order(instance) {
        let mut best_machine = 0;
        let mut best_load = Time::MAX;
        for (machine, &load) in loads.iter().enumerate() {
            let after = load + instance.processing_time(machine, job);
            if after < best_load {
                best_load = after;
                best_machine = machine;
            }
        }
        assignment[job] = best_machine;
        loads[best_machine] = best_load;
    }

    Schedule::from_parts(assignment, loads)
}

/// The LPT constructor as a standalone [`Solver`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Lpt;

impl Solver for Lpt {
    fn name(&self) -> &str {
        "LPT"
    }

    fn solve(&mut self, instance: &Instance) -> Solution {
        let clock = CpuBudget::unlimited();
        let schedule = construct(instance);
        let makespan = schedule.makespan();
        debug!(
            jobs = instance.num_jobs(),
            machines = instance.num_machines(),
            makespan,
            "lpt constructed"
        );

        Solution {
            makespan,
            assignment: schedule.into_assignment(),
            explored: 1,
            status: SolveStatus::Heuristic,
            elapsed: clock.elapsed(),
            history: vec![makespan],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Instance {
        Instance::new(vec![vec![10, 20, 30], vec![15, 15, 15]]).unwrap()
    }

    #[test]
    fn test_job_order_by_average() {
        // averages 12.5, 17.5, 22.5
        assert_eq!(job_order(&sample()), vec![2, 1, 0]);
    }

    #[test]
    fn test_job_order_ties_by_descending_id() {
        let inst = Instance::new(vec![vec![5, 7, 5, 1], vec![5, 3, 5, 9]]).unwrap();
        // sums 10, 10, 10, 10 -> ids high to low
        assert_eq!(job_order(&inst), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_construct_sample() {
        let inst = sample();
        let schedule = construct(&inst);
        // job 2 -> m1 (15), job 1 -> m0 (20), job 0 -> m0 (tie 30/30, lowest index)
        assert_eq!(schedule.assignment(), &[0, 0, 1]);
        assert_eq!(schedule.loads(), &[30, 15]);
        assert_eq!(schedule.makespan(), 30);
        assert!(schedule.is_consistent(&inst));
    }

    #[test]
    fn test_machine_ties_go_to_lowest_index() {
        let inst = Instance::new(vec![vec![5, 5], vec![5, 5]]).unwrap();
        // order [1, 0]: job 1 -> m0, job 0 -> m1
        assert_eq!(construct(&inst).assignment(), &[1, 0]);
    }

    #[test]
    fn test_deterministic() {
        let inst = crate::instance::generate(25, 4, crate::instance::Distribution::Uniform, 9)
            .unwrap();
        assert_eq!(construct(&inst), construct(&inst));
    }

    #[test]
    fn test_solver_result() {
        let inst = sample();
        let sol = Lpt.solve(&inst);
        assert_eq!(sol.makespan, 30);
        assert_eq!(sol.status, SolveStatus::Heuristic);
        assert_eq!(sol.history, vec![30]);
        assert!(sol.is_feasible(&inst));
        assert_eq!(Lpt.name(), "LPT");
    }
}
