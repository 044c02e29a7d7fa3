//! Depth-first branch-and-bound search.

use super::config::BnbConfig;
use crate::clock::CpuBudget;
use crate::error::Result;
use crate::instance::{Instance, Time};
use crate::lpt;
use crate::solver::{Solution, SolveStatus, Solver};
use crate::state::SearchState;
use std::ops::ControlFlow;
use tracing::{debug, trace};

/// Exact solver with a CPU-time budget.
///
/// # Examples
///
/// ```
/// use u_rcmax::bnb::{BnbConfig, BranchAndBound};
/// use u_rcmax::{Instance, SolveStatus, Solver};
///
/// let instance = Instance::new(vec![vec![10, 20, 30], vec![15, 15, 15]]).unwrap();
/// let mut solver = BranchAndBound::new(BnbConfig::default()).unwrap();
/// let solution = solver.solve(&instance);
/// assert_eq!(solution.makespan, 30);
/// assert_eq!(solution.status, SolveStatus::Optimal);
/// ```
#[derive(Debug, Clone)]
pub struct BranchAndBound {
    config: BnbConfig,
    nodes: u64,
    best_makespan: Time,
    best_assignment: Vec<usize>,
    history: Vec<Time>,
}

impl BranchAndBound {
    /// Creates a solver, rejecting invalid configurations.
    pub fn new(config: BnbConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            nodes: 0,
            best_makespan: Time::MAX,
            best_assignment: Vec::new(),
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &BnbConfig {
        &self.config
    }

    /// Explores the subtree below `depth` placed jobs.
    ///
    /// Returns `Break` once the budget is exhausted; every frame undoes its
    /// own placement before passing the break up.
    fn search(
        &mut self,
        instance: &Instance,
        order: &[usize],
        depth: usize,
        state: &mut SearchState,
        budget: &CpuBudget,
    ) -> ControlFlow<()> {
        if state.max_load() >= self.best_makespan {
            return ControlFlow::Continue(());
        }

        if depth == order.len() {
            let makespan = state.max_load();
            if makespan < self.best_makespan {
                if let Some(assignment) = state.complete_assignment() {
                    trace!(makespan, nodes = self.nodes, "bnb incumbent improved");
                    self.best_makespan = makespan;
                    self.best_assignment = assignment;
                    self.history.push(makespan);
                }
            }
            return ControlFlow::Continue(());
        }

        self.nodes += 1;
        if self.nodes % self.config.check_interval == 0 && budget.exhausted() {
            return ControlFlow::Break(());
        }

        let job = order[depth];
        for machine in 0..instance.num_machines() {
            let p = instance.processing_time(machine, job);
            if state.load(machine) + p >= self.best_makespan {
                continue;
            }

            state.assign(job, machine, p);
            let flow = self.search(instance, order, depth + 1, state, budget);
            state.unassign(job, machine, p);
            flow?;
        }

        ControlFlow::Continue(())
    }
}

impl Solver for BranchAndBound {
    fn name(&self) -> &str {
        "BnB"
    }

    fn solve(&mut self, instance: &Instance) -> Solution {
        let budget = CpuBudget::start(self.config.time_limit);

        let warm = lpt::construct(instance);
        self.nodes = 0;
        self.best_makespan = warm.makespan();
        self.best_assignment = warm.into_assignment();
        self.history = vec![self.best_makespan];

        debug!(
            jobs = instance.num_jobs(),
            machines = instance.num_machines(),
            warm_start = self.best_makespan,
            time_limit = ?self.config.time_limit,
            "bnb started"
        );

        let order = lpt::job_order(instance);
        let mut state = SearchState::new(instance);
        let status = match self.search(instance, &order, 0, &mut state, &budget) {
            ControlFlow::Continue(()) => SolveStatus::Optimal,
            ControlFlow::Break(()) => {
                debug!(nodes = self.nodes, "bnb time budget exhausted");
                SolveStatus::Timeout
            }
        };
        debug_assert_eq!(state.assigned(), 0);

        let elapsed = budget.elapsed();
        debug!(
            makespan = self.best_makespan,
            nodes = self.nodes,
            %status,
            ?elapsed,
            "bnb finished"
        );

        Solution {
            makespan: self.best_makespan,
            assignment: std::mem::take(&mut self.best_assignment),
            explored: self.nodes,
            status,
            elapsed,
            history: std::mem::take(&mut self.history),
        }
    }
}
