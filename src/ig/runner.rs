//! Iterated greedy main loop.

use super::config::IgConfig;
use super::local_search::improve_critical_machine;
use crate::clock::CpuBudget;
use crate::error::Result;
use crate::instance::{Instance, Time};
use crate::lpt;
use crate::random::{create_rng, Stream};
use crate::schedule::Schedule;
use crate::solver::{Solution, SolveStatus, Solver};
use rand::seq::index;
use rand::Rng;
use tracing::{debug, trace};

/// Temperature used when the formula evaluates to zero.
pub const TEMPERATURE_FLOOR: f64 = 0.1;

/// Constant acceptance temperature for an instance.
///
/// `T = T_lambda * total / (10 * N * M)` where `total` is the sum of the
/// whole matrix; [`TEMPERATURE_FLOOR`] if that is zero.
pub fn temperature(instance: &Instance, lambda: f64) -> f64 {
    let cells = (10 * instance.num_jobs() * instance.num_machines()) as f64;
    let t = lambda * (instance.total_processing_time() as f64 / cells);
    if t == 0.0 {
        TEMPERATURE_FLOOR
    } else {
        t
    }
}

/// One accepted candidate of a recorded run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedSolution {
    /// 1-based iteration that produced the candidate.
    pub iteration: u64,
    pub makespan: Time,
    pub assignment: Vec<usize>,
}

/// Result of an iterated greedy run.
#[derive(Debug, Clone)]
pub struct IgResult {
    /// Best schedule found, with `explored` = iterations and status
    /// [`SolveStatus::Heuristic`].
    pub solution: Solution,

    /// Iterations whose candidate was accepted (including improvements).
    pub accepted: u64,

    /// Iterations whose candidate improved on the current solution.
    pub improving: u64,

    /// Acceptance temperature used for the run.
    pub temperature: f64,

    /// Every accepted candidate in order, when
    /// [`IgConfig::record_trajectory`] is set.
    pub trajectory: Vec<AcceptedSolution>,
}

/// Iterated greedy solver owning its random stream.
///
/// The stream is either seeded from [`IgConfig::seed`] by
/// [`new`](IteratedGreedy::new) or injected by the caller through
/// [`with_rng`](IteratedGreedy::with_rng). Each run advances the stream, so
/// to repeat a run exactly, build a new solver with the same seed.
///
/// # Examples
///
/// ```
/// use u_rcmax::ig::{IgConfig, IteratedGreedy};
/// use u_rcmax::{Instance, SolveStatus};
///
/// let instance = Instance::new(vec![vec![3, 3, 2, 2, 2], vec![3, 3, 2, 2, 2]]).unwrap();
/// let config = IgConfig::default().with_max_iterations(500).with_seed(2024);
///
/// let first = IteratedGreedy::new(config.clone()).unwrap().run(&instance);
/// let second = IteratedGreedy::new(config).unwrap().run(&instance);
/// assert_eq!(first.solution.assignment, second.solution.assignment);
/// assert_eq!(first.solution.status, SolveStatus::Heuristic);
/// ```
#[derive(Debug, Clone)]
pub struct IteratedGreedy<R = Stream> {
    config: IgConfig,
    rng: R,
    /// Seed the stream was built from; `None` for an injected stream.
    seed: Option<u64>,
}

impl IteratedGreedy<Stream> {
    /// Creates a solver whose stream is seeded from `config.seed`.
    pub fn new(config: IgConfig) -> Result<Self> {
        let seed = config.seed;
        let mut solver = Self::with_rng(config, create_rng(seed))?;
        solver.seed = Some(seed);
        Ok(solver)
    }
}

impl<R: Rng> IteratedGreedy<R> {
    /// Creates a solver that takes ownership of `rng`. `config.seed` is
    /// ignored.
    pub fn with_rng(config: IgConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            seed: None,
        })
    }

    pub fn config(&self) -> &IgConfig {
        &self.config
    }

    /// Seed of the owned stream, unknown when it was injected.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Runs until the CPU budget or the iteration cap is reached.
    pub fn run(&mut self, instance: &Instance) -> IgResult {
        let budget = CpuBudget::start(self.config.time_limit);
        let d = self.config.destruction_size.min(instance.num_jobs());
        let temperature = temperature(instance, self.config.temperature_lambda);

        let mut current = lpt::construct(instance);
        let mut best = current.clone();
        let mut history = vec![best.makespan()];
        let mut trajectory = Vec::new();

        debug!(
            jobs = instance.num_jobs(),
            machines = instance.num_machines(),
            d,
            temperature,
            seed = ?self.seed,
            warm_start = best.makespan(),
            "ig started"
        );

        let mut iterations = 0u64;
        let mut accepted = 0u64;
        let mut improving = 0u64;

        while !budget.exhausted() {
            if self
                .config
                .max_iterations
                .is_some_and(|max| iterations >= max)
            {
                break;
            }
            iterations += 1;

            let mut candidate = self.destroy_and_rebuild(instance, &current, d);
            improve_critical_machine(instance, &mut candidate, &mut self.rng);

            let delta = candidate.makespan() as f64 - current.makespan() as f64;
            let accept = if delta < 0.0 {
                improving += 1;
                true
            } else {
                self.rng.random::<f64>() < (-delta / temperature).exp()
            };

            if accept {
                accepted += 1;
                current = candidate;
                if self.config.record_trajectory {
                    trajectory.push(AcceptedSolution {
                        iteration: iterations,
                        makespan: current.makespan(),
                        assignment: current.assignment().to_vec(),
                    });
                }
                if current.makespan() < best.makespan() {
                    trace!(makespan = current.makespan(), iterations, "ig improved best");
                    best = current.clone();
                    history.push(best.makespan());
                }
            }
        }

        let elapsed = budget.elapsed();
        debug!(
            makespan = best.makespan(),
            iterations,
            accepted,
            improving,
            ?elapsed,
            "ig finished"
        );

        IgResult {
            solution: Solution {
                makespan: best.makespan(),
                assignment: best.into_assignment(),
                explored: iterations,
                status: SolveStatus::Heuristic,
                elapsed,
                history,
            },
            accepted,
            improving,
            temperature,
            trajectory,
        }
    }

    /// Removes `d` distinct random jobs and reinserts each, in draw order,
    /// on the machine minimizing `max(current max load, load after insertion)`
    /// (lowest index on ties).
    fn destroy_and_rebuild(&mut self, instance: &Instance, current: &Schedule, d: usize) -> Schedule {
        let removed = index::sample(&mut self.rng, instance.num_jobs(), d).into_vec();

        let mut assignment = current.assignment().to_vec();
        let mut loads = current.loads().to_vec();
        for &job in &removed {
            let machine = assignment[job];
            loads[machine] -= instance.processing_time(machine, job);
        }

        for &job in &removed {
            let cmax = loads.iter().copied().max().unwrap_or(0);
            let mut best_machine = 0;
            let mut best_cost = Time::MAX;
            for (machine, &load) in loads.iter().enumerate() {
                let cost = cmax.max(load + instance.processing_time(machine, job));
                if cost < best_cost {
                    best_cost = cost;
                    best_machine = machine;
                }
            }
            assignment[job] = best_machine;
            loads[best_machine] += instance.processing_time(best_machine, job);
        }

        Schedule::from_parts(assignment, loads)
    }
}

impl<R: Rng> Solver for IteratedGreedy<R> {
    fn name(&self) -> &str {
        "IG"
    }

    fn solve(&mut self, instance: &Instance) -> Solution {
        self.run(instance).solution
    }
}
