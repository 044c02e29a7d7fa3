//! The immutable problem instance.

use crate::error::{Result, ScheduleError};

/// Processing time unit. All times are positive integers.
pub type Time = u64;

/// An R||Cmax instance: `num_machines` x `num_jobs` processing times.
///
/// Immutable once built. Every solver borrows it read-only, so a single
/// instance can be shared by any number of concurrent solver runs.
///
/// # Examples
///
/// ```
/// use u_rcmax::Instance;
///
/// let instance = Instance::new(vec![vec![10, 20, 30], vec![15, 15, 15]]).unwrap();
/// assert_eq!(instance.num_jobs(), 3);
/// assert_eq!(instance.num_machines(), 2);
/// assert_eq!(instance.processing_time(1, 2), 15);
/// assert_eq!(instance.lower_bound(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "InstanceData", into = "InstanceData")
)]
pub struct Instance {
    num_jobs: usize,
    num_machines: usize,
    /// Row-major: `times[machine * num_jobs + job]`.
    times: Vec<Time>,
}

impl Instance {
    /// Builds an instance from machine rows, inferring the dimensions.
    ///
    /// Every row must have the same length and every entry must be at least 1.
    pub fn new(rows: Vec<Vec<Time>>) -> Result<Self> {
        let num_jobs = rows.first().map_or(0, Vec::len);
        Self::with_dimensions(num_jobs, rows.len(), rows)
    }

    /// Builds an instance, checking the rows against the declared dimensions.
    ///
    /// Rejects a matrix whose entries sum past [`Time::MAX`], so no machine
    /// load can overflow.
    pub fn with_dimensions(
        num_jobs: usize,
        num_machines: usize,
        rows: Vec<Vec<Time>>,
    ) -> Result<Self> {
        if num_jobs == 0 {
            return Err(ScheduleError::InvalidInstance(
                "instance must have at least one job".into(),
            ));
        }
        if num_machines == 0 {
            return Err(ScheduleError::InvalidInstance(
                "instance must have at least one machine".into(),
            ));
        }
        if rows.len() != num_machines {
            return Err(ScheduleError::InvalidInstance(format!(
                "expected {num_machines} machine rows, found {}",
                rows.len()
            )));
        }

        for (machine, row) in rows.iter().enumerate() {
            if row.len() != num_jobs {
                return Err(ScheduleError::InvalidInstance(format!(
                    "machine {machine}: expected {num_jobs} jobs, found {}",
                    row.len()
                )));
            }
            if let Some(job) = row.iter().position(|&p| p == 0) {
                return Err(ScheduleError::InvalidInstance(format!(
                    "machine {machine}, job {job}: processing time must be positive"
                )));
            }
        }

        // Every load and bound is at most the matrix total.
        rows.iter()
            .flatten()
            .try_fold(0 as Time, |acc, &p| acc.checked_add(p))
            .ok_or_else(|| {
                ScheduleError::InvalidInstance("sum of processing times overflows".into())
            })?;

        let cells = num_jobs.checked_mul(num_machines).ok_or_else(|| {
            ScheduleError::InvalidInstance(format!(
                "{num_jobs} jobs x {num_machines} machines is too large"
            ))
        })?;
        let mut times = Vec::with_capacity(cells);
        for row in rows {
            times.extend(row);
        }

        Ok(Self {
            num_jobs,
            num_machines,
            times,
        })
    }

    /// Number of jobs (N).
    #[inline]
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Number of machines (M).
    #[inline]
    pub fn num_machines(&self) -> usize {
        self.num_machines
    }

    /// Time job `job` takes on machine `machine`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn processing_time(&self, machine: usize, job: usize) -> Time {
        debug_assert!(job < self.num_jobs);
        self.times[machine * self.num_jobs + job]
    }

    /// Processing times of all jobs on one machine.
    #[inline]
    pub fn machine_row(&self, machine: usize) -> &[Time] {
        let start = machine * self.num_jobs;
        &self.times[start..start + self.num_jobs]
    }

    /// Iterates over the machine rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[Time]> {
        self.times.chunks_exact(self.num_jobs)
    }

    /// Best-case time of `job` over all machines.
    pub fn min_time(&self, job: usize) -> Time {
        (0..self.num_machines)
            .map(|m| self.processing_time(m, job))
            .min()
            .unwrap_or(0)
    }

    /// Sum of the job's times over all machines (M times its average).
    pub fn total_time(&self, job: usize) -> Time {
        (0..self.num_machines)
            .map(|m| self.processing_time(m, job))
            .sum()
    }

    /// Sum of every entry of the matrix.
    pub fn total_processing_time(&self) -> Time {
        self.times.iter().sum()
    }

    /// Lower bound on the optimal makespan (Fleszar & Hindi).
    ///
    /// `max(LB1, LB2)` where, with `min_j` the best-case time of job j,
    /// `LB1 = max_j min_j` and `LB2 = ceil(sum_j min_j / M)`.
    /// Never exceeds the optimum.
    pub fn lower_bound(&self) -> Time {
        let min_times: Vec<Time> = (0..self.num_jobs).map(|j| self.min_time(j)).collect();
        let lb1 = min_times.iter().copied().max().unwrap_or(0);
        let lb2 = min_times
            .iter()
            .sum::<Time>()
            .div_ceil(self.num_machines as Time);
        lb1.max(lb2)
    }
}

/// Serialized form of [`Instance`]; validated on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct InstanceData {
    num_jobs: usize,
    num_machines: usize,
    processing_times: Vec<Vec<Time>>,
}

#[cfg(feature = "serde")]
impl TryFrom<InstanceData> for Instance {
    type Error = ScheduleError;

    fn try_from(data: InstanceData) -> Result<Self> {
        Instance::with_dimensions(data.num_jobs, data.num_machines, data.processing_times)
    }
}

#[cfg(feature = "serde")]
impl From<Instance> for InstanceData {
    fn from(instance: Instance) -> Self {
        InstanceData {
            num_jobs: instance.num_jobs,
            num_machines: instance.num_machines,
            processing_times: instance.rows().map(<[Time]>::to_vec).collect(),
        }
    }
}
