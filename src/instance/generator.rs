//! Synthetic instance generation.

use super::model::{Instance, Time};
use crate::error::Result;
use crate::random::create_rng;
use rand::Rng;

/// How processing times are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Distribution {
    /// Every entry independently uniform in `[10, 100]`.
    Uniform,

    /// Each job gets a base time in `[20, 100]`; every machine perturbs it
    /// by a uniform offset in `[-15, 15]`, floored at 1. Machines are then
    /// nearly interchangeable, which makes the instances hard to prove optimal.
    JobCorrelated,
}

impl Distribution {
    /// Short name used in instance file names.
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::JobCorrelated => "job_correlated",
        }
    }
}

/// Generates an instance with `num_jobs` jobs and `num_machines` machines.
///
/// The same arguments always produce the same instance.
///
/// # Examples
///
/// ```
/// use u_rcmax::instance::{generate, Distribution};
///
/// let a = generate(12, 3, Distribution::Uniform, 2024).unwrap();
/// let b = generate(12, 3, Distribution::Uniform, 2024).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate(
    num_jobs: usize,
    num_machines: usize,
    distribution: Distribution,
    seed: u64,
) -> Result<Instance> {
    let mut rng = create_rng(seed);

    let rows: Vec<Vec<Time>> = match distribution {
        Distribution::Uniform => (0..num_machines)
            .map(|_| (0..num_jobs).map(|_| rng.random_range(10..=100)).collect())
            .collect(),
        Distribution::JobCorrelated => {
            let base: Vec<i64> = (0..num_jobs).map(|_| rng.random_range(20..=100)).collect();
            (0..num_machines)
                .map(|_| {
                    base.iter()
                        .map(|&b| (b + rng.random_range(-15..=15)).max(1) as Time)
                        .collect()
                })
                .collect()
        }
    };

    Instance::with_dimensions(num_jobs, num_machines, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_range() {
        let inst = generate(40, 5, Distribution::Uniform, 1).unwrap();
        assert_eq!(inst.num_jobs(), 40);
        assert_eq!(inst.num_machines(), 5);
        assert!(inst.rows().flatten().all(|&p| (10..=100).contains(&p)));
    }

    #[test]
    fn test_job_correlated_spread() {
        let inst = generate(40, 4, Distribution::JobCorrelated, 3).unwrap();
        for job in 0..inst.num_jobs() {
            let times: Vec<Time> = (0..4).map(|m| inst.processing_time(m, job)).collect();
            let lo = *times.iter().min().unwrap();
            let hi = *times.iter().max().unwrap();
            assert!(hi - lo <= 30, "job {job} spread too wide: {times:?}");
            assert!(lo >= 5);
        }
    }

    #[test]
    fn test_deterministic_per_seed() {
        let a = generate(10, 2, Distribution::JobCorrelated, 66).unwrap();
        let b = generate(10, 2, Distribution::JobCorrelated, 66).unwrap();
        let c = generate(10, 2, Distribution::JobCorrelated, 67).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(generate(0, 2, Distribution::Uniform, 0).is_err());
        assert!(generate(3, 0, Distribution::Uniform, 0).is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(Distribution::Uniform.name(), "uniform");
        assert_eq!(Distribution::JobCorrelated.name(), "job_correlated");
    }
}
