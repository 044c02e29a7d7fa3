//! First-improvement move search on the critical machine.

use crate::instance::Instance;
use crate::schedule::Schedule;
use rand::seq::SliceRandom;
use rand::Rng;

/// Tries to lower the makespan by moving one job off the critical machine.
///
/// The critical machine is the first machine at the makespan. Its jobs are
/// tried in a shuffled order and every other machine is tried as the
/// destination in index order. The first move whose resulting load vector
/// has a strictly smaller maximum is applied and the search stops; other
/// machines may already sit at the same maximum, so the whole vector is
/// checked, not just the two machines involved.
///
/// Returns whether a move was applied.
pub fn improve_critical_machine<R: Rng + ?Sized>(
    instance: &Instance,
    schedule: &mut Schedule,
    rng: &mut R,
) -> bool {
    let makespan = schedule.makespan();
    let critical = schedule.critical_machine();
    let mut jobs = schedule.jobs_on(critical);
    jobs.shuffle(rng);

    for job in jobs {
        let loads = schedule.loads();
        let critical_after = loads[critical] - instance.processing_time(critical, job);

        for dest in 0..instance.num_machines() {
            if dest == critical {
                continue;
            }
            let dest_after = loads[dest] + instance.processing_time(dest, job);
            if dest_after >= makespan || critical_after >= makespan {
                continue;
            }

            let new_makespan = loads
                .iter()
                .enumerate()
                .map(|(m, &load)| match m {
                    m if m == critical => critical_after,
                    m if m == dest => dest_after,
                    _ => load,
                })
                .max()
                .unwrap_or(0);

            if new_makespan < makespan {
                schedule.move_job(instance, job, dest);
                return true;
            }
        }
    }

    false
}
