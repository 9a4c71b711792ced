//! First-Come-First-Served scheduling.
//!
//! Runs processes strictly in input order, treating that order as
//! submission order. Arrival times only delay a process; they never
//! reorder it. Non-preemptive.

use log::debug;

use super::clock::Clock;
use super::SchedulingAlgorithm;
use crate::models::{Process, Schedule};

/// First-Come-First-Served.
///
/// For each process in input order: jump the clock to its arrival if the
/// clock is behind, then run it to completion.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{Fcfs, SchedulingAlgorithm};
///
/// let procs = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let schedule = Fcfs.schedule(&procs);
/// assert_eq!(schedule.completion_times(), vec![Some(5), Some(8)]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingAlgorithm for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut clock = Clock::new(processes);

        for (idx, process) in processes.iter().enumerate() {
            clock.advance_to(process.arrival_time);
            debug!("FCFS: t={} dispatch P{}", clock.now(), process.id);
            clock.run_to_completion(idx);
        }

        clock.into_schedule(self.name())
    }
}
