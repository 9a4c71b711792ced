//! Round Robin scheduling.
//!
//! Preemptive time slicing over a FIFO ready queue with a fixed quantum.
//!
//! # Admission
//!
//! | Policy | Initial queue | Empty queue with work left |
//! |--------|---------------|----------------------------|
//! | `Eager` (default) | every process, input order | cannot happen |
//! | `OnArrival` | processes arrived at t=0 | idle to next arrival, then admit |
//!
//! Under `Eager`, arrival time is only checked when replenishing the queue
//! after a slice, so a process that has not yet arrived can be dispatched.
//! Its completion may then precede `arrival + burst`.

use std::collections::VecDeque;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::SchedulingAlgorithm;
use crate::models::{Process, Schedule};

/// How processes enter the ready queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Admission {
    /// Every process is queued up front, regardless of arrival.
    #[default]
    Eager,
    /// A process is queued only once it has arrived.
    OnArrival,
}

/// Round Robin with a fixed time quantum.
///
/// After a process uses a full quantum, newly eligible processes are
/// admitted (in index order) before it is re-queued at the back.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{RoundRobin, SchedulingAlgorithm};
///
/// let procs = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let schedule = RoundRobin::new(2).schedule(&procs);
/// assert_eq!(schedule.completion_times(), vec![Some(8), Some(7)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
    admission: Admission,
}

impl RoundRobin {
    /// Creates a Round Robin scheduler with eager admission.
    ///
    /// Quanta below 1 are raised to 1; reject them up front with
    /// [`crate::validation::validate_input`].
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum: quantum.max(1),
            admission: Admission::Eager,
        }
    }

    /// Sets the admission policy.
    pub fn with_admission(mut self, admission: Admission) -> Self {
        self.admission = admission;
        self
    }

    /// Time slice per turn.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Admission policy.
    pub fn admission(&self) -> Admission {
        self.admission
    }

    /// Queues every unfinished, arrived process not already queued.
    fn admit(clock: &Clock<'_>, queue: &mut VecDeque<usize>, running: Option<usize>) {
        for idx in 0..clock.len() {
            if Some(idx) != running && clock.is_eligible(idx) && !queue.contains(&idx) {
                debug!("RR: t={} admit P{}", clock.now(), clock.process(idx).id);
                queue.push_back(idx);
            }
        }
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(2)
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut clock = Clock::new(processes);
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());

        match self.admission {
            Admission::Eager => queue.extend(0..processes.len()),
            Admission::OnArrival => Self::admit(&clock, &mut queue, None),
        }

        while !clock.all_finished() {
            let Some(idx) = queue.pop_front() else {
                clock.idle_until_next_arrival();
                Self::admit(&clock, &mut queue, None);
                continue;
            };

            let process = clock.process(idx);
            if !process.is_eligible_at(clock.now()) {
                warn!(
                    "RR: t={} P{} dispatched before its arrival at {}",
                    clock.now(),
                    process.id,
                    process.arrival_time
                );
            }

            let remaining = clock.remaining(idx);
            if remaining > self.quantum {
                debug!("RR: t={} P{} runs {} (preempted)", clock.now(), process.id, self.quantum);
                clock.run(idx, self.quantum);
                Self::admit(&clock, &mut queue, Some(idx));
                queue.push_back(idx);
            } else {
                debug!("RR: t={} P{} runs {} (finishes)", clock.now(), process.id, remaining);
                clock.run_to_completion(idx);
                if self.admission == Admission::OnArrival {
                    Self::admit(&clock, &mut queue, None);
                }
            }
        }

        clock.into_schedule(self.name())
    }
}
