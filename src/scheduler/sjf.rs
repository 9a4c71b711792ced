//! Shortest Job First scheduling.
//!
//! Non-preemptive: whenever the CPU is free, the eligible process with
//! the smallest burst time runs to completion.
//!
//! # Reference
//! Smith (1956), SPT is optimal for mean flow time on a single machine
//! when all jobs are available at t=0.

use super::selection::{run_non_preemptive, ShortestBurst};
use super::SchedulingAlgorithm;
use crate::models::{Process, Schedule};

/// Shortest Job First (non-preemptive).
///
/// Tie-break: lowest input index among equal bursts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingAlgorithm for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        run_non_preemptive(processes, &ShortestBurst, self.name())
    }
}
