//! Priority scheduling.
//!
//! Non-preemptive. Structurally identical to SJF, ranked by `priority`
//! instead of burst time. Lower numeric value = higher priority.

use super::selection::{run_non_preemptive, HighestPriority};
use super::SchedulingAlgorithm;
use crate::models::{Process, Schedule};

/// Non-preemptive priority scheduling.
///
/// Tie-break: lowest input index among equal priorities.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduling;

impl SchedulingAlgorithm for PriorityScheduling {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        run_non_preemptive(processes, &HighestPriority, self.name())
    }
}
