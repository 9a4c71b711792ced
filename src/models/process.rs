//! Process model.
//!
//! A process is the unit of work handed to a scheduling algorithm: the static
//! inputs (arrival, burst, priority) of one simulated job. Algorithms never
//! mutate it; their working state lives in the scheduler's virtual clock.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique, positive process identifier.
    pub id: u32,
    /// Instant at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower value = higher priority).
    pub priority: i32,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived at instant `time`.
    #[inline]
    pub fn is_eligible_at(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Earliest instant the process could possibly finish.
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival_time + self.burst_time
    }
}
