//! Schedule (solution) model.
//!
//! A schedule is the output of one algorithm run: every input process with
//! its completion time, plus the CPU timeline of execution slices that
//! produced it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::Process;

/// The result of running one scheduling algorithm over a process set.
///
/// `processes` preserves input order. `slices` is in time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Name of the algorithm that produced this schedule (e.g., "SJF").
    pub algorithm: String,
    /// Per-process outcomes, in input order.
    pub processes: Vec<ScheduledProcess>,
    /// Contiguous CPU bursts, in time order.
    pub slices: Vec<ExecutionSlice>,
}

/// One process and its outcome under a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledProcess {
    /// The static input descriptor.
    pub process: Process,
    /// Instant the process finished. `None` = never finished.
    pub completion_time: Option<i64>,
    /// CPU time still owed when the run ended.
    pub remaining_time: i64,
}

/// A contiguous interval during which one process held the CPU.
///
/// Covers `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Running process.
    pub process_id: u32,
    /// Start instant (inclusive).
    pub start: i64,
    /// End instant (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: u32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Slice length in time units.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl ScheduledProcess {
    /// Whether the process ran to completion.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }
}

impl Schedule {
    /// Creates an empty schedule for the named algorithm.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            ..Self::default()
        }
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the schedule has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Whether every process has a completion time.
    pub fn is_complete(&self) -> bool {
        self.processes.iter().all(ScheduledProcess::is_complete)
    }

    /// Finds the outcome for a process.
    pub fn get(&self, process_id: u32) -> Option<&ScheduledProcess> {
        self.processes.iter().find(|p| p.process.id == process_id)
    }

    /// Completion time of a process, if it finished.
    pub fn completion_time(&self, process_id: u32) -> Option<i64> {
        self.get(process_id).and_then(|p| p.completion_time)
    }

    /// Completion times in input order (`None` for unfinished processes).
    pub fn completion_times(&self) -> Vec<Option<i64>> {
        self.processes.iter().map(|p| p.completion_time).collect()
    }

    /// Process IDs ordered by completion time (input order breaks ties).
    pub fn completion_order(&self) -> Vec<u32> {
        let mut finished: Vec<&ScheduledProcess> =
            self.processes.iter().filter(|p| p.is_complete()).collect();
        finished.sort_by_key(|p| p.completion_time);
        finished.into_iter().map(|p| p.process.id).collect()
    }

    /// Makespan: latest completion time (0 if nothing finished).
    pub fn makespan(&self) -> i64 {
        self.processes
            .iter()
            .filter_map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Returns all slices for a given process.
    pub fn slices_for(&self, process_id: u32) -> Vec<&ExecutionSlice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total CPU time actually executed by a process.
    pub fn executed_time(&self, process_id: u32) -> i64 {
        self.slices_for(process_id).iter().map(|s| s.duration()).sum()
    }

    /// Total CPU time executed across all processes.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(ExecutionSlice::duration).sum()
    }

    /// Time the CPU sat idle between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        (self.makespan() - self.busy_time()).max(0)
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }
}
