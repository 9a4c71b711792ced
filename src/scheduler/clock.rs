//! Shared virtual clock and per-run working state.
//!
//! Every algorithm drives the same model: a single integer time cursor that
//! only moves forward, per-process remaining work, and an explicit
//! completion marker. A process is eligible at `t` iff it has arrived
//! (`arrival_time <= t`) and is not finished.

use log::trace;

use crate::models::{ExecutionSlice, Process, Schedule, ScheduledProcess};

/// Working state for one algorithm run.
///
/// Borrows the input read-only; everything mutable lives here, so each
/// run starts from fresh state.
#[derive(Debug)]
pub(crate) struct Clock<'a> {
    processes: &'a [Process],
    time: i64,
    remaining: Vec<i64>,
    completion: Vec<Option<i64>>,
    completed: usize,
    slices: Vec<ExecutionSlice>,
}

impl<'a> Clock<'a> {
    /// Starts a run at t=0 with `remaining = burst` for every process.
    pub(crate) fn new(processes: &'a [Process]) -> Self {
        Self {
            processes,
            time: 0,
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            completion: vec![None; processes.len()],
            completed: 0,
            slices: Vec::new(),
        }
    }

    /// Current instant.
    #[inline]
    pub(crate) fn now(&self) -> i64 {
        self.time
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub(crate) fn process(&self, idx: usize) -> &'a Process {
        let processes: &'a [Process] = self.processes;
        &processes[idx]
    }

    #[inline]
    pub(crate) fn remaining(&self, idx: usize) -> i64 {
        self.remaining[idx]
    }

    #[inline]
    pub(crate) fn is_finished(&self, idx: usize) -> bool {
        self.completion[idx].is_some()
    }

    #[inline]
    pub(crate) fn all_finished(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// Arrived and not finished at the current instant.
    #[inline]
    pub(crate) fn is_eligible(&self, idx: usize) -> bool {
        !self.is_finished(idx) && self.processes[idx].is_eligible_at(self.time)
    }

    /// Advances the clock by one unit with nothing running.
    pub(crate) fn idle_tick(&mut self) {
        trace!("t={}: idle", self.time);
        self.time += 1;
    }

    /// Jumps the clock forward to `instant` if it is behind it.
    pub(crate) fn advance_to(&mut self, instant: i64) {
        if self.time < instant {
            trace!("t={}: idle until {}", self.time, instant);
            self.time = instant;
        }
    }

    /// Idles until the next unfinished process arrives.
    ///
    /// Equivalent to repeated idle ticks, since nothing becomes eligible
    /// in between. Falls back to a single tick if no arrival lies ahead.
    pub(crate) fn idle_until_next_arrival(&mut self) {
        let next = (0..self.processes.len())
            .filter(|&idx| !self.is_finished(idx))
            .map(|idx| self.processes[idx].arrival_time)
            .filter(|&arrival| arrival > self.time)
            .min();
        match next {
            Some(arrival) => self.advance_to(arrival),
            None => self.idle_tick(),
        }
    }

    /// Selects the eligible process with the smallest key.
    ///
    /// Comparison is strict, so the lowest index wins ties.
    pub(crate) fn select_min<K>(&self, key: K) -> Option<usize>
    where
        K: Fn(&Process, i64) -> i64,
    {
        let mut best: Option<(usize, i64)> = None;
        for idx in 0..self.processes.len() {
            if !self.is_eligible(idx) {
                continue;
            }
            let k = key(&self.processes[idx], self.remaining[idx]);
            if best.map_or(true, |(_, best_key)| k < best_key) {
                best = Some((idx, k));
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Runs process `idx` for `duration` units.
    ///
    /// Records the slice and marks the process complete once its remaining
    /// work is exhausted. Returns `true` if the process finished.
    ///
    /// A non-positive duration leaves the clock where it is and records no
    /// slice; a process with no work left completes at the current instant.
    pub(crate) fn run(&mut self, idx: usize, duration: i64) -> bool {
        let id = self.processes[idx].id;
        let duration = duration.max(0);
        if duration > 0 {
            let start = self.time;
            self.time += duration;
            self.remaining[idx] -= duration;
            self.record_slice(id, start, self.time);
        }

        if self.remaining[idx] <= 0 && self.completion[idx].is_none() {
            self.remaining[idx] = 0;
            self.completion[idx] = Some(self.time);
            self.completed += 1;
            trace!("t={}: P{} complete", self.time, id);
            true
        } else {
            false
        }
    }

    /// Runs process `idx` until its remaining work is exhausted.
    pub(crate) fn run_to_completion(&mut self, idx: usize) {
        let remaining = self.remaining[idx];
        self.run(idx, remaining);
    }

    fn record_slice(&mut self, process_id: u32, start: i64, end: i64) {
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(ExecutionSlice::new(process_id, start, end));
    }

    /// Finishes the run, producing a schedule in input order.
    pub(crate) fn into_schedule(self, algorithm: &str) -> Schedule {
        let processes = self
            .processes
            .iter()
            .zip(self.completion)
            .zip(self.remaining)
            .map(|((&process, completion_time), remaining_time)| ScheduledProcess {
                process,
                completion_time,
                remaining_time,
            })
            .collect();

        Schedule {
            algorithm: algorithm.to_string(),
            processes,
            slices: self.slices,
        }
    }
}
