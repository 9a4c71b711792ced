//! Random process-set generation.
//!
//! Produces reproducible workloads for algorithm comparison: pass a
//! seeded RNG and the same config to get the same process set.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::workload::{generate, WorkloadConfig};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let procs = generate(&WorkloadConfig::default(), &mut rng);
//! assert_eq!(procs.len(), 8);
//! assert_eq!(procs[0].id, 1);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Inclusive burst range (lower bound clamped to 1).
    pub burst_range: (i64, i64),
    /// Inclusive priority range.
    pub priority_range: (i32, i32),
    /// Sort generated processes by arrival (ids follow the sorted order).
    pub sort_by_arrival: bool,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 10,
            burst_range: (1, 10),
            priority_range: (1, 5),
            sort_by_arrival: true,
        }
    }
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default ranges.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max);
        self
    }

    /// Keeps arrivals in generation order instead of sorting them.
    pub fn unsorted(mut self) -> Self {
        self.sort_by_arrival = false;
        self
    }
}

/// Generates a valid process set with ids `1..=count`.
pub fn generate<R: Rng + ?Sized>(config: &WorkloadConfig, rng: &mut R) -> Vec<Process> {
    let max_arrival = config.max_arrival.max(0);
    let burst_min = config.burst_range.0.max(1);
    let burst_max = config.burst_range.1.max(burst_min);
    let (prio_min, prio_max) = config.priority_range;
    let prio_max = prio_max.max(prio_min);

    let mut raw: Vec<(i64, i64, i32)> = (0..config.count)
        .map(|_| {
            (
                rng.random_range(0..=max_arrival),
                rng.random_range(burst_min..=burst_max),
                rng.random_range(prio_min..=prio_max),
            )
        })
        .collect();

    if config.sort_by_arrival {
        raw.sort_by_key(|&(arrival, _, _)| arrival);
    }

    raw.into_iter()
        .zip(1u32..)
        .map(|((arrival, burst, priority), id)| {
            Process::new(id, arrival, burst).with_priority(priority)
        })
        .collect()
}
