//! CPU scheduling algorithms.
//!
//! Five single-CPU policies sharing one contract: take a read-only process
//! set, drive a virtual clock from t=0, and return a fresh [`Schedule`].
//!
//! | Algorithm | Preemptive | Selection | Tie-break |
//! |-----------|-----------|-----------|-----------|
//! | FCFS | no | input order | input order |
//! | SJF | no | smallest burst | lowest index |
//! | SRTF | yes (every unit) | smallest remaining | lowest index |
//! | Priority | no | lowest priority value | lowest index |
//! | RR | yes (quantum) | FIFO queue | queue order |
//!
//! When nothing is eligible, the clock idles straight to the next arrival.
//! The result matches ticking one unit at a time, and every run terminates
//! once all arrivals have been reached.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod clock;
mod fcfs;
mod priority;
mod round_robin;
pub mod selection;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::PriorityScheduling;
pub use round_robin::{Admission, RoundRobin};
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::fmt::{self, Debug};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Schedule};

/// A scheduling discipline.
///
/// Implementations must not mutate their input: each call starts from
/// `remaining = burst` and no completions.
pub trait SchedulingAlgorithm: Send + Sync + Debug {
    /// Short name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Whether the running process can be interrupted before finishing.
    fn is_preemptive(&self) -> bool;

    /// Runs the algorithm over `processes` (input order is significant).
    fn schedule(&self, processes: &[Process]) -> Schedule;

    /// Long name.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Algorithm selector.
///
/// Parses from `fcfs`, `sjf`, `srtf`, `priority` and `rr` / `rr:<quantum>`.
///
/// # Example
/// ```
/// use cpu_sched::scheduler::Algorithm;
///
/// let algo: Algorithm = "rr:4".parse().unwrap();
/// assert_eq!(algo, Algorithm::RoundRobin { quantum: 4 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First.
    Sjf,
    /// Shortest Remaining Time First.
    Srtf,
    /// Non-preemptive priority.
    Priority,
    /// Round Robin with eager admission.
    RoundRobin {
        /// Time slice per turn (> 0).
        quantum: i64,
    },
}

impl Algorithm {
    /// Quantum used when `rr` is given without one.
    pub const DEFAULT_QUANTUM: i64 = 2;

    /// All five algorithms, Round Robin with the given quantum.
    pub fn all(quantum: i64) -> [Algorithm; 5] {
        [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Srtf,
            Algorithm::Priority,
            Algorithm::RoundRobin { quantum },
        ]
    }

    /// Instantiates the selected algorithm.
    pub fn build(&self) -> Box<dyn SchedulingAlgorithm> {
        match *self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Srtf => Box::new(Srtf),
            Algorithm::Priority => Box::new(PriorityScheduling),
            Algorithm::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
        }
    }

    /// Runs the selected algorithm.
    pub fn schedule(&self, processes: &[Process]) -> Schedule {
        self.build().schedule(processes)
    }

    /// Round Robin quantum, if this is Round Robin.
    pub fn quantum(&self) -> Option<i64> {
        match *self {
            Algorithm::RoundRobin { quantum } => Some(quantum),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fcfs => write!(f, "fcfs"),
            Algorithm::Sjf => write!(f, "sjf"),
            Algorithm::Srtf => write!(f, "srtf"),
            Algorithm::Priority => write!(f, "priority"),
            Algorithm::RoundRobin { quantum } => write!(f, "rr:{quantum}"),
        }
    }
}

/// Error returned when an algorithm name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}' (expected fcfs, sjf, srtf, priority, rr or rr:<quantum>)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "srtf" => Ok(Algorithm::Srtf),
            "priority" => Ok(Algorithm::Priority),
            "rr" | "round-robin" => Ok(Algorithm::RoundRobin {
                quantum: Self::DEFAULT_QUANTUM,
            }),
            other => other
                .strip_prefix("rr:")
                .and_then(|q| q.parse::<i64>().ok())
                .map(|quantum| Algorithm::RoundRobin { quantum })
                .ok_or_else(|| ParseAlgorithmError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 8).with_priority(3),
            Process::new(2, 1, 4).with_priority(1),
            Process::new(3, 2, 9).with_priority(4),
            Process::new(4, 3, 5).with_priority(2),
        ]
    }

    #[test]
    fn test_parse_algorithms() {
        assert_eq!("fcfs".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("SJF".parse::<Algorithm>(), Ok(Algorithm::Sjf));
        assert_eq!(" srtf ".parse::<Algorithm>(), Ok(Algorithm::Srtf));
        assert_eq!("priority".parse::<Algorithm>(), Ok(Algorithm::Priority));
        assert_eq!(
            "rr".parse::<Algorithm>(),
            Ok(Algorithm::RoundRobin { quantum: 2 })
        );
        assert_eq!(
            "rr:5".parse::<Algorithm>(),
            Ok(Algorithm::RoundRobin { quantum: 5 })
        );
        assert!("lottery".parse::<Algorithm>().is_err());
        assert!("rr:x".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for algo in Algorithm::all(3) {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
        }
    }

    #[test]
    fn test_build_names() {
        let names: Vec<&str> = Algorithm::all(2).iter().map(|a| a.build().name()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "SRTF", "PRIORITY", "RR"]);
    }

    #[test]
    fn test_preemptive_flags() {
        let flags: Vec<bool> = Algorithm::all(2)
            .iter()
            .map(|a| a.build().is_preemptive())
            .collect();
        assert_eq!(flags, vec![false, false, true, false, true]);
    }

    #[test]
    fn test_rerun_is_side_effect_free() {
        let procs = sample();
        let before = procs.clone();
        let first = Algorithm::Srtf.schedule(&procs);
        let _ = Algorithm::Sjf.schedule(&procs);
        let again = Algorithm::Srtf.schedule(&procs);
        assert_eq!(procs, before);
        assert_eq!(first, again);
    }

    #[test]
    fn test_every_algorithm_completes_everything() {
        let procs = sample();
        for algo in Algorithm::all(3) {
            let schedule = algo.schedule(&procs);
            assert!(schedule.is_complete(), "{algo} left work unfinished");
            for outcome in &schedule.processes {
                assert_eq!(outcome.remaining_time, 0);
                assert!(
                    outcome.completion_time.unwrap() >= outcome.process.earliest_completion()
                );
            }
        }
    }

    #[test]
    fn test_quantum_accessor() {
        assert_eq!(Algorithm::RoundRobin { quantum: 4 }.quantum(), Some(4));
        assert_eq!(Algorithm::Fcfs.quantum(), None);
    }
}
