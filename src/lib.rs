//! Deterministic CPU scheduling simulator.
//!
//! Computes completion times for a set of processes under one of five
//! single-CPU disciplines, then derives turnaround time, waiting time,
//! CPU utilization and throughput. Time is virtual: it only advances as
//! the algorithm computes it.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Schedule`, `ScheduledProcess`,
//!   `ExecutionSlice`
//! - **`scheduler`**: FCFS, SJF, SRTF, Priority and Round Robin behind the
//!   `SchedulingAlgorithm` trait, plus the `Algorithm` selector
//! - **`metrics`**: Turnaround, waiting, utilization and throughput
//! - **`validation`**: Input precondition checks (ids, arrivals, bursts, quantum)
//! - **`simulation`**: Validate → schedule → measure, and multi-algorithm comparison
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::Algorithm;
//! use cpu_sched::simulation::SimulationRequest;
//!
//! let procs = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 8),
//! ];
//! let report = SimulationRequest::new(procs, Algorithm::Fcfs).run().unwrap();
//! assert_eq!(report.schedule.completion_times(), vec![Some(5), Some(8), Some(16)]);
//! assert!((report.metrics.average_waiting_time - 10.0 / 3.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod metrics;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;
