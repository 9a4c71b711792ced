//! Scheduling domain models.
//!
//! Provides the data types for representing a CPU scheduling problem
//! (a set of processes) and its solution (a schedule with a timeline).
//!
//! # Lifecycle
//!
//! | Stage | Type | Owner |
//! |-------|------|-------|
//! | Input | `Process` | Caller (read-only to algorithms) |
//! | Algorithm output | `Schedule`, `ScheduledProcess`, `ExecutionSlice` | Caller |
//! | Derived metrics | `crate::metrics::ScheduleMetrics` | Caller |

mod process;
mod schedule;

pub use process::Process;
pub use schedule::{ExecutionSlice, Schedule, ScheduledProcess};
