//! Schedule quality metrics.
//!
//! Derives per-process and aggregate performance indicators from a
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Avg Turnaround / Waiting | sum / n |
//! | CPU Utilization | 100 × Σ burst / span (%) |
//! | Throughput | n / span (processes per time unit) |
//!
//! # Time Span
//!
//! [`SpanMethod::InputOrderEndpoints`] (the default) measures from the
//! arrival of the *first process in input order* to the completion of the
//! *last process in input order*. This is positional, not a true
//! min/max: when an algorithm finishes processes out of input order the
//! span can be shorter than the real schedule and utilization can exceed
//! 100%. [`SpanMethod::TrueExtent`] uses earliest arrival to latest
//! completion instead.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// How the total time span is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanMethod {
    /// Last input-order completion minus first input-order arrival.
    #[default]
    InputOrderEndpoints,
    /// Latest completion minus earliest arrival.
    TrueExtent,
}

/// Per-process times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub process_id: u32,
    pub arrival_time: i64,
    pub burst_time: i64,
    pub priority: i32,
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
}

/// Aggregate schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Per-process times, in input order.
    pub per_process: Vec<ProcessMetrics>,
    pub total_turnaround_time: i64,
    pub total_waiting_time: i64,
    pub total_burst_time: i64,
    pub average_turnaround_time: f64,
    pub average_waiting_time: f64,
    /// Method used for `time_span`.
    pub span_method: SpanMethod,
    /// Denominator for utilization and throughput (> 0).
    pub time_span: i64,
    /// CPU idle time before the makespan, from the execution timeline.
    pub idle_time: i64,
    /// Σ burst / span, as a percentage.
    pub cpu_utilization: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
}

/// Why metrics could not be computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// The schedule has no processes.
    EmptySchedule,
    /// A process has no completion time.
    Incomplete { process_id: u32 },
    /// The time span is zero or negative; utilization and throughput
    /// would be infinite or meaningless.
    DegenerateSpan { span: i64, method: SpanMethod },
    /// A time or total does not fit in `i64`.
    Overflow,
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsError::EmptySchedule => write!(f, "cannot compute metrics for an empty schedule"),
            MetricsError::Incomplete { process_id } => {
                write!(f, "process P{process_id} has no completion time")
            }
            MetricsError::DegenerateSpan { span, method } => {
                write!(f, "time span {span} ({method:?}) is not positive")
            }
            MetricsError::Overflow => write!(f, "time arithmetic overflowed"),
        }
    }
}

impl std::error::Error for MetricsError {}

fn checked(value: Option<i64>) -> Result<i64, MetricsError> {
    value.ok_or(MetricsError::Overflow)
}

impl SpanMethod {
    /// Computes the span of a schedule whose processes all completed.
    fn span(&self, schedule: &Schedule) -> Result<i64, MetricsError> {
        let completion = |idx: usize| {
            let p = &schedule.processes[idx];
            p.completion_time.ok_or(MetricsError::Incomplete {
                process_id: p.process.id,
            })
        };

        match self {
            SpanMethod::InputOrderEndpoints => {
                let first = schedule.processes.first().ok_or(MetricsError::EmptySchedule)?;
                let last_completion = completion(schedule.processes.len() - 1)?;
                last_completion
                    .checked_sub(first.process.arrival_time)
                    .ok_or(MetricsError::Overflow)
            }
            SpanMethod::TrueExtent => {
                let start = schedule
                    .processes
                    .iter()
                    .map(|p| p.process.arrival_time)
                    .min()
                    .ok_or(MetricsError::EmptySchedule)?;
                let end = (0..schedule.processes.len())
                    .map(completion)
                    .collect::<Result<Vec<_>, _>>()?
                    .into_iter()
                    .max()
                    .ok_or(MetricsError::EmptySchedule)?;
                end.checked_sub(start).ok_or(MetricsError::Overflow)
            }
        }
    }
}

impl ScheduleMetrics {
    /// Computes metrics with the input-order span.
    pub fn calculate(schedule: &Schedule) -> Result<Self, MetricsError> {
        Self::calculate_with(schedule, SpanMethod::default())
    }

    /// Computes metrics with an explicit span method.
    ///
    /// # Errors
    /// - [`MetricsError::EmptySchedule`] for an empty schedule
    /// - [`MetricsError::Incomplete`] if any process never finished
    /// - [`MetricsError::DegenerateSpan`] if the span is not positive
    /// - [`MetricsError::Overflow`] if a time or total does not fit in `i64`
    pub fn calculate_with(schedule: &Schedule, span_method: SpanMethod) -> Result<Self, MetricsError> {
        if schedule.is_empty() {
            return Err(MetricsError::EmptySchedule);
        }

        let mut per_process = Vec::with_capacity(schedule.len());
        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut total_burst: i64 = 0;

        for outcome in &schedule.processes {
            let p = outcome.process;
            let completion_time = outcome
                .completion_time
                .ok_or(MetricsError::Incomplete { process_id: p.id })?;

            let turnaround_time = checked(completion_time.checked_sub(p.arrival_time))?;
            let waiting_time = checked(turnaround_time.checked_sub(p.burst_time))?;

            total_turnaround = checked(total_turnaround.checked_add(turnaround_time))?;
            total_waiting = checked(total_waiting.checked_add(waiting_time))?;
            total_burst = checked(total_burst.checked_add(p.burst_time))?;

            per_process.push(ProcessMetrics {
                process_id: p.id,
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                priority: p.priority,
                completion_time,
                turnaround_time,
                waiting_time,
            });
        }

        let span = span_method.span(schedule)?;
        if span <= 0 {
            return Err(MetricsError::DegenerateSpan {
                span,
                method: span_method,
            });
        }

        let n = per_process.len() as f64;

        Ok(Self {
            per_process,
            total_turnaround_time: total_turnaround,
            total_waiting_time: total_waiting,
            total_burst_time: total_burst,
            average_turnaround_time: total_turnaround as f64 / n,
            average_waiting_time: total_waiting as f64 / n,
            span_method,
            time_span: span,
            idle_time: schedule.idle_time(),
            cpu_utilization: total_burst as f64 / span as f64 * 100.0,
            throughput: n / span as f64,
        })
    }

    /// Looks up one process's times.
    pub fn for_process(&self, process_id: u32) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.process_id == process_id)
    }

    /// Largest waiting time of any process.
    pub fn max_waiting_time(&self) -> i64 {
        self.per_process
            .iter()
            .map(|m| m.waiting_time)
            .max()
            .unwrap_or(0)
    }
}
