//! End-to-end simulation runs.
//!
//! A [`SimulationRequest`] bundles the process set with the run
//! configuration. Running it validates the input, schedules it with one
//! algorithm, and derives metrics:
//!
//! ```text
//! validate_input → SchedulingAlgorithm::schedule → ScheduleMetrics
//! ```

use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::metrics::{MetricsError, ScheduleMetrics, SpanMethod};
use crate::models::{Process, Schedule};
use crate::scheduler::{Admission, Algorithm, RoundRobin, SchedulingAlgorithm};
use crate::validation::{validate_input, ValidationError};

/// Why a simulation run failed.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Input failed validation; every detected issue is listed.
    Invalid(Vec<ValidationError>),
    /// The schedule was produced but metrics could not be derived.
    Metrics(MetricsError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Invalid(errors) => {
                write!(f, "invalid input: ")?;
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "{}", messages.join("; "))
            }
            SimulationError::Metrics(err) => write!(f, "metrics: {err}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Invalid(_) => None,
            SimulationError::Metrics(err) => Some(err),
        }
    }
}

impl From<MetricsError> for SimulationError {
    fn from(err: MetricsError) -> Self {
        SimulationError::Metrics(err)
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::Invalid(errors)
    }
}

/// Input container for one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    /// Processes, in submission order.
    pub processes: Vec<Process>,
    /// Algorithm to run.
    pub algorithm: Algorithm,
    /// Time span measurement for utilization and throughput.
    pub span_method: SpanMethod,
    /// Ready-queue admission for Round Robin.
    pub admission: Admission,
}

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub algorithm: Algorithm,
    pub schedule: Schedule,
    pub metrics: ScheduleMetrics,
}

impl SimulationRequest {
    /// Creates a request with the input-order span and eager admission.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            span_method: SpanMethod::default(),
            admission: Admission::default(),
        }
    }

    /// Sets the span method.
    pub fn with_span_method(mut self, span_method: SpanMethod) -> Self {
        self.span_method = span_method;
        self
    }

    /// Sets Round Robin admission.
    pub fn with_admission(mut self, admission: Admission) -> Self {
        self.admission = admission;
        self
    }

    /// Instantiates the configured algorithm.
    pub fn scheduler(&self) -> Box<dyn SchedulingAlgorithm> {
        match self.algorithm {
            Algorithm::RoundRobin { quantum } => {
                Box::new(RoundRobin::new(quantum).with_admission(self.admission))
            }
            other => other.build(),
        }
    }

    /// Validates, schedules and measures.
    ///
    /// # Errors
    /// [`SimulationError::Invalid`] before any scheduling if the input is
    /// malformed; [`SimulationError::Metrics`] if the resulting span is
    /// degenerate.
    pub fn run(&self) -> Result<SimulationReport, SimulationError> {
        validate_input(&self.processes, &self.algorithm)?;

        let scheduler = self.scheduler();
        info!(
            "running {} over {} processes",
            scheduler.description(),
            self.processes.len()
        );
        let schedule = scheduler.schedule(&self.processes);
        debug!(
            "{}: makespan={} switches={}",
            schedule.algorithm,
            schedule.makespan(),
            schedule.context_switches()
        );

        let metrics = ScheduleMetrics::calculate_with(&schedule, self.span_method)?;

        Ok(SimulationReport {
            algorithm: self.algorithm,
            schedule,
            metrics,
        })
    }
}

/// Runs several algorithms over the same process set.
///
/// Each run sees the same read-only input. Fails on the first error.
pub fn compare(
    processes: &[Process],
    algorithms: &[Algorithm],
    span_method: SpanMethod,
) -> Result<Vec<SimulationReport>, SimulationError> {
    algorithms
        .iter()
        .map(|&algorithm| {
            SimulationRequest::new(processes.to_vec(), algorithm)
                .with_span_method(span_method)
                .run()
        })
        .collect()
}
