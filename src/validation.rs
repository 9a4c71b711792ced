//! Input validation for scheduling runs.
//!
//! Checks the preconditions every algorithm assumes before any of them
//! runs. Detects:
//! - Empty process sets
//! - Zero or duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round Robin quanta
//! - Time horizons that overflow `i64`

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Process;
use crate::scheduler::Algorithm;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process ID is zero.
    InvalidId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (or negative time).
    NonPositiveBurst,
    /// Round Robin quantum is zero or negative.
    InvalidQuantum,
    /// The latest arrival plus total work, or the per-process totals
    /// derived from it, does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set and algorithm selection.
///
/// Checks:
/// 1. At least one process
/// 2. All IDs positive
/// 3. No duplicate IDs
/// 4. All arrival times ≥ 0
/// 5. All burst times > 0
/// 6. Round Robin quantum > 0
/// 7. Latest arrival + Σburst, times the process count, fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], algorithm: &Algorithm) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must be positive, got 0",
            ));
        } else if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: P{}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process P{} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process P{} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if let Some(quantum) = algorithm.quantum() {
        if quantum <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Round Robin quantum must be positive, got {quantum}"),
            ));
        }
    }

    if time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any instant or metric total a run can produce.
///
/// No completion can exceed the latest arrival plus the total work, and
/// every turnaround total is bounded by `count` such completions.
fn time_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)))?;
    let count = i64::try_from(processes.len()).ok()?;
    horizon.checked_mul(count.max(1))
}
