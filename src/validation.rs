//! Input validation for simulation runs.
//!
//! Checks the job list and Round Robin quantum before any job record is
//! built. Detects:
//! - Empty job lists
//! - Non-positive run times (the job could never complete)
//! - Negative arrival times
//! - Non-positive quanta

use crate::error::SimError;
use crate::models::JobSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Input position of the offending job, if any.
    pub position: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No jobs supplied.
    EmptyInput,
    /// A job's run time is zero or negative.
    NonPositiveRunTime,
    /// A job arrives before t=0.
    NegativeArrivalTime,
    /// Round Robin quantum is zero or negative (carries the value).
    NonPositiveQuantum(i64),
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, position: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for SimError {
    fn from(err: ValidationError) -> Self {
        match err.kind {
            ValidationErrorKind::EmptyInput => SimError::EmptyInput,
            ValidationErrorKind::NonPositiveRunTime | ValidationErrorKind::NegativeArrivalTime => {
                SimError::invalid_job(err.position.unwrap_or_default(), err.message)
            }
            ValidationErrorKind::NonPositiveQuantum(quantum) => SimError::InvalidQuantum(quantum),
        }
    }
}

/// Validates a job list.
///
/// Checks:
/// 1. At least one job
/// 2. Every `run_time > 0`
/// 3. Every `arrival_time >= 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[JobSpec]) -> ValidationResult {
    if jobs.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyInput,
            None,
            "No jobs supplied",
        )]);
    }

    let mut errors = Vec::new();
    for (position, job) in jobs.iter().enumerate() {
        if job.run_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveRunTime,
                Some(position),
                format!("run_time must be > 0, got {}", job.run_time),
            ));
        }
        if job.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrivalTime,
                Some(position),
                format!("arrival_time must be >= 0, got {}", job.arrival_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum(quantum),
            None,
            format!("quantum must be > 0, got {quantum}"),
        ));
    }
    Ok(())
}
