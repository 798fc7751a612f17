//! Error types for the simulator.

use thiserror::Error;

/// Errors raised while preparing or running a simulation.
///
/// Every condition is detected before or during the single simulation pass
/// and propagated synchronously; none are recovered internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A job with `run_time <= 0` or `arrival_time < 0`.
    #[error("Invalid job at input position {position}: {reason}")]
    InvalidJob {
        /// Zero-based position in the caller's input.
        position: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Round Robin requested with a non-positive quantum.
    #[error("Invalid quantum: {0} (must be greater than zero)")]
    InvalidQuantum(i64),

    /// No jobs were supplied.
    #[error("Empty input: no jobs to schedule")]
    EmptyInput,

    /// An algorithm name outside FIFO / RR / SRTN.
    #[error("Unknown scheduling algorithm: '{0}' (expected FIFO, RR or SRTN)")]
    UnknownAlgorithm(String),

    /// Statistics were requested for a job that never finished.
    #[error("Job {0} has not completed")]
    JobNotCompleted(usize),

    /// A line of a textual job list could not be parsed.
    #[error("Parse error on line {line}: {reason}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}

impl SimError {
    /// Creates an invalid job error.
    pub fn invalid_job(position: usize, reason: impl Into<String>) -> Self {
        Self::InvalidJob {
            position,
            reason: reason.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SimError::invalid_job(2, "run_time must be > 0").to_string(),
            "Invalid job at input position 2: run_time must be > 0"
        );
        assert_eq!(
            SimError::UnknownAlgorithm("LIFO".into()).to_string(),
            "Unknown scheduling algorithm: 'LIFO' (expected FIFO, RR or SRTN)"
        );
        assert!(SimError::InvalidQuantum(0).to_string().contains("0"));
    }
}
