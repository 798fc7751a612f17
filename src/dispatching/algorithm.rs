//! Algorithm selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use super::{Fifo, RoundRobin, SchedulingPolicy, Srtn};
use crate::error::{SimError, SimResult};
use crate::validation::validate_quantum;

/// The dispatching discipline chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Algorithm {
    /// First-In-First-Out, non-preemptive.
    #[default]
    Fifo,
    /// Round Robin with a fixed quantum.
    RoundRobin {
        /// Maximum contiguous slice per dispatch.
        quantum: i64,
    },
    /// Shortest-Remaining-Time-Next, preemptive.
    Srtn,
}

impl Algorithm {
    /// Quantum used when Round Robin is requested without one.
    pub const DEFAULT_QUANTUM: i64 = 1;

    /// Round Robin with a validated quantum.
    pub fn round_robin(quantum: i64) -> SimResult<Self> {
        validate_quantum(quantum)?;
        Ok(Self::RoundRobin { quantum })
    }

    /// Resolves an optional algorithm name and quantum.
    ///
    /// - No name → FIFO.
    /// - `RR` / `ROUND_ROBIN` without a quantum → quantum 1.
    /// - A quantum for FIFO or SRTN is ignored.
    ///
    /// # Errors
    /// [`SimError::UnknownAlgorithm`] for an unrecognized name (never a
    /// silent FIFO fallback), [`SimError::InvalidQuantum`] for RR with
    /// `quantum <= 0`.
    pub fn resolve(name: Option<&str>, quantum: Option<i64>) -> SimResult<Self> {
        let algorithm = match name {
            None => Self::Fifo,
            Some(name) => name.parse()?,
        };

        match (algorithm, quantum) {
            (Self::RoundRobin { .. }, Some(q)) => Self::round_robin(q),
            (Self::RoundRobin { .. }, None) => Ok(algorithm),
            (_, Some(q)) => {
                warn!(
                    algorithm = algorithm.name(),
                    quantum = q,
                    "quantum only applies to Round Robin; ignoring"
                );
                Ok(algorithm)
            }
            (_, None) => Ok(algorithm),
        }
    }

    /// Short name (`FIFO`, `RR`, `SRTN`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::RoundRobin { .. } => "RR",
            Self::Srtn => "SRTN",
        }
    }

    /// Round Robin quantum, if applicable.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }

    /// Instantiates the policy.
    ///
    /// # Errors
    /// [`SimError::InvalidQuantum`] for Round Robin with `quantum <= 0`
    /// (the fields are public, so the enum may hold one).
    pub fn policy(&self) -> SimResult<Box<dyn SchedulingPolicy>> {
        Ok(match *self {
            Self::Fifo => Box::new(Fifo),
            Self::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)?),
            Self::Srtn => Box::new(Srtn),
        })
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    /// Parses a case-insensitive name. Round Robin gets the default quantum.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIFO" => Ok(Self::Fifo),
            "RR" | "ROUND_ROBIN" => Ok(Self::RoundRobin {
                quantum: Self::DEFAULT_QUANTUM,
            }),
            "SRTN" => Ok(Self::Srtn),
            _ => Err(SimError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}
