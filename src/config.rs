//! Simulation configuration.
//!
//! The caller-facing knobs: which algorithm and, for Round Robin, the
//! quantum. Loadable from JSON or built from command-line flags.

use serde::{Deserialize, Serialize};

use crate::dispatching::Algorithm;
use crate::error::{SimError, SimResult};

/// Unresolved simulation settings.
///
/// `algorithm` is a name (`FIFO`, `RR`, `SRTN`, case-insensitive). Absent
/// means FIFO. `quantum` only applies to Round Robin and defaults to 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Algorithm name.
    pub algorithm: Option<String>,
    /// Round Robin quantum.
    pub quantum: Option<i64>,
}

impl SimulationConfig {
    /// Creates an empty configuration (FIFO).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from optional settings, e.g. command-line flags.
    pub fn from_options(algorithm: Option<String>, quantum: Option<i64>) -> Self {
        Self { algorithm, quantum }
    }

    /// Sets the algorithm name.
    pub fn with_algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithm = Some(name.into());
        self
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Parses a JSON document such as `{"algorithm": "RR", "quantum": 2}`.
    pub fn from_json(json: &str) -> SimResult<Self> {
        serde_json::from_str(json).map_err(|e| SimError::parse(e.line(), e.to_string()))
    }

    /// Resolves the settings into an [`Algorithm`].
    ///
    /// See [`Algorithm::resolve`] for defaults and errors.
    pub fn resolve(&self) -> SimResult<Algorithm> {
        Algorithm::resolve(self.algorithm.as_deref(), self.quantum)
    }
}
