//! Simulation driver.
//!
//! # Algorithm
//!
//! 1. Validate the algorithm parameters and the job list.
//! 2. Build job records in canonical order (arrival, then input position).
//! 3. Run the selected policy to completion on a fresh ledger.
//! 4. Compute statistics from the completed records and the timeline.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::dispatching::Algorithm;
use crate::error::{SimError, SimResult};
use crate::models::{Job, JobSpec, TimeLedger, Timeline};
use crate::ordering::order_jobs;
use crate::validation::validate_jobs;

use super::ScheduleStats;

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy that produced this run.
    pub algorithm: Algorithm,
    /// Completed job records, in canonical order.
    pub jobs: Vec<Job>,
    /// Executed intervals.
    pub timeline: Timeline,
    /// Per-job and aggregate statistics.
    pub stats: ScheduleStats,
}

impl SimulationReport {
    #[inline]
    pub fn avg_turnaround(&self) -> f64 {
        self.stats.avg_turnaround
    }

    #[inline]
    pub fn avg_wait(&self) -> f64 {
        self.stats.avg_wait
    }

    /// Record for the job with the given id.
    pub fn job(&self, id: usize) -> Option<&Job> {
        self.jobs.get(id)
    }
}

/// Runs single-processor simulations with a fixed algorithm.
///
/// # Example
///
/// ```
/// use u_cpusim::dispatching::Algorithm;
/// use u_cpusim::models::JobSpec;
/// use u_cpusim::scheduler::Simulator;
///
/// let jobs = vec![JobSpec::new(5, 0), JobSpec::new(3, 1)];
/// let report = Simulator::new(Algorithm::Fifo).run(&jobs).unwrap();
/// assert!((report.avg_wait() - 2.0).abs() < 1e-10);
/// assert!((report.avg_turnaround() - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    algorithm: Algorithm,
}

impl Simulator {
    /// Creates a simulator for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Creates a simulator from unresolved configuration.
    pub fn from_config(config: &SimulationConfig) -> SimResult<Self> {
        Ok(Self::new(config.resolve()?))
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Runs the simulation over the given jobs.
    ///
    /// # Errors
    /// - [`SimError::InvalidQuantum`] for a Round Robin quantum ≤ 0.
    /// - [`SimError::EmptyInput`] when `specs` is empty.
    /// - [`SimError::InvalidJob`] for the first malformed job; every
    ///   malformed job is logged.
    pub fn run(&self, specs: &[JobSpec]) -> SimResult<SimulationReport> {
        let policy = self.algorithm.policy()?;

        if let Err(errors) = validate_jobs(specs) {
            for e in &errors {
                warn!(kind = ?e.kind, position = ?e.position, "{}", e.message);
            }
            return Err(errors
                .into_iter()
                .next()
                .map(SimError::from)
                .unwrap_or(SimError::EmptyInput));
        }

        let mut jobs = order_jobs(specs)?;
        let mut ledger = TimeLedger::new();

        debug!(
            algorithm = %self.algorithm,
            jobs = jobs.len(),
            "starting simulation"
        );
        policy.run(&mut jobs, &mut ledger);

        let timeline = ledger.into_timeline();
        let stats = ScheduleStats::calculate(&jobs, &timeline)?;

        info!(
            algorithm = %self.algorithm,
            jobs = jobs.len(),
            avg_turnaround = stats.avg_turnaround,
            avg_wait = stats.avg_wait,
            makespan = stats.makespan,
            "simulation complete"
        );

        Ok(SimulationReport {
            algorithm: self.algorithm,
            jobs,
            timeline,
            stats,
        })
    }
}

/// Runs one simulation with the given algorithm.
pub fn simulate(specs: &[JobSpec], algorithm: Algorithm) -> SimResult<SimulationReport> {
    Simulator::new(algorithm).run(specs)
}
