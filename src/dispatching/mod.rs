//! Dispatching policies for a single processor.
//!
//! Provides the three classic disciplines behind one trait:
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | `Fifo` | no | arrival order |
//! | `RoundRobin` | yes (quantum expiry) | fixed-order sweep |
//! | `Srtn` | yes (shorter arrival) | least remaining time |
//!
//! # Usage
//!
//! ```
//! use u_cpusim::dispatching::{Algorithm, SchedulingPolicy};
//! use u_cpusim::models::{JobSpec, TimeLedger};
//! use u_cpusim::ordering::order_jobs;
//!
//! let mut jobs = order_jobs(&[JobSpec::new(4, 0), JobSpec::new(2, 0)]).unwrap();
//! let mut ledger = TimeLedger::new();
//! let policy = Algorithm::round_robin(2).unwrap().policy().unwrap();
//! policy.run(&mut jobs, &mut ledger);
//! assert_eq!(jobs[1].turnaround_time(), Some(4));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
mod fifo;
mod round_robin;
mod srtn;

pub use algorithm::Algorithm;
pub use fifo::Fifo;
pub use round_robin::RoundRobin;
pub use srtn::Srtn;

use crate::models::{Job, TimeLedger};
use std::fmt::Debug;

/// A single-processor dispatching discipline.
///
/// # Contract
/// `jobs` arrives in canonical order (see [`crate::ordering`]) with fresh
/// accounting. `run` must execute every job to completion, driving all
/// time through `ledger`, so that on return each job is completed.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FIFO", "RR").
    fn name(&self) -> &'static str;

    /// Runs the simulation to completion.
    fn run(&self, jobs: &mut [Job], ledger: &mut TimeLedger);

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
