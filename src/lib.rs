//! Single-processor CPU scheduling simulator.
//!
//! Simulates FIFO, Round Robin and Shortest-Remaining-Time-Next dispatching
//! over a set of jobs described by arrival time and run time, and reports
//! per-job and averaged wait and turnaround times.
//!
//! # Modules
//!
//! - **`models`**: `JobSpec`, `Job`, `TimeLedger`, `Timeline`
//! - **`ordering`**: canonical arrival ordering and id assignment
//! - **`validation`**: job list and quantum checks
//! - **`dispatching`**: `SchedulingPolicy` and the three policies
//! - **`scheduler`**: `Simulator` driver and `ScheduleStats`
//! - **`config`**: algorithm selection settings
//! - **`workload`**: text job lists and random workload generation
//!
//! # Time Model
//!
//! Discrete-event, integer time units, one processor. No job runs in
//! parallel with another; time only moves forward.
//!
//! # Example
//!
//! ```
//! use u_cpusim::{simulate, Algorithm, JobSpec};
//!
//! let jobs = vec![JobSpec::new(4, 0), JobSpec::new(2, 0)];
//! let report = simulate(&jobs, Algorithm::round_robin(2).unwrap()).unwrap();
//! assert_eq!(report.stats.jobs[1].turnaround_time, 4);
//! ```

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod ordering;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use dispatching::{Algorithm, SchedulingPolicy};
pub use error::{SimError, SimResult};
pub use models::{Job, JobSpec};
pub use scheduler::{simulate, ScheduleStats, SimulationReport, Simulator};
