//! Simulation driver and statistics.
//!
//! `Simulator` validates input, orders jobs, runs one dispatching policy
//! to completion and hands the finished records to `ScheduleStats`.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

mod simulator;
mod stats;

pub use simulator::{simulate, SimulationReport, Simulator};
pub use stats::{JobStats, ScheduleStats};
