//! First-In-First-Out.

use tracing::debug;

use super::SchedulingPolicy;
use crate::models::{Job, TimeLedger};

/// Non-preemptive FIFO.
///
/// Runs each job to completion in canonical (arrival) order, idling the
/// processor across any gap before the next arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl SchedulingPolicy for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn run(&self, jobs: &mut [Job], ledger: &mut TimeLedger) {
        for job in jobs.iter_mut() {
            if job.arrival_time() > ledger.now() {
                debug!(from = ledger.now(), to = job.arrival_time(), "cpu idle");
            }
            ledger.advance_to(job.arrival_time());
            debug!(job = job.id(), at = ledger.now(), "dispatch");
            let work = job.remaining_time();
            job.execute(work, ledger);
        }
    }

    fn description(&self) -> &'static str {
        "First-In-First-Out"
    }
}
