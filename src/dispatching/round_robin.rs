//! Round Robin over a fixed-order sweep.
//!
//! # Algorithm
//! 1. Sweep the jobs in canonical order, skipping completed ones.
//! 2. An arrived job runs for `min(remaining, quantum)`.
//! 3. A job that has not arrived yet is skipped if anything already ran
//!    in this sweep; it is revisited on the next sweep.
//! 4. If nothing ran yet in this sweep, the processor idles until the
//!    job arrives and then runs it.
//! 5. Repeat until every job has completed.
//!
//! This is not a ready-queue RR: a job that arrives after the sweep has
//! passed its position waits for the next sweep, even if the processor
//! would otherwise pick it up sooner in a queue-based implementation.

use tracing::debug;

use super::{Algorithm, SchedulingPolicy};
use crate::error::SimResult;
use crate::models::{Job, TimeLedger};
use crate::validation::validate_quantum;

/// Preemptive Round Robin with a fixed quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a policy with the given quantum.
    ///
    /// # Errors
    /// [`SimError::InvalidQuantum`](crate::SimError::InvalidQuantum) when `quantum <= 0`.
    pub fn new(quantum: i64) -> SimResult<Self> {
        validate_quantum(quantum)?;
        Ok(Self { quantum })
    }

    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: Algorithm::DEFAULT_QUANTUM,
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, jobs: &mut [Job], ledger: &mut TimeLedger) {
        let mut pending = jobs.iter().filter(|j| !j.is_completed()).count();
        let mut sweep = 0usize;

        while pending > 0 {
            sweep += 1;
            let mut ran_this_sweep = false;

            for job in jobs.iter_mut() {
                if job.is_completed() {
                    continue;
                }
                if !job.has_arrived(ledger.now()) {
                    if ran_this_sweep {
                        continue;
                    }
                    debug!(from = ledger.now(), to = job.arrival_time(), "cpu idle");
                    ledger.advance_to(job.arrival_time());
                }

                debug!(job = job.id(), at = ledger.now(), sweep, "dispatch");
                job.execute(self.quantum, ledger);
                ran_this_sweep = true;

                if job.is_completed() {
                    pending -= 1;
                }
            }
        }
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionSlice, JobSpec};
    use crate::ordering::order_jobs;

    fn run(specs: &[JobSpec], quantum: i64) -> (Vec<Job>, TimeLedger) {
        let mut jobs = order_jobs(specs).unwrap();
        let mut ledger = TimeLedger::new();
        RoundRobin::new(quantum).unwrap().run(&mut jobs, &mut ledger);
        (jobs, ledger)
    }

    #[test]
    fn test_rr_two_jobs_quantum_two() {
        let (jobs, _) = run(&[JobSpec::new(4, 0), JobSpec::new(2, 0)], 2);
        assert_eq!(jobs[0].completion_time(), Some(6));
        assert_eq!(jobs[0].turnaround_time(), Some(6));
        assert_eq!(jobs[0].wait_time(), Some(2));
        assert_eq!(jobs[1].completion_time(), Some(4));
        assert_eq!(jobs[1].turnaround_time(), Some(4));
        assert_eq!(jobs[1].wait_time(), Some(2));
    }

    #[test]
    fn test_rr_slices_alternate() {
        let (_, ledger) = run(&[JobSpec::new(3, 0), JobSpec::new(3, 0)], 1);
        let owners: Vec<usize> = ledger.timeline().slices().iter().map(|s| s.job_id).collect();
        assert_eq!(owners, vec![0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_rr_late_arrival_deferred_to_next_sweep() {
        // Sweep 1: job 0 runs 0..2, job 1 (arrived at 1) runs 2..4, job 2
        // (arrives at 5) is skipped. Sweep 2: job 0 finishes 4..6, job 1
        // finishes 6..7, job 2 has arrived by then and runs 7..9.
        let (jobs, ledger) = run(
            &[JobSpec::new(4, 0), JobSpec::new(3, 1), JobSpec::new(2, 5)],
            2,
        );
        assert_eq!(
            ledger.timeline().slices(),
            &[
                ExecutionSlice::new(0, 0, 2),
                ExecutionSlice::new(1, 2, 4),
                ExecutionSlice::new(0, 4, 6),
                ExecutionSlice::new(1, 6, 7),
                ExecutionSlice::new(2, 7, 9),
            ]
        );
        assert_eq!(jobs[2].wait_time(), Some(2));
    }

    #[test]
    fn test_rr_idle_gap() {
        let (jobs, ledger) = run(&[JobSpec::new(1, 0), JobSpec::new(2, 5)], 4);
        assert_eq!(jobs[1].completion_time(), Some(7));
        assert_eq!(jobs[1].wait_time(), Some(0));
        assert_eq!(
            ledger.timeline().slices(),
            &[ExecutionSlice::new(0, 0, 1), ExecutionSlice::new(1, 5, 7)]
        );
    }

    #[test]
    fn test_rr_large_quantum_matches_fifo() {
        use crate::dispatching::Fifo;

        let specs = [JobSpec::new(5, 0), JobSpec::new(3, 1), JobSpec::new(2, 20)];
        let (rr_jobs, _) = run(&specs, 5);

        let mut fifo_jobs = order_jobs(&specs).unwrap();
        Fifo.run(&mut fifo_jobs, &mut TimeLedger::new());

        for (a, b) in rr_jobs.iter().zip(&fifo_jobs) {
            assert_eq!(a.wait_time(), b.wait_time());
            assert_eq!(a.turnaround_time(), b.turnaround_time());
        }
    }

    #[test]
    fn test_non_positive_quantum_rejected() {
        use crate::error::SimError;

        assert_eq!(RoundRobin::new(0).unwrap_err(), SimError::InvalidQuantum(0));
        assert_eq!(RoundRobin::new(-2).unwrap_err(), SimError::InvalidQuantum(-2));
        assert_eq!(RoundRobin::new(3).unwrap().quantum(), 3);
        assert_eq!(RoundRobin::default().quantum(), 1);
    }
}
