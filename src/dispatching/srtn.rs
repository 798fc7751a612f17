//! Shortest-Remaining-Time-Next.
//!
//! # Selection Rule
//! Among arrived, incomplete jobs pick the least remaining time. Ties keep
//! the running job (the incumbent); otherwise the lowest id wins.
//!
//! # Algorithm
//! Event-driven rather than unit-stepped: arrived jobs sit in a min-heap
//! keyed by `(remaining_time, id)`. The running job executes until it
//! completes or the next arrival instant, whichever comes first. At each
//! arrival instant the heap head preempts the running job only if its
//! remaining time is strictly smaller.
//!
//! Heap keys stay valid because a job's remaining time only changes while
//! it is running, and the running job is never in the heap.
//!
//! # Complexity
//! O(n log n) dispatch decisions, independent of total run time.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use super::SchedulingPolicy;
use crate::models::{Job, TimeLedger};

/// Preemptive shortest-remaining-time-next.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtn;

impl SchedulingPolicy for Srtn {
    fn name(&self) -> &'static str {
        "SRTN"
    }

    fn run(&self, jobs: &mut [Job], ledger: &mut TimeLedger) {
        let mut ready: BinaryHeap<Reverse<(i64, usize)>> = BinaryHeap::new();
        let mut next_arrival = 0usize;
        let mut running: Option<usize> = None;
        let mut pending = jobs.iter().filter(|j| !j.is_completed()).count();

        while pending > 0 {
            while let Some(job) = jobs.get(next_arrival) {
                if !job.has_arrived(ledger.now()) {
                    break;
                }
                if !job.is_completed() {
                    ready.push(Reverse((job.remaining_time(), next_arrival)));
                }
                next_arrival += 1;
            }

            running = match running {
                Some(current) => match ready.peek() {
                    Some(&Reverse((remaining, candidate)))
                        if remaining < jobs[current].remaining_time() =>
                    {
                        ready.pop();
                        ready.push(Reverse((jobs[current].remaining_time(), current)));
                        debug!(
                            preempted = current,
                            by = candidate,
                            at = ledger.now(),
                            "preempt"
                        );
                        Some(candidate)
                    }
                    _ => Some(current),
                },
                None => ready.pop().map(|Reverse((_, idx))| {
                    debug!(job = idx, at = ledger.now(), "dispatch");
                    idx
                }),
            };

            let Some(current) = running else {
                // Nothing has arrived: idle until the next arrival.
                match jobs.get(next_arrival) {
                    Some(job) => {
                        debug!(from = ledger.now(), to = job.arrival_time(), "cpu idle");
                        ledger.advance_to(job.arrival_time());
                        continue;
                    }
                    None => break,
                }
            };

            let remaining = jobs[current].remaining_time();
            let slice = match jobs.get(next_arrival) {
                Some(job) => remaining.min(job.arrival_time() - ledger.now()),
                None => remaining,
            };
            jobs[current].execute(slice, ledger);

            if jobs[current].is_completed() {
                pending -= 1;
                running = None;
            }
        }
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time Next"
    }
}
