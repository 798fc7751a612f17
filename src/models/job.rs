//! Job model.
//!
//! A job is a single CPU burst: it becomes eligible at its arrival time and
//! needs `total_run_time` units of processor time to complete.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

use super::TimeLedger;
use crate::error::{SimError, SimResult};

/// Job description supplied by the caller, before ordering.
///
/// Field order matches the textual job-list format (`run_time arrival_time`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Total CPU time required.
    pub run_time: i64,
    /// When the job becomes eligible to run.
    pub arrival_time: i64,
}

impl JobSpec {
    /// Creates a job description.
    pub fn new(run_time: i64, arrival_time: i64) -> Self {
        Self {
            run_time,
            arrival_time,
        }
    }
}

/// A job record with its evolving time accounting.
///
/// Identity fields (`id`, `arrival_time`, `total_run_time`) are fixed at
/// construction. The accounting fields change only through [`Job::execute`],
/// which keeps `remaining_time + cpu_time_consumed == total_run_time`.
/// Wait and turnaround times stay `None` until the job completes.
///
/// Deserialization goes through the same checks as [`Job::new`] plus the
/// accounting invariants, so a decoded record is always consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "JobRecord")]
pub struct Job {
    id: usize,
    input_position: usize,
    arrival_time: i64,
    total_run_time: i64,
    remaining_time: i64,
    cpu_time_consumed: i64,
    completed: bool,
    completion_time: Option<i64>,
    wait_time: Option<i64>,
    turnaround_time: Option<i64>,
}

impl Job {
    /// Creates a fresh job record.
    ///
    /// # Errors
    /// [`SimError::InvalidJob`] when `total_run_time <= 0` or
    /// `arrival_time < 0`. Such a job would never terminate or would
    /// arrive before the epoch.
    pub fn new(
        id: usize,
        input_position: usize,
        arrival_time: i64,
        total_run_time: i64,
    ) -> SimResult<Self> {
        if total_run_time <= 0 {
            return Err(SimError::invalid_job(
                input_position,
                format!("run_time must be > 0, got {total_run_time}"),
            ));
        }
        if arrival_time < 0 {
            return Err(SimError::invalid_job(
                input_position,
                format!("arrival_time must be >= 0, got {arrival_time}"),
            ));
        }
        Ok(Self {
            id,
            input_position,
            arrival_time,
            total_run_time,
            remaining_time: total_run_time,
            cpu_time_consumed: 0,
            completed: false,
            completion_time: None,
            wait_time: None,
            turnaround_time: None,
        })
    }

    /// Identifier assigned by arrival order (0-based).
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Position of this job in the caller's input.
    #[inline]
    pub fn input_position(&self) -> usize {
        self.input_position
    }

    #[inline]
    pub fn arrival_time(&self) -> i64 {
        self.arrival_time
    }

    #[inline]
    pub fn total_run_time(&self) -> i64 {
        self.total_run_time
    }

    #[inline]
    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    #[inline]
    pub fn cpu_time_consumed(&self) -> i64 {
        self.cpu_time_consumed
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the job is eligible to run at `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Simulated time at which the job finished.
    pub fn completion_time(&self) -> Option<i64> {
        self.completion_time
    }

    /// Time spent eligible but not executing. Set at completion.
    pub fn wait_time(&self) -> Option<i64> {
        self.wait_time
    }

    /// Time from arrival to completion. Set at completion.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.turnaround_time
    }

    /// Runs the job on the processor for up to `units` time units.
    ///
    /// The slice is clamped to the remaining work; the ledger advances by
    /// the executed amount and records the interval. When the remaining
    /// time reaches zero the job is marked completed and its wait and
    /// turnaround times are fixed.
    ///
    /// Returns the number of units actually executed (0 for a completed
    /// job or a non-positive request).
    pub fn execute(&mut self, units: i64, ledger: &mut TimeLedger) -> i64 {
        if self.completed || units <= 0 {
            return 0;
        }
        let slice = units.min(self.remaining_time);
        ledger.run(self.id, slice);
        self.remaining_time -= slice;
        self.cpu_time_consumed += slice;

        if self.remaining_time == 0 {
            self.finish(ledger.now());
        }
        slice
    }

    fn finish(&mut self, completion_time: i64) {
        let turnaround = completion_time - self.arrival_time;
        self.completed = true;
        self.completion_time = Some(completion_time);
        self.turnaround_time = Some(turnaround);
        self.wait_time = Some(turnaround - self.cpu_time_consumed);
    }
}

/// Unchecked serialized form of [`Job`].
#[derive(Deserialize)]
struct JobRecord {
    id: usize,
    input_position: usize,
    arrival_time: i64,
    total_run_time: i64,
    remaining_time: i64,
    cpu_time_consumed: i64,
    completed: bool,
    completion_time: Option<i64>,
    wait_time: Option<i64>,
    turnaround_time: Option<i64>,
}

impl TryFrom<JobRecord> for Job {
    type Error = SimError;

    fn try_from(record: JobRecord) -> SimResult<Self> {
        let position = record.input_position;
        let invalid = move |reason: &str| SimError::invalid_job(position, reason);

        let mut job = Job::new(
            record.id,
            position,
            record.arrival_time,
            record.total_run_time,
        )?;

        if record.remaining_time < 0
            || record.cpu_time_consumed < 0
            || record.remaining_time + record.cpu_time_consumed != record.total_run_time
        {
            return Err(invalid(
                "remaining_time + cpu_time_consumed must equal run_time",
            ));
        }
        if record.completed != (record.remaining_time == 0) {
            return Err(invalid("completed flag disagrees with remaining_time"));
        }
        job.remaining_time = record.remaining_time;
        job.cpu_time_consumed = record.cpu_time_consumed;

        if record.completed {
            let Some(completion) = record.completion_time else {
                return Err(invalid("completed job has no completion_time"));
            };
            if completion < record.arrival_time + record.total_run_time {
                return Err(invalid("completion_time is earlier than arrival + run_time"));
            }
            job.finish(completion);
            if job.turnaround_time != record.turnaround_time || job.wait_time != record.wait_time {
                return Err(invalid("wait/turnaround disagree with completion_time"));
            }
        } else if record.completion_time.is_some()
            || record.wait_time.is_some()
            || record.turnaround_time.is_some()
        {
            return Err(invalid("incomplete job carries completion results"));
        }

        Ok(job)
    }
}
