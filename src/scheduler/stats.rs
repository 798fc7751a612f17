//! Schedule statistics.
//!
//! Computes per-job and aggregate timing metrics from completed job
//! records and the execution timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion − arrival |
//! | Wait | turnaround − CPU time consumed |
//! | Response | first dispatch − arrival |
//! | Makespan | Latest completion time |
//! | Utilization | busy time / (makespan − first arrival) |
//! | Throughput | jobs / (makespan − first arrival) |
//!
//! Averages use floating-point division over all jobs.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::models::{Job, Timeline};

/// Timing results for one completed job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStats {
    pub id: usize,
    pub input_position: usize,
    pub arrival_time: i64,
    pub run_time: i64,
    pub completion_time: i64,
    pub turnaround_time: i64,
    pub wait_time: i64,
    /// Time from arrival to first dispatch. `None` if the timeline has no
    /// slice for this job.
    pub response_time: Option<i64>,
}

/// Aggregate statistics for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Per-job results, in canonical job order.
    pub jobs: Vec<JobStats>,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean wait time.
    pub avg_wait: f64,
    /// Mean response time over jobs with a known first dispatch.
    pub avg_response: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Total CPU time spent executing jobs.
    pub busy_time: i64,
    /// Idle time between the first arrival and the makespan.
    pub idle_time: i64,
    /// Fraction of the active span the CPU was busy (0.0..1.0).
    pub utilization: f64,
    /// Completed jobs per time unit over the active span.
    pub throughput: f64,
    /// Dispatches that switched to a different job.
    pub context_switches: usize,
}

impl ScheduleStats {
    /// Computes statistics from completed jobs and their timeline.
    ///
    /// # Errors
    /// - [`SimError::EmptyInput`] if `jobs` is empty.
    /// - [`SimError::JobNotCompleted`] if any job is still running.
    pub fn calculate(jobs: &[Job], timeline: &Timeline) -> SimResult<Self> {
        if jobs.is_empty() {
            return Err(SimError::EmptyInput);
        }

        let mut per_job = Vec::with_capacity(jobs.len());
        let mut total_turnaround: i64 = 0;
        let mut total_wait: i64 = 0;
        let mut total_response: i64 = 0;
        let mut responded: usize = 0;
        let mut busy: i64 = 0;
        let first_starts = timeline.first_starts();

        for job in jobs {
            let (Some(completion), Some(turnaround), Some(wait)) =
                (job.completion_time(), job.turnaround_time(), job.wait_time())
            else {
                return Err(SimError::JobNotCompleted(job.id()));
            };

            let response = first_starts
                .get(&job.id())
                .map(|start| start - job.arrival_time());
            if let Some(r) = response {
                total_response += r;
                responded += 1;
            }

            total_turnaround += turnaround;
            total_wait += wait;
            busy += job.cpu_time_consumed();

            per_job.push(JobStats {
                id: job.id(),
                input_position: job.input_position(),
                arrival_time: job.arrival_time(),
                run_time: job.total_run_time(),
                completion_time: completion,
                turnaround_time: turnaround,
                wait_time: wait,
                response_time: response,
            });
        }

        let n = jobs.len() as f64;
        let makespan = per_job.iter().map(|j| j.completion_time).max().unwrap_or(0);
        let first_arrival = per_job.iter().map(|j| j.arrival_time).min().unwrap_or(0);
        let span = makespan - first_arrival;

        // span > 0 whenever a job completed with positive run time
        let (utilization, throughput) = if span > 0 {
            (busy as f64 / span as f64, n / span as f64)
        } else {
            (0.0, 0.0)
        };

        let avg_response = if responded == 0 {
            0.0
        } else {
            total_response as f64 / responded as f64
        };

        Ok(Self {
            jobs: per_job,
            avg_turnaround: total_turnaround as f64 / n,
            avg_wait: total_wait as f64 / n,
            avg_response,
            makespan,
            busy_time: busy,
            idle_time: (span - busy).max(0),
            utilization,
            throughput,
            context_switches: timeline.context_switches(),
        })
    }

    /// `(avg_turnaround, avg_wait)`.
    pub fn averages(&self) -> (f64, f64) {
        (self.avg_turnaround, self.avg_wait)
    }

    /// Per-job `(id, turnaround_time, wait_time)` in canonical order.
    pub fn outcomes(&self) -> impl Iterator<Item = (usize, i64, i64)> + '_ {
        self.jobs
            .iter()
            .map(|j| (j.id, j.turnaround_time, j.wait_time))
    }

    /// Total turnaround across all jobs.
    pub fn total_turnaround(&self) -> i64 {
        self.jobs.iter().map(|j| j.turnaround_time).sum()
    }

    /// Total wait across all jobs.
    pub fn total_wait(&self) -> i64 {
        self.jobs.iter().map(|j| j.wait_time).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeLedger;

    fn completed(id: usize, arrival: i64, run: i64, ledger: &mut TimeLedger) -> Job {
        let mut job = Job::new(id, id, arrival, run).unwrap();
        ledger.advance_to(arrival);
        job.execute(run, ledger);
        job
    }

    #[test]
    fn test_stats_basic() {
        let mut ledger = TimeLedger::new();
        let jobs = vec![
            completed(0, 0, 5, &mut ledger),
            completed(1, 1, 3, &mut ledger),
        ];
        let stats = ScheduleStats::calculate(&jobs, ledger.timeline()).unwrap();

        let outcomes: Vec<_> = stats.outcomes().collect();
        assert_eq!(outcomes, vec![(0, 5, 0), (1, 7, 4)]);
        assert!((stats.avg_turnaround - 6.0).abs() < 1e-10);
        assert!((stats.avg_wait - 2.0).abs() < 1e-10);
        assert_eq!(stats.makespan, 8);
        assert_eq!(stats.busy_time, 8);
        assert_eq!(stats.idle_time, 0);
        assert!((stats.utilization - 1.0).abs() < 1e-10);
        assert_eq!(stats.context_switches, 1);
    }

    #[test]
    fn test_stats_non_integer_average() {
        let mut ledger = TimeLedger::new();
        let jobs = vec![
            completed(0, 0, 1, &mut ledger),
            completed(1, 0, 2, &mut ledger),
        ];
        let stats = ScheduleStats::calculate(&jobs, ledger.timeline()).unwrap();
        // turnarounds 1 and 3 → 2.0; waits 0 and 1 → 0.5
        assert!((stats.avg_turnaround - 2.0).abs() < 1e-10);
        assert!((stats.avg_wait - 0.5).abs() < 1e-10);
        assert_eq!(stats.averages(), (stats.avg_turnaround, stats.avg_wait));
    }

    #[test]
    fn test_stats_idle_and_utilization() {
        let mut ledger = TimeLedger::new();
        let jobs = vec![
            completed(0, 2, 2, &mut ledger),
            completed(1, 8, 2, &mut ledger),
        ];
        let stats = ScheduleStats::calculate(&jobs, ledger.timeline()).unwrap();
        // span 2..10 = 8, busy 4
        assert_eq!(stats.makespan, 10);
        assert_eq!(stats.idle_time, 4);
        assert!((stats.utilization - 0.5).abs() < 1e-10);
        assert!((stats.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_stats_response_time() {
        let mut ledger = TimeLedger::new();
        let mut a = Job::new(0, 0, 0, 4).unwrap();
        let mut b = Job::new(1, 1, 1, 1).unwrap();
        a.execute(1, &mut ledger);
        a.execute(1, &mut ledger);
        b.execute(1, &mut ledger);
        a.execute(2, &mut ledger);

        let stats = ScheduleStats::calculate(&[a, b], ledger.timeline()).unwrap();
        assert_eq!(stats.jobs[0].response_time, Some(0));
        assert_eq!(stats.jobs[1].response_time, Some(1));
        assert!((stats.avg_response - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(
            ScheduleStats::calculate(&[], &Timeline::new()),
            Err(SimError::EmptyInput)
        );
    }

    #[test]
    fn test_stats_incomplete_job() {
        let job = Job::new(3, 0, 0, 5).unwrap();
        assert_eq!(
            ScheduleStats::calculate(&[job], &Timeline::new()),
            Err(SimError::JobNotCompleted(3))
        );
    }

    #[test]
    fn test_totals_match_averages() {
        let mut ledger = TimeLedger::new();
        let jobs = vec![
            completed(0, 0, 3, &mut ledger),
            completed(1, 1, 4, &mut ledger),
            completed(2, 1, 2, &mut ledger),
        ];
        let stats = ScheduleStats::calculate(&jobs, ledger.timeline()).unwrap();
        assert!((stats.total_turnaround() as f64 / 3.0 - stats.avg_turnaround).abs() < 1e-10);
        assert!((stats.total_wait() as f64 / 3.0 - stats.avg_wait).abs() < 1e-10);
    }
}
