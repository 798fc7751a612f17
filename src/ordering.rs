//! Canonical job ordering.
//!
//! Jobs are sorted ascending by arrival time; simultaneous arrivals keep
//! their input order. The sorted position becomes the job id, and this
//! sequence is what every dispatching policy consumes.

use crate::error::SimResult;
use crate::models::{Job, JobSpec};

/// Builds job records in canonical order.
///
/// # Errors
/// The first invalid job (by input position) as
/// [`SimError::InvalidJob`](crate::SimError::InvalidJob).
pub fn order_jobs(specs: &[JobSpec]) -> SimResult<Vec<Job>> {
    let mut positions: Vec<usize> = (0..specs.len()).collect();
    // Stable: equal arrivals stay in input order.
    positions.sort_by_key(|&p| specs[p].arrival_time);

    let mut jobs = Vec::with_capacity(specs.len());
    for (id, &position) in positions.iter().enumerate() {
        let spec = &specs[position];
        jobs.push(Job::new(id, position, spec.arrival_time, spec.run_time)?);
    }
    Ok(jobs)
}
