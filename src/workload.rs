//! Job-list sources.
//!
//! - [`parse_jobs`]: the plain-text format, one job per line as
//!   `run_time arrival_time`.
//! - [`generate`]: seeded random workloads (Bernoulli arrivals per tick,
//!   each job either short or long).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::models::JobSpec;

/// Parses a textual job list.
///
/// Each non-blank line holds two whitespace-separated integers,
/// `run_time arrival_time`. Text after `#` is ignored. Values are not
/// range-checked here; [`crate::validation::validate_jobs`] does that.
///
/// # Errors
/// [`SimError::Parse`] with the 1-based line number for a line that does
/// not hold exactly two integers.
pub fn parse_jobs(input: &str) -> SimResult<Vec<JobSpec>> {
    let mut jobs = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(SimError::parse(
                line_no,
                format!("expected 'run_time arrival_time', got {} field(s)", fields.len()),
            ));
        }

        let run_time = parse_field(fields[0], "run_time", line_no)?;
        let arrival_time = parse_field(fields[1], "arrival_time", line_no)?;
        jobs.push(JobSpec::new(run_time, arrival_time));
    }

    Ok(jobs)
}

fn parse_field(token: &str, name: &str, line: usize) -> SimResult<i64> {
    token
        .parse()
        .map_err(|_| SimError::parse(line, format!("{name} is not an integer: '{token}'")))
}

/// Parameters for [`generate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of ticks over which arrivals are drawn.
    pub ticks: i64,
    /// Probability that a job arrives at a given tick.
    pub arrival_probability: f64,
    /// Probability that an arriving job is short.
    pub short_probability: f64,
    /// Run time of a short job.
    pub short_run_time: i64,
    /// Run time of a long job.
    pub long_run_time: i64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            ticks: 100,
            arrival_probability: 0.3,
            short_probability: 0.3,
            short_run_time: 2,
            long_run_time: 6,
        }
    }
}

impl WorkloadConfig {
    pub fn with_ticks(mut self, ticks: i64) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.arrival_probability = p;
        self
    }

    pub fn with_short_probability(mut self, p: f64) -> Self {
        self.short_probability = p;
        self
    }

    pub fn with_run_times(mut self, short: i64, long: i64) -> Self {
        self.short_run_time = short;
        self.long_run_time = long;
        self
    }
}

/// Generates a reproducible workload.
///
/// At most one job arrives per tick. The result is already in arrival
/// order, but callers should still go through
/// [`crate::ordering::order_jobs`].
pub fn generate(config: &WorkloadConfig, seed: u64) -> Vec<JobSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs = Vec::new();

    for tick in 0..config.ticks.max(0) {
        if rng.random::<f64>() < config.arrival_probability {
            let run_time = if rng.random::<f64>() < config.short_probability {
                config.short_run_time
            } else {
                config.long_run_time
            };
            jobs.push(JobSpec::new(run_time, tick));
        }
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let jobs = parse_jobs("5 0\n3 1\n").unwrap();
        assert_eq!(jobs, vec![JobSpec::new(5, 0), JobSpec::new(3, 1)]);
    }

    #[test]
    fn test_parse_blank_lines_and_comments() {
        let input = "# run arrival\n\n  8   0  \n4 1 # second\n\t2\t2\n";
        let jobs = parse_jobs(input).unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[2], JobSpec::new(2, 2));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = parse_jobs("5 0\n3\n").unwrap_err();
        assert!(matches!(err, SimError::Parse { line: 2, .. }));
        assert!(parse_jobs("1 2 3").is_err());
    }

    #[test]
    fn test_parse_not_integer() {
        let err = parse_jobs("5 zero").unwrap_err();
        assert_eq!(
            err,
            SimError::parse(1, "arrival_time is not an integer: 'zero'")
        );
    }

    #[test]
    fn test_parse_keeps_negative_values() {
        // Range checks belong to validation.
        assert_eq!(parse_jobs("-1 0").unwrap(), vec![JobSpec::new(-1, 0)]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_jobs("").unwrap().is_empty());
    }

    #[test]
    fn test_generate_is_reproducible() {
        let config = WorkloadConfig::default();
        assert_eq!(generate(&config, 7), generate(&config, 7));
    }

    #[test]
    fn test_generate_respects_config() {
        let config = WorkloadConfig::default()
            .with_ticks(50)
            .with_arrival_probability(1.0)
            .with_short_probability(0.0)
            .with_run_times(1, 9);
        let jobs = generate(&config, 0);
        assert_eq!(jobs.len(), 50);
        assert!(jobs.iter().all(|j| j.run_time == 9));
        assert!(jobs.windows(2).all(|w| w[0].arrival_time < w[1].arrival_time));
    }

    #[test]
    fn test_generate_no_arrivals() {
        let config = WorkloadConfig::default().with_arrival_probability(0.0);
        assert!(generate(&config, 3).is_empty());
    }
}
