//! Execution timeline.
//!
//! Records which job held the processor over which interval. Adjacent
//! intervals of the same job are merged, so each slice is one contiguous
//! run between dispatch and preemption (or completion).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A contiguous interval `[start, end)` during which one job executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Executing job.
    pub job_id: usize,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a slice.
    pub fn new(job_id: usize, start: i64, end: i64) -> Self {
        Self { job_id, start, end }
    }

    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered list of execution slices for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<ExecutionSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval, merging it into the previous slice when the
    /// same job continues without a gap.
    pub fn record(&mut self, job_id: usize, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.job_id == job_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(ExecutionSlice::new(job_id, start, end));
    }

    pub fn slices(&self) -> &[ExecutionSlice] {
        &self.slices
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Total time the processor was executing.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(ExecutionSlice::duration).sum()
    }

    /// First dispatch time of every job that ran (job_id → start).
    pub fn first_starts(&self) -> HashMap<usize, i64> {
        let mut starts = HashMap::new();
        for slice in &self.slices {
            starts.entry(slice.job_id).or_insert(slice.start);
        }
        starts
    }

    /// Number of dispatches that switched to a different job.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].job_id != w[1].job_id)
            .count()
    }
}
