//! Simulation clock.
//!
//! The ledger is the single authoritative clock shared by every policy.
//! Time only moves forward: idle gaps via [`TimeLedger::advance_to`],
//! execution via [`TimeLedger::advance_by`] / [`TimeLedger::run`].

use super::Timeline;

/// Current simulated time plus the intervals executed so far.
///
/// Idle time is not tracked here; it falls out of the timeline as the
/// gaps between slices.
#[derive(Debug, Clone, Default)]
pub struct TimeLedger {
    current_time: i64,
    timeline: Timeline,
}

impl TimeLedger {
    /// Creates a ledger at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.current_time
    }

    /// Intervals executed so far.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Consumes the ledger, returning the recorded timeline.
    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }

    /// Moves the clock forward to `time`, idling the processor.
    ///
    /// No-op when `time` is not in the future.
    pub fn advance_to(&mut self, time: i64) {
        if time > self.current_time {
            self.current_time = time;
        }
    }

    /// Moves the clock forward by `units` of work.
    pub fn advance_by(&mut self, units: i64) {
        self.current_time += units;
    }

    /// Executes `units` of `job_id` starting now and records the interval.
    pub fn run(&mut self, job_id: usize, units: i64) {
        let start = self.current_time;
        self.advance_by(units);
        self.timeline.record(job_id, start, self.current_time);
    }
}
