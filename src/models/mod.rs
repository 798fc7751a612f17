//! Simulation domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `JobSpec` | Caller-supplied `(run_time, arrival_time)` pair |
//! | `Job` | Job record with evolving time accounting |
//! | `TimeLedger` | The single simulation clock |
//! | `Timeline` | Executed intervals, one per dispatch |

mod job;
mod ledger;
mod timeline;

pub use job::{Job, JobSpec};
pub use ledger::TimeLedger;
pub use timeline::{ExecutionSlice, Timeline};
