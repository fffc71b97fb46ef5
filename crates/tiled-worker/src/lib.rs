//! The background task system (spec §4.6): named tasks dispatched across
//! priority lanes, per-task rate limits, exponential-backoff retry, a
//! mandatory periodic schedule, and cooperative cancellation via [`Job`]
//! polling.

mod job_store;
mod queue;
mod rate_limit;
mod runtime;
mod schedule;

pub use job_store::{InMemoryJobStore, JobStore, SharedJobStore};
pub use queue::{Priority, PriorityQueues};
pub use rate_limit::{RateLimiter, DEFAULT_WARMING_LIMIT_PER_MINUTE};
pub use runtime::{submit_job, Runtime, TaskEnvelope, TaskHandler};
pub use schedule::{Cadence, ScheduleEntry, SCHEDULE};

pub use tiled_catalog::{Job, JobKind, JobStatus};
