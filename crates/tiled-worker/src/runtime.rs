//! The named-task executor (spec §4.6): typed task bodies dispatched across
//! priority lanes, rate-limited per task name, retried with exponential
//! backoff, and cooperatively cancelled via a [`Job`] record.
//!
//! Grounded in `cloud_tasks::task::TaskQueueClient`'s "named queue, typed
//! request body, attempt bookkeeping" shape, adapted to an in-process
//! executor since the spec explicitly allows either (§4.6 "single-process
//! scheduler with a fixed pool, or a distributed one").

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tiled_catalog::{Job, JobStatus, Result};
use tracing::{error, info, warn};

use crate::job_store::SharedJobStore;
use crate::queue::{Priority, PriorityQueues};
use crate::rate_limit::RateLimiter;

/// One dispatchable unit of work. `job_id`, when set, is polled for
/// cancellation between attempts and updated with the task's terminal
/// status.
#[derive(Debug, Clone)]
pub struct TaskEnvelope {
    pub task_name: &'static str,
    pub params: serde_json::Value,
    pub job_id: Option<String>,
    pub attempt: u32,
}

impl TaskEnvelope {
    pub fn new(task_name: &'static str, params: serde_json::Value) -> Self {
        Self { task_name, params, job_id: None, attempt: 0 }
    }

    pub fn with_job(mut self, job_id: impl Into<String>) -> Self {
        self.job_id = Some(job_id.into());
        self
    }
}

/// A named task (spec §4.6 "bound methods on a task object, retry state,
/// max_retries"). Implementors declare their own queue affinity and retry
/// policy; the runtime owns dispatch, rate limiting, and backoff.
#[async_trait]
pub trait TaskHandler: Send + Sync {
    fn name(&self) -> &'static str;

    fn queue(&self) -> Priority {
        Priority::Standard
    }

    fn max_retries(&self) -> u32 {
        3
    }

    fn retry_base(&self) -> Duration {
        Duration::from_secs(1)
    }

    async fn run(&self, params: &serde_json::Value) -> Result<()>;
}

/// Owns the priority lanes, the task registry, the rate limiter, and the
/// job store that backs cancellation. Call [`Runtime::submit`] to enqueue
/// work and [`Runtime::run_worker`] (spawned per concurrent worker slot) to
/// drain it.
pub struct Runtime {
    queues: Arc<PriorityQueues<TaskEnvelope>>,
    handlers: HashMap<&'static str, Arc<dyn TaskHandler>>,
    job_store: SharedJobStore,
    rate_limiter: Arc<RateLimiter>,
}

impl Runtime {
    pub fn new(job_store: SharedJobStore, rate_limiter: RateLimiter) -> Self {
        Self {
            queues: Arc::new(PriorityQueues::new()),
            handlers: HashMap::new(),
            job_store,
            rate_limiter: Arc::new(rate_limiter),
        }
    }

    pub fn register(&mut self, handler: Arc<dyn TaskHandler>) {
        self.handlers.insert(handler.name(), handler);
    }

    pub fn job_store(&self) -> SharedJobStore {
        self.job_store.clone()
    }

    /// Lets a schedule driver check before calling [`Self::submit`], which
    /// panics for an unregistered task name.
    pub fn has_handler(&self, task_name: &str) -> bool {
        self.handlers.contains_key(task_name)
    }

    /// Enqueues `envelope` on the lane its handler declared. Panics if the
    /// task name was never registered -- a programmer error, not a runtime
    /// one.
    pub fn submit(&self, envelope: TaskEnvelope) {
        let handler = self.handlers.get(envelope.task_name).unwrap_or_else(|| {
            panic!("no handler registered for task {}", envelope.task_name)
        });
        self.queues.push(handler.queue(), envelope);
    }

    pub fn queues(&self) -> Arc<PriorityQueues<TaskEnvelope>> {
        self.queues.clone()
    }

    /// Pulls one task at a time and dispatches it. Intended to be spawned
    /// once per worker slot in the bounded pool (spec §5 "workers ... are
    /// parallel threads/processes with an overall concurrency cap").
    pub async fn run_worker(self: Arc<Self>) {
        loop {
            let Some(envelope) = self.queues.pop().await else {
                return;
            };
            self.dispatch(envelope).await;
        }
    }

    async fn dispatch(&self, envelope: TaskEnvelope) {
        let Some(handler) = self.handlers.get(envelope.task_name).cloned() else {
            error!(task = envelope.task_name, "dropping task with no registered handler");
            return;
        };

        if let Some(job_id) = &envelope.job_id {
            match self.job_store.is_cancelled(job_id).await {
                Ok(true) => {
                    info!(task = envelope.task_name, job_id, "job cancelled, skipping dispatch");
                    return;
                }
                Ok(false) => {}
                Err(err) => warn!(task = envelope.task_name, job_id, %err, "job store lookup failed, proceeding anyway"),
            }
        }

        if !self.rate_limiter.try_acquire(handler.name()).await {
            // Budget exhausted this minute: requeue after a short delay
            // rather than spinning or dropping the task.
            let queues = self.queues.clone();
            let priority = handler.queue();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(1)).await;
                queues.push(priority, envelope);
            });
            return;
        }

        if let Some(job_id) = &envelope.job_id {
            if envelope.attempt == 0 {
                let _ = self.job_store.update_status(job_id, JobStatus::Running).await;
            }
        }

        match handler.run(&envelope.params).await {
            Ok(()) => {
                if let Some(job_id) = &envelope.job_id {
                    let _ = self.job_store.update_status(job_id, JobStatus::Completed).await;
                }
            }
            Err(err) => self.handle_failure(handler, envelope, err).await,
        }
    }

    async fn handle_failure(&self, handler: Arc<dyn TaskHandler>, mut envelope: TaskEnvelope, err: tiled_catalog::Error) {
        warn!(task = envelope.task_name, attempt = envelope.attempt, %err, "task attempt failed");

        if envelope.attempt + 1 >= handler.max_retries() {
            error!(task = envelope.task_name, attempts = envelope.attempt + 1, %err, "task exhausted retries");
            if let Some(job_id) = &envelope.job_id {
                let _ = self.job_store.update_status(job_id, JobStatus::Failed).await;
            }
            return;
        }

        // countdown := base * 2^attempt (spec §4.6).
        let countdown = handler.retry_base().saturating_mul(1 << envelope.attempt.min(16));
        envelope.attempt += 1;
        let queues = self.queues.clone();
        let priority = handler.queue();
        tokio::spawn(async move {
            tokio::time::sleep(countdown).await;
            queues.push(priority, envelope);
        });
    }
}

/// Convenience for callers that want a `Job` record created and submitted
/// in one step (the common warming-task entry point).
pub async fn submit_job(runtime: &Runtime, kind: tiled_catalog::JobKind, task_name: &'static str, params: serde_json::Value) -> Result<Job> {
    let job = Job::new(kind, params.clone());
    runtime.job_store.put(job.clone()).await?;
    runtime.submit(TaskEnvelope::new(task_name, params).with_job(job.job_id.clone()));
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_store::InMemoryJobStore;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CountingHandler {
        calls: Arc<AtomicU32>,
        fail_until: u32,
    }

    #[async_trait]
    impl TaskHandler for CountingHandler {
        fn name(&self) -> &'static str {
            "counting_task"
        }

        fn retry_base(&self) -> Duration {
            Duration::from_millis(5)
        }

        async fn run(&self, _params: &serde_json::Value) -> Result<()> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_until {
                return Err(tiled_catalog::Error::Transient("flaky".into()));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn a_succeeding_task_completes_its_job() {
        let job_store: SharedJobStore = Arc::new(InMemoryJobStore::new());
        let mut runtime = Runtime::new(job_store.clone(), RateLimiter::new());
        let calls = Arc::new(AtomicU32::new(0));
        runtime.register(Arc::new(CountingHandler { calls: calls.clone(), fail_until: 0 }));
        let runtime = Arc::new(runtime);

        let job = submit_job(&runtime, tiled_catalog::JobKind::CachePoint, "counting_task", serde_json::json!({})).await.unwrap();

        let worker = tokio::spawn(runtime.clone().run_worker());
        tokio::time::sleep(Duration::from_millis(50)).await;
        worker.abort();

        let stored = job_store.get(&job.job_id).await.unwrap().unwrap();
        assert_eq!(stored.status, tiled_catalog::JobStatus::Completed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn a_task_retries_after_a_transient_failure_then_succeeds() {
        let job_store: SharedJobStore = Arc::new(InMemoryJobStore::new());
        let mut runtime = Runtime::new(job_store.clone(), RateLimiter::new());
        let calls = Arc::new(AtomicU32::new(0));
        runtime.register(Arc::new(CountingHandler { calls: calls.clone(), fail_until: 2 }));
        let runtime = Arc::new(runtime);

        let job = submit_job(&runtime, tiled_catalog::JobKind::CachePoint, "counting_task", serde_json::json!({})).await.unwrap();

        let worker = tokio::spawn(runtime.clone().run_worker());
        tokio::time::sleep(Duration::from_millis(200)).await;
        worker.abort();

        let stored = job_store.get(&job.job_id).await.unwrap().unwrap();
        assert_eq!(stored.status, tiled_catalog::JobStatus::Completed);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn cancelling_a_job_stops_its_task_from_dispatching() {
        let job_store: SharedJobStore = Arc::new(InMemoryJobStore::new());
        let mut runtime = Runtime::new(job_store.clone(), RateLimiter::new());
        let calls = Arc::new(AtomicU32::new(0));
        runtime.register(Arc::new(CountingHandler { calls: calls.clone(), fail_until: 0 }));
        let runtime = Arc::new(runtime);

        let job = submit_job(&runtime, tiled_catalog::JobKind::CachePoint, "counting_task", serde_json::json!({})).await.unwrap();
        job_store.update_status(&job.job_id, JobStatus::Cancelled).await.unwrap();

        let worker = tokio::spawn(runtime.clone().run_worker());
        tokio::time::sleep(Duration::from_millis(50)).await;
        worker.abort();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
