//! The `Job` record a long-running task polls between units of work to
//! discover cooperative cancellation (spec §4.6 "Cancellation").
//!
//! Grounded in the same trait-plus-in-memory-fake shape as
//! `tiled_cache::L2Store`: a small async trait so the production store
//! (eventually backed by the same L2 metadata store) can be swapped for a
//! fake in tests without pulling GCP credentials into unit tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tiled_catalog::{Error, Job, JobStatus, Result};
use tokio::sync::Mutex;

#[async_trait]
pub trait JobStore: Send + Sync {
    async fn put(&self, job: Job) -> Result<()>;
    async fn get(&self, job_id: &str) -> Result<Option<Job>>;
    async fn update_status(&self, job_id: &str, status: JobStatus) -> Result<()>;
    async fn set_progress(&self, job_id: &str, progress: f32) -> Result<()>;

    /// Whether the job has been marked cancelled. Tasks call this between
    /// units of work; `Ok(false)` on a missing job (nothing to cancel).
    async fn is_cancelled(&self, job_id: &str) -> Result<bool> {
        Ok(self.get(job_id).await?.is_some_and(|job| job.is_cancelled()))
    }
}

#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: Mutex<HashMap<String, Job>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn put(&self, job: Job) -> Result<()> {
        self.jobs.lock().await.insert(job.job_id.clone(), job);
        Ok(())
    }

    async fn get(&self, job_id: &str) -> Result<Option<Job>> {
        Ok(self.jobs.lock().await.get(job_id).cloned())
    }

    async fn update_status(&self, job_id: &str, status: JobStatus) -> Result<()> {
        let mut jobs = self.jobs.lock().await;
        let job = jobs.get_mut(job_id).ok_or_else(|| Error::not_found(format!("job {job_id}")))?;
        match status {
            JobStatus::Running => job.start(),
            JobStatus::Completed => job.complete(),
            JobStatus::Failed => job.fail(),
            JobStatus::Cancelled => job.cancel(),
            JobStatus::Pending => {}
        }
        Ok(())
    }

    async fn set_progress(&self, job_id: &str, progress: f32) -> Result<()> {
        let mut jobs = self.jobs.lock().await;
        let job = jobs.get_mut(job_id).ok_or_else(|| Error::not_found(format!("job {job_id}")))?;
        job.progress = progress;
        Ok(())
    }
}

pub type SharedJobStore = Arc<dyn JobStore>;

#[cfg(test)]
mod tests {
    use super::*;
    use tiled_catalog::JobKind;

    #[tokio::test]
    async fn cancelling_a_job_is_observable_by_is_cancelled() {
        let store = InMemoryJobStore::new();
        let job = Job::new(JobKind::CachePoint, serde_json::json!({"point_id": "p1"}));
        let job_id = job.job_id.clone();
        store.put(job).await.unwrap();

        assert!(!store.is_cancelled(&job_id).await.unwrap());
        store.update_status(&job_id, JobStatus::Cancelled).await.unwrap();
        assert!(store.is_cancelled(&job_id).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_job_is_treated_as_not_cancelled() {
        let store = InMemoryJobStore::new();
        assert!(!store.is_cancelled("nonexistent").await.unwrap());
    }
}
