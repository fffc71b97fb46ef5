use serde::{Deserialize, Serialize};
use timestamp::Timestamp;

/// Hashes a canonical JSON value into a stable job id.
///
/// `serde_json::Map` (without the `preserve_order` feature, which this
/// workspace does not enable) is backed by a `BTreeMap`, so `Value::Object`
/// always serializes its keys in sorted order regardless of how they were
/// inserted -- reordering a config's map keys before hashing is therefore a
/// no-op, which is exactly spec §3 invariant 7.
pub fn compute_job_id(config: &serde_json::Value) -> String {
    let canonical = serde_json::to_vec(config).expect("serde_json::Value always serializes");
    format!("{:x}", md5::compute(canonical))
}

/// The kind of background job a [`Job`] record tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    CachePoint,
    CacheCampaign,
    CachePointBatch,
    Embedding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

/// A warming/embedding job. `job_id` is deterministic over `config`
/// (`compute_job_id`), so resubmitting the same work is idempotent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    pub kind: JobKind,
    pub config: serde_json::Value,
    pub status: JobStatus,
    pub progress: f32,
    pub artifacts: Vec<String>,
    pub created_at: Timestamp,
}

impl Job {
    pub fn new(kind: JobKind, config: serde_json::Value) -> Self {
        let job_id = compute_job_id(&config);
        Self {
            job_id,
            kind,
            config,
            status: JobStatus::Pending,
            progress: 0.0,
            artifacts: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.status, JobStatus::Cancelled)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            JobStatus::Completed | JobStatus::Failed | JobStatus::Cancelled
        )
    }

    pub fn start(&mut self) {
        self.status = JobStatus::Running;
    }

    pub fn complete(&mut self) {
        self.status = JobStatus::Completed;
        self.progress = 1.0;
    }

    pub fn fail(&mut self) {
        self.status = JobStatus::Failed;
    }

    pub fn cancel(&mut self) {
        self.status = JobStatus::Cancelled;
    }

    pub fn push_artifact(&mut self, artifact: impl Into<String>) {
        self.artifacts.push(artifact.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_id_is_independent_of_key_order() {
        let a = json!({"campaign": "c1", "batch_size": 50, "priority": true});
        let b = json!({"priority": true, "batch_size": 50, "campaign": "c1"});

        assert_eq!(compute_job_id(&a), compute_job_id(&b));
    }

    #[test]
    fn job_id_is_independent_of_nested_key_order() {
        let a = json!({"outer": {"a": 1, "b": 2}});
        let b = json!({"outer": {"b": 2, "a": 1}});

        assert_eq!(compute_job_id(&a), compute_job_id(&b));
    }

    #[test]
    fn resubmitting_identical_config_reuses_the_job_id() {
        let config = json!({"campaign_id": "c2", "batch_size": 25});
        let job_a = Job::new(JobKind::CacheCampaign, config.clone());
        let job_b = Job::new(JobKind::CacheCampaign, config);

        assert_eq!(job_a.job_id, job_b.job_id);
    }
}
