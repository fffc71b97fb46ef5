//! [`TaskHandler`] wrappers so the four maintenance operations run on the
//! periodic schedule (spec §4.6 `SCHEDULE`) on the `maintenance` lane,
//! alongside their standalone free-function entry points used directly by
//! HTTP handlers.

use std::sync::Arc;

use async_trait::async_trait;
use tiled_backend::ImageryBackend;
use tiled_cache::{L2Store, L3Store};
use tiled_catalog::Result;
use tiled_warming::CatalogStore;
use tiled_worker::{Priority, TaskHandler};
use tracing::info;

use crate::expired::cleanup_expired;
use crate::health::health_check;
use crate::orphaned::cleanup_orphaned;
use crate::usage::analyze_usage;

const DEFAULT_CLEANUP_MAX_ITEMS: u64 = 10_000;
const DEFAULT_ORPHAN_MAX_OBJECTS: u64 = 10_000;
const DEFAULT_ANALYSIS_DAYS: u32 = 30;

pub struct CleanupExpiredTask {
    pub l2: Arc<dyn L2Store>,
}

#[async_trait]
impl TaskHandler for CleanupExpiredTask {
    fn name(&self) -> &'static str {
        "cleanup-expired"
    }

    fn queue(&self) -> Priority {
        Priority::Maintenance
    }

    async fn run(&self, _params: &serde_json::Value) -> Result<()> {
        let report = cleanup_expired(self.l2.as_ref(), false, Some(DEFAULT_CLEANUP_MAX_ITEMS)).await?;
        info!(
            scanned = report.scanned,
            expired = report.expired,
            deleted = report.deleted,
            bytes_freed = report.bytes_freed,
            "cleanup-expired finished"
        );
        Ok(())
    }
}

pub struct CleanupOrphanedTask {
    pub l2: Arc<dyn L2Store>,
    pub l3: Arc<dyn L3Store>,
}

#[async_trait]
impl TaskHandler for CleanupOrphanedTask {
    fn name(&self) -> &'static str {
        "cleanup-orphaned"
    }

    fn queue(&self) -> Priority {
        Priority::Maintenance
    }

    async fn run(&self, _params: &serde_json::Value) -> Result<()> {
        let report = cleanup_orphaned(self.l2.as_ref(), self.l3.as_ref(), "tiles/", DEFAULT_ORPHAN_MAX_OBJECTS).await?;
        info!(
            scanned = report.scanned,
            orphaned = report.orphaned,
            deleted = report.deleted,
            bytes_freed = report.bytes_freed,
            "cleanup-orphaned finished"
        );
        Ok(())
    }
}

pub struct AnalyzeUsageTask {
    pub l2: Arc<dyn L2Store>,
}

#[async_trait]
impl TaskHandler for AnalyzeUsageTask {
    fn name(&self) -> &'static str {
        "analyze-usage-patterns"
    }

    fn queue(&self) -> Priority {
        Priority::Maintenance
    }

    async fn run(&self, _params: &serde_json::Value) -> Result<()> {
        let analysis = analyze_usage(self.l2.as_ref(), DEFAULT_ANALYSIS_DAYS).await?;
        info!(samples = analysis.samples_analyzed, recommendations = ?analysis.recommendations, "analyze-usage-patterns finished");
        Ok(())
    }
}

pub struct HealthCheckTask {
    pub l2: Arc<dyn L2Store>,
    pub l3: Arc<dyn L3Store>,
    pub metadata: Arc<dyn CatalogStore>,
    pub backend: Arc<dyn ImageryBackend>,
}

#[async_trait]
impl TaskHandler for HealthCheckTask {
    fn name(&self) -> &'static str {
        "health-check"
    }

    fn queue(&self) -> Priority {
        Priority::Maintenance
    }

    fn max_retries(&self) -> u32 {
        // A failed health probe is data, not a transient fault -- never
        // retry, just report it next tick.
        1
    }

    async fn run(&self, _params: &serde_json::Value) -> Result<()> {
        let report = health_check(self.l2.as_ref(), self.l3.as_ref(), self.metadata.as_ref(), self.backend.as_ref()).await?;
        info!(status = ?report.status, "health-check finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiled_backend::{BBox, Layer};
    use tiled_cache::{InMemoryL2, InMemoryL3};
    use tiled_warming::InMemoryCatalogStore;

    struct NoopBackend;

    #[async_trait]
    impl ImageryBackend for NoopBackend {
        async fn lease_layer(&self, _layer: Layer, _region: BBox, _digest: &str) -> Result<String> {
            unimplemented!()
        }

        async fn fetch_tile(&self, _url_template: &str, _x: u32, _y: u32, _z: u8) -> Result<Vec<u8>> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn cleanup_expired_task_runs_against_an_empty_cache() {
        let task = CleanupExpiredTask { l2: Arc::new(InMemoryL2::new()) };
        assert_eq!(task.name(), "cleanup-expired");
        task.run(&serde_json::json!({})).await.unwrap();
    }

    #[tokio::test]
    async fn health_check_task_runs_against_fakes() {
        let task = HealthCheckTask {
            l2: Arc::new(InMemoryL2::new()),
            l3: Arc::new(InMemoryL3::new()),
            metadata: Arc::new(InMemoryCatalogStore::new()),
            backend: Arc::new(NoopBackend),
        };
        assert_eq!(task.name(), "health-check");
        task.run(&serde_json::json!({})).await.unwrap();
    }
}
