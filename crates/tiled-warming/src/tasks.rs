//! `cache_point`, `cache_point_batch`, and `cache_campaign` (spec §4.7),
//! grounded in `original_source/app/tasks/cache_tasks.py`'s warming flow
//! (per-point, per-year, per-vis-param, per-zoom tile scheduling, and the
//! campaign-level mark-InProgress -> query-uncached -> batch -> finalize
//! sequence).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tiled_cache::HybridCache;
use tiled_catalog::{CatalogPoint, Error, Result};
use tiled_geometry::{cache_key, latlon_to_tile, TileKey};
use tiled_pipeline::TilePipeline;
use tiled_worker::{submit_job, JobKind, JobStatus, Priority, Runtime, TaskEnvelope, TaskHandler};
use tracing::{info, warn};

use crate::adaptive::AdaptiveConcurrency;
use crate::catalog_store::SharedCatalogStore;
use crate::priority::{sort_points_by_priority, zoom_levels};

fn render_params_digest(year: u16, vis_param: &str) -> String {
    format!("{year}_{vis_param}")
}

/// Caches every `(year, vis_param, zoom)` tile covering one point (spec
/// §4.7 `cache_point`). Updates `cached`/`cache_stats` on the stored point
/// once every tile has been scheduled and attempted.
pub async fn cache_point(catalog: &SharedCatalogStore, pipeline: &TilePipeline, point_id: &str) -> Result<()> {
    let mut point: CatalogPoint = catalog.get_point(point_id).await?;
    let campaign = catalog.get_campaign(&point.campaign_id).await?;

    let layer = tiled_geometry::Layer::parse(&campaign.image_type)
        .ok_or_else(|| Error::invalid(format!("campaign {} has unknown image_type {}", campaign.campaign_id, campaign.image_type)))?;

    let mut scheduled = 0u64;
    for year in campaign.years() {
        for vis_param in &campaign.vis_params {
            for zoom in zoom_levels() {
                let tile = latlon_to_tile(point.latitude(), point.longitude(), zoom);
                let digest = render_params_digest(year, vis_param);
                scheduled += 1;
                match pipeline.serve_tile(layer, tile.x, tile.y, tile.z, &digest).await {
                    Ok(_) => point.cache_stats.record_success(),
                    Err(err) => {
                        warn!(point_id, year, vis_param, zoom, %err, "tile warming attempt failed");
                        point.cache_stats.record_failure();
                    }
                }
            }
        }
    }
    point.cache_stats.record_scheduled(scheduled);
    point.mark_cached();
    catalog.put_point(point).await?;
    Ok(())
}

/// Undoes [`cache_point`]: deletes exactly the cache keys that point's
/// warming pass would have written (same `(year, vis_param, zoom)` walk),
/// and marks the point uncached. Returns the number of keys removed.
pub async fn clear_point(catalog: &SharedCatalogStore, cache: &HybridCache, point_id: &str) -> Result<u64> {
    let mut point: CatalogPoint = catalog.get_point(point_id).await?;
    let campaign = catalog.get_campaign(&point.campaign_id).await?;

    let layer = tiled_geometry::Layer::parse(&campaign.image_type)
        .ok_or_else(|| Error::invalid(format!("campaign {} has unknown image_type {}", campaign.campaign_id, campaign.image_type)))?;

    let mut cleared = 0u64;
    for year in campaign.years() {
        for vis_param in &campaign.vis_params {
            for zoom in zoom_levels() {
                let tile = latlon_to_tile(point.latitude(), point.longitude(), zoom);
                let digest = render_params_digest(year, vis_param);
                let key = cache_key(&TileKey::new(layer, tile, digest));
                cleared += cache.delete_by_pattern(&key).await?;
            }
        }
    }

    point.cached = false;
    point.cached_at = None;
    point.cache_stats = Default::default();
    catalog.put_point(point).await?;
    Ok(cleared)
}

/// Clears every point belonging to a campaign (see [`clear_point`]) and
/// resets the campaign's own caching status/stats.
pub async fn clear_campaign(catalog: &SharedCatalogStore, cache: &HybridCache, campaign_id: &str) -> Result<u64> {
    let mut campaign = catalog.get_campaign(campaign_id).await?;
    let points = catalog.points_for_campaign(campaign_id).await?;

    let mut cleared = 0u64;
    for point in points {
        cleared += clear_point(catalog, cache, &point.point_id).await?;
    }

    campaign.caching_status = tiled_catalog::CachingStatus::NotStarted;
    campaign.caching_stats = Default::default();
    campaign.total_points = 0;
    catalog.put_campaign(campaign).await?;
    Ok(cleared)
}

pub struct CachePointTask {
    pub catalog: SharedCatalogStore,
    pub pipeline: Arc<TilePipeline>,
}

#[async_trait]
impl TaskHandler for CachePointTask {
    fn name(&self) -> &'static str {
        "cache_point"
    }

    fn queue(&self) -> Priority {
        Priority::Low
    }

    async fn run(&self, params: &serde_json::Value) -> Result<()> {
        let point_id = params["point_id"].as_str().ok_or_else(|| Error::invalid("cache_point requires point_id"))?;
        cache_point(&self.catalog, &self.pipeline, point_id).await
    }
}

pub struct CachePointBatchTask {
    pub catalog: SharedCatalogStore,
    pub pipeline: Arc<TilePipeline>,
    pub concurrency: Arc<AdaptiveConcurrency>,
}

#[async_trait]
impl TaskHandler for CachePointBatchTask {
    fn name(&self) -> &'static str {
        "cache_point_batch"
    }

    fn queue(&self) -> Priority {
        Priority::Low
    }

    async fn run(&self, params: &serde_json::Value) -> Result<()> {
        let point_ids: Vec<String> = serde_json::from_value(params["point_ids"].clone())
            .map_err(|e| Error::invalid(format!("cache_point_batch requires point_ids: {e}")))?;

        self.concurrency.maybe_recompute().await;
        let semaphore = self.concurrency.semaphore();

        let mut handles = Vec::with_capacity(point_ids.len());
        for point_id in point_ids {
            let catalog = self.catalog.clone();
            let pipeline = self.pipeline.clone();
            let permit = semaphore.clone().acquire_owned().await.expect("semaphore never closed");
            handles.push(tokio::spawn(async move {
                let _permit = permit;
                cache_point(&catalog, &pipeline, &point_id).await
            }));
        }

        let mut first_err = None;
        for handle in handles {
            if let Ok(Err(err)) = handle.await {
                warn!(%err, "a point in the batch failed to warm");
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub struct CacheCampaignTask {
    pub catalog: SharedCatalogStore,
    /// `Weak` because the runtime holds this handler in its registry --
    /// a strong `Arc<Runtime>` here would be a reference cycle.
    pub runtime: std::sync::Weak<Runtime>,
    pub batch_size_default: usize,
}

#[async_trait]
impl TaskHandler for CacheCampaignTask {
    fn name(&self) -> &'static str {
        "cache_campaign"
    }

    fn queue(&self) -> Priority {
        Priority::Standard
    }

    async fn run(&self, params: &serde_json::Value) -> Result<()> {
        let runtime = self.runtime.upgrade().ok_or_else(|| Error::Fatal("runtime dropped before cache_campaign ran".to_string()))?;

        let campaign_id = params["campaign_id"].as_str().ok_or_else(|| Error::invalid("cache_campaign requires campaign_id"))?;
        let batch_size = params["batch_size"].as_u64().map(|n| n as usize).unwrap_or(self.batch_size_default).max(1);
        let priority_mode = params["priority_mode"].as_bool().unwrap_or(false);

        let mut campaign = self.catalog.get_campaign(campaign_id).await?;
        let mut points = self.catalog.uncached_points(campaign_id).await?;
        if priority_mode {
            points.retain(|p| p.enhance);
        }
        sort_points_by_priority(&mut points);
        campaign.start(points.len() as u64);
        self.catalog.put_campaign(campaign.clone()).await?;

        let job_store = runtime.job_store();
        let mut batch_job_ids = Vec::new();
        for batch in points.chunks(batch_size) {
            let point_ids: Vec<String> = batch.iter().map(|p| p.point_id.clone()).collect();
            let job = submit_job(&runtime, JobKind::CachePointBatch, "cache_point_batch", serde_json::json!({ "point_ids": point_ids })).await?;
            batch_job_ids.push(job.job_id);
        }

        info!(campaign_id, batches = batch_job_ids.len(), "campaign batches submitted");

        for job_id in &batch_job_ids {
            loop {
                match job_store.get(job_id).await? {
                    Some(job) if job.status == JobStatus::Completed || job.status == JobStatus::Failed => break,
                    _ => tokio::time::sleep(Duration::from_millis(50)).await,
                }
            }
        }

        let cached_count = self
            .catalog
            .points_for_campaign(campaign_id)
            .await?
            .iter()
            .filter(|p| p.cached)
            .count() as u64;

        let mut campaign = self.catalog.get_campaign(campaign_id).await?;
        campaign.finalize(cached_count);
        self.catalog.put_campaign(campaign).await?;

        Ok(())
    }
}

/// `warm-popular-regions`, the mandatory daily schedule entry (spec §4.6):
/// re-runs `cache_campaign` in priority mode against every campaign not yet
/// `Completed`. Grounded in `original_source/app/services/prewarm.py`'s
/// region pre-warming, generalized from an explicit bbox/zoom list to the
/// already-tracked catalog campaigns since this service has no separate
/// "popular region" registry.
pub struct WarmPopularRegionsTask {
    pub catalog: SharedCatalogStore,
    /// `Weak` for the same reason as `CacheCampaignTask::runtime`.
    pub runtime: std::sync::Weak<Runtime>,
    pub batch_size_default: usize,
}

#[async_trait]
impl TaskHandler for WarmPopularRegionsTask {
    fn name(&self) -> &'static str {
        "warm-popular-regions"
    }

    fn queue(&self) -> Priority {
        Priority::Maintenance
    }

    async fn run(&self, _params: &serde_json::Value) -> Result<()> {
        let runtime = self.runtime.upgrade().ok_or_else(|| Error::Fatal("runtime dropped before warm-popular-regions ran".to_string()))?;

        let campaigns = self.catalog.list_campaigns().await?;
        let mut started = 0;
        for campaign in campaigns {
            if campaign.caching_status == tiled_catalog::CachingStatus::Completed {
                continue;
            }
            start_campaign(&runtime, &campaign.campaign_id, self.batch_size_default, true).await?;
            started += 1;
        }
        info!(started, "warm-popular-regions submitted campaign warming jobs");
        Ok(())
    }
}

/// Convenience entry point mirroring `submit_job` for the other tasks:
/// creates and tracks a `Job`, then enqueues `cache_campaign`.
pub async fn start_campaign(runtime: &Runtime, campaign_id: &str, batch_size: usize, priority_mode: bool) -> Result<tiled_catalog::Job> {
    submit_job(
        runtime,
        JobKind::CacheCampaign,
        "cache_campaign",
        serde_json::json!({ "campaign_id": campaign_id, "batch_size": batch_size, "priority_mode": priority_mode }),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_store::InMemoryCatalogStore;
    use async_trait::async_trait as _async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tiled_backend::{BBox, ImageryBackend};
    use tiled_cache::{CacheConfig, HybridCache, InMemoryL2, InMemoryL3};
    use tiled_catalog::Campaign;
    use tiled_geometry::Layer;
    use tiled_singleflight::SingleflightLock;
    use tiled_worker::{InMemoryJobStore, RateLimiter};

    struct CountingBackend {
        fetch_calls: AtomicU32,
    }

    #[_async_trait]
    impl ImageryBackend for CountingBackend {
        async fn lease_layer(&self, _layer: Layer, _region: BBox, _digest: &str) -> Result<String> {
            Ok("https://example.test/{z}/{x}/{y}".to_string())
        }

        async fn fetch_tile(&self, _url_template: &str, _x: u32, _y: u32, _z: u8) -> Result<Vec<u8>> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            Ok(b"warm-bytes".to_vec())
        }
    }

    fn build_pipeline() -> (Arc<TilePipeline>, Arc<CountingBackend>) {
        let (pipeline, _cache, backend) = build_pipeline_with_cache();
        (pipeline, backend)
    }

    fn build_pipeline_with_cache() -> (Arc<TilePipeline>, Arc<HybridCache>, Arc<CountingBackend>) {
        let l2: Arc<dyn tiled_cache::L2Store> = Arc::new(InMemoryL2::new());
        let cache = Arc::new(HybridCache::new(l2.clone(), Arc::new(InMemoryL3::new()), CacheConfig::default()));
        let lock = Arc::new(SingleflightLock::new(l2));
        let backend = Arc::new(CountingBackend { fetch_calls: AtomicU32::new(0) });
        let pipeline = Arc::new(TilePipeline::new(cache.clone(), lock, backend.clone(), Duration::from_secs(3600), Duration::from_secs(3600)));
        (pipeline, cache, backend)
    }

    #[tokio::test]
    async fn cache_point_caches_every_year_vis_param_zoom_combination() {
        let catalog: SharedCatalogStore = Arc::new(InMemoryCatalogStore::new());
        let mut campaign = Campaign::new("c1", 2023, 2024, "sentinel");
        campaign.vis_params = vec!["tvi-green".to_string()];
        catalog.put_campaign(campaign).await.unwrap();
        catalog.put_point(CatalogPoint::new("p1", "c1", 10.0, 20.0)).await.unwrap();

        let (pipeline, backend) = build_pipeline();
        cache_point(&catalog, &pipeline, "p1").await.unwrap();

        let point = catalog.get_point("p1").await.unwrap();
        assert!(point.cached);
        // 2 years * 1 vis_param * 3 zoom levels = 6 tiles.
        assert_eq!(point.cache_stats.cached_tiles, 6);
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn clear_point_removes_exactly_what_cache_point_wrote() {
        let catalog: SharedCatalogStore = Arc::new(InMemoryCatalogStore::new());
        let mut campaign = Campaign::new("c1", 2023, 2024, "sentinel");
        campaign.vis_params = vec!["tvi-green".to_string()];
        catalog.put_campaign(campaign).await.unwrap();
        catalog.put_point(CatalogPoint::new("p1", "c1", 10.0, 20.0)).await.unwrap();

        let (pipeline, cache, _backend) = build_pipeline_with_cache();
        cache_point(&catalog, &pipeline, "p1").await.unwrap();

        let cleared = clear_point(&catalog, &cache, "p1").await.unwrap();
        assert_eq!(cleared, 6);

        let point = catalog.get_point("p1").await.unwrap();
        assert!(!point.cached);
        assert_eq!(point.cache_stats.cached_tiles, 0);

        let tile = latlon_to_tile(point.latitude(), point.longitude(), zoom_levels().next().unwrap());
        let key = cache_key(&TileKey::new(Layer::Sentinel, tile, render_params_digest(2023, "tvi-green")));
        assert!(cache.get_png(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_campaign_clears_every_point_and_resets_status() {
        let catalog: SharedCatalogStore = Arc::new(InMemoryCatalogStore::new());
        let mut campaign = Campaign::new("c3", 2024, 2024, "sentinel");
        campaign.vis_params = vec!["tvi-green".to_string()];
        catalog.put_campaign(campaign).await.unwrap();
        for i in 0..3 {
            catalog.put_point(CatalogPoint::new(format!("p{i}"), "c3", 1.0 + i as f64, 2.0)).await.unwrap();
        }

        let (pipeline, cache, _backend) = build_pipeline_with_cache();
        for i in 0..3 {
            cache_point(&catalog, &pipeline, &format!("p{i}")).await.unwrap();
        }

        let cleared = clear_campaign(&catalog, &cache, "c3").await.unwrap();
        // 3 points * 1 year * 1 vis_param * 3 zoom levels = 9 tiles.
        assert_eq!(cleared, 9);

        let campaign = catalog.get_campaign("c3").await.unwrap();
        assert_eq!(campaign.caching_status, tiled_catalog::CachingStatus::NotStarted);
        for i in 0..3 {
            assert!(!catalog.get_point(&format!("p{i}")).await.unwrap().cached);
        }
    }

    #[tokio::test]
    async fn cache_campaign_finalizes_once_every_batch_completes() {
        let catalog: SharedCatalogStore = Arc::new(InMemoryCatalogStore::new());
        let mut campaign = Campaign::new("c2", 2024, 2024, "sentinel");
        campaign.vis_params = vec!["tvi-green".to_string()];
        catalog.put_campaign(campaign).await.unwrap();
        for i in 0..5 {
            catalog.put_point(CatalogPoint::new(format!("p{i}"), "c2", 1.0 + i as f64, 2.0)).await.unwrap();
        }

        let (pipeline, _backend) = build_pipeline();
        let job_store: Arc<dyn tiled_worker::JobStore> = Arc::new(InMemoryJobStore::new());
        let mut runtime = Runtime::new(job_store, RateLimiter::new());
        runtime.register(Arc::new(CachePointBatchTask {
            catalog: catalog.clone(),
            pipeline: pipeline.clone(),
            concurrency: Arc::new(AdaptiveConcurrency::new(10, 1, 20)),
        }));
        let runtime = Arc::new(runtime);
        let mut runtime_for_campaign = Runtime::new(runtime.job_store(), RateLimiter::new());
        runtime_for_campaign.register(Arc::new(CacheCampaignTask { catalog: catalog.clone(), runtime: Arc::downgrade(&runtime), batch_size_default: 2 }));
        let runtime_for_campaign = Arc::new(runtime_for_campaign);

        let job = start_campaign(&runtime_for_campaign, "c2", 2, false).await.unwrap();

        let batch_worker = tokio::spawn(runtime.clone().run_worker());
        let campaign_worker = tokio::spawn(runtime_for_campaign.clone().run_worker());

        for _ in 0..200 {
            if let Some(stored) = runtime_for_campaign.job_store().get(&job.job_id).await.unwrap() {
                if stored.status == JobStatus::Completed {
                    break;
                }
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        batch_worker.abort();
        campaign_worker.abort();

        let campaign = catalog.get_campaign("c2").await.unwrap();
        assert_eq!(campaign.caching_status, tiled_catalog::CachingStatus::Completed);
        assert_eq!(campaign.caching_stats.cached_tiles, 5);
    }

    #[tokio::test]
    async fn warm_popular_regions_skips_completed_campaigns() {
        let catalog: SharedCatalogStore = Arc::new(InMemoryCatalogStore::new());
        let mut done = Campaign::new("done", 2024, 2024, "sentinel");
        done.caching_status = tiled_catalog::CachingStatus::Completed;
        catalog.put_campaign(done).await.unwrap();
        catalog.put_campaign(Campaign::new("pending", 2024, 2024, "sentinel")).await.unwrap();

        let job_store: Arc<dyn tiled_worker::JobStore> = Arc::new(InMemoryJobStore::new());
        let mut runtime = Runtime::new(job_store, RateLimiter::new());
        runtime.register(Arc::new(CacheCampaignTask { catalog: catalog.clone(), runtime: std::sync::Weak::new(), batch_size_default: 10 }));
        let runtime = Arc::new(runtime);

        let task = WarmPopularRegionsTask { catalog: catalog.clone(), runtime: Arc::downgrade(&runtime), batch_size_default: 10 };
        task.run(&serde_json::json!({})).await.unwrap();

        let pending = runtime.job_store();
        let jobs_seen = pending.get(&tiled_catalog::Job::new(tiled_catalog::JobKind::CacheCampaign, serde_json::json!({ "campaign_id": "pending", "batch_size": 10, "priority_mode": true })).job_id).await.unwrap();
        assert!(jobs_seen.is_some());
    }
}
