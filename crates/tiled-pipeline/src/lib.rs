//! The tile-serving state machine (spec §4.5): validate, check cache,
//! singleflight-deduplicate production, lease/fetch from the backend, write
//! back, respond.

use std::sync::Arc;

use tiled_backend::ImageryBackend;
use tiled_cache::HybridCache;
use tiled_catalog::{Error, Result, VisParamRegistry};
use tiled_geometry::{cache_key, group_tiles_into_mosaics, meta_key, tile_bbox, Layer, Tile, TileKey};
use tiled_singleflight::{Lease, SingleflightLock};
use tracing::{info, instrument};

/// Grid granularity used to scope on-demand leases to a small neighborhood
/// of tiles rather than one lease per tile, so nearby on-demand requests for
/// the same render params share a lease (mirrors the mosaic grouping
/// warming uses, with a small fixed grid since on-demand requests don't
/// know their neighbors up front).
const LEASE_REGION_GRID: u32 = 8;

pub const DEFAULT_MIN_ZOOM: u8 = 6;
pub const DEFAULT_MAX_ZOOM: u8 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

pub struct TileResponse {
    pub bytes: bytes::Bytes,
    pub cache_status: CacheStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct ZoomRange {
    pub min: u8,
    pub max: u8,
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self { min: DEFAULT_MIN_ZOOM, max: DEFAULT_MAX_ZOOM }
    }
}

/// Validates a tile request per spec §4.5 "Validation rules".
pub fn validate_tile_request(zoom_range: ZoomRange, z: u8, layer: &str, vis_params: &VisParamRegistry, vis_param_name: &str) -> Result<Layer> {
    if z < zoom_range.min || z > zoom_range.max {
        return Err(Error::invalid(format!("zoom {z} outside [{},{}]", zoom_range.min, zoom_range.max)));
    }

    let layer = Layer::parse(layer).ok_or_else(|| Error::invalid(format!("unknown layer {layer}")))?;

    if !vis_params.contains(vis_param_name) {
        return Err(Error::invalid(format!("unrecognized vis param {vis_param_name}")));
    }

    Ok(layer)
}

/// Drives the spec §4.5 state machine for a single tile request.
pub struct TilePipeline {
    cache: Arc<HybridCache>,
    lock: Arc<SingleflightLock>,
    backend: Arc<dyn ImageryBackend>,
    png_ttl: std::time::Duration,
    meta_ttl: std::time::Duration,
}

impl TilePipeline {
    pub fn new(cache: Arc<HybridCache>, lock: Arc<SingleflightLock>, backend: Arc<dyn ImageryBackend>, png_ttl: std::time::Duration, meta_ttl: std::time::Duration) -> Self {
        Self { cache, lock, backend, png_ttl, meta_ttl }
    }

    #[instrument(skip(self), fields(layer = %layer, x, y, z))]
    pub async fn serve_tile(&self, layer: Layer, x: u32, y: u32, z: u8, render_params_digest: &str) -> Result<TileResponse> {
        let tile = Tile::new(x, y, z);
        let key = TileKey::new(layer, tile, render_params_digest);
        let cache_key = cache_key(&key);

        if let Some(bytes) = self.cache.get_png(&cache_key).await? {
            return Ok(TileResponse { bytes, cache_status: CacheStatus::Hit });
        }

        let holder_id = uuid::Uuid::new_v4().to_string();
        match self.lock.acquire(&cache_key, &holder_id).await? {
            Lease::Producer(guard) => {
                // Racer check: another producer may have finished between our
                // first cache read and winning the lock.
                if let Some(bytes) = self.cache.get_png(&cache_key).await? {
                    guard.release().await?;
                    return Ok(TileResponse { bytes, cache_status: CacheStatus::Hit });
                }

                let result = self.produce(layer, tile, render_params_digest, &cache_key).await;
                guard.release().await?;
                let bytes = result?;
                Ok(TileResponse { bytes, cache_status: CacheStatus::Miss })
            }
            Lease::Follower => match self.cache.get_png(&cache_key).await? {
                Some(bytes) => Ok(TileResponse { bytes, cache_status: CacheStatus::Hit }),
                // Holder failed without writing back: recover by producing ourselves.
                None => {
                    info!(cache_key, "singleflight holder left no tile behind, recovering");
                    let bytes = self.produce(layer, tile, render_params_digest, &cache_key).await?;
                    Ok(TileResponse { bytes, cache_status: CacheStatus::Miss })
                }
            },
        }
    }

    async fn produce(&self, layer: Layer, tile: Tile, render_params_digest: &str, cache_key: &str) -> Result<bytes::Bytes> {
        let region = group_tiles_into_mosaics(&[tile], LEASE_REGION_GRID)
            .into_iter()
            .next()
            .expect("a single-tile slice always yields exactly one mosaic");
        let region_meta_key = meta_key(layer, &region.region_id(), render_params_digest);

        let lease_url = match self.cache.get_meta(&region_meta_key).await? {
            Some(raw) => {
                let lease: StoredLease = serde_json::from_slice(&raw)
                    .map_err(|e| Error::Transient(format!("corrupt lease record: {e}")))?;
                if lease.is_expired() {
                    self.lease_and_store(layer, &region_meta_key, tile).await?
                } else {
                    lease.url_template
                }
            }
            None => self.lease_and_store(layer, &region_meta_key, tile).await?,
        };

        let bytes = self.backend.fetch_tile(&lease_url, tile.x, tile.y, tile.z).await?;
        let bytes = bytes::Bytes::from(bytes);
        self.cache.set_png(cache_key, bytes.clone()).await?;
        let _ = self.png_ttl; // ttl currently fixed on HybridCache; kept for future per-call overrides.
        Ok(bytes)
    }

    async fn lease_and_store(&self, layer: Layer, region_meta_key: &str, tile: Tile) -> Result<String> {
        let bbox = tile_bbox(tile);
        let url_template = self.backend.lease_layer(layer, bbox, region_meta_key).await?;
        let lease = StoredLease::new(url_template.clone());
        let raw = serde_json::to_vec(&lease).expect("StoredLease always serializes");
        self.cache.set_meta_with_ttl(region_meta_key, raw, self.meta_ttl).await?;
        Ok(url_template)
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct StoredLease {
    url_template: String,
    issued_at: timestamp::Timestamp,
}

impl StoredLease {
    const LIFESPAN_SECONDS: i64 = tiled_catalog::LIFESPAN_URL_SECONDS;

    fn new(url_template: String) -> Self {
        Self { url_template, issued_at: timestamp::Timestamp::now() }
    }

    fn is_expired(&self) -> bool {
        let age = (timestamp::Timestamp::now().as_seconds() - self.issued_at.as_seconds()).max(0);
        age > Self::LIFESPAN_SECONDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tiled_backend::ImageryBackend;
    use tiled_cache::{CacheConfig, InMemoryL2, InMemoryL3};
    use tiled_geometry::BBox;

    struct CountingBackend {
        lease_calls: AtomicU32,
        fetch_calls: AtomicU32,
    }

    #[async_trait]
    impl ImageryBackend for CountingBackend {
        async fn lease_layer(&self, _layer: Layer, _region: BBox, _digest: &str) -> Result<String> {
            self.lease_calls.fetch_add(1, Ordering::SeqCst);
            Ok("https://example.test/{z}/{x}/{y}".to_string())
        }

        async fn fetch_tile(&self, _url_template: &str, _x: u32, _y: u32, _z: u8) -> Result<Vec<u8>> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            Ok(b"tile-bytes".to_vec())
        }
    }

    fn build_pipeline(backend: Arc<CountingBackend>) -> TilePipeline {
        let l2: Arc<dyn tiled_cache::L2Store> = Arc::new(InMemoryL2::new());
        let cache = Arc::new(HybridCache::new(l2.clone(), Arc::new(InMemoryL3::new()), CacheConfig::default()));
        let lock = Arc::new(SingleflightLock::new(l2));
        TilePipeline::new(cache, lock, backend, std::time::Duration::from_secs(3600), std::time::Duration::from_secs(3600))
    }

    #[tokio::test]
    async fn cold_request_produces_via_the_backend() {
        let backend = Arc::new(CountingBackend { lease_calls: AtomicU32::new(0), fetch_calls: AtomicU32::new(0) });
        let pipeline = build_pipeline(backend.clone());

        let response = pipeline.serve_tile(Layer::Sentinel, 512, 384, 10, "wet_2023_0_tvi-false").await.unwrap();
        assert_eq!(response.cache_status, CacheStatus::Miss);
        assert_eq!(backend.lease_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn warm_request_is_a_cache_hit_with_no_backend_calls() {
        let backend = Arc::new(CountingBackend { lease_calls: AtomicU32::new(0), fetch_calls: AtomicU32::new(0) });
        let pipeline = build_pipeline(backend.clone());

        pipeline.serve_tile(Layer::Sentinel, 512, 384, 10, "wet_2023_0_tvi-false").await.unwrap();
        let second = pipeline.serve_tile(Layer::Sentinel, 512, 384, 10, "wet_2023_0_tvi-false").await.unwrap();

        assert_eq!(second.cache_status, CacheStatus::Hit);
        assert_eq!(backend.lease_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn concurrent_cold_requests_for_the_same_tile_produce_exactly_once() {
        let backend = Arc::new(CountingBackend { lease_calls: AtomicU32::new(0), fetch_calls: AtomicU32::new(0) });
        let pipeline = Arc::new(build_pipeline(backend.clone()));

        let mut handles = Vec::new();
        for _ in 0..20 {
            let pipeline = pipeline.clone();
            handles.push(tokio::spawn(async move {
                pipeline.serve_tile(Layer::Sentinel, 100, 200, 10, "dry_2022_0_default").await.unwrap()
            }));
        }

        let mut bodies = Vec::new();
        for handle in handles {
            bodies.push(handle.await.unwrap().bytes);
        }

        assert!(bodies.iter().all(|b| b == &bodies[0]));
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn validation_rejects_zoom_outside_range() {
        let registry = VisParamRegistry::with_defaults();
        let err = validate_tile_request(ZoomRange::default(), 30, "sentinel", &registry, "tvi-green").unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn validation_rejects_unknown_layer() {
        let registry = VisParamRegistry::with_defaults();
        let err = validate_tile_request(ZoomRange::default(), 10, "bogus", &registry, "tvi-green").unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }
}
