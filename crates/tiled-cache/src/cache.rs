use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex as SyncMutex;
use serde::{Deserialize, Serialize};
use tiled_catalog::{Error, Result};
use tracing::warn;

use crate::l1::L1Cache;
use crate::l2::L2Store;
use crate::l3::L3Store;
use crate::sharding::{sharded_l3_key, tile_meta_key};

const L3_WRITE_ATTEMPTS: u32 = 3;
const L3_WRITE_BASE_BACKOFF: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CacheConfig {
    pub l1_max_entries: usize,
    pub l1_max_age: Duration,
    pub png_ttl: Duration,
    pub meta_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            l1_max_entries: 1000,
            l1_max_age: Duration::from_secs(3600),
            png_ttl: Duration::from_secs(30 * 24 * 3600),
            meta_ttl: Duration::from_secs(7 * 24 * 3600),
        }
    }
}

/// Metadata record mirrored into L2 alongside every L3 tile object (spec
/// §4.2 `set_png` step 3).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TileMetaRecord {
    l3_key: String,
    size: u64,
    created_at: timestamp::Timestamp,
    content_type: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub l1_size: u64,
    pub l2_keys: u64,
    pub l2_memory_bytes: u64,
    pub l3_objects_estimate: u64,
    pub l3_bytes_estimate: u64,
}

/// The three-tier tile cache: an in-process L1, a shared L2 metadata/KV
/// store, and a shared L3 object store (spec §4.2). Grounded in
/// `map-render::cache::TileCache`'s "thin struct wrapping a store client"
/// shape, generalized to three tiers with explicit failure semantics.
pub struct HybridCache {
    l1: SyncMutex<L1Cache>,
    l2: Arc<dyn L2Store>,
    l3: Arc<dyn L3Store>,
    config: CacheConfig,
}

impl HybridCache {
    pub fn new(l2: Arc<dyn L2Store>, l3: Arc<dyn L3Store>, config: CacheConfig) -> Self {
        Self {
            l1: SyncMutex::new(L1Cache::new(config.l1_max_entries, config.l1_max_age)),
            l2,
            l3,
            config,
        }
    }

    /// Direct handle to the L2 tier, for maintenance jobs (cleanup, usage
    /// analysis) that need to scan or inspect keys the cache API doesn't
    /// expose.
    pub fn l2(&self) -> Arc<dyn L2Store> {
        self.l2.clone()
    }

    /// Direct handle to the L3 tier, for the same reason as [`Self::l2`].
    pub fn l3(&self) -> Arc<dyn L3Store> {
        self.l3.clone()
    }

    /// Spec §4.2 `get_png`.
    pub async fn get_png(&self, key: &str) -> Result<Option<bytes::Bytes>> {
        if let Some(bytes) = self.l1.lock().get(key) {
            return Ok(Some(bytes));
        }

        let meta_key = tile_meta_key(key);
        let Some(raw_meta) = self.l2.get(&meta_key).await? else {
            return Ok(None);
        };

        // Keep the metadata record alive; this tile is still being read.
        self.l2.refresh_ttl(&meta_key, self.config.meta_ttl).await?;

        let meta: TileMetaRecord = serde_json::from_slice(&raw_meta)
            .map_err(|e| Error::Transient(format!("corrupt tile metadata for {key}: {e}")))?;

        match self.l3.get(&meta.l3_key).await {
            Ok(Some(payload)) => {
                let bytes = bytes::Bytes::from(payload);
                self.l1.lock().put(key.to_string(), bytes.clone());
                Ok(Some(bytes))
            }
            Ok(None) => {
                // L2 said it should exist but it's gone: self-heal (spec
                // §4.2 step 5, §7 CacheDegraded).
                warn!(key, l3_key = meta.l3_key, "l2 metadata pointed at a missing l3 object, clearing");
                self.l2.delete(&meta_key).await?;
                Ok(None)
            }
            Err(_) => {
                // L3 unreachable: degraded MISS, but do NOT evict the L2
                // record -- it may well still be valid once L3 recovers.
                Ok(None)
            }
        }
    }

    /// Spec §4.2 `set_png`.
    pub async fn set_png(&self, key: &str, data: bytes::Bytes) -> Result<()> {
        let l3_key = sharded_l3_key(key);

        let mut attempt = 0;
        loop {
            match self.l3.put(&l3_key, data.to_vec(), "image/png").await {
                Ok(()) => break,
                Err(err) if attempt + 1 < L3_WRITE_ATTEMPTS => {
                    warn!(key, attempt, error = %err, "l3 write failed, retrying");
                    tokio::time::sleep(L3_WRITE_BASE_BACKOFF * (attempt + 1)).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }

        let meta = TileMetaRecord {
            l3_key,
            size: data.len() as u64,
            created_at: timestamp::Timestamp::now(),
            content_type: "image/png".to_string(),
        };
        let raw_meta = serde_json::to_vec(&meta).expect("TileMetaRecord always serializes");
        self.l2.set(&tile_meta_key(key), raw_meta, self.config.meta_ttl).await?;

        self.l1.lock().put(key.to_string(), data);
        Ok(())
    }

    pub async fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.l2.get(key).await
    }

    pub async fn set_meta(&self, key: &str, json: Vec<u8>) -> Result<()> {
        self.l2.set(key, json, self.config.meta_ttl).await
    }

    pub async fn set_meta_with_ttl(&self, key: &str, json: Vec<u8>, ttl: Duration) -> Result<()> {
        self.l2.set(key, json, ttl).await
    }

    /// Spec §4.2 `delete_by_pattern`: removes every tile whose cache key
    /// starts with `prefix` from all three tiers. Returns the number of
    /// tile entries removed (L2+L3 count as one removed tile each, matching
    /// the original's per-tile accounting).
    pub async fn delete_by_pattern(&self, prefix: &str) -> Result<u64> {
        let meta_prefix = tile_meta_key(prefix);
        let meta_keys = self.l2.scan_prefix(&meta_prefix).await?;

        let mut l3_keys = Vec::with_capacity(meta_keys.len());
        for meta_key in &meta_keys {
            if let Some(raw) = self.l2.get(meta_key).await? {
                if let Ok(meta) = serde_json::from_slice::<TileMetaRecord>(&raw) {
                    l3_keys.push(meta.l3_key);
                }
            }
        }

        for chunk in l3_keys.chunks(1000) {
            self.l3.delete_many(chunk).await?;
        }

        for meta_key in &meta_keys {
            self.l2.delete(meta_key).await?;
        }

        let mut l1 = self.l1.lock();
        l1.remove_matching(prefix);
        drop(l1);

        Ok(meta_keys.len() as u64)
    }

    /// Spec §4.2 `stats()`.
    pub async fn stats(&self) -> Result<CacheStats> {
        let l2 = self.l2.stats().await?;
        let l3 = self.l3.stats().await?;
        let l1_size = self.l1.lock().len() as u64;

        Ok(CacheStats {
            l1_size,
            l2_keys: l2.keys,
            l2_memory_bytes: l2.memory_bytes,
            l3_objects_estimate: l3.objects_estimate,
            l3_bytes_estimate: l3.bytes_estimate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::l2::InMemoryL2;
    use crate::l3::InMemoryL3;

    fn cache() -> HybridCache {
        HybridCache::new(Arc::new(InMemoryL2::new()), Arc::new(InMemoryL3::new()), CacheConfig::default())
    }

    #[tokio::test]
    async fn set_then_get_round_trips_through_all_tiers() {
        let cache = cache();
        cache.set_png("sentinel_x/a/10/1_2.png", bytes::Bytes::from_static(b"data")).await.unwrap();

        let got = cache.get_png("sentinel_x/a/10/1_2.png").await.unwrap();
        assert_eq!(got, Some(bytes::Bytes::from_static(b"data")));
    }

    #[tokio::test]
    async fn miss_on_unknown_key_is_none() {
        let cache = cache();
        assert_eq!(cache.get_png("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_by_pattern_clears_every_tier() {
        let cache = cache();
        cache.set_png("sentinel_x/a/10/1_2.png", bytes::Bytes::from_static(b"one")).await.unwrap();
        cache.set_png("sentinel_x/a/10/3_4.png", bytes::Bytes::from_static(b"two")).await.unwrap();
        cache.set_png("landsat_y/b/10/5_6.png", bytes::Bytes::from_static(b"three")).await.unwrap();

        let removed = cache.delete_by_pattern("sentinel_x/a").await.unwrap();
        assert_eq!(removed, 2);

        assert_eq!(cache.get_png("sentinel_x/a/10/1_2.png").await.unwrap(), None);
        assert_eq!(cache.get_png("sentinel_x/a/10/3_4.png").await.unwrap(), None);
        assert!(cache.get_png("landsat_y/b/10/5_6.png").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn l2_miss_returns_none_without_touching_l3() {
        let cache = cache();
        // Never written: get_meta-backed lookup must be a clean miss.
        assert_eq!(cache.get_meta("meta:whatever").await.unwrap(), None);
    }

    #[tokio::test]
    async fn repeated_get_hits_l1_after_first_l3_fetch() {
        let cache = cache();
        cache.set_png("sentinel_x/a/10/1_2.png", bytes::Bytes::from_static(b"data")).await.unwrap();

        // Evict the in-memory L1 entry directly to force the next read through L2/L3,
        // then confirm the second read (now via L1) still matches.
        cache.get_png("sentinel_x/a/10/1_2.png").await.unwrap();
        let second = cache.get_png("sentinel_x/a/10/1_2.png").await.unwrap();
        assert_eq!(second, Some(bytes::Bytes::from_static(b"data")));
    }
}
