use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tiled_catalog::{Error, Result};

/// Aggregate counters surfaced by [`crate::HybridCache::stats`]. Exact
/// object counts over the whole bucket are expensive, so production
/// implementations are expected to estimate via a bounded sample (spec
/// §4.2's `stats()`, §5 "bounded sample").
#[derive(Debug, Clone, Copy, Default)]
pub struct L3Stats {
    pub objects_estimate: u64,
    pub bytes_estimate: u64,
}

/// The durable object tier. Objects are content-addressed by `l3_key`
/// (`tiles/{hh}/{cache_key}`, computed in [`crate::sharded_l3_key`]) and are
/// never mutated once written -- only ever deleted.
#[async_trait]
pub trait L3Store: Send + Sync {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;

    /// `Ok(None)` means the object is confirmed absent (a 404 from the
    /// backing store); any other failure must be surfaced as an error so
    /// callers can tell "missing" from "unreachable" (spec §4.2 failure
    /// semantics).
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    async fn delete(&self, key: &str) -> Result<()>;

    /// Batch delete, up to `keys.len()`; callers are responsible for
    /// chunking to the store's batch limit (1000 for GCS).
    async fn delete_many(&self, keys: &[String]) -> Result<u64>;

    async fn list_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    async fn stats(&self) -> Result<L3Stats>;
}

struct Object {
    bytes: Vec<u8>,
    #[allow(dead_code)]
    content_type: String,
}

/// In-memory `L3Store` fake, used in tests and development builds.
#[derive(Default)]
pub struct InMemoryL3 {
    objects: Mutex<HashMap<String, Object>>,
}

impl InMemoryL3 {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl L3Store for InMemoryL3 {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        self.objects.lock().insert(
            key.to_string(),
            Object {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.objects.lock().get(key).map(|o| o.bytes.clone()))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.objects.lock().remove(key);
        Ok(())
    }

    async fn delete_many(&self, keys: &[String]) -> Result<u64> {
        let mut objects = self.objects.lock();
        let mut removed = 0u64;
        for key in keys {
            if objects.remove(key).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn list_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .objects
            .lock()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn stats(&self) -> Result<L3Stats> {
        let objects = self.objects.lock();
        Ok(L3Stats {
            objects_estimate: objects.len() as u64,
            bytes_estimate: objects.values().map(|o| o.bytes.len() as u64).sum(),
        })
    }
}

#[cfg(feature = "gcp")]
pub use gcs_adapter::GcsL3;

#[cfg(feature = "gcp")]
mod gcs_adapter {
    use super::*;
    use small_gcs::BucketClient;

    /// `L3Store` over a GCS bucket, grounded directly in
    /// `map-render::cache::TileCache` (`read(...).content_to_bytes_opt`,
    /// `write(...).content_len(...).mime_type(...).upload(...)`), generalized
    /// from a hardcoded mapbox tile path to an arbitrary sharded `l3_key`.
    pub struct GcsL3 {
        bucket: parking_lot::Mutex<BucketClient>,
    }

    impl GcsL3 {
        pub fn new(bucket: BucketClient) -> Self {
            Self {
                bucket: parking_lot::Mutex::new(bucket),
            }
        }

        fn map_err(err: small_gcs::Error) -> Error {
            Error::Transient(err.to_string())
        }
    }

    #[async_trait]
    impl L3Store for GcsL3 {
        async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
            let mut bucket = self.bucket.lock().clone();
            let mime: mime_guess::Mime = content_type.parse().unwrap_or(mime_guess::mime::IMAGE_PNG);
            bucket
                .write(key)
                .content_len(bytes.len() as u64)
                .mime_type(mime)
                .upload(bytes::Bytes::from(bytes))
                .await
                .map_err(Self::map_err)?;
            Ok(())
        }

        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            let mut bucket = self.bucket.lock().clone();
            let bytes = bucket
                .read(key)
                .content_to_bytes_opt(32 * 1024 * 1024)
                .await
                .map_err(Self::map_err)?;
            Ok(bytes.map(|b| b.to_vec()))
        }

        async fn delete(&self, key: &str) -> Result<()> {
            let mut bucket = self.bucket.lock().clone();
            bucket.delete_opt(key).await.map_err(Self::map_err)?;
            Ok(())
        }

        async fn delete_many(&self, keys: &[String]) -> Result<u64> {
            let mut removed = 0u64;
            for key in keys {
                if self.delete(key).await.is_ok() {
                    removed += 1;
                }
            }
            Ok(removed)
        }

        async fn list_prefix(&self, prefix: &str) -> Result<Vec<String>> {
            let mut bucket = self.bucket.lock().clone();
            let list = bucket.list().prefix(prefix).get_all().await.map_err(Self::map_err)?;
            Ok(list.objects.into_iter().map(|o| o.name).collect())
        }

        async fn stats(&self) -> Result<L3Stats> {
            let mut bucket = self.bucket.lock().clone();
            let list = bucket
                .list()
                .max_results(1000)
                .get_all()
                .await
                .map_err(Self::map_err)?;
            Ok(L3Stats {
                objects_estimate: list.objects.len() as u64,
                bytes_estimate: list.objects.iter().map(|o| o.size).sum(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let l3 = InMemoryL3::new();
        l3.put("tiles/ab/foo", b"png-bytes".to_vec(), "image/png").await.unwrap();
        assert_eq!(l3.get("tiles/ab/foo").await.unwrap(), Some(b"png-bytes".to_vec()));
    }

    #[tokio::test]
    async fn get_of_missing_key_is_none_not_an_error() {
        let l3 = InMemoryL3::new();
        assert_eq!(l3.get("tiles/ab/missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_many_counts_only_keys_that_existed() {
        let l3 = InMemoryL3::new();
        l3.put("tiles/ab/a", vec![1], "image/png").await.unwrap();
        l3.put("tiles/ab/b", vec![2], "image/png").await.unwrap();

        let removed = l3
            .delete_many(&["tiles/ab/a".to_string(), "tiles/ab/missing".to_string()])
            .await
            .unwrap();
        assert_eq!(removed, 1);
    }
}
