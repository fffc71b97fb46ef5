use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tiled_catalog::{Error, Result};
use timestamp::Timestamp;

/// Aggregate counters surfaced by [`crate::HybridCache::stats`].
#[derive(Debug, Clone, Copy, Default)]
pub struct L2Stats {
    pub clients: u64,
    pub memory_bytes: u64,
    pub keys: u64,
}

/// Per-key bookkeeping surfaced to `tiled-cleanup`'s `cleanup_expired` and
/// `analyze_usage` (spec §4.8), which need TTL-remaining and age without
/// reading the value itself.
#[derive(Debug, Clone, Copy)]
pub struct KeyInfo {
    pub size: u64,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl KeyInfo {
    pub fn age(&self, now: Timestamp) -> Duration {
        Duration::from_secs((now.as_seconds() - self.created_at.as_seconds()).max(0) as u64)
    }

    pub fn ttl_remaining(&self, now: Timestamp) -> Duration {
        Duration::from_secs((self.expires_at.as_seconds() - now.as_seconds()).max(0) as u64)
    }
}

/// The metadata/lease tier. Every key carries an expiry; a reachable L2 that
/// has no record for a key is a definite miss, never ambiguous with
/// "unreachable" (spec §4.2 failure semantics: L2 down fails loudly).
#[async_trait]
pub trait L2Store: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()>;

    /// Atomic "set if absent with expiry": writes `value` only if no live
    /// record exists for `key`, returning `true` iff this call won the
    /// write. The primitive singleflight's distributed lock is built on
    /// (spec §4.3).
    async fn set_if_absent(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<bool>;

    /// Keep-alive: extends the expiry of an existing record without
    /// touching its value. A no-op if the key is absent.
    async fn refresh_ttl(&self, key: &str, ttl: Duration) -> Result<()>;

    async fn delete(&self, key: &str) -> Result<()>;

    /// All live (non-expired) keys starting with `prefix`.
    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    async fn stats(&self) -> Result<L2Stats>;

    /// Size/age/TTL bookkeeping for one key, without reading its value.
    /// `Ok(None)` for an absent or expired key.
    async fn inspect(&self, key: &str) -> Result<Option<KeyInfo>>;
}

struct Record {
    value: Vec<u8>,
    created_at: Timestamp,
    expires_at: Timestamp,
}

/// In-memory `L2Store` fake, used in tests and as the default store for
/// development builds (no `gcp` feature required).
#[derive(Default)]
pub struct InMemoryL2 {
    records: Mutex<HashMap<String, Record>>,
}

impl InMemoryL2 {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_live(record: &Record) -> bool {
        record.expires_at.as_seconds() > Timestamp::now().as_seconds()
    }
}

#[async_trait]
impl L2Store for InMemoryL2 {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut records = self.records.lock();
        match records.get(key) {
            Some(record) if Self::is_live(record) => Ok(Some(record.value.clone())),
            Some(_) => {
                records.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        let expires_at = Timestamp::now() + timestamp::Duration::from_seconds(ttl.as_secs() as i64);
        self.records.lock().insert(key.to_string(), Record { value, created_at: Timestamp::now(), expires_at });
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<bool> {
        let mut records = self.records.lock();
        if let Some(existing) = records.get(key) {
            if Self::is_live(existing) {
                return Ok(false);
            }
        }
        let expires_at = Timestamp::now() + timestamp::Duration::from_seconds(ttl.as_secs() as i64);
        records.insert(key.to_string(), Record { value, created_at: Timestamp::now(), expires_at });
        Ok(true)
    }

    async fn refresh_ttl(&self, key: &str, ttl: Duration) -> Result<()> {
        let mut records = self.records.lock();
        if let Some(record) = records.get_mut(key) {
            record.expires_at = Timestamp::now() + timestamp::Duration::from_seconds(ttl.as_secs() as i64);
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.records.lock().remove(key);
        Ok(())
    }

    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let records = self.records.lock();
        Ok(records
            .iter()
            .filter(|(k, v)| k.starts_with(prefix) && Self::is_live(v))
            .map(|(k, _)| k.clone())
            .collect())
    }

    async fn stats(&self) -> Result<L2Stats> {
        let records = self.records.lock();
        let memory_bytes = records.values().map(|r| r.value.len() as u64).sum();
        Ok(L2Stats {
            clients: 1,
            memory_bytes,
            keys: records.len() as u64,
        })
    }

    async fn inspect(&self, key: &str) -> Result<Option<KeyInfo>> {
        let records = self.records.lock();
        Ok(records.get(key).filter(|r| Self::is_live(r)).map(|r| KeyInfo {
            size: r.value.len() as u64,
            created_at: r.created_at,
            expires_at: r.expires_at,
        }))
    }
}

#[cfg(feature = "gcp")]
pub use firestore_adapter::FirestoreL2;

#[cfg(feature = "gcp")]
mod firestore_adapter {
    use super::*;
    use firestore_rs::Firestore;
    use serde::{Deserialize, Serialize};

    const COLLECTION: &str = "tiled_cache_meta";

    /// `L2Store` over Firestore, grounded in `firestore-rs`'s
    /// `collection().doc().get()/.set()/.delete()` ergonomics. Firestore has
    /// no native TTL-on-read, so every document carries an explicit
    /// `expires_at` and reads check it themselves, mirroring
    /// [`super::InMemoryL2`]'s lazy-expiry behavior.
    pub struct FirestoreL2 {
        firestore: Firestore,
    }

    #[derive(Clone, Serialize, Deserialize)]
    struct StoredRecord {
        value: Vec<u8>,
        created_at: Timestamp,
        expires_at: Timestamp,
    }

    impl FirestoreL2 {
        pub fn new(firestore: Firestore) -> Self {
            Self { firestore }
        }

        fn map_err(err: firestore_rs::Error) -> Error {
            Error::Transient(err.to_string())
        }
    }

    #[async_trait]
    impl L2Store for FirestoreL2 {
        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            let doc = self
                .firestore
                .clone()
                .collection(COLLECTION)
                .doc(key)
                .get::<StoredRecord>()
                .await
                .map_err(Self::map_err)?;

            match doc {
                Some(doc) if doc.fields().expires_at.as_seconds() > Timestamp::now().as_seconds() => {
                    Ok(Some(doc.into_inner().value))
                }
                Some(_) => {
                    self.delete(key).await?;
                    Ok(None)
                }
                None => Ok(None),
            }
        }

        async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
            let expires_at = Timestamp::now() + timestamp::Duration::from_seconds(ttl.as_secs() as i64);
            self.firestore
                .clone()
                .collection(COLLECTION)
                .doc(key)
                .set(&StoredRecord { value, created_at: Timestamp::now(), expires_at })
                .await
                .map_err(Self::map_err)?;
            Ok(())
        }

        async fn set_if_absent(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<bool> {
            let expires_at = Timestamp::now() + timestamp::Duration::from_seconds(ttl.as_secs() as i64);
            let doc_ref = self.firestore.clone().collection(COLLECTION).doc(key.to_string());

            match doc_ref.set_with_condition(&StoredRecord { value, created_at: Timestamp::now(), expires_at }, false).await {
                Ok(_) => Ok(true),
                // Firestore surfaces a failed precondition as a generic
                // write error; any error on a conditional write that isn't
                // a transport/auth failure is treated as "lost the race".
                Err(_) => Ok(false),
            }
        }

        async fn refresh_ttl(&self, key: &str, ttl: Duration) -> Result<()> {
            if let Some(value) = self.get(key).await? {
                self.set(key, value, ttl).await?;
            }
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<()> {
            self.firestore
                .clone()
                .collection(COLLECTION)
                .doc(key)
                .delete()
                .await
                .map_err(Self::map_err)?;
            Ok(())
        }

        async fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>> {
            let docs: Vec<firestore_rs::Doc<StoredRecord>> = self
                .firestore
                .clone()
                .collection(COLLECTION)
                .get_all()
                .await
                .map_err(Self::map_err)?;

            Ok(docs
                .into_iter()
                .filter(|doc| {
                    doc.id().starts_with(prefix) && doc.fields().expires_at.as_seconds() > Timestamp::now().as_seconds()
                })
                .map(|doc| doc.id().to_string())
                .collect())
        }

        async fn stats(&self) -> Result<L2Stats> {
            let docs: Vec<firestore_rs::Doc<StoredRecord>> = self
                .firestore
                .clone()
                .collection(COLLECTION)
                .get_all()
                .await
                .map_err(Self::map_err)?;

            let memory_bytes = docs.iter().map(|d| d.fields().value.len() as u64).sum();
            Ok(L2Stats {
                clients: 1,
                memory_bytes,
                keys: docs.len() as u64,
            })
        }

        async fn inspect(&self, key: &str) -> Result<Option<KeyInfo>> {
            let doc = self
                .firestore
                .clone()
                .collection(COLLECTION)
                .doc(key)
                .get::<StoredRecord>()
                .await
                .map_err(Self::map_err)?;

            Ok(doc.filter(|doc| doc.fields().expires_at.as_seconds() > Timestamp::now().as_seconds()).map(|doc| {
                let fields = doc.fields();
                KeyInfo { size: fields.value.len() as u64, created_at: fields.created_at, expires_at: fields.expires_at }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let l2 = InMemoryL2::new();
        l2.set("tile:foo", b"bar".to_vec(), Duration::from_secs(60)).await.unwrap();
        assert_eq!(l2.get("tile:foo").await.unwrap(), Some(b"bar".to_vec()));
    }

    #[tokio::test]
    async fn expired_records_read_as_absent() {
        let l2 = InMemoryL2::new();
        l2.set("tile:foo", b"bar".to_vec(), Duration::from_secs(0)).await.unwrap();
        assert_eq!(l2.get("tile:foo").await.unwrap(), None);
    }

    #[tokio::test]
    async fn scan_prefix_only_returns_matching_live_keys() {
        let l2 = InMemoryL2::new();
        l2.set("tile:a/1", vec![], Duration::from_secs(60)).await.unwrap();
        l2.set("tile:a/2", vec![], Duration::from_secs(60)).await.unwrap();
        l2.set("tile:b/1", vec![], Duration::from_secs(60)).await.unwrap();

        let mut matched = l2.scan_prefix("tile:a/").await.unwrap();
        matched.sort();
        assert_eq!(matched, vec!["tile:a/1".to_string(), "tile:a/2".to_string()]);
    }

    #[tokio::test]
    async fn set_if_absent_only_the_first_caller_wins() {
        let l2 = InMemoryL2::new();
        let first = l2.set_if_absent("lock:foo", b"holder-a".to_vec(), Duration::from_secs(30)).await.unwrap();
        let second = l2.set_if_absent("lock:foo", b"holder-b".to_vec(), Duration::from_secs(30)).await.unwrap();

        assert!(first);
        assert!(!second);
        assert_eq!(l2.get("lock:foo").await.unwrap(), Some(b"holder-a".to_vec()));
    }

    #[tokio::test]
    async fn set_if_absent_succeeds_again_after_expiry() {
        let l2 = InMemoryL2::new();
        l2.set_if_absent("lock:foo", b"holder-a".to_vec(), Duration::from_secs(0)).await.unwrap();
        let second = l2.set_if_absent("lock:foo", b"holder-b".to_vec(), Duration::from_secs(30)).await.unwrap();
        assert!(second);
    }

    #[tokio::test]
    async fn inspect_reports_size_and_ttl_for_a_live_key() {
        let l2 = InMemoryL2::new();
        l2.set("tile:foo", b"hello".to_vec(), Duration::from_secs(60)).await.unwrap();

        let info = l2.inspect("tile:foo").await.unwrap().expect("key is live");
        assert_eq!(info.size, 5);
        assert!(info.ttl_remaining(Timestamp::now()) <= Duration::from_secs(60));
    }

    #[tokio::test]
    async fn inspect_reports_absent_for_an_expired_key() {
        let l2 = InMemoryL2::new();
        l2.set("tile:foo", b"hello".to_vec(), Duration::from_secs(0)).await.unwrap();
        assert!(l2.inspect("tile:foo").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let l2 = InMemoryL2::new();
        l2.set("tile:foo", b"bar".to_vec(), Duration::from_secs(60)).await.unwrap();
        l2.delete("tile:foo").await.unwrap();
        assert_eq!(l2.get("tile:foo").await.unwrap(), None);
    }
}
