use std::collections::HashMap;
use std::time::Instant;

/// In-process tier. Bounded by `max_entries`; admission past that evicts the
/// key with the smallest access count (approximate LFU), ties broken by
/// oldest `admitted_at` (spec §4.2 "L1 LRU discipline").
pub struct L1Cache {
    max_entries: usize,
    max_age: std::time::Duration,
    entries: HashMap<String, Entry>,
}

struct Entry {
    bytes: bytes::Bytes,
    admitted_at: Instant,
    access_count: u64,
}

impl L1Cache {
    pub fn new(max_entries: usize, max_age: std::time::Duration) -> Self {
        Self {
            max_entries,
            max_age,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached bytes if present and not older than `max_age`,
    /// bumping its access count. An entry found but stale is treated as a
    /// miss and left in place for the next admission to overwrite.
    pub fn get(&mut self, key: &str) -> Option<bytes::Bytes> {
        let entry = self.entries.get_mut(key)?;
        if entry.admitted_at.elapsed() > self.max_age {
            return None;
        }
        entry.access_count += 1;
        Some(entry.bytes.clone())
    }

    pub fn put(&mut self, key: String, bytes: bytes::Bytes) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_one();
        }
        self.entries.insert(
            key,
            Entry {
                bytes,
                admitted_at: Instant::now(),
                access_count: 0,
            },
        );
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn remove_matching(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|k, _| !k.starts_with(prefix));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hot_keys(&self, n: usize) -> Vec<String> {
        let mut keys: Vec<_> = self.entries.iter().collect();
        keys.sort_by(|a, b| b.1.access_count.cmp(&a.1.access_count));
        keys.into_iter().take(n).map(|(k, _)| k.clone()).collect()
    }

    fn evict_one(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by(|a, b| {
                a.1.access_count
                    .cmp(&b.1.access_count)
                    .then(b.1.admitted_at.cmp(&a.1.admitted_at))
            })
            .map(|(k, _)| k.clone());
        if let Some(key) = victim {
            self.entries.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn evicts_the_least_accessed_key() {
        let mut cache = L1Cache::new(2, Duration::from_secs(3600));
        cache.put("a".into(), bytes::Bytes::from_static(b"1"));
        cache.put("b".into(), bytes::Bytes::from_static(b"2"));

        // "a" gets accessed, "b" never does.
        cache.get("a");
        cache.get("a");

        cache.put("c".into(), bytes::Bytes::from_static(b"3"));

        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none(), "least-accessed key should have been evicted");
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn stale_entries_are_treated_as_misses() {
        let mut cache = L1Cache::new(10, Duration::from_millis(0));
        cache.put("a".into(), bytes::Bytes::from_static(b"1"));
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn remove_matching_evicts_by_prefix() {
        let mut cache = L1Cache::new(10, Duration::from_secs(3600));
        cache.put("sentinel_a/1".into(), bytes::Bytes::from_static(b"1"));
        cache.put("sentinel_a/2".into(), bytes::Bytes::from_static(b"2"));
        cache.put("landsat_b/1".into(), bytes::Bytes::from_static(b"3"));

        let removed = cache.remove_matching("sentinel_a/");
        assert_eq!(removed, 2);
        assert_eq!(cache.len(), 1);
    }
}
