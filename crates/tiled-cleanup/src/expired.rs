use std::time::Duration;

use tiled_cache::L2Store;
use tiled_catalog::Result;
use timestamp::Timestamp;

use crate::report::CleanupExpiredReport;

/// Keys expiring within this window count as "near-expiration" and are
/// swept along with keys that are already gone (spec §4.8, grounded in
/// `cleanup_tasks.py::_find_expired_redis_keys`'s `0 <= ttl < 86400`).
const EXPIRING_SOON: Duration = Duration::from_secs(24 * 3600);

/// Scans L2 for keys at or near expiry, categorizes them, and (unless
/// `dry_run`) deletes them, reporting space freed from each record's stored
/// size.
pub async fn cleanup_expired(l2: &dyn L2Store, dry_run: bool, max_items: Option<u64>) -> Result<CleanupExpiredReport> {
    let mut report = CleanupExpiredReport { dry_run, ..Default::default() };
    let now = Timestamp::now();

    for key in l2.scan_prefix("").await? {
        if let Some(limit) = max_items {
            if report.scanned >= limit {
                break;
            }
        }
        report.scanned += 1;

        let info = l2.inspect(&key).await?;
        // A key that vanished between the scan and this inspect call is
        // itself an anomaly worth counting as expired, same as one whose
        // remaining TTL has dropped below the threshold.
        let is_expiring = info.as_ref().map(|i| i.ttl_remaining(now) < EXPIRING_SOON).unwrap_or(true);
        if !is_expiring {
            continue;
        }

        report.expired += 1;
        report.by_category.record(&key);

        if !dry_run {
            let size = info.map(|i| i.size).unwrap_or(0);
            l2.delete(&key).await?;
            report.deleted += 1;
            report.bytes_freed += size;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiled_cache::InMemoryL2;

    #[tokio::test]
    async fn expiring_keys_are_deleted_and_counted_by_category() {
        let l2 = InMemoryL2::new();
        l2.set("tile:a", b"x".to_vec(), Duration::from_secs(10)).await.unwrap();
        l2.set("meta:b", b"yy".to_vec(), Duration::from_secs(10)).await.unwrap();
        l2.set("tile:fresh", b"zzz".to_vec(), Duration::from_secs(365 * 24 * 3600)).await.unwrap();

        let report = cleanup_expired(&l2, false, None).await.unwrap();

        assert_eq!(report.scanned, 3);
        assert_eq!(report.expired, 2);
        assert_eq!(report.deleted, 2);
        assert_eq!(report.by_category.tile, 1);
        assert_eq!(report.by_category.meta, 1);
        assert_eq!(report.bytes_freed, 3);
        assert!(l2.get("tile:fresh").await.unwrap().is_some());
        assert!(l2.get("tile:a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn dry_run_reports_without_deleting() {
        let l2 = InMemoryL2::new();
        l2.set("tile:a", b"x".to_vec(), Duration::from_secs(1)).await.unwrap();

        let report = cleanup_expired(&l2, true, None).await.unwrap();

        assert_eq!(report.expired, 1);
        assert_eq!(report.deleted, 0);
        assert!(l2.get("tile:a").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn max_items_bounds_the_scan() {
        let l2 = InMemoryL2::new();
        for i in 0..5 {
            l2.set(&format!("tile:{i}"), vec![], Duration::from_secs(1)).await.unwrap();
        }

        let report = cleanup_expired(&l2, false, Some(2)).await.unwrap();
        assert_eq!(report.scanned, 2);
    }
}
