use tiled_cache::{cache_key_from_l3_key, tile_meta_key, L2Store, L3Store};
use tiled_catalog::Result;

use crate::report::OrphanedReport;

const DELETE_BATCH: usize = 1000;

/// Scans L3 under `prefix`; an object is orphaned if its L2 metadata record
/// is gone (spec §4.8, grounded in
/// `cleanup_tasks.py::cleanup_orphaned_objects`/`_is_orphaned_object`).
/// Orphans are deleted in batches of up to 1000 (GCS's own batch limit).
pub async fn cleanup_orphaned(l2: &dyn L2Store, l3: &dyn L3Store, prefix: &str, max_objects: u64) -> Result<OrphanedReport> {
    let mut report = OrphanedReport::default();
    let mut orphans = Vec::new();

    for l3_key in l3.list_prefix(prefix).await? {
        if report.scanned >= max_objects {
            break;
        }
        report.scanned += 1;

        let Some(cache_key) = cache_key_from_l3_key(&l3_key) else {
            continue;
        };

        if l2.get(&tile_meta_key(cache_key)).await?.is_some() {
            continue;
        }

        report.orphaned += 1;
        // The trait has no size-without-fetch primitive, so size is read
        // off the object itself before it's deleted.
        let size = l3.get(&l3_key).await?.map(|bytes| bytes.len() as u64).unwrap_or(0);
        orphans.push((l3_key, size));
    }

    for batch in orphans.chunks(DELETE_BATCH) {
        let keys: Vec<String> = batch.iter().map(|(k, _)| k.clone()).collect();
        let deleted = l3.delete_many(&keys).await?;
        report.deleted += deleted;
        report.bytes_freed += batch.iter().map(|(_, size)| size).sum::<u64>();
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiled_cache::{sharded_l3_key, InMemoryL2, InMemoryL3};

    #[tokio::test]
    async fn objects_with_no_l2_record_are_deleted() {
        let l2 = InMemoryL2::new();
        let l3 = InMemoryL3::new();

        let orphan_key = sharded_l3_key("layer/a/1/2_3.png");
        l3.put(&orphan_key, vec![1, 2, 3], "image/png").await.unwrap();

        let live_key = sharded_l3_key("layer/a/1/5_6.png");
        l3.put(&live_key, vec![1, 2], "image/png").await.unwrap();
        l2.set(&tile_meta_key("layer/a/1/5_6.png"), b"{}".to_vec(), std::time::Duration::from_secs(60)).await.unwrap();

        let report = cleanup_orphaned(&l2, &l3, "tiles/", 100).await.unwrap();

        assert_eq!(report.scanned, 2);
        assert_eq!(report.orphaned, 1);
        assert_eq!(report.deleted, 1);
        assert_eq!(report.bytes_freed, 3);
        assert!(l3.get(&orphan_key).await.unwrap().is_none());
        assert!(l3.get(&live_key).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn max_objects_bounds_the_scan() {
        let l2 = InMemoryL2::new();
        let l3 = InMemoryL3::new();
        for i in 0..5 {
            l3.put(&sharded_l3_key(&format!("layer/a/1/{i}_0.png")), vec![0], "image/png").await.unwrap();
        }

        let report = cleanup_orphaned(&l2, &l3, "tiles/", 2).await.unwrap();
        assert_eq!(report.scanned, 2);
    }
}
