//! Persistence for [`CatalogPoint`]/[`Campaign`] records, following the same
//! trait-plus-in-memory-fake shape as `tiled_cache::L2Store` and
//! `tiled_worker::JobStore`: warming only needs a handful of query/update
//! operations, not a general document store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tiled_catalog::{Campaign, CatalogPoint, Error, Result};
use tokio::sync::Mutex;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn get_campaign(&self, campaign_id: &str) -> Result<Campaign>;
    async fn put_campaign(&self, campaign: Campaign) -> Result<()>;
    async fn get_point(&self, point_id: &str) -> Result<CatalogPoint>;
    async fn put_point(&self, point: CatalogPoint) -> Result<()>;

    /// Points in `campaign_id` with `cached = false`. Warming's batching
    /// step partitions this list (spec §4.7 step 2-3).
    async fn uncached_points(&self, campaign_id: &str) -> Result<Vec<CatalogPoint>>;

    /// All points belonging to a campaign, cached or not -- used by the
    /// campaign finalizer to recompute the cached count.
    async fn points_for_campaign(&self, campaign_id: &str) -> Result<Vec<CatalogPoint>>;

    /// Every known campaign, used by `warm-popular-regions` to find
    /// campaigns worth re-warming on the daily schedule.
    async fn list_campaigns(&self) -> Result<Vec<Campaign>>;
}

#[derive(Default)]
pub struct InMemoryCatalogStore {
    campaigns: Mutex<HashMap<String, Campaign>>,
    points: Mutex<HashMap<String, CatalogPoint>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn get_campaign(&self, campaign_id: &str) -> Result<Campaign> {
        self.campaigns
            .lock()
            .await
            .get(campaign_id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("campaign {campaign_id}")))
    }

    async fn put_campaign(&self, campaign: Campaign) -> Result<()> {
        self.campaigns.lock().await.insert(campaign.campaign_id.clone(), campaign);
        Ok(())
    }

    async fn get_point(&self, point_id: &str) -> Result<CatalogPoint> {
        self.points
            .lock()
            .await
            .get(point_id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("point {point_id}")))
    }

    async fn put_point(&self, point: CatalogPoint) -> Result<()> {
        self.points.lock().await.insert(point.point_id.clone(), point);
        Ok(())
    }

    async fn uncached_points(&self, campaign_id: &str) -> Result<Vec<CatalogPoint>> {
        Ok(self
            .points
            .lock()
            .await
            .values()
            .filter(|p| p.campaign_id == campaign_id && !p.cached)
            .cloned()
            .collect())
    }

    async fn points_for_campaign(&self, campaign_id: &str) -> Result<Vec<CatalogPoint>> {
        Ok(self
            .points
            .lock()
            .await
            .values()
            .filter(|p| p.campaign_id == campaign_id)
            .cloned()
            .collect())
    }

    async fn list_campaigns(&self) -> Result<Vec<Campaign>> {
        Ok(self.campaigns.lock().await.values().cloned().collect())
    }
}

pub type SharedCatalogStore = Arc<dyn CatalogStore>;

#[cfg(feature = "gcp")]
pub use firestore_adapter::FirestoreCatalogStore;

#[cfg(feature = "gcp")]
mod firestore_adapter {
    use super::*;
    use firestore_rs::Firestore;

    const CAMPAIGNS: &str = "tiled_campaigns";
    const POINTS: &str = "tiled_catalog_points";

    /// `CatalogStore` over Firestore, following the same
    /// `collection().doc().get()/.set()` shape as `tiled_cache::FirestoreL2`.
    /// `uncached_points`/`points_for_campaign` pull the whole points
    /// collection and filter client-side, same tradeoff `FirestoreL2::scan_prefix`
    /// makes: acceptable for a collection sized for one imagery catalog, not
    /// for an unbounded one.
    pub struct FirestoreCatalogStore {
        firestore: Firestore,
    }

    impl FirestoreCatalogStore {
        pub fn new(firestore: Firestore) -> Self {
            Self { firestore }
        }

        fn map_err(err: firestore_rs::Error) -> Error {
            Error::Transient(err.to_string())
        }
    }

    #[async_trait]
    impl CatalogStore for FirestoreCatalogStore {
        async fn get_campaign(&self, campaign_id: &str) -> Result<Campaign> {
            self.firestore
                .clone()
                .collection(CAMPAIGNS)
                .doc(campaign_id)
                .get::<Campaign>()
                .await
                .map_err(Self::map_err)?
                .map(|doc| doc.into_inner())
                .ok_or_else(|| Error::not_found(format!("campaign {campaign_id}")))
        }

        async fn put_campaign(&self, campaign: Campaign) -> Result<()> {
            self.firestore
                .clone()
                .collection(CAMPAIGNS)
                .doc(campaign.campaign_id.clone())
                .set(&campaign)
                .await
                .map_err(Self::map_err)?;
            Ok(())
        }

        async fn get_point(&self, point_id: &str) -> Result<CatalogPoint> {
            self.firestore
                .clone()
                .collection(POINTS)
                .doc(point_id)
                .get::<CatalogPoint>()
                .await
                .map_err(Self::map_err)?
                .map(|doc| doc.into_inner())
                .ok_or_else(|| Error::not_found(format!("point {point_id}")))
        }

        async fn put_point(&self, point: CatalogPoint) -> Result<()> {
            self.firestore
                .clone()
                .collection(POINTS)
                .doc(point.point_id.clone())
                .set(&point)
                .await
                .map_err(Self::map_err)?;
            Ok(())
        }

        async fn uncached_points(&self, campaign_id: &str) -> Result<Vec<CatalogPoint>> {
            let docs: Vec<firestore_rs::Doc<CatalogPoint>> =
                self.firestore.clone().collection(POINTS).get_all().await.map_err(Self::map_err)?;
            Ok(docs
                .into_iter()
                .map(|doc| doc.into_inner())
                .filter(|p| p.campaign_id == campaign_id && !p.cached)
                .collect())
        }

        async fn points_for_campaign(&self, campaign_id: &str) -> Result<Vec<CatalogPoint>> {
            let docs: Vec<firestore_rs::Doc<CatalogPoint>> =
                self.firestore.clone().collection(POINTS).get_all().await.map_err(Self::map_err)?;
            Ok(docs.into_iter().map(|doc| doc.into_inner()).filter(|p| p.campaign_id == campaign_id).collect())
        }

        async fn list_campaigns(&self) -> Result<Vec<Campaign>> {
            let docs: Vec<firestore_rs::Doc<Campaign>> =
                self.firestore.clone().collection(CAMPAIGNS).get_all().await.map_err(Self::map_err)?;
            Ok(docs.into_iter().map(|doc| doc.into_inner()).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn uncached_points_excludes_cached_ones() {
        let store = InMemoryCatalogStore::new();
        let mut cached = CatalogPoint::new("p1", "c1", 1.0, 1.0);
        cached.mark_cached();
        store.put_point(cached).await.unwrap();
        store.put_point(CatalogPoint::new("p2", "c1", 2.0, 2.0)).await.unwrap();

        let uncached = store.uncached_points("c1").await.unwrap();
        assert_eq!(uncached.len(), 1);
        assert_eq!(uncached[0].point_id, "p2");
    }

    #[tokio::test]
    async fn list_campaigns_returns_every_stored_campaign() {
        let store = InMemoryCatalogStore::new();
        store.put_campaign(tiled_catalog::Campaign::new("c1", 2023, 2024, "sentinel")).await.unwrap();
        store.put_campaign(tiled_catalog::Campaign::new("c2", 2023, 2024, "landsat")).await.unwrap();

        let mut ids: Vec<_> = store.list_campaigns().await.unwrap().into_iter().map(|c| c.campaign_id).collect();
        ids.sort();
        assert_eq!(ids, vec!["c1".to_string(), "c2".to_string()]);
    }
}
