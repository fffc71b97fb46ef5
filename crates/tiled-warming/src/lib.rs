//! Background cache-warming for catalog points and campaigns (spec §4.7):
//! mosaic-aware tile scheduling, adaptive concurrency, and priority-ordered
//! dispatch.

mod adaptive;
mod catalog_store;
mod priority;
mod tasks;

pub use adaptive::AdaptiveConcurrency;
pub use catalog_store::{CatalogStore, InMemoryCatalogStore, SharedCatalogStore};
#[cfg(feature = "gcp")]
pub use catalog_store::FirestoreCatalogStore;
pub use priority::{priority_score, sort_points_by_priority, zoom_levels, PRIORITY_ZOOM_LEVELS, RECENT_YEARS_PRIORITY, STANDARD_ZOOM_LEVELS};
pub use tasks::{cache_point, clear_campaign, clear_point, start_campaign, CacheCampaignTask, CachePointBatchTask, CachePointTask, WarmPopularRegionsTask};
