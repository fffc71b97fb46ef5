use serde::{Deserialize, Serialize};
use tiled_geometry::{Latitude, Longitude};
use timestamp::Timestamp;

/// Per-point or per-campaign cache coverage counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub cached_tiles: u64,
    pub failed_tiles: u64,
    pub scheduled_tiles: u64,
}

impl CacheStats {
    pub fn record_scheduled(&mut self, n: u64) {
        self.scheduled_tiles += n;
    }

    pub fn record_success(&mut self) {
        self.cached_tiles += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed_tiles += 1;
    }
}

/// Lifecycle of a [`Campaign`]'s cache-warming pass (spec §3 invariant 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachingStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// A single geographic location whose tiles should be fully cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPoint {
    pub point_id: String,
    pub campaign_id: String,
    pub lat: f64,
    pub lon: f64,
    pub enhance: bool,
    pub cached: bool,
    pub cached_at: Option<Timestamp>,
    pub cache_stats: CacheStats,
}

impl CatalogPoint {
    pub fn new(point_id: impl Into<String>, campaign_id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            point_id: point_id.into(),
            campaign_id: campaign_id.into(),
            lat,
            lon,
            enhance: false,
            cached: false,
            cached_at: None,
            cache_stats: CacheStats::default(),
        }
    }

    pub fn latitude(&self) -> Latitude {
        Latitude::new(self.lat)
    }

    pub fn longitude(&self) -> Longitude {
        Longitude::new(self.lon)
    }

    pub fn mark_cached(&mut self) {
        self.cached = true;
        self.cached_at = Some(Timestamp::now());
    }
}

/// A named grouping of [`CatalogPoint`]s whose tiles are warmed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub campaign_id: String,
    pub year_start: u16,
    pub year_end: u16,
    pub vis_params: Vec<String>,
    pub image_type: String,
    pub caching_status: CachingStatus,
    pub caching_stats: CacheStats,
    pub total_points: u64,
}

impl Campaign {
    pub fn new(campaign_id: impl Into<String>, year_start: u16, year_end: u16, image_type: impl Into<String>) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            year_start,
            year_end,
            vis_params: Vec::new(),
            image_type: image_type.into(),
            caching_status: CachingStatus::NotStarted,
            caching_stats: CacheStats::default(),
            total_points: 0,
        }
    }

    pub fn years(&self) -> impl Iterator<Item = u16> {
        self.year_start..=self.year_end
    }

    pub fn start(&mut self, total_points: u64) {
        self.caching_status = CachingStatus::InProgress;
        self.total_points = total_points;
        self.caching_stats = CacheStats::default();
    }

    /// Finalizes the campaign: `cached_points` must match the count of
    /// points with `cached = true` at this instant (spec §3 invariant 6).
    pub fn finalize(&mut self, cached_point_count: u64) {
        self.caching_stats.cached_tiles = cached_point_count;
        self.caching_status = CachingStatus::Completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_lifecycle() {
        let mut campaign = Campaign::new("c1", 2020, 2023, "rgb");
        assert_eq!(campaign.caching_status, CachingStatus::NotStarted);

        campaign.start(10);
        assert_eq!(campaign.caching_status, CachingStatus::InProgress);

        campaign.finalize(10);
        assert_eq!(campaign.caching_status, CachingStatus::Completed);
        assert_eq!(campaign.caching_stats.cached_tiles, 10);
    }

    #[test]
    fn years_iterates_inclusive_range() {
        let campaign = Campaign::new("c1", 2021, 2023, "rgb");
        assert_eq!(campaign.years().collect::<Vec<_>>(), vec![2021, 2022, 2023]);
    }
}
