use serde::Serialize;

/// What [`crate::expired::cleanup_expired`] returns (spec §4.8).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupExpiredReport {
    pub dry_run: bool,
    pub scanned: u64,
    pub expired: u64,
    pub deleted: u64,
    pub bytes_freed: u64,
    pub by_category: CategoryCounts,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CategoryCounts {
    pub tile: u64,
    pub meta: u64,
    pub other: u64,
}

impl CategoryCounts {
    pub fn record(&mut self, key: &str) {
        if key.starts_with("tiles/") || key.starts_with("tile:") {
            self.tile += 1;
        } else if key.starts_with("meta:") {
            self.meta += 1;
        } else {
            self.other += 1;
        }
    }
}

/// What [`crate::orphaned::cleanup_orphaned`] returns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrphanedReport {
    pub scanned: u64,
    pub orphaned: u64,
    pub deleted: u64,
    pub bytes_freed: u64,
}

/// What [`crate::usage::analyze_usage`] returns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UsageAnalysis {
    pub period_days: u32,
    pub samples_analyzed: u64,
    pub age_distribution: Distribution,
    pub ttl_distribution: Distribution,
    pub size_distribution: SizeDistribution,
    pub average_size_bytes: u64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Distribution {
    pub under_1_day: u64,
    pub from_1_to_7_days: u64,
    pub from_7_to_30_days: u64,
    pub from_30_to_90_days: u64,
    pub over_90_days: u64,
}

impl Distribution {
    pub fn record_days(&mut self, days: i64) {
        match days {
            d if d < 1 => self.under_1_day += 1,
            d if d < 7 => self.from_1_to_7_days += 1,
            d if d < 30 => self.from_7_to_30_days += 1,
            d if d < 90 => self.from_30_to_90_days += 1,
            _ => self.over_90_days += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.under_1_day + self.from_1_to_7_days + self.from_7_to_30_days + self.from_30_to_90_days + self.over_90_days
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SizeDistribution {
    pub under_100kb: u64,
    pub from_100kb_to_1mb: u64,
    pub from_1mb_to_10mb: u64,
    pub over_10mb: u64,
}

impl SizeDistribution {
    pub fn record_bytes(&mut self, size: u64) {
        const KB_100: u64 = 100 * 1024;
        const MB_1: u64 = 1024 * 1024;
        const MB_10: u64 = 10 * 1024 * 1024;

        match size {
            s if s < KB_100 => self.under_100kb += 1,
            s if s < MB_1 => self.from_100kb_to_1mb += 1,
            s if s < MB_10 => self.from_1mb_to_10mb += 1,
            _ => self.over_10mb += 1,
        }
    }
}

/// What [`crate::health::health_check`] returns.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub components: Vec<ComponentHealth>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: &'static str,
    pub healthy: bool,
    pub error: Option<String>,
}

impl HealthReport {
    pub fn from_components(components: Vec<ComponentHealth>) -> Self {
        let unhealthy = components.iter().filter(|c| !c.healthy).count();
        let status = if unhealthy == 0 {
            HealthStatus::Healthy
        } else if unhealthy < components.len() {
            HealthStatus::Degraded
        } else {
            HealthStatus::Unhealthy
        };
        Self { status, components }
    }
}
