//! Maintenance operations (spec §4.8): expired/orphaned cache cleanup, usage
//! analysis, and component health checks, plus their scheduled-task wiring.

mod expired;
mod health;
mod orphaned;
mod report;
mod tasks;
mod usage;

pub use expired::cleanup_expired;
pub use health::health_check;
pub use orphaned::cleanup_orphaned;
pub use report::{
    CategoryCounts, CleanupExpiredReport, ComponentHealth, Distribution, HealthReport, HealthStatus, OrphanedReport, SizeDistribution,
    UsageAnalysis,
};
pub use tasks::{AnalyzeUsageTask, CleanupExpiredTask, CleanupOrphanedTask, HealthCheckTask};
pub use usage::analyze_usage;
