use tiled_backend::ImageryBackend;
use tiled_cache::{L2Store, L3Store};
use tiled_catalog::Result;
use tiled_warming::CatalogStore;

use crate::report::{ComponentHealth, HealthReport};

const PROBE_KEY: &str = "__health_check__";

/// Pings L2, L3, the metadata (catalog) store, and the imagery backend,
/// reporting per-component status and an aggregate (spec §4.8, grounded in
/// `monitoring_tasks.py::monitor_check_health`). A component error never
/// propagates out of this function -- an unhealthy *component* is the
/// expected, reportable outcome, not a caller-facing failure.
pub async fn health_check(l2: &dyn L2Store, l3: &dyn L3Store, metadata: &dyn CatalogStore, backend: &dyn ImageryBackend) -> Result<HealthReport> {
    let components = vec![
        probe("l2", l2.inspect(PROBE_KEY).await.map(|_| ())),
        probe("l3", l3.list_prefix(PROBE_KEY).await.map(|_| ())),
        probe("metadata_store", metadata.points_for_campaign(PROBE_KEY).await.map(|_| ())),
        probe("backend", backend.health().await),
    ];

    Ok(HealthReport::from_components(components))
}

fn probe(name: &'static str, result: Result<()>) -> ComponentHealth {
    match result {
        Ok(()) => ComponentHealth { name, healthy: true, error: None },
        Err(err) => ComponentHealth { name, healthy: false, error: Some(err.to_string()) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tiled_backend::{BBox, Layer};
    use tiled_cache::{InMemoryL2, InMemoryL3};
    use tiled_catalog::Error;
    use tiled_warming::InMemoryCatalogStore;

    struct FakeBackend {
        healthy: bool,
    }

    #[async_trait]
    impl ImageryBackend for FakeBackend {
        async fn lease_layer(&self, _layer: Layer, _region: BBox, _digest: &str) -> Result<String> {
            unimplemented!()
        }

        async fn fetch_tile(&self, _url_template: &str, _x: u32, _y: u32, _z: u8) -> Result<Vec<u8>> {
            unimplemented!()
        }

        async fn health(&self) -> Result<()> {
            if self.healthy {
                Ok(())
            } else {
                Err(Error::BackendUnavailable("breaker open".to_string()))
            }
        }
    }

    #[tokio::test]
    async fn all_components_healthy_reports_healthy() {
        let l2 = InMemoryL2::new();
        let l3 = InMemoryL3::new();
        let metadata = InMemoryCatalogStore::new();
        let backend = FakeBackend { healthy: true };

        let report = health_check(&l2, &l3, &metadata, &backend).await.unwrap();
        assert_eq!(report.status, crate::report::HealthStatus::Healthy);
        assert!(report.components.iter().all(|c| c.healthy));
    }

    #[tokio::test]
    async fn one_unhealthy_component_degrades_not_fails() {
        let l2 = InMemoryL2::new();
        let l3 = InMemoryL3::new();
        let metadata = InMemoryCatalogStore::new();
        let backend = FakeBackend { healthy: false };

        let report = health_check(&l2, &l3, &metadata, &backend).await.unwrap();
        assert_eq!(report.status, crate::report::HealthStatus::Degraded);
        let backend_component = report.components.iter().find(|c| c.name == "backend").unwrap();
        assert!(!backend_component.healthy);
        assert!(backend_component.error.is_some());
    }
}
