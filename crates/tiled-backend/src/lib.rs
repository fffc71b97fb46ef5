//! Client for the remote imagery/rendering backend (spec §4.4): URL leasing,
//! bounded-retry tile fetches, and a per-process circuit breaker.

mod breaker;
mod retry;

pub use breaker::{BreakerState, CircuitBreaker};
pub use retry::{backoff_delay, classify_status, Classification, ATTEMPT_TIMEOUT, SERVER_ERROR_MAX_ATTEMPTS, THROTTLE_MAX_ATTEMPTS};

use async_trait::async_trait;
use tiled_catalog::{Error, Result};
use tracing::warn;

pub use tiled_geometry::{BBox, Layer};

/// What the pipeline and warming tasks need from the imagery backend.
/// Modeled as a trait (mirroring `map-render::loader`'s free functions
/// wrapped behind `TileLoader`) so tests substitute a fake instead of
/// hitting a real remote service.
#[async_trait]
pub trait ImageryBackend: Send + Sync {
    /// Leases a rendering URL template for a layer/region/param combination.
    /// This is treated as a synchronous, possibly slow call by the remote
    /// service and must always be driven from a bounded worker pool (spec
    /// §4.4, §5).
    async fn lease_layer(&self, layer: Layer, region: BBox, render_params_digest: &str) -> Result<String>;

    /// Fetches a single tile's PNG bytes from a previously leased URL
    /// template.
    async fn fetch_tile(&self, url_template: &str, x: u32, y: u32, z: u8) -> Result<Vec<u8>>;

    /// Cheap liveness probe for `health_check` (spec §4.8). Default: healthy
    /// unless overridden, since a fake backend in tests has nothing to
    /// report on.
    async fn health(&self) -> Result<()> {
        Ok(())
    }
}

/// Production adapter. Named for the Earth-Engine-shaped remote backend the
/// spec targets; grounded in
/// `map-render::loader::load_tile_from_mapbox` for the fetch-and-validate
/// shape and in `original_source/app/api/layers_optimized.py` for the
/// lease/fetch split.
pub struct EarthEngineBackend {
    client: reqwest::Client,
    base_url: String,
    breaker: CircuitBreaker,
}

impl EarthEngineBackend {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            breaker: CircuitBreaker::new(),
        }
    }

    pub fn breaker_state(&self) -> BreakerState {
        self.breaker.state()
    }
}

#[async_trait]
impl ImageryBackend for EarthEngineBackend {
    async fn lease_layer(&self, layer: Layer, region: BBox, render_params_digest: &str) -> Result<String> {
        if !self.breaker.allow_request() {
            return Err(Error::BackendUnavailable("circuit breaker open".to_string()));
        }

        let url = format!("{}/lease/{layer}", self.base_url);
        let body = serde_json::json!({
            "west": region.west,
            "south": region.south,
            "east": region.east,
            "north": region.north,
            "params": render_params_digest,
        });

        let result = tokio::time::timeout(ATTEMPT_TIMEOUT, self.client.post(&url).json(&body).send()).await;

        match result {
            Ok(Ok(resp)) if resp.status().is_success() => {
                self.breaker.record_success();
                let parsed: serde_json::Value = resp
                    .json()
                    .await
                    .map_err(|e| Error::Transient(format!("malformed lease response: {e}")))?;
                parsed
                    .get("url_template")
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string())
                    .ok_or_else(|| Error::BackendUnavailable("lease response missing url_template".to_string()))
            }
            Ok(Ok(resp)) => {
                self.breaker.record_failure();
                Err(Error::BackendUnavailable(format!("lease_layer returned {}", resp.status())))
            }
            Ok(Err(err)) => {
                self.breaker.record_failure();
                Err(Error::BackendUnavailable(format!("lease_layer request failed: {err}")))
            }
            Err(_) => {
                self.breaker.record_failure();
                Err(Error::BackendUnavailable("lease_layer timed out".to_string()))
            }
        }
    }

    async fn fetch_tile(&self, url_template: &str, x: u32, y: u32, z: u8) -> Result<Vec<u8>> {
        let url = url_template.replace("{x}", &x.to_string()).replace("{y}", &y.to_string()).replace("{z}", &z.to_string());

        let mut throttle_attempt = 0;
        let mut server_error_attempt = 0;

        loop {
            let response = tokio::time::timeout(ATTEMPT_TIMEOUT, self.client.get(&url).send()).await;

            let response = match response {
                Ok(Ok(resp)) => resp,
                Ok(Err(err)) => return Err(Error::Transient(format!("fetch_tile request failed: {err}"))),
                Err(_) => return Err(Error::Transient("fetch_tile timed out".to_string())),
            };

            match classify_status(response.status()) {
                Classification::Success => {
                    let bytes = response
                        .bytes()
                        .await
                        .map_err(|e| Error::Transient(format!("failed reading tile body: {e}")))?;
                    return Ok(bytes.to_vec());
                }
                Classification::Throttled if throttle_attempt + 1 < THROTTLE_MAX_ATTEMPTS => {
                    warn!(url, throttle_attempt, "fetch_tile throttled, backing off");
                    tokio::time::sleep(backoff_delay(throttle_attempt)).await;
                    throttle_attempt += 1;
                }
                Classification::ServerError if server_error_attempt + 1 < SERVER_ERROR_MAX_ATTEMPTS => {
                    warn!(url, server_error_attempt, "fetch_tile server error, retrying");
                    tokio::time::sleep(backoff_delay(server_error_attempt)).await;
                    server_error_attempt += 1;
                }
                Classification::Throttled | Classification::ServerError => {
                    return Err(Error::BackendUnavailable(format!("fetch_tile exhausted retries against {url}")));
                }
                Classification::FailFast => {
                    return Err(Error::BackendUnavailable(format!("fetch_tile got {} from {url}", response.status())));
                }
            }
        }
    }

    /// Healthy iff the breaker isn't tripped open; a half-open breaker is
    /// reported healthy since the next call is allowed through as a trial.
    async fn health(&self) -> Result<()> {
        if self.breaker.state() == BreakerState::Open {
            return Err(Error::BackendUnavailable("circuit breaker open".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct FlakyBackend {
        calls: AtomicU32,
        fail_first_n: u32,
    }

    #[async_trait]
    impl ImageryBackend for FlakyBackend {
        async fn lease_layer(&self, _layer: Layer, _region: BBox, _digest: &str) -> Result<String> {
            Ok("https://example.test/{z}/{x}/{y}".to_string())
        }

        async fn fetch_tile(&self, _url_template: &str, _x: u32, _y: u32, _z: u8) -> Result<Vec<u8>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_first_n {
                Err(Error::Transient("simulated flake".to_string()))
            } else {
                Ok(b"png-bytes".to_vec())
            }
        }
    }

    #[tokio::test]
    async fn lease_then_fetch_against_a_fake_backend() {
        let backend = Arc::new(FlakyBackend { calls: AtomicU32::new(0), fail_first_n: 0 });
        let bbox = BBox { west: -1.0, south: -1.0, east: 1.0, north: 1.0 };
        let lease = backend.lease_layer(Layer::Sentinel, bbox, "digest").await.unwrap();
        let bytes = backend.fetch_tile(&lease, 1, 2, 10).await.unwrap();
        assert_eq!(bytes, b"png-bytes".to_vec());
    }
}
