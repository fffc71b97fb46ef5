//! Process entry point (spec §6 "main wires them together"): loads
//! configuration, builds the cache/backend/pipeline/worker stack, and
//! serves the HTTP API.

mod error;
mod routes;
mod schedule_driver;
mod state;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tiled_backend::EarthEngineBackend;
use tiled_cache::{CacheConfig, HybridCache};
use tiled_catalog::VisParamRegistry;
use tiled_config::{Config, EXIT_CONFIG_ERROR, EXIT_FATAL};
use tiled_pipeline::{TilePipeline, ZoomRange};
use tiled_singleflight::SingleflightLock;
use tiled_worker::{RateLimiter, Runtime};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::state::AppState;

#[tokio::main]
async fn main() {
    let _handle = gcp_logging::LoggingBuilder::new().init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    match run(config).await {
        Ok(()) => std::process::exit(tiled_config::EXIT_OK),
        Err(err) => {
            tracing::error!(%err, "fatal startup error");
            std::process::exit(EXIT_FATAL);
        }
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let (l2, l3) = build_stores(&config).await?;
    let catalog = build_catalog_store().await?;

    let cache_config = CacheConfig { l1_max_entries: config.l1_max, l1_max_age: config.l1_max_age, png_ttl: config.png_ttl, meta_ttl: config.meta_ttl };
    let cache = Arc::new(HybridCache::new(l2.clone(), l3, cache_config));
    let lock = Arc::new(SingleflightLock::new(l2));

    let client = reqwest::Client::new();
    let backend: Arc<dyn tiled_backend::ImageryBackend> = Arc::new(EarthEngineBackend::new(client, config.backend_base_url.clone()));

    let pipeline = Arc::new(TilePipeline::new(cache.clone(), lock, backend.clone(), config.png_ttl, config.meta_ttl));
    let vis_params = Arc::new(VisParamRegistry::with_defaults());
    let zoom_range = ZoomRange { min: config.min_zoom, max: config.max_zoom };

    let job_store = Arc::new(tiled_worker::InMemoryJobStore::new());
    let runtime = build_runtime(job_store, &catalog, &pipeline, &cache, &backend);

    let app_state = AppState { pipeline, cache, backend, catalog, runtime: runtime.clone(), vis_params, zoom_range };

    for _ in 0..config.max_workers_backend {
        tokio::spawn(runtime.clone().run_worker());
    }
    tokio::spawn(schedule_driver::run(runtime.clone()));

    let app = Router::new()
        .route("/api/layers/:layer/:x/:y/:z", get(routes::tiles::get_tile))
        .route("/api/layers/:layer/catalog", get(routes::catalog::list_catalog))
        .route("/api/cache/point/:point_id/start", post(routes::cache::start_point))
        .route("/api/cache/campaign/:campaign_id/start", post(routes::cache::start_campaign))
        .route("/api/cache/point/:point_id/clear", delete(routes::cache::clear_point))
        .route("/api/cache/campaign/:campaign_id/clear", delete(routes::cache::clear_campaign))
        .route("/api/tasks/:job_id", get(routes::tasks::get_task))
        .route("/health/light", get(routes::health::light))
        .route("/health", get(routes::health::full))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "tiled-server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the one production [`Runtime`] with every handler registered,
/// including `cache_campaign` and `warm-popular-regions`, which submit
/// further jobs back onto this same runtime. Those two hold only a `Weak`
/// handle to it (see `tiled_warming::tasks`), so `Arc::new_cyclic` can hand
/// them a reference to the runtime while it's still under construction.
fn build_runtime(
    job_store: tiled_worker::SharedJobStore,
    catalog: &tiled_warming::SharedCatalogStore,
    pipeline: &Arc<TilePipeline>,
    cache: &Arc<HybridCache>,
    backend: &Arc<dyn tiled_backend::ImageryBackend>,
) -> Arc<Runtime> {
    const DEFAULT_CAMPAIGN_BATCH_SIZE: usize = 50;

    Arc::new_cyclic(|weak: &std::sync::Weak<Runtime>| {
        let mut runtime = Runtime::new(job_store, RateLimiter::new());

        runtime.register(Arc::new(tiled_warming::CachePointTask { catalog: catalog.clone(), pipeline: pipeline.clone() }));
        runtime.register(Arc::new(tiled_warming::CachePointBatchTask {
            catalog: catalog.clone(),
            pipeline: pipeline.clone(),
            concurrency: Arc::new(tiled_warming::AdaptiveConcurrency::new()),
        }));
        runtime.register(Arc::new(tiled_warming::CacheCampaignTask {
            catalog: catalog.clone(),
            runtime: weak.clone(),
            batch_size_default: DEFAULT_CAMPAIGN_BATCH_SIZE,
        }));
        runtime.register(Arc::new(tiled_warming::WarmPopularRegionsTask {
            catalog: catalog.clone(),
            runtime: weak.clone(),
            batch_size_default: DEFAULT_CAMPAIGN_BATCH_SIZE,
        }));
        runtime.register(Arc::new(tiled_cleanup::CleanupExpiredTask { l2: cache.l2() }));
        runtime.register(Arc::new(tiled_cleanup::CleanupOrphanedTask { l2: cache.l2(), l3: cache.l3() }));
        runtime.register(Arc::new(tiled_cleanup::AnalyzeUsageTask { l2: cache.l2() }));
        runtime.register(Arc::new(tiled_cleanup::HealthCheckTask {
            l2: cache.l2(),
            l3: cache.l3(),
            metadata: catalog.clone(),
            backend: backend.clone(),
        }));

        runtime
    })
}

/// `GCP_PROJECT_ID` is read directly rather than threaded through
/// [`Config`], since it's only needed once at startup to hand GCP clients
/// their project scope, not by request-serving code.
#[cfg(feature = "gcp")]
fn leaked_project_id() -> anyhow::Result<&'static str> {
    Ok(Box::leak(std::env::var("GCP_PROJECT_ID")?.into_boxed_str()))
}

async fn build_stores(config: &Config) -> anyhow::Result<(std::sync::Arc<dyn tiled_cache::L2Store>, std::sync::Arc<dyn tiled_cache::L3Store>)> {
    #[cfg(feature = "gcp")]
    {
        let project_id = leaked_project_id()?;
        let firestore = firestore_rs::Firestore::new(project_id, gcp_auth_channel::Scope::Firestore).await?;
        let bucket = small_gcs::BucketClient::new_with_scope(gcp_auth_provider::Scope::GcsReadWrite, config.l3_bucket.clone()).await?;
        let l2: Arc<dyn tiled_cache::L2Store> = Arc::new(tiled_cache::FirestoreL2::new(firestore));
        let l3: Arc<dyn tiled_cache::L3Store> = Arc::new(tiled_cache::GcsL3::new(bucket));
        return Ok((l2, l3));
    }

    #[cfg(not(feature = "gcp"))]
    {
        let _ = config;
        let l2: Arc<dyn tiled_cache::L2Store> = Arc::new(tiled_cache::InMemoryL2::new());
        let l3: Arc<dyn tiled_cache::L3Store> = Arc::new(tiled_cache::InMemoryL3::new());
        Ok((l2, l3))
    }
}

async fn build_catalog_store() -> anyhow::Result<tiled_warming::SharedCatalogStore> {
    #[cfg(feature = "gcp")]
    {
        let project_id = leaked_project_id()?;
        let firestore = firestore_rs::Firestore::new(project_id, gcp_auth_channel::Scope::Firestore).await?;
        return Ok(Arc::new(tiled_warming::FirestoreCatalogStore::new(firestore)));
    }

    #[cfg(not(feature = "gcp"))]
    Ok(Arc::new(tiled_warming::InMemoryCatalogStore::new()))
}
