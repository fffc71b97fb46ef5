//! Shared application state (spec §9: "main wires them together"): one
//! `AppState` cloned into every handler, bundling the pipeline, the worker
//! runtime, and the stores maintenance routes need direct access to.

use std::sync::Arc;

use tiled_backend::ImageryBackend;
use tiled_cache::HybridCache;
use tiled_catalog::VisParamRegistry;
use tiled_pipeline::{TilePipeline, ZoomRange};
use tiled_warming::SharedCatalogStore;
use tiled_worker::Runtime;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TilePipeline>,
    pub cache: Arc<HybridCache>,
    pub backend: Arc<dyn ImageryBackend>,
    pub catalog: SharedCatalogStore,
    pub runtime: Arc<Runtime>,
    pub vis_params: Arc<VisParamRegistry>,
    pub zoom_range: ZoomRange,
}
