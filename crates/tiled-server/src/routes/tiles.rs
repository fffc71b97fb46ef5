//! `GET /api/layers/{layer}/{x}/{y}/{z}` (spec §6): the on-demand tile
//! endpoint, a thin adapter over `tiled_pipeline::TilePipeline::serve_tile`.

use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tiled_catalog::{Error, Period, RenderParams};
use tiled_pipeline::{validate_tile_request, CacheStatus};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TileQuery {
    pub period: String,
    pub year: u16,
    #[serde(default)]
    pub month: u8,
    pub vis: String,
}

const PNG_CACHE_CONTROL: HeaderValue = HeaderValue::from_static("public, max-age=2592000");

pub async fn get_tile(
    State(state): State<AppState>,
    Path((layer, x, y, z)): Path<(String, u32, u32, u8)>,
    Query(query): Query<TileQuery>,
) -> Result<Response, ApiError> {
    let started = Instant::now();

    let period = Period::parse(&query.period).ok_or_else(|| Error::invalid(format!("unrecognized period {}", query.period)))?;
    let render_params = RenderParams::new(period, query.year, query.month, query.vis.clone())?;

    let resolved_layer = validate_tile_request(state.zoom_range, z, &layer, &state.vis_params, &query.vis)?;

    let response = state.pipeline.serve_tile(resolved_layer, x, y, z, &render_params.digest()).await?;

    let cache_header = match response.cache_status {
        CacheStatus::Hit => "HIT",
        CacheStatus::Miss => "MISS",
    };

    let mut headers = axum::http::HeaderMap::new();
    headers.insert("X-Cache", HeaderValue::from_static(cache_header));
    headers.insert(header::CACHE_CONTROL, PNG_CACHE_CONTROL);
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/png"));
    headers.insert(
        "X-Response-Time",
        HeaderValue::from_str(&format!("{}ms", started.elapsed().as_millis())).expect("duration string is always valid header value"),
    );

    Ok((StatusCode::OK, headers, response.bytes).into_response())
}
