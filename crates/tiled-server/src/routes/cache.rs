//! `POST /api/cache/{point,campaign}/start` and the matching `clear`
//! endpoints (spec §6), thin adapters over `tiled_warming`'s free functions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tiled_catalog::Error;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobAccepted {
    pub job_id: String,
}

#[derive(Debug, Serialize)]
pub struct Cleared {
    pub cleared: u64,
}

pub async fn start_point(State(state): State<AppState>, Path(point_id): Path<String>) -> Result<(StatusCode, Json<JobAccepted>), ApiError> {
    state.catalog.get_point(&point_id).await.map_err(|_| Error::not_found(format!("point {point_id}")))?;

    let job = tiled_worker::submit_job(
        &state.runtime,
        tiled_worker::JobKind::CachePoint,
        "cache_point",
        serde_json::json!({ "point_id": point_id }),
    )
    .await?;

    Ok((StatusCode::ACCEPTED, Json(JobAccepted { job_id: job.job_id })))
}

pub async fn start_campaign(State(state): State<AppState>, Path(campaign_id): Path<String>) -> Result<(StatusCode, Json<JobAccepted>), ApiError> {
    state.catalog.get_campaign(&campaign_id).await.map_err(|_| Error::not_found(format!("campaign {campaign_id}")))?;

    const DEFAULT_BATCH_SIZE: usize = 50;
    let job = tiled_warming::start_campaign(&state.runtime, &campaign_id, DEFAULT_BATCH_SIZE, false).await?;

    Ok((StatusCode::ACCEPTED, Json(JobAccepted { job_id: job.job_id })))
}

pub async fn clear_point(State(state): State<AppState>, Path(point_id): Path<String>) -> Result<Json<Cleared>, ApiError> {
    let cleared = tiled_warming::clear_point(&state.catalog, &state.cache, &point_id).await?;
    Ok(Json(Cleared { cleared }))
}

pub async fn clear_campaign(State(state): State<AppState>, Path(campaign_id): Path<String>) -> Result<Json<Cleared>, ApiError> {
    let cleared = tiled_warming::clear_campaign(&state.catalog, &state.cache, &campaign_id).await?;
    Ok(Json(Cleared { cleared }))
}
