//! `GET /api/tasks/{job_id}` (spec §6): polls a submitted job's status.

use axum::extract::{Path, State};
use axum::Json;
use tiled_catalog::{Error, Job};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_task(State(state): State<AppState>, Path(job_id): Path<String>) -> Result<Json<Job>, ApiError> {
    let job = state
        .runtime
        .job_store()
        .get(&job_id)
        .await?
        .ok_or_else(|| Error::not_found(format!("job {job_id}")))?;
    Ok(Json(job))
}
