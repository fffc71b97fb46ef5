//! `GET /health/light` and `GET /health` (spec §4.8 / §6): a cheap
//! liveness probe and a full component health report.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tiled_cleanup::{health_check, HealthReport, HealthStatus};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn light() -> StatusCode {
    StatusCode::OK
}

pub async fn full(State(state): State<AppState>) -> Result<(StatusCode, Json<HealthReport>), ApiError> {
    let report = health_check(
        state.cache.l2().as_ref(),
        state.cache.l3().as_ref(),
        state.catalog.as_ref(),
        state.backend.as_ref(),
    )
    .await?;

    let status = match report.status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    Ok((status, Json(report)))
}
