//! HTTP mapping for the shared error taxonomy (spec §7), grounded in
//! `map-render::error::Error`'s `IntoResponse` impl and its
//! kind/error JSON body shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tiled_catalog::Error;
use tracing::error;

pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (kind, status) = match &self.0 {
            Error::InvalidRequest(_) => ("invalid_request", StatusCode::BAD_REQUEST),
            Error::NotFound(_) => ("not_found", StatusCode::NOT_FOUND),
            Error::BackendUnavailable(_) | Error::BackendThrottled => ("backend_unavailable", StatusCode::SERVICE_UNAVAILABLE),
            Error::CacheDegraded => ("cache_degraded", StatusCode::INTERNAL_SERVER_ERROR),
            Error::Transient(_) => ("transient", StatusCode::INTERNAL_SERVER_ERROR),
            Error::Fatal(_) => ("fatal", StatusCode::INTERNAL_SERVER_ERROR),
        };

        error!(kind, error = %self.0, "request failed");

        let body = serde_json::json!({ "kind": kind, "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
