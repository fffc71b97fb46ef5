//! `GET /api/layers/{layer}/catalog` (spec §6): lists the source renderings
//! available over a region/time window.
//!
//! The remote backend exposes no catalog-listing operation of its own
//! (`tiled_backend::ImageryBackend` only leases/fetches tiles), so this
//! synthesizes the candidate `(period, year, vis)` combinations implied by
//! the request window and the recognized vis-param registry, validated the
//! same way an on-demand tile request is.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tiled_catalog::{validate_date_range, validate_lat_lon, Error, Period};
use tiled_geometry::Layer;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub lat: f64,
    pub lon: f64,
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub period: &'static str,
    pub year: u16,
    pub vis: String,
}

const CANDIDATE_PERIODS: [Period; 2] = [Period::Wet, Period::Dry];

pub async fn list_catalog(State(state): State<AppState>, Path(layer): Path<String>, Query(query): Query<CatalogQuery>) -> Result<Json<Vec<CatalogEntry>>, ApiError> {
    Layer::parse(&layer).ok_or_else(|| Error::invalid(format!("unknown layer {layer}")))?;
    validate_lat_lon(query.lat, query.lon)?;
    validate_date_range(query.start, query.end)?;

    let start_year = epoch_day_to_year(query.start);
    let end_year = epoch_day_to_year(query.end);

    let mut entries = Vec::new();
    for year in start_year..=end_year {
        for period in CANDIDATE_PERIODS {
            for vis_name in state.vis_params.names() {
                entries.push(CatalogEntry { period: period.as_str(), year, vis: vis_name.to_string() });
            }
        }
    }

    Ok(Json(entries))
}

fn epoch_day_to_year(epoch_day: i64) -> u16 {
    const DAYS_PER_YEAR: i64 = 365;
    (1970 + epoch_day / DAYS_PER_YEAR).clamp(1970, u16::MAX as i64) as u16
}
