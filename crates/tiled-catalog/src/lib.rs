//! Data model and error taxonomy shared across the tile materialization
//! service (spec §3, §7).

mod catalog;
mod error;
mod job;
mod render_params;
mod tile;
mod vis_param;

pub use catalog::{CacheStats, CachingStatus, Campaign, CatalogPoint};
pub use error::{Error, Result};
pub use job::{compute_job_id, Job, JobKind, JobStatus};
pub use render_params::{validate_date_range, validate_lat_lon, Period, RenderParams, MAX_DATE_RANGE_DAYS};
pub use tile::{RenderLease, TileMeta, TilePayload, LIFESPAN_URL_SECONDS};
pub use vis_param::{BandStretch, LandsatCollection, VisParam, VisParamRegistry};

pub use tiled_geometry::{cache_key, group_tiles_into_mosaics, meta_key, BBox, Layer, Mosaic, Tile, TileKey};
