use serde::{Deserialize, Serialize};
use timestamp::Timestamp;

/// Leases stay valid for this long before the backend may start rejecting
/// fetches against them (spec §3, `LIFESPAN_URL`).
pub const LIFESPAN_URL_SECONDS: i64 = 24 * 3600;

/// An immutable PNG tile payload, as returned by [`crate::TilePayload::bytes`].
/// Once written under a `TileKey`, these bytes never change; invalidation is
/// by deletion only (spec §3 invariant 3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePayload {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub created_at: Timestamp,
}

impl TilePayload {
    pub fn new_png(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: "image/png",
            created_at: Timestamp::now(),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Metadata record describing where a tile's payload lives in L3, mirrored
/// in L2 under `tile:{cache_key}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMeta {
    pub l3_key: String,
    pub size: u64,
    pub created_at: Timestamp,
    pub content_type: String,
}

/// A time-bounded URL template obtained from the imagery backend. Fetching
/// `url_template` with concrete `(x, y, z)` placeholders filled in returns a
/// single tile's PNG bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderLease {
    pub url_template: String,
    pub issued_at: Timestamp,
}

impl RenderLease {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            issued_at: Timestamp::now(),
        }
    }

    pub fn age_seconds(&self) -> i64 {
        (Timestamp::now().as_seconds() - self.issued_at.as_seconds()).max(0)
    }

    pub fn is_expired(&self) -> bool {
        self.age_seconds() > LIFESPAN_URL_SECONDS
    }

    /// Fills in the `{x}`, `{y}`, `{z}` placeholders of the url template.
    pub fn format_tile_url(&self, x: u32, y: u32, z: u8) -> String {
        self.url_template
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{z}", &z.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lease_formats_placeholders() {
        let lease = RenderLease::new("https://ee.example/tile/{z}/{x}/{y}");
        assert_eq!(lease.format_tile_url(1, 2, 10), "https://ee.example/tile/10/1/2");
    }

    #[test]
    fn fresh_lease_is_not_expired() {
        let lease = RenderLease::new("https://ee.example/{z}/{x}/{y}");
        assert!(!lease.is_expired());
    }
}
