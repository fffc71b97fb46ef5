//! Pure functions for tile identity and slippy-map geometry.
//!
//! Nothing in this crate performs I/O: tile <-> lat/lon conversions, cache-key
//! derivation, and mosaic grouping are deterministic given their inputs.

mod geohash;
mod key;
mod mosaic;

pub use geo::{Latitude, Longitude};

use serde::{Deserialize, Serialize};

pub use key::{cache_key, meta_key, TileKey};
pub use mosaic::{group_tiles_into_mosaics, Mosaic};

/// Imagery collections the pipeline knows how to render.
///
/// Enumerated rather than string-keyed so a typo in a layer name is a
/// compile error or an explicit parse failure, never a silent cache miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Sentinel,
    Landsat,
    Embedding,
}

impl Layer {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sentinel => "sentinel",
            Self::Landsat => "landsat",
            Self::Embedding => "embedding",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sentinel" | "s2_harmonized" => Some(Self::Sentinel),
            "landsat" => Some(Self::Landsat),
            "embedding" => Some(Self::Embedding),
            _ => None,
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The vertical/horizontal address of a single tile at a fixed zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl Tile {
    pub const fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Number of tiles along one axis at this zoom level.
    pub const fn tiles_across(z: u8) -> u32 {
        1u32 << z
    }
}

/// A lat/lon bounding box, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

/// Converts a latitude/longitude pair into the tile containing it, at `z`.
///
/// Standard spherical-mercator slippy-map projection (the same projection
/// `map-render::coords` uses, scaled here per-zoom instead of via the
/// mapbox-512px zoom offset).
pub fn latlon_to_tile(lat: Latitude, lon: Longitude, z: u8) -> Tile {
    let n = Tile::tiles_across(z) as f64;

    let lon_deg = lon.get();
    let lat_rad = lat.get().to_radians();

    let x = ((lon_deg + 180.0) / 360.0) * n;
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * n;

    Tile {
        x: x.floor().clamp(0.0, n - 1.0) as u32,
        y: y.floor().clamp(0.0, n - 1.0) as u32,
        z,
    }
}

/// Computes the lat/lon bounding box covered by a tile.
pub fn tile_bbox(tile: Tile) -> BBox {
    let n = Tile::tiles_across(tile.z) as f64;

    let west = (tile.x as f64 / n) * 360.0 - 180.0;
    let east = ((tile.x + 1) as f64 / n) * 360.0 - 180.0;

    let north = mercator_inverse(tile.y as f64 / n);
    let south = mercator_inverse((tile.y + 1) as f64 / n);

    BBox {
        west,
        south,
        east,
        north,
    }
}

fn mercator_inverse(y_frac: f64) -> f64 {
    let sigma = std::f64::consts::PI * (1.0 - 2.0 * y_frac);
    sigma.sinh().atan().to_degrees()
}

pub use geohash::geohash;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_contains_point() {
        let lat = Latitude::new(44.05);
        let lon = Longitude::new(-121.3);

        for z in [2, 6, 10, 14, 18] {
            let tile = latlon_to_tile(lat, lon, z);
            let bbox = tile_bbox(tile);

            assert!(
                bbox.west <= lon.get() && lon.get() <= bbox.east,
                "zoom {z}: lon {} not within [{}, {}]",
                lon.get(),
                bbox.west,
                bbox.east
            );
            assert!(
                bbox.south <= lat.get() && lat.get() <= bbox.north,
                "zoom {z}: lat {} not within [{}, {}]",
                lat.get(),
                bbox.south,
                bbox.north
            );
        }
    }

    #[test]
    fn tile_origin_is_top_left() {
        let tile = latlon_to_tile(Latitude::new(85.0), Longitude::new(-179.9), 4);
        assert_eq!(tile, Tile::new(0, 0, 4));
    }

    #[test]
    fn layer_roundtrips_through_str() {
        for layer in [Layer::Sentinel, Layer::Landsat, Layer::Embedding] {
            assert_eq!(Layer::parse(layer.as_str()), Some(layer));
        }
        assert_eq!(Layer::parse("bogus"), None);
    }
}
