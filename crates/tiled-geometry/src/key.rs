use serde::{Deserialize, Serialize};

use crate::{geohash, tile_bbox, Layer, Tile};

/// The canonical identity of a single tile for caching purposes.
///
/// `render_params_digest` is a caller-supplied canonical string (see
/// `catalog::RenderParams::digest`) covering every parameter that affects
/// pixel output (period, year, month, vis-param name, ...). Two `TileKey`s
/// with the same fields always produce the same [`cache_key`] string, and
/// vice versa: different identities never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileKey {
    pub layer: Layer,
    pub tile: Tile,
    pub render_params_digest: String,
}

impl TileKey {
    pub fn new(layer: Layer, tile: Tile, render_params_digest: impl Into<String>) -> Self {
        Self {
            layer,
            tile,
            render_params_digest: render_params_digest.into(),
        }
    }
}

/// Builds the stable L3/L2 cache key for a tile.
///
/// Format: `{layer}_{digest}/{geohash}/{z}/{x}_{y}.png`. The geohash is
/// derived from the tile's own bounding-box center, so it is a pure function
/// of `(x, y, z)` and needs no extra input.
pub fn cache_key(key: &TileKey) -> String {
    let bbox = tile_bbox(key.tile);
    let center_lat = (bbox.north + bbox.south) / 2.0;
    let center_lon = (bbox.east + bbox.west) / 2.0;
    let hash = geohash(center_lat, center_lon, 6);

    let mut out = String::with_capacity(
        key.layer.as_str().len() + key.render_params_digest.len() + hash.len() + 24,
    );

    out.push_str(key.layer.as_str());
    out.push('_');
    out.push_str(&key.render_params_digest);
    out.push('/');
    out.push_str(&hash);
    out.push('/');

    let mut buf = itoa::Buffer::new();
    out.push_str(buf.format(key.tile.z));
    out.push('/');
    out.push_str(buf.format(key.tile.x));
    out.push('_');
    out.push_str(buf.format(key.tile.y));
    out.push_str(".png");

    out
}

/// Builds the metadata key a [`crate::Mosaic`]/region-scoped lease is stored
/// under. Region-scoped (not per-tile) since one lease covers every tile in
/// the region.
pub fn meta_key(layer: Layer, region_id: &str, render_params_digest: &str) -> String {
    let mut out = String::with_capacity(
        layer.as_str().len() + region_id.len() + render_params_digest.len() + 2,
    );
    out.push_str(layer.as_str());
    out.push('_');
    out.push_str(region_id);
    out.push('_');
    out.push_str(render_params_digest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_identities_produce_distinct_keys() {
        let a = TileKey::new(Layer::Sentinel, Tile::new(10, 20, 12), "wet_2023_0_tvi-false");
        let b = TileKey::new(Layer::Sentinel, Tile::new(10, 21, 12), "wet_2023_0_tvi-false");
        let c = TileKey::new(Layer::Landsat, Tile::new(10, 20, 12), "wet_2023_0_tvi-false");

        assert_ne!(cache_key(&a), cache_key(&b));
        assert_ne!(cache_key(&a), cache_key(&c));
    }

    #[test]
    fn identical_identities_produce_identical_keys() {
        let a = TileKey::new(Layer::Landsat, Tile::new(5, 5, 10), "dry_2022_0_default");
        let b = TileKey::new(Layer::Landsat, Tile::new(5, 5, 10), "dry_2022_0_default");
        assert_eq!(cache_key(&a), cache_key(&b));
    }

    #[test]
    fn meta_key_is_region_scoped() {
        let k1 = meta_key(Layer::Sentinel, "region-a", "wet_2023_0_tvi-false");
        let k2 = meta_key(Layer::Sentinel, "region-a", "wet_2023_0_tvi-false");
        assert_eq!(k1, k2);
    }
}
