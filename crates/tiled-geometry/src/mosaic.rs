use serde::{Deserialize, Serialize};

use crate::{tile_bbox, BBox, Tile};

/// A rectangular group of adjacent same-zoom tiles materialized from a
/// single backend lease, to amortize the cost of a render call across many
/// tiles (see `original_source/app/tasks/cache_tasks.py`'s `GRID_SIZE`
/// batching of warming tiles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mosaic {
    pub zoom: u8,
    pub bbox: BBox,
    pub tiles: Vec<Tile>,
}

impl Mosaic {
    /// Stable identifier for this mosaic's region, suitable as the
    /// `region_id` component of [`crate::meta_key`].
    pub fn region_id(&self) -> String {
        let anchor = self
            .tiles
            .iter()
            .min()
            .expect("a Mosaic always has at least one member tile");
        format!(
            "mosaic_{}_{}_{}_{}x{}",
            anchor.z,
            anchor.x,
            anchor.y,
            self.grid_width(),
            self.grid_height()
        )
    }

    fn grid_width(&self) -> u32 {
        let (min_x, max_x) = self
            .tiles
            .iter()
            .fold((u32::MAX, 0), |(lo, hi), t| (lo.min(t.x), hi.max(t.x)));
        max_x - min_x + 1
    }

    fn grid_height(&self) -> u32 {
        let (min_y, max_y) = self
            .tiles
            .iter()
            .fold((u32::MAX, 0), |(lo, hi), t| (lo.min(t.y), hi.max(t.y)));
        max_y - min_y + 1
    }
}

/// Groups tiles into rectangles of at most `max_grid x max_grid`, per zoom
/// level. Tiles are first sorted `(z asc, x asc, y asc)`, then assigned to a
/// fixed grid cell `(x / max_grid, y / max_grid)` so every mosaic covers a
/// contiguous, non-overlapping span of tile-space.
pub fn group_tiles_into_mosaics(tiles: &[Tile], max_grid: u32) -> Vec<Mosaic> {
    assert!(max_grid > 0, "max_grid must be at least 1");

    let mut sorted: Vec<Tile> = tiles.to_vec();
    sorted.sort_by_key(|t| (t.z, t.x, t.y));

    let mut groups: std::collections::BTreeMap<(u8, u32, u32), Vec<Tile>> =
        std::collections::BTreeMap::new();

    for tile in sorted {
        let cell = (tile.z, tile.x / max_grid, tile.y / max_grid);
        groups.entry(cell).or_default().push(tile);
    }

    groups
        .into_values()
        .map(|members| {
            let zoom = members[0].z;
            let bbox = union_bbox(&members);
            Mosaic {
                zoom,
                bbox,
                tiles: members,
            }
        })
        .collect()
}

fn union_bbox(tiles: &[Tile]) -> BBox {
    let mut iter = tiles.iter().map(|&t| tile_bbox(t));
    let first = iter.next().expect("mosaic group is never empty");

    iter.fold(first, |acc, bbox| BBox {
        west: acc.west.min(bbox.west),
        south: acc.south.min(bbox.south),
        east: acc.east.max(bbox.east),
        north: acc.north.max(bbox.north),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(coords: &[(u32, u32)], z: u8) -> Vec<Tile> {
        coords.iter().map(|&(x, y)| Tile::new(x, y, z)).collect()
    }

    #[test]
    fn groups_contiguous_span_into_one_mosaic() {
        let input = tiles(&[(0, 0), (1, 0), (0, 1), (1, 1)], 10);
        let mosaics = group_tiles_into_mosaics(&input, 4);
        assert_eq!(mosaics.len(), 1);
        assert_eq!(mosaics[0].tiles.len(), 4);
    }

    #[test]
    fn splits_when_exceeding_max_grid() {
        // a 4x4 block of tiles with max_grid=2 must split into 4 mosaics.
        let mut input = Vec::new();
        for x in 0..4 {
            for y in 0..4 {
                input.push(Tile::new(x, y, 8));
            }
        }

        let mosaics = group_tiles_into_mosaics(&input, 2);
        assert_eq!(mosaics.len(), 4);
        for mosaic in &mosaics {
            assert_eq!(mosaic.tiles.len(), 4);
        }
    }

    #[test]
    fn separate_zoom_levels_never_share_a_mosaic() {
        let mut input = tiles(&[(0, 0), (1, 0)], 5);
        input.extend(tiles(&[(0, 0), (1, 0)], 6));

        let mosaics = group_tiles_into_mosaics(&input, 4);
        assert_eq!(mosaics.len(), 2);
        assert_ne!(mosaics[0].zoom, mosaics[1].zoom);
    }
}
